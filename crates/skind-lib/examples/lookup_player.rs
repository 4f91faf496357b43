//! Resolve a player and print their skin and cape.
//!
//! Usage: cargo run --example lookup_player -- <username>

use anyhow::{Context, Result};
use skind_lib::MojangApi;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let username = std::env::args()
        .nth(1)
        .context("Usage: lookup_player <username>")?;

    let api = MojangApi::with_defaults().context("Failed to create API client")?;

    let player = match api.get_uuid(&username).await {
        Ok(player) => player,
        Err(e) if e.is_not_found() => {
            println!("No player named {}", username);
            return Ok(());
        }
        Err(e) => return Err(anyhow::Error::new(e).context("Failed to resolve username")),
    };
    println!("{} -> {}", player.name, player.id);

    let profile = api
        .get_profile(player.id)
        .await
        .context("Failed to fetch profile")?;

    let textures = profile
        .decode_textures()
        .context("Failed to decode textures")?
        .unwrap_or_default();

    let skin = &textures.textures.skin;
    if skin.is_empty() {
        println!("Skin: default");
    } else {
        println!(
            "Skin: {} ({})",
            skin.url,
            if skin.slim() { "slim" } else { "classic" }
        );
    }

    let cape = &textures.textures.cape;
    if cape.is_empty() {
        println!("Cape: none");
    } else {
        println!("Cape: {}", cape.url);
    }

    Ok(())
}
