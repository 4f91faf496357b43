//! Client for the Mojang player identity services
//!
//! Resolves usernames to UUIDs, fetches public profiles, and decodes the
//! skin/cape metadata carried in the `textures` profile property.
//!
//! ```no_run
//! # async fn run() -> skind_lib::Result<()> {
//! let api = skind_lib::MojangApi::with_defaults()?;
//! let player = api.get_uuid("Notch").await?;
//! let profile = api.get_profile(player.id).await?;
//! if let Some(textures) = profile.decode_textures()? {
//!     println!("skin: {} (slim: {})", textures.textures.skin.url, textures.textures.skin.slim());
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod http;

pub use api::*;
pub use error::{ApiError, PropertyDecodeError, Result};
pub use http::{HttpClient, HttpMethod, HttpRequest, HttpResponse, ReqwestClient, TransportError};
