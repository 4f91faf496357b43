//! Centralized client settings.
//! Production endpoints and transport defaults used when no option overrides them.

// URL Constants
pub const SESSION_SERVER_URL: &str = "https://sessionserver.mojang.com";
pub const MINECRAFT_SERVICES_URL: &str = "https://api.minecraftservices.com";

/// Name of the profile property carrying base64-encoded texture JSON
pub const PROFILE_PROPERTY_TEXTURES: &str = "textures";

/// Skin model variant marking the slim (3px arm) geometry
pub const SKIN_MODEL_SLIM: &str = "slim";

// Default transport settings
pub const REQUEST_TIMEOUT_SECS: u64 = 10;
pub const POOL_IDLE_TIMEOUT_SECS: u64 = 60 * 60;
pub const USER_AGENT: &str = concat!("skind-lib/", env!("CARGO_PKG_VERSION"));

pub fn request_timeout() -> std::time::Duration {
    std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS)
}

pub fn pool_idle_timeout() -> std::time::Duration {
    std::time::Duration::from_secs(POOL_IDLE_TIMEOUT_SECS)
}
