pub mod lookup;
pub mod mojang;
pub mod profile;
pub mod skin;

// Re-export commonly used types
pub use lookup::UsernameUuid;
pub use mojang::{
    with_http_client, with_minecraft_services, with_session_server, ApiConfig, ApiOption,
    MojangApi,
};
pub use profile::{Profile, ProfileProperty, ProfileTexturesData, ProfileTexturesImages};
pub use skin::{SkinTexture, SkinTextureMeta};
