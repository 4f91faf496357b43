//! Mojang identity API client
//!
//! Holds the upstream base URLs and the transport used by the username lookup
//! ([`MojangApi::get_uuid`]) and profile ([`MojangApi::get_profile`]) endpoints.

use crate::config::{MINECRAFT_SERVICES_URL, SESSION_SERVER_URL};
use crate::error::{ApiError, Result};
use crate::http::{HttpClient, ReqwestClient};
use std::fmt;
use std::sync::Arc;

/// Client for the Mojang session server and Minecraft services APIs.
///
/// Immutable once built, so a single instance can be cloned and shared
/// across tasks issuing requests in parallel.
#[derive(Clone)]
pub struct MojangApi {
    pub(crate) session_server: String,
    pub(crate) minecraft_services: String,
    pub(crate) client: Arc<dyn HttpClient>,
}

/// Settings that options mutate before the client is built
pub struct ApiConfig {
    session_server: String,
    minecraft_services: String,
    client: Option<Arc<dyn HttpClient>>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            session_server: SESSION_SERVER_URL.to_string(),
            minecraft_services: MINECRAFT_SERVICES_URL.to_string(),
            client: None,
        }
    }
}

/// A configuration mutator applied by [`MojangApi::new`]
pub type ApiOption = Box<dyn FnOnce(&mut ApiConfig) -> Result<()> + Send>;

impl MojangApi {
    /// Build a client by applying `options` in order to the default configuration.
    /// The first failing option aborts construction.
    pub fn new<I>(options: I) -> Result<Self>
    where
        I: IntoIterator<Item = ApiOption>,
    {
        let mut config = ApiConfig::default();

        for option in options {
            option(&mut config)?;
        }

        let client = match config.client {
            Some(client) => client,
            None => Arc::new(ReqwestClient::new()?),
        };

        Ok(Self {
            session_server: config.session_server,
            minecraft_services: config.minecraft_services,
            client,
        })
    }

    /// Client pointing at the production hosts with the default transport
    pub fn with_defaults() -> Result<Self> {
        Self::new(Vec::new())
    }

    pub fn session_server(&self) -> &str {
        &self.session_server
    }

    pub fn minecraft_services(&self) -> &str {
        &self.minecraft_services
    }
}

impl fmt::Debug for MojangApi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MojangApi")
            .field("session_server", &self.session_server)
            .field("minecraft_services", &self.minecraft_services)
            .finish_non_exhaustive()
    }
}

/// Override the session server base URL (profile lookups)
pub fn with_session_server(base_url: impl Into<String>) -> ApiOption {
    let base_url = base_url.into();
    Box::new(move |config: &mut ApiConfig| {
        config.session_server = parse_base_url("session server", &base_url)?;
        Ok(())
    })
}

/// Override the Minecraft services base URL (username lookups)
pub fn with_minecraft_services(base_url: impl Into<String>) -> ApiOption {
    let base_url = base_url.into();
    Box::new(move |config: &mut ApiConfig| {
        config.minecraft_services = parse_base_url("minecraft services", &base_url)?;
        Ok(())
    })
}

/// Use a custom transport instead of the default reqwest client
pub fn with_http_client(client: Arc<dyn HttpClient>) -> ApiOption {
    Box::new(move |config: &mut ApiConfig| {
        config.client = Some(client);
        Ok(())
    })
}

fn parse_base_url(label: &str, base_url: &str) -> Result<String> {
    let parsed = url::Url::parse(base_url)
        .map_err(|e| ApiError::InvalidOption(format!("invalid {} URL {:?}: {}", label, base_url, e)))?;

    if parsed.cannot_be_a_base() {
        return Err(ApiError::InvalidOption(format!(
            "{} URL {:?} cannot be used as a base",
            label, base_url
        )));
    }

    // Endpoint paths are appended with a leading slash
    Ok(base_url.trim_end_matches('/').to_string())
}
