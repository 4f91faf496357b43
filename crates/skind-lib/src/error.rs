use crate::http::TransportError;

/// Errors returned by the identity API client
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("failed to parse response data: {0}")]
    ResponseParse(#[source] serde_json::Error),

    #[error("failed to decode profile property: {0}")]
    PropertyDecode(#[from] PropertyDecodeError),

    #[error("failed to encode profile property: {0}")]
    PropertyEncode(#[source] serde_json::Error),

    #[error("bad request")]
    BadRequest,

    #[error("{0}: not found")]
    NotFound(String),

    #[error("unexpected status: {0}")]
    UnexpectedStatus(u16),

    #[error("failed to apply option: {0}")]
    InvalidOption(String),
}

impl ApiError {
    /// True for the upstream absence signal (204/404 on profiles, empty lookup result)
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound(_))
    }
}

/// Stage of the base64 + JSON property decode that failed
#[derive(Debug, thiserror::Error)]
pub enum PropertyDecodeError {
    #[error("invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ApiError>;
