//! Transport abstraction for the identity API client
//!
//! The client only needs to send a request and get back a status code plus body.
//! Anything else (pooling, TLS, timeouts) lives behind [`HttpClient`] implementations.

pub mod reqwest_client;

#[cfg(test)]
pub(crate) mod mock;

pub use reqwest_client::ReqwestClient;

use futures::future::BoxFuture;
use std::collections::HashMap;
use std::fmt;

pub const HEADER_ACCEPT: &str = "Accept";
pub const HEADER_CONTENT_TYPE: &str = "Content-Type";
pub const MIME_JSON: &str = "application/json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Head => "HEAD",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request description handed to the transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: HashMap<String, String>,
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: HashMap::new(),
            body: None,
        }
    }

    /// JSON-flavored request: always accepts JSON, and marks the body as JSON when present
    pub fn json(method: HttpMethod, url: impl Into<String>, body: Option<Vec<u8>>) -> Self {
        let mut request = Self::new(method, url).header(HEADER_ACCEPT, MIME_JSON);
        if body.is_some() {
            request = request.header(HEADER_CONTENT_TYPE, MIME_JSON);
        }
        request.body = body;
        request
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

/// Raw response: status code and the fully read body
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// The request could not be built, sent, or read to completion.
#[derive(Debug, thiserror::Error)]
#[error("failed to send HTTP request: {source}")]
pub struct TransportError {
    #[source]
    source: Box<dyn std::error::Error + Send + Sync>,
}

impl TransportError {
    pub fn new<E>(source: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Self {
            source: source.into(),
        }
    }
}

/// Capability to perform a single HTTP round trip.
/// Implementations must not interpret status codes or retry.
pub trait HttpClient: Send + Sync {
    fn request<'a>(
        &'a self,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, TransportError>>;

    fn request_json<'a>(
        &'a self,
        method: HttpMethod,
        url: &str,
        body: Option<Vec<u8>>,
    ) -> BoxFuture<'a, Result<HttpResponse, TransportError>> {
        self.request(HttpRequest::json(method, url, body))
    }

    fn get<'a>(&'a self, url: &str) -> BoxFuture<'a, Result<HttpResponse, TransportError>> {
        self.request(HttpRequest::new(HttpMethod::Get, url))
    }
}
