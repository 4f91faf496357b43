use super::{HttpClient, HttpRequest, HttpResponse, TransportError};
use futures::future::BoxFuture;
use std::sync::Mutex;

/// Scripted transport: returns whatever response or error was queued last,
/// and records every request it receives.
pub struct MockHttpClient {
    next_response: Mutex<HttpResponse>,
    next_error: Mutex<Option<String>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockHttpClient {
    pub fn new() -> Self {
        Self {
            next_response: Mutex::new(HttpResponse::default()),
            next_error: Mutex::new(None),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn respond_with_string(&self, status: u16, body: &str) {
        *self.next_response.lock().unwrap() = HttpResponse {
            status,
            body: body.as_bytes().to_vec(),
        };
        *self.next_error.lock().unwrap() = None;
    }

    pub fn respond_with_error(&self, message: &str) {
        *self.next_response.lock().unwrap() = HttpResponse::default();
        *self.next_error.lock().unwrap() = Some(message.to_string());
    }

    pub fn last_request(&self) -> Option<HttpRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

impl HttpClient for MockHttpClient {
    fn request<'a>(
        &'a self,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, TransportError>> {
        self.requests.lock().unwrap().push(request);

        let result = match self.next_error.lock().unwrap().clone() {
            Some(message) => Err(TransportError::new(message)),
            None => Ok(self.next_response.lock().unwrap().clone()),
        };

        Box::pin(async move { result })
    }
}
