//! Transport seam between the REST client and whatever performs the request.
//!
//! The browser build plugs in a fetch-based transport; tests use a recording mock.

use async_trait::async_trait;
pub use ::http::Method;

use crate::error::ApiResult;

/// One outgoing HTTP exchange
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    /// JSON body, sent with `Content-Type: application/json`
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            body: None,
        }
    }

    pub fn with_json(mut self, body: String) -> Self {
        self.body = Some(body);
        self
    }
}

/// Raw response as seen by the client
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            status_text: String::new(),
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        ::http::StatusCode::from_u16(self.status)
            .map(|s| s.is_success())
            .unwrap_or(false)
    }
}

/// Performs exactly one request; never retries.
///
/// `?Send` because browser futures are tied to the event loop thread.
#[async_trait(?Send)]
pub trait Transport {
    /// Returns `Err` only when no response was obtained (network failure).
    /// Non-success statuses come back as `Ok` and are classified by the caller.
    async fn send(&self, request: HttpRequest) -> ApiResult<HttpResponse>;
}
