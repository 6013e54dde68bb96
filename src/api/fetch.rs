//! Fetch Transport
//!
//! Performs one request through `gloo-net`.

use async_trait::async_trait;
use gloo_net::http::Request;
use venue_admin_core::http::{HttpRequest, HttpResponse, Transport};
use venue_admin_core::{ApiError, ApiResult};

#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

fn network(e: gloo_net::Error) -> ApiError {
    ApiError::Network(e.to_string())
}

#[async_trait(?Send)]
impl Transport for FetchTransport {
    async fn send(&self, request: HttpRequest) -> ApiResult<HttpResponse> {
        let url = request.url.as_str();
        let builder = match request.method.as_str() {
            "POST" => Request::post(url),
            "PUT" => Request::put(url),
            "PATCH" => Request::patch(url),
            "DELETE" => Request::delete(url),
            _ => Request::get(url),
        };
        let outgoing = match request.body {
            Some(json) => builder.header("Content-Type", "application/json").body(json),
            None => builder.build(),
        }
        .map_err(network)?;

        let response = outgoing.send().await.map_err(network)?;
        let status = response.status();
        let status_text = response.status_text();
        let body = response.text().await.map_err(network)?;
        Ok(HttpResponse {
            status,
            status_text,
            body,
        })
    }
}
