//! REST Client
//!
//! One generic client serves every resource. Paths follow a single
//! convention: `{base}/{path}/` for the collection, `{base}/{path}/{id}`
//! for a single record.

use std::marker::PhantomData;

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};
use crate::http::{HttpRequest, HttpResponse, Method, Transport};
use crate::resource::{Resource, UpdateVerb};

pub struct ResourceClient<R, T> {
    config: ApiConfig,
    transport: T,
    _resource: PhantomData<fn() -> R>,
}

impl<R: Resource, T: Transport> ResourceClient<R, T> {
    pub fn new(config: ApiConfig, transport: T) -> Self {
        Self {
            config,
            transport,
            _resource: PhantomData,
        }
    }

    // ========================
    // URLs
    // ========================

    fn collection_url(&self) -> String {
        self.config.endpoint(&format!("{}/", R::PATH))
    }

    fn record_url(&self, id: R::Id) -> String {
        self.config.endpoint(&format!("{}/{}", R::PATH, id))
    }

    // ========================
    // Operations
    // ========================

    /// Whole collection, in server order
    pub async fn list(&self) -> ApiResult<Vec<R>> {
        let response = self.send(HttpRequest::new(Method::GET, self.collection_url())).await?;
        decode_list(&response)
    }

    pub async fn get(&self, id: R::Id) -> ApiResult<R> {
        let response = self.send(HttpRequest::new(Method::GET, self.record_url(id))).await?;
        decode(&response)
    }

    /// POST a new record; a body that is not a record echoes `record` back
    pub async fn create(&self, record: &R) -> ApiResult<R> {
        let request = HttpRequest::new(Method::POST, self.collection_url()).with_json(encode(record)?);
        let response = self.send(request).await?;
        decode_or(&response, record)
    }

    /// Send the full record to `/{id}` with the resource's update verb
    pub async fn update(&self, record: &R) -> ApiResult<R> {
        let method = match R::UPDATE_VERB {
            UpdateVerb::Put => Method::PUT,
            UpdateVerb::Patch => Method::PATCH,
        };
        let request = HttpRequest::new(method, self.record_url(record.id())).with_json(encode(record)?);
        let response = self.send(request).await?;
        decode_or(&response, record)
    }

    /// Any success body is ignored
    pub async fn delete(&self, id: R::Id) -> ApiResult<()> {
        self.send(HttpRequest::new(Method::DELETE, self.record_url(id))).await?;
        Ok(())
    }

    /// Free-text search; resources without a search endpoint fall back to `list`
    pub async fn search(&self, text: &str) -> ApiResult<Vec<R>> {
        let Some(sub) = R::SEARCH_PATH else {
            return self.list().await;
        };
        let query = utf8_percent_encode(text, NON_ALPHANUMERIC);
        let url = self.config.endpoint(&format!("{}/{}?texto={}", R::PATH, sub, query));
        let response = self.send(HttpRequest::new(Method::GET, url)).await?;
        decode_list(&response)
    }

    /// One exchange; non-success statuses become `ApiError::Http`
    async fn send(&self, request: HttpRequest) -> ApiResult<HttpResponse> {
        log::debug!("{} {}", request.method, request.url);
        let method = request.method.clone();
        let url = request.url.clone();
        let response = self.transport.send(request).await.map_err(|e| {
            log::error!("{} {} failed: {}", method, url, e);
            e
        })?;
        if response.is_success() {
            Ok(response)
        } else {
            let err = ApiError::http(response.status, response.status_text, response.body);
            log::error!("{} {} -> {}", method, url, err);
            Err(err)
        }
    }
}

fn encode<R: Resource>(record: &R) -> ApiResult<String> {
    serde_json::to_string(record).map_err(|e| ApiError::Encode(e.to_string()))
}

fn decode<V: DeserializeOwned>(response: &HttpResponse) -> ApiResult<V> {
    Ok(serde_json::from_str(&response.body)?)
}

/// Decode a JSON array record by record; entries that do not fit `R` are
/// skipped so one malformed row cannot hide the rest.
fn decode_list<R: Resource>(response: &HttpResponse) -> ApiResult<Vec<R>> {
    let items: Vec<serde_json::Value> = decode(response)?;
    let total = items.len();
    let records: Vec<R> = items
        .into_iter()
        .filter_map(|item| match serde_json::from_value(item) {
            Ok(record) => Some(record),
            Err(e) => {
                log::warn!("Skipping malformed {} record: {}", R::NOUN, e);
                None
            }
        })
        .collect();
    if records.len() < total {
        log::warn!("Decoded {} of {} {}", records.len(), total, R::PLURAL);
    }
    Ok(records)
}

/// A success status means the mutation happened, whatever the body says.
/// Anything other than a JSON record (empty, plain text) yields `submitted`.
fn decode_or<R: Resource>(response: &HttpResponse, submitted: &R) -> ApiResult<R> {
    match serde_json::from_str(&response.body) {
        Ok(record) => Ok(record),
        Err(e) => {
            if !response.body.trim().is_empty() {
                log::debug!("{} response is not a record ({}), keeping submitted", R::NOUN, e);
            }
            Ok(submitted.clone())
        }
    }
}
