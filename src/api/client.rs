//! HTTP client for the remote product API.
//!
//! One method per REST operation; every call is an isolated round trip with
//! a bounded timeout. No retries, no request batching, no authentication —
//! the API is an open fakestore-style endpoint.

use std::time::Duration;

use thiserror::Error;
use url::Url;

use super::types::{Product, ProductDraft};

/// Errors that can occur at the API boundary.
///
/// Covers the full taxonomy possible here: transport failure, non-success
/// HTTP status, timeout, and a response body that does not decode.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network-level error (DNS, connection, TLS, etc.)
    #[error("Request failed: {0}")]
    Network(reqwest::Error),
    /// HTTP response with non-2xx status code
    #[error("HTTP error: status {0}")]
    HttpStatus(u16),
    /// Request exceeded the configured timeout
    #[error("Request timed out")]
    Timeout,
    /// Response body could not be decoded as the expected type
    #[error("Malformed response: {0}")]
    Decode(String),
    /// Endpoint path could not be joined onto the base URL
    #[error("Invalid API URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout
        } else if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Network(err)
        }
    }
}

/// Typed client for the product REST API.
///
/// Cheap to clone: the underlying `reqwest::Client` is an `Arc` around a
/// connection pool, so clones share connections. Spawned mutation tasks
/// clone this freely.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    /// Build a client against `base_url` with a bounded per-request timeout.
    ///
    /// The source API specifies no timeout; 30 seconds is the sane default
    /// applied by [`crate::config::Config`].
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { http, base_url })
    }

    /// Join a relative path onto the base URL.
    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        // Trailing slash on the base matters for Url::join; normalize here
        // so "https://host" and "https://host/" behave identically.
        let mut base = self.base_url.clone();
        if !base.path().ends_with('/') {
            base.set_path(&format!("{}/", base.path()));
        }
        Ok(base.join(path)?)
    }

    /// GET `/products` — the full product list.
    pub async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        let url = self.endpoint("products")?;
        let resp = self.http.get(url).send().await.map_err(ApiError::from)?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::HttpStatus(status.as_u16()));
        }
        let products: Vec<Product> = resp.json().await.map_err(ApiError::from)?;
        tracing::debug!(count = products.len(), "Fetched product list");
        Ok(products)
    }

    /// GET `/products/categories` — the ordered category label list.
    pub async fn list_categories(&self) -> Result<Vec<String>, ApiError> {
        let url = self.endpoint("products/categories")?;
        let resp = self.http.get(url).send().await.map_err(ApiError::from)?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::HttpStatus(status.as_u16()));
        }
        let categories: Vec<String> = resp.json().await.map_err(ApiError::from)?;
        tracing::debug!(count = categories.len(), "Fetched category list");
        Ok(categories)
    }

    /// POST `/products` — create a product, returning the server's record
    /// (with its assigned id).
    pub async fn create_product(&self, draft: &ProductDraft) -> Result<Product, ApiError> {
        let url = self.endpoint("products")?;
        let resp = self
            .http
            .post(url)
            .json(draft)
            .send()
            .await
            .map_err(ApiError::from)?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::HttpStatus(status.as_u16()));
        }
        let product: Product = resp.json().await.map_err(ApiError::from)?;
        tracing::debug!(id = product.id, title = %product.title, "Created product");
        Ok(product)
    }

    /// PUT `/products/{id}` — update a product, returning the server's
    /// record (authoritative, may differ from the draft).
    pub async fn update_product(&self, id: u64, draft: &ProductDraft) -> Result<Product, ApiError> {
        let url = self.endpoint(&format!("products/{}", id))?;
        let resp = self
            .http
            .put(url)
            .json(draft)
            .send()
            .await
            .map_err(ApiError::from)?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::HttpStatus(status.as_u16()));
        }
        let product: Product = resp.json().await.map_err(ApiError::from)?;
        tracing::debug!(id = product.id, "Updated product");
        Ok(product)
    }

    /// DELETE `/products/{id}`.
    ///
    /// The API echoes the deleted product in the body but callers only need
    /// success or failure, so the body is not decoded.
    pub async fn delete_product(&self, id: u64) -> Result<(), ApiError> {
        let url = self.endpoint(&format!("products/{}", id))?;
        let resp = self.http.delete(url).send().await.map_err(ApiError::from)?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::HttpStatus(status.as_u16()));
        }
        tracing::debug!(id, "Deleted product");
        Ok(())
    }
}
