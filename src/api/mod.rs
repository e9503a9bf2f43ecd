//! Product API module.
//!
//! Types and HTTP client for the remote REST product endpoint.

mod client;
mod types;

pub use client::{ApiClient, ApiError};
pub use types::{Product, ProductDraft};
