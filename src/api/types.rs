//! Wire types for the product API.

use serde::{Deserialize, Serialize};

/// A server-managed product record.
///
/// The `id` is assigned by the server on create and immutable afterwards.
/// Responses may carry additional fields (description, images, ratings);
/// serde ignores anything not listed here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub title: String,
    pub price: f64,
    pub category: String,
}

/// Request payload for create and update operations.
///
/// Mirrors the editable fields of a [`Product`]. The server response is
/// authoritative and may differ from the submitted draft (notably the id).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub title: String,
    pub price: f64,
    pub category: String,
}
