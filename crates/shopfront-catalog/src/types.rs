//! Wire types for the product catalog API.
//!
//! These mirror the JSON the catalog service returns; the SDK converts them
//! to its domain model at a single seam rather than using them directly.

use serde::{Deserialize, Serialize};

/// Identifier assigned to a product by the catalog service.
pub type ProductId = u64;

/// A single product as the catalog service returns it.
///
/// Immutable once fetched; identified by `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub discount_percentage: f64,
    pub rating: f64,
    pub stock: u32,
    pub brand: String,
    pub category: String,
    /// URI of the preview image.
    pub thumbnail: String,
    /// Ordered list of image URIs.
    pub images: Vec<String>,
}

/// One page of products with the paging bookkeeping echoed by the service.
///
/// Both the listing and the search endpoint return this shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductPage {
    pub products: Vec<Product>,
    pub total: u32,
    pub skip: u32,
    pub limit: u32,
}
