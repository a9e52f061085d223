//! Domain model for products.
//!
//! The wire representation currently matches the domain one field for field,
//! but the conversion below is the single seam where the two may diverge, so
//! nothing outside this module touches the wire type directly.

use serde::{Deserialize, Serialize};
use shopfront_catalog::Product as WireProduct;
pub use shopfront_catalog::ProductId;

/// A product as the presentation layer sees it.
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
    pub thumbnail: String,
    pub images: Vec<String>,
}

impl Product {
    /// Convert a product from its wire representation.
    pub fn from_wire(wire: WireProduct) -> Self {
        Self {
            id: wire.id,
            title: wire.title,
            description: wire.description,
            price: wire.price,
            discount_percentage: wire.discount_percentage,
            rating: wire.rating,
            stock: wire.stock,
            brand: wire.brand,
            category: wire.category,
            thumbnail: wire.thumbnail,
            images: wire.images,
        }
    }
}

/// Convert a whole page of wire products, preserving their order.
pub fn products_from_wire(wire: Vec<WireProduct>) -> Vec<Product> {
    wire.into_iter().map(Product::from_wire).collect()
}
