//! HTTP client and query layer for the remote product catalog.
//!
//! This crate provides:
//! - HTTP client construction with a fixed per-request wait bound
//! - The three catalog queries: paged listing, full-text search, single lookup
//! - A uniform error taxonomy for timeouts, error responses, and transport
//!   failures
//!
//! ## Usage
//!
//! ```ignore
//! use shopfront_catalog::{CatalogClient, CatalogClientConfig};
//!
//! let client = CatalogClient::new(CatalogClientConfig::default())?;
//! let page = client.list_products(0, 20).await?;
//! let results = client.search_products("phone", 0, 50).await?;
//! let product = client.get_product(5).await?;
//! ```

mod client;
mod config;
mod error;
mod types;

pub use client::CatalogClient;
pub use config::{CatalogClientConfig, DEFAULT_CATALOG_URL, DEFAULT_TIMEOUT};
pub use error::CatalogClientError;
pub use types::{Product, ProductId, ProductPage};
