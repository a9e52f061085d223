//! Catalog client provider.
//!
//! The store talks to the catalog through [ClientTrait] so that tests can
//! swap the real HTTP client for a [MockClient] seeded with canned
//! responses.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use enum_dispatch::enum_dispatch;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use shopfront_catalog::{CatalogClient, CatalogClientError, Product, ProductId, ProductPage};

// Arc allows pushing responses into the client from outside it, Mutex shares
// it across threads (necessary because of tokio)
type MockField<T> = Arc<Mutex<T>>;

/// Either a client for the actual catalog service,
/// or a mock client for testing.
#[derive(Debug)]
#[enum_dispatch(ClientTrait)]
pub enum Client {
    Catalog(CatalogClient),
    Mock(MockClient),
}

#[enum_dispatch]
#[allow(async_fn_in_trait)]
pub trait ClientTrait {
    /// Fetch one page of the product listing.
    async fn list_products(
        &self,
        skip: u32,
        limit: u32,
    ) -> Result<ProductPage, CatalogClientError>;

    /// Search products matching `term`.
    async fn search_products(
        &self,
        term: impl AsRef<str> + Send + Sync,
        skip: u32,
        limit: u32,
    ) -> Result<ProductPage, CatalogClientError>;

    /// Fetch a single product by id.
    async fn get_product(&self, id: ProductId) -> Result<Product, CatalogClientError>;
}

impl ClientTrait for CatalogClient {
    async fn list_products(
        &self,
        skip: u32,
        limit: u32,
    ) -> Result<ProductPage, CatalogClientError> {
        CatalogClient::list_products(self, skip, limit).await
    }

    async fn search_products(
        &self,
        term: impl AsRef<str> + Send + Sync,
        skip: u32,
        limit: u32,
    ) -> Result<ProductPage, CatalogClientError> {
        CatalogClient::search_products(self, term.as_ref(), skip, limit).await
    }

    async fn get_product(&self, id: ProductId) -> Result<Product, CatalogClientError> {
        CatalogClient::get_product(self, id).await
    }
}

/// An error response with the status the server would have used.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenericResponse {
    pub message: String,
    pub status: u16,
}

impl GenericResponse {
    fn into_client_error(self) -> CatalogClientError {
        let status = StatusCode::from_u16(self.status).expect("invalid mock status code");
        CatalogClientError::ErrorResponse {
            status,
            message: Some(self.message),
            body: None,
        }
    }
}

/// A canned response for [MockClient].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Response {
    Page(ProductPage),
    Product(Product),
    Error(GenericResponse),
}

/// A catalog client that can be seeded with mock responses.
///
/// Responses are consumed in FIFO order regardless of which operation pops
/// them; a kind mismatch or an exhausted queue panics. Only intended for
/// tests.
#[derive(Debug, Default)]
pub struct MockClient {
    pub mock_responses: MockField<VecDeque<Response>>,
}

impl MockClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a page response (listing or search) into the list of mock
    /// responses.
    pub fn push_page_response(&mut self, resp: ProductPage) {
        self.mock_responses
            .lock()
            .expect("couldn't acquire mock lock")
            .push_back(Response::Page(resp));
    }

    /// Push a single-product response into the list of mock responses.
    pub fn push_product_response(&mut self, resp: Product) {
        self.mock_responses
            .lock()
            .expect("couldn't acquire mock lock")
            .push_back(Response::Product(resp));
    }

    /// Push an error response with the given status code.
    pub fn push_error_response(&mut self, message: impl Into<String>, status: u16) {
        self.mock_responses
            .lock()
            .expect("couldn't acquire mock lock")
            .push_back(Response::Error(GenericResponse {
                message: message.into(),
                status,
            }));
    }

    fn next_response(&self) -> Response {
        self.mock_responses
            .lock()
            .expect("couldn't acquire mock lock")
            .pop_front()
            .expect("no more mock responses")
    }
}

impl ClientTrait for MockClient {
    async fn list_products(
        &self,
        _skip: u32,
        _limit: u32,
    ) -> Result<ProductPage, CatalogClientError> {
        match self.next_response() {
            Response::Page(page) => Ok(page),
            Response::Error(err) => Err(err.into_client_error()),
            other => panic!("expected page response, found: {other:?}"),
        }
    }

    async fn search_products(
        &self,
        _term: impl AsRef<str> + Send + Sync,
        _skip: u32,
        _limit: u32,
    ) -> Result<ProductPage, CatalogClientError> {
        match self.next_response() {
            Response::Page(page) => Ok(page),
            Response::Error(err) => Err(err.into_client_error()),
            other => panic!("expected page response, found: {other:?}"),
        }
    }

    async fn get_product(&self, _id: ProductId) -> Result<Product, CatalogClientError> {
        match self.next_response() {
            Response::Product(product) => Ok(product),
            Response::Error(err) => Err(err.into_client_error()),
            other => panic!("expected product response, found: {other:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn page_of(ids: &[ProductId], total: u32) -> ProductPage {
        ProductPage {
            products: ids
                .iter()
                .map(|&id| Product {
                    id,
                    title: format!("Product {id}"),
                    description: String::new(),
                    price: 1.0,
                    discount_percentage: 0.0,
                    rating: 5.0,
                    stock: 1,
                    brand: "Acme".to_string(),
                    category: "misc".to_string(),
                    thumbnail: String::new(),
                    images: vec![],
                })
                .collect(),
            total,
            skip: 0,
            limit: ids.len() as u32,
        }
    }

    #[tokio::test]
    async fn mock_responses_are_consumed_in_fifo_order() {
        let mut client = MockClient::new();
        client.push_page_response(page_of(&[1], 2));
        client.push_page_response(page_of(&[2], 2));

        let first = client.list_products(0, 20).await.unwrap();
        let second = client.list_products(20, 20).await.unwrap();
        assert_eq!(first.products[0].id, 1);
        assert_eq!(second.products[0].id, 2);
    }

    #[tokio::test]
    async fn mock_error_response_maps_to_error_response_variant() {
        let mut client = MockClient::new();
        client.push_error_response("boom", 500);

        let err = client.get_product(1).await.unwrap_err();
        match err {
            CatalogClientError::ErrorResponse {
                status, message, ..
            } => {
                assert_eq!(status.as_u16(), 500);
                assert_eq!(message.as_deref(), Some("boom"));
            },
            other => panic!("expected ErrorResponse, found: {other:?}"),
        }
    }

    #[tokio::test]
    #[should_panic(expected = "no more mock responses")]
    async fn exhausted_mock_queue_panics() {
        let client = MockClient::new();
        let _ = client.get_product(1).await;
    }
}
