//! Catalog client and the product query layer built on it.

use std::str::FromStr;

use reqwest::StatusCode;
use reqwest::header::{self, HeaderMap};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};
use url::Url;

use crate::config::CatalogClientConfig;
use crate::error::CatalogClientError;
use crate::types::{Product, ProductId, ProductPage};

/// A client for the product catalog service.
///
/// This is a thin wrapper around a [reqwest::Client] that handles:
/// - HTTP client configuration with the fixed per-request wait bound
/// - building the three catalog queries
/// - mapping failures onto the uniform [CatalogClientError] taxonomy
///
/// It performs no retries and keeps no cache; a request's only side effect
/// is the network call itself.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    client: reqwest::Client,
    base_url: Url,
}

impl CatalogClient {
    /// Create a new catalog client from configuration.
    pub fn new(config: CatalogClientConfig) -> Result<Self, CatalogClientError> {
        let base_url = Url::parse(&config.catalog_url).map_err(CatalogClientError::Url)?;
        let client = build_http_client(&config)?;
        Ok(Self { client, base_url })
    }

    /// Fetch one page of the product listing.
    #[instrument(skip(self))]
    pub async fn list_products(
        &self,
        skip: u32,
        limit: u32,
    ) -> Result<ProductPage, CatalogClientError> {
        self.get("products", &[
            ("limit", limit.to_string()),
            ("skip", skip.to_string()),
        ])
        .await
    }

    /// Search products matching `term`; the term is percent-encoded into the
    /// query string.
    ///
    /// The service treats an empty term as a match-all listing, so avoiding
    /// one is the caller's responsibility.
    #[instrument(skip(self, term), fields(term = %term.as_ref()))]
    pub async fn search_products(
        &self,
        term: impl AsRef<str>,
        skip: u32,
        limit: u32,
    ) -> Result<ProductPage, CatalogClientError> {
        self.get("products/search", &[
            ("q", term.as_ref().to_string()),
            ("limit", limit.to_string()),
            ("skip", skip.to_string()),
        ])
        .await
    }

    /// Fetch a single product by id.
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: ProductId) -> Result<Product, CatalogClientError> {
        self.get(&format!("products/{id}"), &[]).await
    }

    /// Issue a GET request against the catalog and decode the JSON response.
    async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, String)],
    ) -> Result<T, CatalogClientError> {
        let url = self
            .base_url
            .join(endpoint)
            .map_err(CatalogClientError::Url)?;
        debug!(%url, "sending catalog request");

        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|err| {
                if err.is_timeout() {
                    CatalogClientError::Timeout
                } else {
                    CatalogClientError::Transport(err)
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(error_from_response(status, response).await);
        }

        response.json::<T>().await.map_err(|err| {
            if err.is_timeout() {
                CatalogClientError::Timeout
            } else {
                CatalogClientError::Deserialize(err)
            }
        })
    }
}

/// Build the error for a non-2xx response, capturing the parsed body when
/// there is one and its `message` field when that is a string.
async fn error_from_response(
    status: StatusCode,
    response: reqwest::Response,
) -> CatalogClientError {
    let body = response.json::<serde_json::Value>().await.ok();
    let message = body
        .as_ref()
        .and_then(|body| body.get("message"))
        .and_then(|message| message.as_str())
        .map(String::from);
    CatalogClientError::ErrorResponse {
        status,
        message,
        body,
    }
}

/// Build the HTTP client the catalog queries go through.
fn build_http_client(config: &CatalogClientConfig) -> Result<reqwest::Client, CatalogClientError> {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        header::HeaderValue::from_static("application/json"),
    );

    // Extra headers (the embedding app can add invocation-source etc.)
    for (key, value) in &config.extra_headers {
        headers.insert(
            header::HeaderName::from_str(key).map_err(
                |e: reqwest::header::InvalidHeaderName| CatalogClientError::Other(e.to_string()),
            )?,
            header::HeaderValue::from_str(value).map_err(
                |e: reqwest::header::InvalidHeaderValue| CatalogClientError::Other(e.to_string()),
            )?,
        );
    }

    debug!(
        catalog_url = %config.catalog_url,
        timeout = ?config.timeout,
        extra_headers = config.extra_headers.len(),
        "building catalog HTTP client"
    );

    let client_builder = reqwest::Client::builder()
        .default_headers(headers)
        .timeout(config.timeout);

    let client_builder = if let Some(ref user_agent) = config.user_agent {
        client_builder.user_agent(user_agent)
    } else {
        client_builder
    };

    client_builder
        .build()
        .map_err(|e| CatalogClientError::Other(e.to_string()))
}
