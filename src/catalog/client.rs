use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::catalog::error::{FetchError, Resource};
use crate::catalog::types::Product;
use crate::config::ApiConfig;

/// Read-only source of catalog data.
///
/// The HTTP implementation is [`HttpCatalog`]; tests substitute in-memory
/// sources.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch the full product list in API order.
    async fn fetch_products(&self) -> Result<Vec<Product>, FetchError>;

    /// Fetch the category names in API order.
    async fn fetch_categories(&self) -> Result<Vec<String>, FetchError>;
}

/// Catalog API client over HTTP.
pub struct HttpCatalog {
    client: Client,
    products_url: String,
    categories_url: String,
}

impl HttpCatalog {
    pub fn new(config: &ApiConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds.into()))
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds.into()))
            .user_agent(concat!("shopfront/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| FetchError::Client {
                message: e.to_string(),
            })?;

        Ok(Self {
            client,
            products_url: config.products_url(),
            categories_url: config.categories_url(),
        })
    }

    pub fn products_url(&self) -> &str {
        &self.products_url
    }

    pub fn categories_url(&self) -> &str {
        &self.categories_url
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        resource: Resource,
    ) -> Result<T, FetchError> {
        tracing::debug!(%url, %resource, "Fetching");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                resource,
                status: status.as_u16(),
            });
        }

        response.json::<T>().await.map_err(|e| FetchError::Decode {
            message: e.to_string(),
        })
    }
}

#[async_trait]
impl CatalogSource for HttpCatalog {
    async fn fetch_products(&self) -> Result<Vec<Product>, FetchError> {
        self.get_json(&self.products_url, Resource::Products).await
    }

    async fn fetch_categories(&self) -> Result<Vec<String>, FetchError> {
        self.get_json(&self.categories_url, Resource::Categories)
            .await
    }
}
