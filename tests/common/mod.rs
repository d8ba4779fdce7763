//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use async_trait::async_trait;
use parking_lot::Mutex;
use shopfront::catalog::{CatalogSource, FetchError, Product, Rating};
use shopfront::config::ApiConfig;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tempfile::TempDir;

// -- Fixtures -----------------------------------------------------------------

pub fn product(id: u64, title: &str, price: f64, category: &str) -> Product {
    Product {
        id,
        title: title.to_string(),
        price,
        description: format!("Description of {}", title),
        category: category.to_string(),
        image: format!("https://img.example.com/{}.jpg", id),
        rating: Rating {
            rate: 4.1,
            count: 120,
        },
    }
}

/// Three products: 29.99 electronics, 49.99 clothing, 19.99 electronics.
pub fn sample_products() -> Vec<Product> {
    vec![
        product(1, "Product 1", 29.99, "electronics"),
        product(2, "Product 2", 49.99, "clothing"),
        product(3, "Product 3", 19.99, "electronics"),
    ]
}

pub fn sample_categories() -> Vec<String> {
    vec!["electronics".to_string(), "clothing".to_string()]
}

pub fn to_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string(value).expect("fixture serializes")
}

pub fn api_config(base_url: &str) -> ApiConfig {
    ApiConfig {
        base_url: base_url.to_string(),
        timeout_seconds: 5,
        connect_timeout_seconds: 2,
        ..ApiConfig::default()
    }
}

/// Write `content` to a config file in a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

// -- In-memory catalog ---------------------------------------------------------

/// Catalog source with scripted results and call counters.
pub struct StubSource {
    products: Mutex<Result<Vec<Product>, FetchError>>,
    categories: Mutex<Result<Vec<String>, FetchError>>,
    product_calls: AtomicUsize,
    category_calls: AtomicUsize,
}

impl StubSource {
    pub fn new(products: Vec<Product>, categories: Vec<String>) -> Self {
        Self {
            products: Mutex::new(Ok(products)),
            categories: Mutex::new(Ok(categories)),
            product_calls: AtomicUsize::new(0),
            category_calls: AtomicUsize::new(0),
        }
    }

    pub fn failing_products(err: FetchError) -> Self {
        let source = Self::new(Vec::new(), sample_categories());
        source.set_products(Err(err));
        source
    }

    pub fn set_products(&self, result: Result<Vec<Product>, FetchError>) {
        *self.products.lock() = result;
    }

    pub fn set_categories(&self, result: Result<Vec<String>, FetchError>) {
        *self.categories.lock() = result;
    }

    pub fn product_calls(&self) -> usize {
        self.product_calls.load(Ordering::SeqCst)
    }

    pub fn category_calls(&self) -> usize {
        self.category_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CatalogSource for StubSource {
    async fn fetch_products(&self) -> Result<Vec<Product>, FetchError> {
        self.product_calls.fetch_add(1, Ordering::SeqCst);
        self.products.lock().clone()
    }

    async fn fetch_categories(&self) -> Result<Vec<String>, FetchError> {
        self.category_calls.fetch_add(1, Ordering::SeqCst);
        self.categories.lock().clone()
    }
}
