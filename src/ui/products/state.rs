//! State for the products store.

use std::fmt;
use std::sync::Arc;

use crate::catalog::Product;
use crate::ui::mvi::UiState;

/// Lifecycle of one product fetch.
///
/// `Idle → Loading → (Succeeded | Failed)`; a new fetch from any state
/// restarts at `Loading`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

impl FetchStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FetchStatus::Idle => "idle",
            FetchStatus::Loading => "loading",
            FetchStatus::Succeeded => "succeeded",
            FetchStatus::Failed => "failed",
        }
    }
}

impl fmt::Display for FetchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProductsState {
    /// Products in API order. Shared so snapshots and the selection cache
    /// can hold the list without copying it.
    pub items: Arc<Vec<Product>>,
    /// Category names in API order.
    pub categories: Vec<String>,
    pub status: FetchStatus,
    /// Present only while `status` is `Failed`.
    pub error: Option<String>,
    /// Identifier of the most recently started product fetch.
    pub request_id: u64,
}

impl UiState for ProductsState {}

/// Result of resolving a product identifier for the detail view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DetailLookup<'a> {
    /// Products have not arrived yet.
    Loading,
    NotFound,
    Found(&'a Product),
}

impl ProductsState {
    pub fn items(&self) -> &[Product] {
        &self.items
    }

    pub fn product_by_id(&self, id: u64) -> Option<&Product> {
        self.items.iter().find(|product| product.id == id)
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn status(&self) -> FetchStatus {
        self.status
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_idle(&self) -> bool {
        self.status == FetchStatus::Idle
    }

    /// Resolve a raw identifier (as typed or routed) to a product.
    ///
    /// Malformed identifiers are `NotFound` in every status. While a fetch is
    /// pending, or before the first one starts, a well-formed id that is not
    /// known yet reports `Loading`.
    pub fn lookup(&self, raw_id: &str) -> DetailLookup<'_> {
        let Ok(id) = raw_id.parse::<u64>() else {
            return DetailLookup::NotFound;
        };
        if self.status == FetchStatus::Loading {
            return DetailLookup::Loading;
        }
        match self.product_by_id(id) {
            Some(product) => DetailLookup::Found(product),
            None if self.status == FetchStatus::Idle => DetailLookup::Loading,
            None => DetailLookup::NotFound,
        }
    }
}
