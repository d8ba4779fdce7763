//! Intents for the products store.

use crate::catalog::Product;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum ProductsIntent {
    /// A product fetch began. Assigns the next request id.
    FetchStarted,
    /// Product fetch `request_id` succeeded.
    FetchSucceeded { request_id: u64, items: Vec<Product> },
    /// Product fetch `request_id` failed with a user-facing message.
    FetchFailed { request_id: u64, message: String },
    /// Category fetch succeeded. Category failures never reach the store.
    CategoriesLoaded { categories: Vec<String> },
}

impl Intent for ProductsIntent {}
