//! Effectful load operations that drive the products store.
//!
//! Each load dispatches a start intent, awaits the source, and resolves into
//! exactly one terminal transition. Nothing here returns an error: failures
//! are recorded in the store (products) or logged and dropped (categories).

use crate::catalog::client::CatalogSource;
use crate::catalog::error::FetchError;
use crate::ui::products::{ProductsIntent, ProductsStore};

/// Shown when a failed product fetch carries no message of its own.
pub const PRODUCTS_FALLBACK_ERROR: &str = "Failed to fetch products";

/// Fetch products into `store`.
///
/// Safe to call from any status: a newer call supersedes an older one still
/// in flight, whose completion is then discarded by the reducer.
pub async fn load_products<S>(store: &ProductsStore, source: &S)
where
    S: CatalogSource + ?Sized,
{
    let request_id = store.dispatch_and_select(ProductsIntent::FetchStarted, |s| s.request_id);
    fetch_products(store, source, request_id).await;
}

/// Run product fetch `request_id`, already marked as started in `store`.
async fn fetch_products<S>(store: &ProductsStore, source: &S, request_id: u64)
where
    S: CatalogSource + ?Sized,
{
    tracing::debug!(request_id, "Product fetch started");

    match source.fetch_products().await {
        Ok(items) => {
            tracing::info!(request_id, count = items.len(), "Products loaded");
            store.dispatch(ProductsIntent::FetchSucceeded { request_id, items });
        }
        Err(err) => {
            tracing::warn!(request_id, details = %err.details(), "Product fetch failed");
            store.dispatch(ProductsIntent::FetchFailed {
                request_id,
                message: failure_message(&err),
            });
        }
    }
}

/// Fetch categories into `store`. Failures leave the store untouched.
pub async fn load_categories<S>(store: &ProductsStore, source: &S)
where
    S: CatalogSource + ?Sized,
{
    match source.fetch_categories().await {
        Ok(categories) => {
            tracing::info!(count = categories.len(), "Categories loaded");
            store.dispatch(ProductsIntent::CategoriesLoaded { categories });
        }
        Err(err) => {
            tracing::warn!(details = %err.details(), "Category fetch failed; keeping previous categories");
        }
    }
}

/// Run both loads concurrently.
pub async fn load_catalog<S>(store: &ProductsStore, source: &S)
where
    S: CatalogSource + ?Sized,
{
    tokio::join!(load_products(store, source), load_categories(store, source));
}

/// Start both loads only if no product fetch has happened yet.
///
/// The idle check and the fetch start happen under one store lock, so of
/// several concurrent callers exactly one starts a load. Returns whether
/// this call started it.
pub async fn load_catalog_if_idle<S>(store: &ProductsStore, source: &S) -> bool
where
    S: CatalogSource + ?Sized,
{
    let Some(request_id) = store.dispatch_if_and_select(
        |s| s.is_idle(),
        ProductsIntent::FetchStarted,
        |s| s.request_id,
    ) else {
        return false;
    };
    tokio::join!(
        fetch_products(store, source, request_id),
        load_categories(store, source)
    );
    true
}

fn failure_message(err: &FetchError) -> String {
    let message = err.to_string();
    if message.is_empty() {
        PRODUCTS_FALLBACK_ERROR.to_string()
    } else {
        message
    }
}
