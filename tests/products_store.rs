//! Products store driven through the load operations.

mod common;

use common::{product, sample_categories, sample_products, StubSource};
use shopfront::catalog::loader::{
    load_catalog, load_catalog_if_idle, load_categories, load_products, PRODUCTS_FALLBACK_ERROR,
};
use shopfront::catalog::{FetchError, Resource};
use shopfront::ui::products::{DetailLookup, FetchStatus, ProductsIntent, ProductsStore};

#[test]
fn initial_state_is_empty_and_idle() {
    let store = ProductsStore::default();
    let state = store.state();
    assert!(state.items().is_empty());
    assert!(state.categories().is_empty());
    assert_eq!(state.status(), FetchStatus::Idle);
    assert_eq!(state.error(), None);
}

#[tokio::test]
async fn successful_fetch_replaces_items() {
    let store = ProductsStore::default();
    let source = StubSource::new(sample_products(), Vec::new());

    load_products(&store, &source).await;

    let state = store.state();
    assert_eq!(state.status(), FetchStatus::Succeeded);
    assert_eq!(state.items(), sample_products().as_slice());
    assert_eq!(state.error(), None);
}

#[tokio::test]
async fn network_error_message_passes_through() {
    let store = ProductsStore::default();
    let source = StubSource::failing_products(FetchError::transport("Network error"));

    load_products(&store, &source).await;

    assert_eq!(store.select(|s| s.status()), FetchStatus::Failed);
    assert_eq!(
        store.select(|s| s.error().map(str::to_string)),
        Some("Network error".to_string())
    );
}

#[tokio::test]
async fn http_failure_uses_fixed_message() {
    let store = ProductsStore::default();
    let source = StubSource::failing_products(FetchError::Status {
        resource: Resource::Products,
        status: 500,
    });

    load_products(&store, &source).await;

    assert_eq!(
        store.select(|s| s.error().map(str::to_string)),
        Some("Failed to fetch products".to_string())
    );
}

#[tokio::test]
async fn empty_error_message_falls_back() {
    let store = ProductsStore::default();
    let source = StubSource::failing_products(FetchError::transport(""));

    load_products(&store, &source).await;

    assert_eq!(
        store.select(|s| s.error().map(str::to_string)),
        Some(PRODUCTS_FALLBACK_ERROR.to_string())
    );
}

#[tokio::test]
async fn failure_keeps_previously_loaded_items() {
    let store = ProductsStore::default();
    let source = StubSource::new(sample_products(), Vec::new());
    load_products(&store, &source).await;

    source.set_products(Err(FetchError::transport("offline")));
    load_products(&store, &source).await;

    let state = store.state();
    assert_eq!(state.status(), FetchStatus::Failed);
    assert_eq!(state.items().len(), 3);
}

#[tokio::test]
async fn retry_after_failure_clears_error() {
    let store = ProductsStore::default();
    let source = StubSource::failing_products(FetchError::transport("offline"));
    load_products(&store, &source).await;

    source.set_products(Ok(sample_products()));
    load_products(&store, &source).await;

    let state = store.state();
    assert_eq!(state.status(), FetchStatus::Succeeded);
    assert_eq!(state.error(), None);
}

#[tokio::test]
async fn categories_load_independently() {
    let store = ProductsStore::default();
    let source = StubSource::new(Vec::new(), sample_categories());

    load_categories(&store, &source).await;

    let state = store.state();
    assert_eq!(state.categories(), sample_categories().as_slice());
    assert_eq!(state.status(), FetchStatus::Idle);
}

#[tokio::test]
async fn category_failure_is_swallowed() {
    let store = ProductsStore::default();
    let source = StubSource::new(sample_products(), Vec::new());
    source.set_categories(Err(FetchError::Status {
        resource: Resource::Categories,
        status: 503,
    }));

    load_catalog(&store, &source).await;

    let state = store.state();
    assert!(state.categories().is_empty());
    assert_eq!(state.status(), FetchStatus::Succeeded);
    assert_eq!(state.error(), None);
}

#[tokio::test]
async fn category_failure_keeps_previous_categories() {
    let store = ProductsStore::default();
    let source = StubSource::new(Vec::new(), sample_categories());
    load_categories(&store, &source).await;

    source.set_categories(Err(FetchError::transport("offline")));
    load_categories(&store, &source).await;

    assert_eq!(
        store.select(|s| s.categories().to_vec()),
        sample_categories()
    );
}

#[tokio::test]
async fn load_if_idle_runs_once() {
    let store = ProductsStore::default();
    let source = StubSource::new(sample_products(), sample_categories());

    assert!(load_catalog_if_idle(&store, &source).await);
    assert!(!load_catalog_if_idle(&store, &source).await);

    assert_eq!(source.product_calls(), 1);
    assert_eq!(source.category_calls(), 1);
}

#[tokio::test]
async fn concurrent_idle_loads_start_once() {
    let store = ProductsStore::default();
    let source = StubSource::new(sample_products(), sample_categories());

    let (first, second) = tokio::join!(
        load_catalog_if_idle(&store, &source),
        load_catalog_if_idle(&store, &source)
    );

    assert!(first ^ second);
    assert_eq!(source.product_calls(), 1);
    assert_eq!(source.category_calls(), 1);
    assert_eq!(store.select(|s| s.request_id), 1);
    assert_eq!(store.select(|s| s.status()), FetchStatus::Succeeded);
}

#[test]
fn stale_completion_is_dropped() {
    let store = ProductsStore::default();
    let first = store.dispatch_and_select(ProductsIntent::FetchStarted, |s| s.request_id);
    let second = store.dispatch_and_select(ProductsIntent::FetchStarted, |s| s.request_id);

    store.dispatch(ProductsIntent::FetchSucceeded {
        request_id: second,
        items: vec![product(9, "Fresh", 1.0, "misc")],
    });
    store.dispatch(ProductsIntent::FetchFailed {
        request_id: first,
        message: "late failure".to_string(),
    });

    let state = store.state();
    assert_eq!(state.status(), FetchStatus::Succeeded);
    assert_eq!(state.items()[0].title, "Fresh");
}

#[tokio::test]
async fn product_by_id_selector() {
    let store = ProductsStore::default();
    load_products(&store, &StubSource::new(sample_products(), Vec::new())).await;

    let state = store.state();
    assert_eq!(state.product_by_id(2).map(|p| p.price), Some(49.99));
    assert!(state.product_by_id(42).is_none());
}

#[tokio::test]
async fn detail_lookup_distinguishes_loading_and_missing() {
    let store = ProductsStore::default();
    assert!(store.select(|s| s.lookup("1") == DetailLookup::Loading));
    assert!(store.select(|s| s.lookup("abc") == DetailLookup::NotFound));

    store.dispatch(ProductsIntent::FetchStarted);
    assert!(store.select(|s| s.lookup("1") == DetailLookup::Loading));
    assert!(store.select(|s| s.lookup("abc") == DetailLookup::NotFound));

    load_products(&store, &StubSource::new(sample_products(), Vec::new())).await;
    let state = store.state();

    assert!(matches!(state.lookup("1"), DetailLookup::Found(p) if p.id == 1));
    assert_eq!(state.lookup("42"), DetailLookup::NotFound);
    assert_eq!(state.lookup("abc"), DetailLookup::NotFound);
}

#[tokio::test]
async fn store_notifies_subscribers_on_change() {
    let store = ProductsStore::default();
    let mut changes = store.subscribe();

    load_products(&store, &StubSource::new(sample_products(), Vec::new())).await;

    assert!(changes.has_changed().unwrap());
    assert_eq!(*changes.borrow_and_update(), 2);
    assert_eq!(store.revision(), 2);
}
