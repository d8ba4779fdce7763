//! Browser state machine: search debounce, filter cycling, favorites and
//! navigation, without a terminal.

mod common;

use common::{sample_categories, sample_products};
use shopfront::catalog::SortOption;
use shopfront::ui::app::{App, Stores, UiCommand, View};
use shopfront::ui::products::ProductsIntent;
use std::time::Duration;
use tokio::sync::mpsc;

const DEBOUNCE: Duration = Duration::from_millis(300);

async fn advance(ms: u64) {
    tokio::time::advance(Duration::from_millis(ms)).await;
    for _ in 0..8 {
        tokio::task::yield_now().await;
    }
}

fn loaded_stores() -> Stores {
    let stores = Stores::default();
    let request_id = stores
        .products
        .dispatch_and_select(ProductsIntent::FetchStarted, |s| s.request_id);
    stores.products.dispatch(ProductsIntent::FetchSucceeded {
        request_id,
        items: sample_products(),
    });
    stores.products.dispatch(ProductsIntent::CategoriesLoaded {
        categories: sample_categories(),
    });
    stores
}

fn query(app: &App) -> String {
    app.stores()
        .filters
        .select(|f| f.search_query().to_string())
}

#[tokio::test(start_paused = true)]
async fn typing_reaches_filters_after_quiet_period() {
    let mut app = App::new(loaded_stores(), None, DEBOUNCE);

    for ch in "product 3".chars() {
        app.push_search_char(ch);
        advance(50).await;
    }
    assert_eq!(app.search_input(), "product 3");
    assert_eq!(query(&app), "");
    assert!(app.search_pending());

    advance(249).await;
    assert_eq!(query(&app), "");

    advance(1).await;
    assert_eq!(query(&app), "product 3");
    assert!(!app.search_pending());

    let snapshot = app.snapshot();
    assert_eq!(snapshot.visible.len(), 1);
    assert_eq!(snapshot.visible[0].id, 3);
}

#[tokio::test(start_paused = true)]
async fn clear_filters_drops_pending_search() {
    let mut app = App::new(loaded_stores(), None, DEBOUNCE);
    app.cycle_sort();
    app.push_search_char('x');

    app.clear_filters();
    advance(1_000).await;

    assert_eq!(app.search_input(), "");
    assert_eq!(query(&app), "");
    let filters = app.stores().filters.state();
    assert!(!filters.has_active_filters());
}

#[tokio::test(start_paused = true)]
async fn category_cycle_includes_all() {
    let mut app = App::new(loaded_stores(), None, DEBOUNCE);
    let category = |app: &App| {
        app.stores()
            .filters
            .select(|f| f.selected_category().to_string())
    };

    app.cycle_category(true);
    assert_eq!(category(&app), "electronics");
    app.cycle_category(true);
    assert_eq!(category(&app), "clothing");
    app.cycle_category(true);
    assert_eq!(category(&app), "");
    app.cycle_category(false);
    assert_eq!(category(&app), "clothing");
}

#[tokio::test(start_paused = true)]
async fn sort_cycles_through_all_modes() {
    let mut app = App::new(loaded_stores(), None, DEBOUNCE);
    let mut seen = Vec::new();
    for _ in 0..3 {
        app.cycle_sort();
        seen.push(app.stores().filters.select(|f| f.sort_by()));
    }
    assert_eq!(
        seen,
        vec![SortOption::PriceAsc, SortOption::PriceDesc, SortOption::Default]
    );
}

#[tokio::test(start_paused = true)]
async fn favorite_follows_cursor_in_sorted_listing() {
    let mut app = App::new(loaded_stores(), None, DEBOUNCE);
    app.cycle_sort(); // price ascending: 3, 1, 2
    app.snapshot();

    app.toggle_favorite();
    app.move_cursor(1);
    app.toggle_favorite();

    let ids: Vec<u64> = app
        .stores()
        .favorites
        .select(|f| f.items().iter().map(|p| p.id).collect());
    assert_eq!(ids, vec![3, 1]);
    assert!(app.is_favorite(3));
    assert!(!app.is_favorite(2));
}

#[tokio::test(start_paused = true)]
async fn detail_view_toggles_and_returns() {
    let mut app = App::new(loaded_stores(), None, DEBOUNCE);
    app.move_cursor(1);
    app.open_selected();
    assert_eq!(
        app.view(),
        &View::Detail {
            raw_id: "2".to_string()
        }
    );

    app.toggle_favorite();
    assert!(app.is_favorite(2));
    app.toggle_favorite();
    assert!(!app.is_favorite(2));

    app.go_back();
    assert_eq!(app.view(), &View::Listing);
}

#[tokio::test(start_paused = true)]
async fn detail_from_favorites_returns_to_favorites() {
    let mut app = App::new(loaded_stores(), None, DEBOUNCE);
    app.toggle_favorite();
    app.toggle_favorites_view();
    app.open_selected();
    assert!(matches!(app.view(), View::Detail { raw_id } if raw_id == "1"));

    app.go_back();
    assert_eq!(app.view(), &View::Favorites);
}

#[tokio::test(start_paused = true)]
async fn start_requests_load_only_when_idle() {
    let (tx, mut rx) = mpsc::channel(4);
    let mut app = App::new(Stores::default(), Some(tx), DEBOUNCE);
    app.on_start();
    assert_eq!(rx.try_recv().ok(), Some(UiCommand::LoadCatalog));

    let (tx, mut rx) = mpsc::channel(4);
    let mut app = App::new(loaded_stores(), Some(tx), DEBOUNCE);
    app.on_start();
    assert!(rx.try_recv().is_err());
}

#[tokio::test(start_paused = true)]
async fn retry_only_after_failure() {
    let stores = Stores::default();
    let (tx, mut rx) = mpsc::channel(4);
    let mut app = App::new(stores.clone(), Some(tx), DEBOUNCE);

    app.retry();
    assert!(rx.try_recv().is_err());

    let request_id = stores
        .products
        .dispatch_and_select(ProductsIntent::FetchStarted, |s| s.request_id);
    stores.products.dispatch(ProductsIntent::FetchFailed {
        request_id,
        message: "Network error".to_string(),
    });

    app.retry();
    assert_eq!(rx.try_recv().ok(), Some(UiCommand::RetryProducts));
}
