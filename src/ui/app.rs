use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, watch};

use crate::catalog::{Product, SelectionCache};
use crate::debounce::Debounced;
use crate::ui::favorites::{FavoritesIntent, FavoritesState, FavoritesStore};
use crate::ui::filters::{FiltersIntent, FiltersState, FiltersStore};
use crate::ui::products::{DetailLookup, FetchStatus, ProductsState, ProductsStore};

/// Screens of the browser.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum View {
    Listing,
    /// Detail page for a raw (unparsed) product id.
    Detail { raw_id: String },
    Favorites,
}

/// Side effects requested by the UI, executed on the runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiCommand {
    /// Fetch products and categories.
    LoadCatalog,
    /// Fetch products again after a failure.
    RetryProducts,
}

pub type UiCommandSender = mpsc::Sender<UiCommand>;

/// The three stores the browser reads and mutates.
#[derive(Clone, Default)]
pub struct Stores {
    pub products: ProductsStore,
    pub favorites: FavoritesStore,
    pub filters: FiltersStore,
}

/// Everything a frame needs, captured once per draw.
pub struct Snapshot {
    pub products: ProductsState,
    pub favorites: FavoritesState,
    pub filters: FiltersState,
    /// Selection engine output for the listing view.
    pub visible: Vec<Product>,
}

pub struct App {
    should_quit: bool,
    view: View,
    /// Where Esc returns to from the detail view.
    previous_view: View,
    stores: Stores,
    commands: Option<UiCommandSender>,
    /// Search text exactly as typed; reaches the filters store debounced.
    search_input: String,
    search: Debounced<String>,
    selection: SelectionCache,
    listing_cursor: usize,
    favorites_cursor: usize,
}

impl App {
    /// Must be called inside a tokio runtime: the search debounce spawns
    /// timers and a task that forwards settled text to the filters store.
    pub fn new(stores: Stores, commands: Option<UiCommandSender>, debounce: Duration) -> Self {
        let stored_query = stores.filters.select(|f| f.search_query().to_string());
        let search = Debounced::new(stored_query.clone(), debounce);
        spawn_search_bridge(search.subscribe(), stores.filters.clone());

        Self {
            should_quit: false,
            view: View::Listing,
            previous_view: View::Listing,
            stores,
            commands,
            search_input: stored_query,
            search,
            selection: SelectionCache::new(),
            listing_cursor: 0,
            favorites_cursor: 0,
        }
    }

    pub fn stores(&self) -> &Stores {
        &self.stores
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn search_input(&self) -> &str {
        &self.search_input
    }

    /// True while typed text has not reached the filters store yet.
    pub fn search_pending(&self) -> bool {
        self.search.is_pending()
    }

    pub fn listing_cursor(&self) -> usize {
        self.listing_cursor
    }

    pub fn favorites_cursor(&self) -> usize {
        self.favorites_cursor
    }

    /// Kick off the initial load if nothing has been fetched yet.
    pub fn on_start(&mut self) {
        if self.stores.products.select(|s| s.is_idle()) {
            self.send_command(UiCommand::LoadCatalog);
        }
    }

    pub fn on_tick(&mut self) {}

    pub fn snapshot(&mut self) -> Snapshot {
        let products = self.stores.products.state();
        let filters = self.stores.filters.state();
        let favorites = self.stores.favorites.state();
        let visible = self
            .selection
            .get(&products.items, filters.criteria())
            .to_vec();

        self.listing_cursor = clamp_cursor(self.listing_cursor, visible.len());
        self.favorites_cursor = clamp_cursor(self.favorites_cursor, favorites.count());

        Snapshot {
            products,
            favorites,
            filters,
            visible,
        }
    }

    // -- Search -------------------------------------------------------------

    pub fn push_search_char(&mut self, ch: char) {
        self.search_input.push(ch);
        self.search_changed();
    }

    pub fn pop_search_char(&mut self) {
        if self.search_input.pop().is_some() {
            self.search_changed();
        }
    }

    pub fn clear_search(&mut self) {
        if !self.search_input.is_empty() {
            self.search_input.clear();
            self.search_changed();
        }
    }

    fn search_changed(&mut self) {
        self.listing_cursor = 0;
        self.search.set(self.search_input.clone());
    }

    // -- Filters ------------------------------------------------------------

    /// Step through "all categories" followed by each fetched category.
    pub fn cycle_category(&mut self, forward: bool) {
        let categories = self.stores.products.select(|s| s.categories().to_vec());
        let current = self.stores.filters.select(|f| f.selected_category().to_string());

        let mut options = Vec::with_capacity(categories.len() + 1);
        options.push(String::new());
        options.extend(categories);

        let index = options.iter().position(|c| *c == current).unwrap_or(0);
        let next = if forward {
            (index + 1) % options.len()
        } else {
            (index + options.len() - 1) % options.len()
        };

        self.listing_cursor = 0;
        self.stores
            .filters
            .dispatch(FiltersIntent::SetSelectedCategory(options.swap_remove(next)));
    }

    pub fn cycle_sort(&mut self) {
        let next = self.stores.filters.select(|f| f.sort_by().next());
        self.stores.filters.dispatch(FiltersIntent::SetSortBy(next));
    }

    /// Reset every filter and the typed search text at once.
    pub fn clear_filters(&mut self) {
        self.stores.filters.dispatch(FiltersIntent::Reset);
        self.search_input.clear();
        self.search.replace_now(String::new());
        self.listing_cursor = 0;
    }

    // -- Products -----------------------------------------------------------

    /// Re-fetch products, only after a failure.
    pub fn retry(&mut self) {
        if self.stores.products.select(|s| s.status() == FetchStatus::Failed) {
            self.send_command(UiCommand::RetryProducts);
        }
    }

    fn send_command(&self, command: UiCommand) {
        let Some(sender) = &self.commands else {
            return;
        };
        if let Err(err) = sender.try_send(command) {
            tracing::warn!(?command, error = %err, "Dropped UI command");
        }
    }

    // -- Navigation ---------------------------------------------------------

    pub fn move_cursor(&mut self, delta: isize) {
        match self.view {
            View::Listing => {
                let len = self.visible_len();
                self.listing_cursor = step(self.listing_cursor, delta, len);
            }
            View::Favorites => {
                let len = self.stores.favorites.select(|f| f.count());
                self.favorites_cursor = step(self.favorites_cursor, delta, len);
            }
            View::Detail { .. } => {}
        }
    }

    /// Open the detail view for the product under the cursor.
    pub fn open_selected(&mut self) {
        if let Some(product) = self.selected_product() {
            self.open_detail(product.id.to_string());
        }
    }

    pub fn open_detail(&mut self, raw_id: String) {
        if !matches!(self.view, View::Detail { .. }) {
            self.previous_view = self.view.clone();
        }
        self.view = View::Detail { raw_id };
        self.on_start();
    }

    pub fn toggle_favorites_view(&mut self) {
        self.view = match self.view {
            View::Favorites => View::Listing,
            _ => View::Favorites,
        };
    }

    pub fn go_back(&mut self) {
        self.view = match self.view {
            View::Detail { .. } => std::mem::replace(&mut self.previous_view, View::Listing),
            View::Favorites => View::Listing,
            View::Listing => {
                self.should_quit = true;
                View::Listing
            }
        };
    }

    // -- Favorites ----------------------------------------------------------

    /// Toggle favorite for the product the current view is focused on.
    pub fn toggle_favorite(&mut self) {
        let detail_id = match &self.view {
            View::Detail { raw_id } => Some(raw_id.clone()),
            _ => None,
        };
        let product = match detail_id {
            Some(raw_id) => self.stores.products.select(|s| match s.lookup(&raw_id) {
                DetailLookup::Found(product) => Some(product.clone()),
                DetailLookup::Loading | DetailLookup::NotFound => None,
            }),
            None => self.selected_product(),
        };
        if let Some(product) = product {
            self.stores
                .favorites
                .dispatch(FavoritesIntent::Toggle(product));
        }
    }

    pub fn is_favorite(&self, product_id: u64) -> bool {
        self.stores.favorites.select(|f| f.contains(product_id))
    }

    fn selected_product(&mut self) -> Option<Product> {
        match self.view {
            View::Listing => {
                let index = self.listing_cursor;
                self.visible_products().get(index).cloned()
            }
            View::Favorites => {
                let index = self.favorites_cursor;
                self.stores
                    .favorites
                    .select(|f| f.items().get(index).cloned())
            }
            View::Detail { .. } => None,
        }
    }

    fn visible_products(&mut self) -> &[Product] {
        let items = self.stores.products.select(|s| Arc::clone(&s.items));
        let filters = self.stores.filters.state();
        self.selection.get(&items, filters.criteria())
    }

    fn visible_len(&mut self) -> usize {
        self.visible_products().len()
    }
}

/// Forward settled search text into the filters store until the sender
/// side (the app's `Debounced`) is dropped.
fn spawn_search_bridge(mut settled: watch::Receiver<String>, filters: FiltersStore) {
    tokio::spawn(async move {
        while settled.changed().await.is_ok() {
            let query = settled.borrow_and_update().clone();
            filters.dispatch(FiltersIntent::SetSearchQuery(query));
        }
    });
}

fn step(cursor: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let last = len - 1;
    if delta.is_negative() {
        cursor.saturating_sub(delta.unsigned_abs())
    } else {
        cursor.saturating_add(delta as usize).min(last)
    }
}

fn clamp_cursor(cursor: usize, len: usize) -> usize {
    cursor.min(len.saturating_sub(1))
}
