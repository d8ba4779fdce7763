//! Selection engine: derives the displayed product list from the catalog and
//! the current filters.

use std::sync::Arc;

use crate::catalog::types::{Product, SortOption};

/// Borrowed filter inputs for [`select_products`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionCriteria<'a> {
    /// Case-insensitive title substring. Empty disables the filter; anything
    /// else, whitespace included, is matched literally.
    pub search_query: &'a str,
    /// Exact, case-sensitive category. Empty disables the filter.
    pub selected_category: &'a str,
    pub sort_by: SortOption,
}

/// Filter and sort `products` without touching the input.
///
/// Search and category filters compose with AND. Price sorts are stable, so
/// equally priced products keep their filtered order in both directions.
pub fn select_products(products: &[Product], criteria: SelectionCriteria<'_>) -> Vec<Product> {
    let query = criteria.search_query.to_lowercase();

    let mut selected: Vec<Product> = products
        .iter()
        .filter(|product| matches_search(product, &query))
        .filter(|product| matches_category(product, criteria.selected_category))
        .cloned()
        .collect();

    match criteria.sort_by {
        SortOption::Default => {}
        SortOption::PriceAsc => selected.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortOption::PriceDesc => selected.sort_by(|a, b| b.price.total_cmp(&a.price)),
    }

    selected
}

/// `lowered_query` must already be lowercase.
fn matches_search(product: &Product, lowered_query: &str) -> bool {
    lowered_query.is_empty() || product.title.to_lowercase().contains(lowered_query)
}

fn matches_category(product: &Product, category: &str) -> bool {
    category.is_empty() || product.category == category
}

/// Memo layer over [`select_products`].
///
/// Keyed on the identity of the product list and on equality of the
/// criteria; recomputes only when either changes.
#[derive(Debug, Default)]
pub struct SelectionCache {
    entry: Option<CacheEntry>,
}

#[derive(Debug)]
struct CacheEntry {
    products: Arc<Vec<Product>>,
    search_query: String,
    selected_category: String,
    sort_by: SortOption,
    result: Vec<Product>,
}

impl CacheEntry {
    fn matches(&self, products: &Arc<Vec<Product>>, criteria: SelectionCriteria<'_>) -> bool {
        Arc::ptr_eq(&self.products, products)
            && self.search_query == criteria.search_query
            && self.selected_category == criteria.selected_category
            && self.sort_by == criteria.sort_by
    }
}

impl SelectionCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(
        &mut self,
        products: &Arc<Vec<Product>>,
        criteria: SelectionCriteria<'_>,
    ) -> &[Product] {
        let fresh = self
            .entry
            .as_ref()
            .is_some_and(|entry| entry.matches(products, criteria));

        if !fresh {
            self.entry = Some(CacheEntry {
                products: Arc::clone(products),
                search_query: criteria.search_query.to_string(),
                selected_category: criteria.selected_category.to_string(),
                sort_by: criteria.sort_by,
                result: select_products(products, criteria),
            });
        }

        match &self.entry {
            Some(entry) => &entry.result,
            None => &[],
        }
    }

    pub fn invalidate(&mut self) {
        self.entry = None;
    }
}
