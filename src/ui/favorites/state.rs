use crate::catalog::Product;
use crate::ui::mvi::UiState;

/// Favorites held for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FavoritesState {
    /// Unique by product id, in the order they were added.
    pub items: Vec<Product>,
}

impl UiState for FavoritesState {}

impl FavoritesState {
    pub fn items(&self) -> &[Product] {
        &self.items
    }

    pub fn contains(&self, product_id: u64) -> bool {
        self.items.iter().any(|item| item.id == product_id)
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }
}
