use crate::catalog::Product;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum FavoritesIntent {
    /// Insert unless a product with the same id is already present.
    Add(Product),
    /// Remove the product with this id, if any.
    Remove(u64),
    /// Remove if present, insert otherwise.
    Toggle(Product),
}

impl Intent for FavoritesIntent {}
