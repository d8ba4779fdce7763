use crate::catalog::SortOption;
use crate::ui::mvi::Intent;

/// Setters store their payload verbatim: no trimming, no validation.
#[derive(Debug, Clone)]
pub enum FiltersIntent {
    SetSearchQuery(String),
    SetSelectedCategory(String),
    SetSortBy(SortOption),
    /// Restore all fields to their defaults in one transition.
    Reset,
}

impl Intent for FiltersIntent {}
