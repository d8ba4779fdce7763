use crate::catalog::{SelectionCriteria, SortOption};
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FiltersState {
    pub search_query: String,
    /// Empty means every category.
    pub selected_category: String,
    pub sort_by: SortOption,
}

impl UiState for FiltersState {}

impl FiltersState {
    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn selected_category(&self) -> &str {
        &self.selected_category
    }

    pub fn sort_by(&self) -> SortOption {
        self.sort_by
    }

    /// True when any field differs from its default.
    pub fn has_active_filters(&self) -> bool {
        *self != Self::default()
    }

    /// Borrow the fields as selection engine input.
    pub fn criteria(&self) -> SelectionCriteria<'_> {
        SelectionCriteria {
            search_query: &self.search_query,
            selected_category: &self.selected_category,
            sort_by: self.sort_by,
        }
    }
}
