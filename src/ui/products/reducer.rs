//! Reducer for the products store.

use std::sync::Arc;

use crate::ui::mvi::Reducer;

use super::intent::ProductsIntent;
use super::state::{FetchStatus, ProductsState};

/// Pure state transitions for the products store.
///
/// Completions tagged with a request id other than the latest one are
/// dropped, so a superseded fetch can never overwrite a newer result.
pub struct ProductsReducer;

impl Reducer for ProductsReducer {
    type State = ProductsState;
    type Intent = ProductsIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ProductsIntent::FetchStarted => ProductsState {
                status: FetchStatus::Loading,
                error: None,
                request_id: state.request_id.wrapping_add(1),
                ..state
            },

            ProductsIntent::FetchSucceeded { request_id, items } => {
                if request_id != state.request_id {
                    return state;
                }
                ProductsState {
                    items: Arc::new(items),
                    status: FetchStatus::Succeeded,
                    error: None,
                    ..state
                }
            }

            ProductsIntent::FetchFailed {
                request_id,
                message,
            } => {
                if request_id != state.request_id {
                    return state;
                }
                ProductsState {
                    status: FetchStatus::Failed,
                    error: Some(message),
                    ..state
                }
            }

            ProductsIntent::CategoriesLoaded { categories } => ProductsState {
                categories,
                ..state
            },
        }
    }
}
