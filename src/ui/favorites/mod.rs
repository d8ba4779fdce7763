//! Favorites store: user-selected products keyed by id.

mod intent;
mod reducer;
mod state;

pub use intent::FavoritesIntent;
pub use reducer::FavoritesReducer;
pub use state::FavoritesState;

use crate::ui::mvi::Store;

pub type FavoritesStore = Store<FavoritesReducer>;
