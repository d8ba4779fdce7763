//! Filters store: search text, category and sort mode.

mod intent;
mod reducer;
mod state;

pub use intent::FiltersIntent;
pub use reducer::FiltersReducer;
pub use state::FiltersState;

use crate::ui::mvi::Store;

pub type FiltersStore = Store<FiltersReducer>;
