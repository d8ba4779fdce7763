//! Products store.
//!
//! Holds the fetched catalog and the product fetch lifecycle. The effectful
//! side (HTTP, logging) lives in [`crate::catalog::loader`]; this module is
//! the pure state machine it drives.

mod intent;
mod reducer;
mod state;

pub use intent::ProductsIntent;
pub use reducer::ProductsReducer;
pub use state::{DetailLookup, FetchStatus, ProductsState};

use crate::ui::mvi::Store;

pub type ProductsStore = Store<ProductsReducer>;
