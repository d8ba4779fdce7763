//! Catalog domain: product types, the remote data source, load operations
//! and the selection engine.

mod client;
mod error;
pub mod loader;
pub mod selection;
mod types;

pub use client::{CatalogSource, HttpCatalog};
pub use error::{FetchError, Resource};
pub use selection::{select_products, SelectionCache, SelectionCriteria};
pub use types::{ParseSortError, Product, Rating, SortOption};
