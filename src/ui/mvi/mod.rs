//! Model-View-Intent (MVI) architecture primitives.
//!
//! This module provides base traits for implementing unidirectional
//! data flow, plus the [`Store`] container that owns one state value.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: Immutable representation of a store's contents
//! - **Intent**: User actions or system events
//! - **Reducer**: Pure function that transforms state based on intents
//! - **Store**: Shared handle that applies reducers atomically

mod intent;
mod reducer;
mod state;
mod store;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
pub use store::Store;
