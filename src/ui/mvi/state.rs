//! Base trait for UI state in MVI architecture.

/// Marker trait for UI state objects.
///
/// States should be:
/// - Immutable (Clone to create new states)
/// - Self-contained (all data needed to render the view)
/// - Comparable (PartialEq for detecting changes)
/// - Shareable (held behind a [`Store`](super::Store) handle across threads)
pub trait UiState: Clone + PartialEq + Default + Send + Sync + 'static {}
