//! Shared state container driven by a [`Reducer`].

use std::marker::PhantomData;
use std::sync::Arc;

use parking_lot::RwLock;
use tokio::sync::watch;

use super::reducer::Reducer;

/// Cloneable handle to one owned state value.
///
/// Every [`dispatch`](Store::dispatch) runs the reducer under the write lock,
/// so readers observe either the old or the new state, never a partial
/// transition. Observers are told about changes through a revision counter.
pub struct Store<R: Reducer> {
    state: Arc<RwLock<R::State>>,
    revision: Arc<watch::Sender<u64>>,
    _reducer: PhantomData<fn() -> R>,
}

impl<R: Reducer> Clone for Store<R> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            revision: Arc::clone(&self.revision),
            _reducer: PhantomData,
        }
    }
}

impl<R: Reducer> Default for Store<R> {
    fn default() -> Self {
        Self::new(R::State::default())
    }
}

impl<R: Reducer> Store<R> {
    pub fn new(initial: R::State) -> Self {
        let (revision, _) = watch::channel(0);
        Self {
            state: Arc::new(RwLock::new(initial)),
            revision: Arc::new(revision),
            _reducer: PhantomData,
        }
    }

    /// Apply one intent.
    pub fn dispatch(&self, intent: R::Intent) {
        self.dispatch_and_select(intent, |_| ());
    }

    /// Apply one intent and read the resulting state under the same lock.
    ///
    /// No other dispatch can slip in between the transition and `f`.
    pub fn dispatch_and_select<T>(
        &self,
        intent: R::Intent,
        f: impl FnOnce(&R::State) -> T,
    ) -> T {
        let (changed, selected) = {
            let mut guard = self.state.write();
            let changed = Self::transition(&mut guard, intent);
            (changed, f(&guard))
        };
        self.announce(changed);
        selected
    }

    /// Apply `intent` only if `condition` holds, checking and transitioning
    /// under one write lock. Returns `None` when the intent was skipped.
    pub fn dispatch_if_and_select<T>(
        &self,
        condition: impl FnOnce(&R::State) -> bool,
        intent: R::Intent,
        f: impl FnOnce(&R::State) -> T,
    ) -> Option<T> {
        let (changed, selected) = {
            let mut guard = self.state.write();
            if !condition(&guard) {
                return None;
            }
            let changed = Self::transition(&mut guard, intent);
            (changed, f(&guard))
        };
        self.announce(changed);
        Some(selected)
    }

    /// A panicking reducer leaves `state` as it was.
    fn transition(state: &mut R::State, intent: R::Intent) -> bool {
        let next = R::reduce(state.clone(), intent);
        let changed = next != *state;
        *state = next;
        changed
    }

    fn announce(&self, changed: bool) {
        if changed {
            self.revision.send_modify(|rev| *rev = rev.wrapping_add(1));
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> R::State {
        self.state.read().clone()
    }

    /// Read a projection without cloning the whole state.
    pub fn select<T>(&self, f: impl FnOnce(&R::State) -> T) -> T {
        f(&self.state.read())
    }

    /// Number of state changes so far.
    pub fn revision(&self) -> u64 {
        *self.revision.borrow()
    }

    /// Receiver that wakes whenever the state changes.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }
}
