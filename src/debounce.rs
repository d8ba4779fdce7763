//! Cancelable timers and a debounced value built on them.
//!
//! ```text
//! set("a") ─┐ set("ab") ─┐ set("abc") ─┐
//!           ✗ cancel     ✗ cancel      └── delay ──→ settled = "abc"
//! ```
//!
//! Both types need a tokio runtime context: timers are spawned tasks.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::watch;
use tokio::task::JoinHandle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimerPhase {
    Pending,
    Fired,
    Cancelled,
}

/// Handle to a callback scheduled with [`schedule`].
///
/// Dropping the handle does not cancel the timer; call [`cancel`](Self::cancel).
pub struct TimerHandle {
    phase: Arc<Mutex<TimerPhase>>,
    task: JoinHandle<()>,
}

/// Run `callback` once after `delay`, unless cancelled first.
pub fn schedule<F>(delay: Duration, callback: F) -> TimerHandle
where
    F: FnOnce() + Send + 'static,
{
    let phase = Arc::new(Mutex::new(TimerPhase::Pending));
    let task_phase = Arc::clone(&phase);

    let deadline = tokio::time::Instant::now() + delay;

    let task = tokio::spawn(async move {
        tokio::time::sleep_until(deadline).await;
        // The lock is held while the callback runs so that `cancel` either
        // wins outright or waits for the callback to finish.
        let mut phase = task_phase.lock();
        if *phase == TimerPhase::Pending {
            *phase = TimerPhase::Fired;
            callback();
        }
    });

    TimerHandle { phase, task }
}

impl TimerHandle {
    /// Prevent the callback from running. Idempotent.
    ///
    /// When this returns the callback has either already completed or will
    /// never run. Must not be called from inside the callback itself.
    pub fn cancel(&self) {
        let mut phase = self.phase.lock();
        if *phase == TimerPhase::Pending {
            *phase = TimerPhase::Cancelled;
            self.task.abort();
        }
    }

    pub fn is_pending(&self) -> bool {
        *self.phase.lock() == TimerPhase::Pending
    }

    pub fn has_fired(&self) -> bool {
        *self.phase.lock() == TimerPhase::Fired
    }
}

/// A value that only settles after it stops changing for `delay`.
///
/// The initial value is visible immediately. Each [`set`](Self::set)
/// restarts the wait, so only the last value of a burst is ever published.
/// Dropping the `Debounced` cancels any pending emission.
pub struct Debounced<T> {
    delay: Duration,
    settled: Arc<watch::Sender<T>>,
    pending: Option<TimerHandle>,
}

impl<T> Debounced<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub fn new(initial: T, delay: Duration) -> Self {
        let (settled, _) = watch::channel(initial);
        Self {
            delay,
            settled: Arc::new(settled),
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Record a new input value and restart the quiet period.
    pub fn set(&mut self, value: T) {
        self.cancel_pending();
        let settled = Arc::clone(&self.settled);
        self.pending = Some(schedule(self.delay, move || {
            settled.send_replace(value);
        }));
    }

    /// Settle on `value` right away, dropping any pending emission.
    pub fn replace_now(&mut self, value: T) {
        self.cancel_pending();
        self.settled.send_replace(value);
    }

    /// Latest settled value.
    pub fn value(&self) -> T {
        self.settled.borrow().clone()
    }

    /// True while an input is waiting out its delay.
    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(TimerHandle::is_pending)
    }

    /// Receiver notified on every settled value.
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.settled.subscribe()
    }

    fn cancel_pending(&mut self) {
        if let Some(timer) = self.pending.take() {
            timer.cancel();
        }
    }
}

impl<T> Drop for Debounced<T> {
    fn drop(&mut self) {
        if let Some(timer) = self.pending.take() {
            timer.cancel();
        }
    }
}
