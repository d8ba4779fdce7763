use std::io;
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent};
use tokio::sync::watch;

use crate::shutdown::ShutdownHandle;

pub enum AppEvent {
    Key(KeyEvent),
    Tick,
    Resize(u16, u16),
    /// One of the stores changed; redraw.
    StateChanged,
    /// OS signal received (SIGTERM, SIGINT)
    Shutdown,
}

pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: mpsc::Sender<AppEvent>,
}

impl EventHandler {
    /// Start the terminal input thread.
    pub fn new(tick_rate: Duration, shutdown: ShutdownHandle) -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();

        thread::spawn(move || {
            pump_input(tick_rate, &shutdown, &event_tx, |timeout| {
                if event::poll(timeout)? {
                    event::read().map(Some)
                } else {
                    Ok(None)
                }
            });
        });

        Self { rx, tx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    pub fn sender(&self) -> mpsc::Sender<AppEvent> {
        self.tx.clone()
    }
}

/// Forward terminal input until shutdown or until the UI side hangs up.
///
/// `next_event` waits up to the given timeout for one terminal event. When it
/// fails the input is gone for good, so the shutdown flag is raised and the
/// UI is told to stop.
fn pump_input<F>(
    tick_rate: Duration,
    shutdown: &ShutdownHandle,
    event_tx: &mpsc::Sender<AppEvent>,
    mut next_event: F,
) where
    F: FnMut(Duration) -> io::Result<Option<Event>>,
{
    let mut last_tick = Instant::now();
    loop {
        if shutdown.is_shutting_down() {
            let _ = event_tx.send(AppEvent::Shutdown);
            return;
        }

        // Use short poll timeout to check shutdown flag frequently
        let timeout = tick_rate
            .saturating_sub(last_tick.elapsed())
            .min(Duration::from_millis(50));

        match next_event(timeout) {
            Ok(Some(Event::Key(key))) => {
                if event_tx.send(AppEvent::Key(key)).is_err() {
                    return;
                }
            }
            Ok(Some(Event::Resize(cols, rows))) => {
                let _ = event_tx.send(AppEvent::Resize(cols, rows));
            }
            Ok(_) => {}
            Err(err) => {
                tracing::error!(error = %err, "Terminal input failed");
                shutdown.signal();
                let _ = event_tx.send(AppEvent::Shutdown);
                return;
            }
        }

        if last_tick.elapsed() >= tick_rate {
            if event_tx.send(AppEvent::Tick).is_err() {
                return;
            }
            last_tick = Instant::now();
        }
    }
}

/// Send `StateChanged` whenever `revisions` advances. Runs on the tokio
/// runtime until either side goes away.
pub fn forward_store_changes(mut revisions: watch::Receiver<u64>, tx: mpsc::Sender<AppEvent>) {
    tokio::spawn(async move {
        while revisions.changed().await.is_ok() {
            if tx.send(AppEvent::StateChanged).is_err() {
                break;
            }
        }
    });
}
