use crate::catalog::loader::{load_catalog_if_idle, load_products};
use crate::catalog::CatalogSource;
use crate::config::Config;
use crate::shutdown::{spawn_signal_listener, ShutdownHandle};
use crate::ui::app::{App, Stores, UiCommand};
use crate::ui::events::{forward_store_changes, AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::products::ProductsStore;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use anyhow::Context;
use std::sync::mpsc::RecvTimeoutError;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Run the interactive browser until the user quits or a signal arrives.
///
/// Must be called from inside a tokio runtime context; the UI loop itself
/// blocks the calling thread.
pub fn run(config: &Config, source: Arc<dyn CatalogSource>) -> anyhow::Result<()> {
    let shutdown = ShutdownHandle::new();
    spawn_signal_listener(shutdown.clone());

    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let debounce = Duration::from_millis(config.ui.search_debounce_ms);

    let stores = Stores::default();
    let (command_tx, command_rx) = mpsc::channel(16);
    spawn_command_worker(command_rx, stores.products.clone(), source);

    let events = EventHandler::new(tick_rate, shutdown.clone());
    forward_store_changes(stores.products.subscribe(), events.sender());
    forward_store_changes(stores.favorites.subscribe(), events.sender());
    forward_store_changes(stores.filters.subscribe(), events.sender());

    let mut app = App::new(stores, Some(command_tx), debounce);
    app.on_start();

    let (mut terminal, guard) = setup_terminal().context("Failed to set up terminal")?;
    tracing::info!("Terminal UI started");

    loop {
        terminal
            .draw(|frame| draw(frame, &mut app))
            .context("Failed to draw frame")?;
        if app.should_quit() || shutdown.is_shutting_down() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(cols, rows)) => {
                tracing::debug!(cols, rows, "Terminal resized");
            }
            Ok(AppEvent::StateChanged) => {}
            Ok(AppEvent::Shutdown) => app.request_quit(),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    shutdown.signal();
    drop(guard);
    tracing::info!("Terminal UI stopped");
    Ok(())
}

/// Execute UI commands one at a time, so a retry never overlaps a load.
fn spawn_command_worker(
    mut commands: mpsc::Receiver<UiCommand>,
    products: ProductsStore,
    source: Arc<dyn CatalogSource>,
) {
    tokio::spawn(async move {
        while let Some(command) = commands.recv().await {
            tracing::debug!(?command, "Running UI command");
            match command {
                UiCommand::LoadCatalog => {
                    load_catalog_if_idle(&products, source.as_ref()).await;
                }
                UiCommand::RetryProducts => load_products(&products, source.as_ref()).await,
            }
        }
    });
}
