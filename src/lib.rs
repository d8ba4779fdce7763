//! Terminal browser for a remote, read-only product catalog.
//!
//! The library holds the catalog client, the three stores (products,
//! favorites, filters), the selection engine and the debounce primitive.
//! The `shopfront` binary puts a terminal UI and one-shot commands on top.

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod debounce;
pub mod logging;
pub mod shutdown;
pub mod ui;
