use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use shopfront::catalog::{CatalogSource, HttpCatalog};
use shopfront::cli::{Cli, Command};
use shopfront::commands;
use shopfront::logging::{init_tracing, LogTarget};

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli.load_config().context("Failed to load config")?;

    let target = match cli.command {
        Some(_) => LogTarget::Stderr,
        None => LogTarget::File(config.logging.file_path()),
    };
    init_tracing(&config.logging.level, target)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    let catalog = HttpCatalog::new(&config.api).context("Failed to build HTTP client")?;

    match cli.command {
        None => {
            let _context = runtime.enter();
            let source: Arc<dyn CatalogSource> = Arc::new(catalog);
            shopfront::ui::run(&config, source)
        }
        Some(command) => {
            let output = runtime.block_on(run_command(command, &catalog))?;
            print!("{}", output);
            if !output.is_empty() && !output.ends_with('\n') {
                println!();
            }
            Ok(())
        }
    }
}

async fn run_command(command: Command, catalog: &HttpCatalog) -> anyhow::Result<String> {
    tracing::debug!(?command, "Running command");
    match command {
        Command::List {
            search,
            category,
            sort,
            json,
        } => commands::list(catalog, &search, &category, sort, json).await,
        Command::Categories { json } => commands::categories(catalog, json).await,
        Command::Show { id, json } => commands::show(catalog, &id, json).await,
    }
}
