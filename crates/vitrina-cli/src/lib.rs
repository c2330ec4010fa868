//! # vitrina-cli
//!
//! Command-line front end for Vitrina catalogs:
//! - build the static site (`build`)
//! - browse the catalog from the terminal (`list`, `show`, `options`)
//! - export filtered products as CSV (`export`)
//! - manage `vitrina.toml` (`config`)

#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;
pub mod config_handlers;

use anyhow::Result;
use tracing_subscriber::EnvFilter;
use vitrina_core::VitrinaConfig;

use crate::cli::{Cli, Command};

/// Install the fmt subscriber.
///
/// `RUST_LOG` wins when set; otherwise the level is `info`, or `debug`
/// with `--verbose`. Records from the `log` facade used by the library
/// crates are captured as well.
pub fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Execute a parsed command line.
pub async fn run(cli: Cli) -> Result<()> {
    let config_path = cli.config.as_deref();
    match cli.command {
        Command::Config { action } => {
            Ok(config_handlers::handle_config_command(config_path, action)?)
        }
        command => run_catalog_command(config_path, command).await,
    }
}

async fn run_catalog_command(config_path: Option<&str>, command: Command) -> Result<()> {
    let config = VitrinaConfig::load(config_path)?;
    tracing::debug!(
        source = %config.catalog.source,
        strategy = %config.images.strategy,
        "Configuration loaded"
    );

    match command {
        Command::Build { out } => commands::emit(&commands::cmd_build(&config, &out).await?),
        Command::List { filter, json } => {
            commands::emit(&commands::cmd_list(&config, filter.into(), json).await?)
        }
        Command::Show { id, query } => commands::emit(
            &commands::cmd_show(&config, id.as_deref(), query.as_deref()).await?,
        ),
        Command::Options { json } => commands::emit(&commands::cmd_options(&config, json).await?),
        Command::Export { filter, out } => {
            let count = commands::cmd_export(&config, filter.into(), out.as_deref()).await?;
            if let Some(path) = out {
                eprintln!("Exported {count} products to {}", path.display());
            }
            Ok(())
        }
        Command::Config { action } => {
            Ok(config_handlers::handle_config_command(config_path, action)?)
        }
    }
}
