//! Vitrina CLI
//!
//! Builds and browses static product catalogs.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;
use vitrina_cli::cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    vitrina_cli::init_logging(cli.verbose);
    vitrina_cli::run(cli).await
}
