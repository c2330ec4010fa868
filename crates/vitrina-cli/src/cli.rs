//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use vitrina_catalog::FilterParams;

/// Vitrina - static product catalog builder
#[derive(Parser, Debug)]
#[command(name = "vitrina")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "VITRINA_CONFIG")]
    pub config: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write the static site: index.html plus one page per product
    Build {
        /// Output directory
        #[arg(short, long, default_value = ".")]
        out: PathBuf,
    },

    /// List products passing the given filters
    List {
        #[command(flatten)]
        filter: FilterArgs,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Print the detail page for one product
    Show {
        /// Product id
        #[arg(required_unless_present = "query", conflicts_with = "query")]
        id: Option<String>,

        /// Query string as a browser would pass it, e.g. "?id=7"
        #[arg(long)]
        query: Option<String>,
    },

    /// Print the category and brand filter options
    Options {
        /// Print JSON instead of plain lists
        #[arg(long)]
        json: bool,
    },

    /// Write the filtered products as CSV
    Export {
        #[command(flatten)]
        filter: FilterArgs,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Listing filters shared by `list` and `export`.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Case-insensitive text matched against name, brand and presentation
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Exact category
    #[arg(long, default_value = "")]
    pub category: String,

    /// Exact brand
    #[arg(long, default_value = "")]
    pub brand: String,
}

impl From<FilterArgs> for FilterParams {
    fn from(args: FilterArgs) -> Self {
        FilterParams::default()
            .with_search(args.search)
            .with_category(args.category)
            .with_brand(args.brand)
    }
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the resolved config file path
    Path,

    /// Print the effective configuration as TOML
    Show,

    /// Get a value by dotted key (e.g. images.base)
    Get {
        /// Dotted key
        key: String,
    },

    /// Set a value by dotted key in the config file
    Set {
        /// Dotted key
        key: String,
        /// New value
        value: String,
    },

    /// Create a default config file
    Init {
        /// Target file (defaults to the platform config path)
        #[arg(long)]
        file: Option<String>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print the overridable settings as environment variables
    Export {
        /// Format as docker --env flags
        #[arg(long)]
        docker_env: bool,
    },
}
