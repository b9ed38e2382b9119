//! CLI command handlers
//!
//! Each subcommand has its own module with handler functions.

pub mod config;
pub mod convert;
pub mod serve;
pub mod status;
pub mod suggest;

use crate::config::Config;
use crate::error::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// City name autocomplete
#[derive(Parser)]
#[command(name = "city-suggest")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Use this config file instead of the default location
    #[arg(long = "config", global = true, value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start web server (foreground)
    Serve(serve::ServeArgs),

    /// Rank cities for a query from the command line
    Suggest(suggest::SuggestArgs),

    /// Convert a TSV city dump to the JSON gazetteer format
    Convert(convert::ConvertArgs),

    /// Manage configuration
    Config(config::ConfigArgs),

    /// Show data source and server status
    Status(status::StatusArgs),
}

/// Run the CLI
pub async fn run() -> Result<()> {
    let cli = Cli::parse();
    let config_path = cli.config_file;

    match cli.command {
        Commands::Serve(args) => serve::run(args, config_path).await,
        Commands::Suggest(args) => suggest::run(args, config_path),
        Commands::Convert(args) => convert::run(args),
        Commands::Config(args) => config::run(args, config_path),
        Commands::Status(args) => status::run(args, config_path).await,
    }
}

/// Load configuration from an explicit path or the default location
pub fn load_config(path: Option<&PathBuf>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

/// Initialize logging to stderr
///
/// `RUST_LOG` overrides `default_level`.
pub fn init_logging(default_level: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .try_init();
}
