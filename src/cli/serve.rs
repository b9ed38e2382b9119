//! Serve command handler
//!
//! Loads the gazetteer and starts the HTTP server in foreground mode.

use crate::cli::{init_logging, load_config};
use crate::error::Result;
use crate::server;
use clap::Args;
use std::path::PathBuf;
use tracing::info;

/// Serve command arguments
#[derive(Args)]
pub struct ServeArgs {
    /// Host address to bind to
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(long, short = 'p')]
    pub port: Option<u16>,

    /// Gazetteer JSON file
    #[arg(long, short = 'd')]
    pub data: Option<PathBuf>,
}

/// Run the serve command
pub async fn run(args: ServeArgs, config_path: Option<PathBuf>) -> Result<()> {
    init_logging("info");

    // Load and optionally override config
    let mut config = load_config(config_path.as_ref())?;

    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(data) = args.data {
        config.data.path = data;
    }

    info!(
        "Starting city-suggest server v{} on {}",
        env!("CARGO_PKG_VERSION"),
        config.server_addr()
    );

    // Run the server
    server::run(config).await
}
