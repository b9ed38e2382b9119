//! HTTP server for city-suggest
//!
//! Provides the REST API for city suggestions.

pub mod routes;
pub mod state;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::gazetteer::Gazetteer;
use routes::create_router;
use state::AppState;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// Start the HTTP server
///
/// Loads the gazetteer named in `config`; a load failure is returned before
/// the listener is bound.
///
/// # Returns
/// Never returns unless the server shuts down
pub async fn run(config: Config) -> Result<()> {
    let gazetteer = Gazetteer::load(&config.data.path)?;
    info!("Gazetteer ready with {} cities", gazetteer.len());

    run_on(&config.server_addr(), &config, gazetteer).await
}

/// Start the HTTP server on a specific address with a given gazetteer
///
/// Useful for tests or when you want to override config
pub async fn run_on(addr: &str, config: &Config, gazetteer: Gazetteer) -> Result<()> {
    let addr: SocketAddr = addr
        .parse()
        .map_err(|e| Error::Server(format!("Invalid server address: {}", e)))?;

    let state = Arc::new(AppState::from_config(config, gazetteer));
    let app = create_router(state);

    info!("Starting server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| Error::Server(format!("Failed to bind to {}: {}", addr, e)))?;

    axum::serve(listener, app)
        .await
        .map_err(|e| Error::Server(format!("Server error: {}", e)))?;

    Ok(())
}
