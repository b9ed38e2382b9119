//! Status command handler
//!
//! Shows whether the configured gazetteer loads and whether a server is up.

use crate::cli::load_config;
use crate::config::Config;
use crate::error::Result;
use crate::gazetteer::Gazetteer;
use crate::server::routes::HealthResponse;
use clap::Args;
use std::path::PathBuf;

/// Status command arguments
#[derive(Args)]
pub struct StatusArgs {
    /// Check a specific gazetteer file instead of the configured one
    #[arg(long, short = 'd')]
    pub data: Option<PathBuf>,

    /// Check if server is running (tries to connect)
    #[arg(long)]
    pub server: bool,
}

/// Run the status command
pub async fn run(args: StatusArgs, config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config(config_path.as_ref())?;

    println!("city-suggest v{}", env!("CARGO_PKG_VERSION"));
    println!();

    let data_path = args.data.clone().unwrap_or_else(|| config.data.path.clone());
    println!("Data source: {}", data_path.display());
    match Gazetteer::load(&data_path) {
        Ok(gazetteer) => println!("  Cities: {}", gazetteer.len()),
        Err(e) => println!("  Error: {}", e),
    }
    println!();

    println!(
        "Ranking: max_suggestions = {}, weights = {} name / {} location",
        config.ranking.max_suggestions, config.ranking.weight_name, config.ranking.weight_location
    );

    if args.server {
        println!();
        check_server_status(&config).await;
    }

    Ok(())
}

/// Check if the server is running
async fn check_server_status(config: &Config) {
    match fetch_health(config).await {
        Ok(health) => {
            println!("Server: RUNNING on {}", config.server_addr());
            println!("  Version: {}", health.version);
            println!("  Cities: {}", health.cities);
        }
        Err(e) => {
            println!("Server: NOT RUNNING on {}", config.server_addr());
            println!("  {}", e);
        }
    }
}

/// Query the health endpoint of a running server
async fn fetch_health(config: &Config) -> Result<HealthResponse> {
    let url = format!("http://{}/health", config.server_addr());
    let health = reqwest::get(&url)
        .await?
        .error_for_status()?
        .json::<HealthResponse>()
        .await?;
    Ok(health)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[tokio::test]
    async fn test_fetch_health_reports_http_error() {
        // Bind then drop a listener so the port is known to be closed
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let mut config = Config::default();
        config.server.port = port;

        let result = fetch_health(&config).await;
        assert!(matches!(result, Err(Error::Http(_))));
    }
}
