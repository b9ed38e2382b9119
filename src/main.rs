//! city-suggest CLI entry point
//!
//! City name autocomplete - CLI + web service

use city_suggest::cli;

#[tokio::main]
async fn main() {
    if let Err(e) = cli::run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
