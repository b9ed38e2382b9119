//! Suggest command handler
//!
//! Runs a single query against the gazetteer and prints the ranking.

use crate::cli::{init_logging, load_config};
use crate::coord::Coordinates;
use crate::error::{Error, Result};
use crate::format::{available_formats, get_formatter};
use crate::gazetteer::Gazetteer;
use crate::suggest::{suggest, SuggestionsResponse};
use clap::Args;
use std::path::PathBuf;

/// Suggest command arguments
#[derive(Args)]
pub struct SuggestArgs {
    /// Name prefix to search for
    pub query: Option<String>,

    /// Origin latitude
    #[arg(long, requires = "lng", allow_hyphen_values = true)]
    pub lat: Option<f64>,

    /// Origin longitude
    #[arg(long, requires = "lat", allow_hyphen_values = true)]
    pub lng: Option<f64>,

    /// Gazetteer JSON file
    #[arg(long, short = 'd')]
    pub data: Option<PathBuf>,

    /// Maximum number of suggestions (0 for unlimited)
    #[arg(long, short = 'n', allow_hyphen_values = true)]
    pub limit: Option<i64>,

    /// Output format
    #[arg(long, short = 'f', default_value = "text")]
    pub format: String,

    /// List available formats
    #[arg(short = 'F', long = "list-formats")]
    pub list_formats: bool,
}

/// Run the suggest command
pub fn run(args: SuggestArgs, config_path: Option<PathBuf>) -> Result<()> {
    if args.list_formats {
        list_formats();
        return Ok(());
    }

    init_logging("warn");

    let query = args.query.ok_or(Error::MissingQuery)?;

    let config = load_config(config_path.as_ref())?;

    let formatter = get_formatter(&args.format)
        .ok_or_else(|| Error::Config(format!("Unknown format: {}", args.format)))?;

    let origin = match (args.lat, args.lng) {
        (Some(lat), Some(lng)) => {
            let origin = Coordinates::new(lat, lng);
            origin.validate()?;
            Some(origin)
        }
        _ => None,
    };

    let mut options = config.ranking.options();
    if let Some(limit) = args.limit {
        options.max_suggestions = limit;
    }

    let data_path = args.data.unwrap_or(config.data.path);
    let gazetteer = Gazetteer::load(&data_path)?;

    let response = SuggestionsResponse::from(suggest(&gazetteer, &query, origin, &options));
    let output = formatter.format(&response)?;
    println!("{}", output.trim_end());

    Ok(())
}

/// Print available output formats
fn list_formats() {
    println!("Available output formats:");
    for format in available_formats() {
        println!("  {:6} - {}", format.name, format.description);
    }
}
