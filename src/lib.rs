//! city-suggest: City Name Autocomplete
//!
//! A library and CLI tool that ranks cities from an in-memory gazetteer
//! against a name prefix and an optional origin.
//!
//! ## Features
//!
//! - Case-insensitive prefix filtering
//! - Composite scoring (name similarity + haversine proximity)
//! - Stable ranking with a configurable cap
//! - HTTP API + CLI interface
//! - TSV to JSON gazetteer conversion
//!
//! ## Quick Start
//!
//! ```rust
//! use city_suggest::gazetteer::{CityRecord, Gazetteer};
//! use city_suggest::suggest::{suggest, RankingOptions};
//! use city_suggest::Coordinates;
//!
//! let gazetteer = Gazetteer::from_records(vec![
//!     CityRecord::new("Toronto", "43.7", "-79.4").unwrap(),
//!     CityRecord::new("Tokyo", "35.7", "139.7").unwrap(),
//! ]);
//!
//! let origin = Some(Coordinates::new(43.7, -79.4));
//! let ranked = suggest(&gazetteer, "To", origin, &RankingOptions::default());
//! assert_eq!(ranked[0].name, "Toronto");
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod coord;
pub mod error;
pub mod format;
pub mod gazetteer;
pub mod server;
pub mod suggest;

// Re-export commonly used types
pub use config::Config;
pub use coord::Coordinates;
pub use error::{Error, Result};
pub use gazetteer::{CityRecord, Gazetteer};
pub use suggest::{RankingOptions, Suggestion, SuggestionsResponse};
