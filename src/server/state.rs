//! Server shared state
//!
//! Holds the gazetteer and ranking options for the HTTP server.

use crate::config::Config;
use crate::gazetteer::Gazetteer;
use crate::suggest::RankingOptions;
use std::sync::Arc;

/// Shared state for the HTTP server
///
/// Read-only after startup, so handlers share it without locking.
pub struct AppState {
    /// City data
    pub gazetteer: Arc<Gazetteer>,

    /// Ranking parameters
    pub options: RankingOptions,
}

impl AppState {
    /// Create new application state
    pub fn new(gazetteer: Gazetteer, options: RankingOptions) -> Self {
        Self {
            gazetteer: Arc::new(gazetteer),
            options,
        }
    }

    /// Create state from configuration and an already-loaded gazetteer
    pub fn from_config(config: &Config, gazetteer: Gazetteer) -> Self {
        Self::new(gazetteer, config.ranking.options())
    }
}
