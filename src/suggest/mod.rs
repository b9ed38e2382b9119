//! Suggestion engine
//!
//! Ranks gazetteer entries against a query prefix:
//! - Filter by case-insensitive prefix
//! - Score each candidate (name similarity + proximity to the origin)
//! - Stable sort by descending score
//! - Truncate to the configured maximum

pub mod score;

use crate::constants::ranking::MAX_SUGGESTIONS;
use crate::coord::Coordinates;
use crate::gazetteer::{CityRecord, Gazetteer};
use score::{composite_score, Weights};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Ranking parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankingOptions {
    /// Maximum number of results; zero or negative disables the cap
    pub max_suggestions: i64,

    /// Sub-score weights
    pub weights: Weights,
}

impl Default for RankingOptions {
    fn default() -> Self {
        Self {
            max_suggestions: MAX_SUGGESTIONS,
            weights: Weights::default(),
        }
    }
}

impl RankingOptions {
    /// The effective cap, or None when truncation is disabled
    pub fn limit(&self) -> Option<usize> {
        usize::try_from(self.max_suggestions).ok().filter(|&n| n > 0)
    }
}

/// A ranked city
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub name: String,
    /// Latitude as it appears in the gazetteer
    pub latitude: String,
    /// Longitude as it appears in the gazetteer
    pub longitude: String,
    pub score: f64,
}

/// Wire format for a suggestion list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SuggestionsResponse {
    pub suggestions: Vec<Suggestion>,
}

impl From<Vec<Suggestion>> for SuggestionsResponse {
    fn from(suggestions: Vec<Suggestion>) -> Self {
        Self { suggestions }
    }
}

/// Check whether `name` starts with `query`, ignoring case
pub fn matches_prefix(query: &str, name: &str) -> bool {
    name.to_lowercase().starts_with(&query.to_lowercase())
}

/// Rank the gazetteer against a query
///
/// # Arguments
/// * `gazetteer` - Cities to search
/// * `query` - Name prefix; empty matches every city
/// * `origin` - Caller location; `None` scores against (0, 0)
/// * `options` - Result cap and score weights
///
/// # Returns
/// Suggestions ordered by descending score. Equal scores keep gazetteer
/// order.
pub fn suggest(
    gazetteer: &Gazetteer,
    query: &str,
    origin: Option<Coordinates>,
    options: &RankingOptions,
) -> Vec<Suggestion> {
    let origin = origin.unwrap_or(Coordinates::ORIGIN);

    let mut scored: Vec<(&CityRecord, f64)> = gazetteer
        .iter()
        .filter(|city| matches_prefix(query, &city.name))
        .map(|city| {
            let score = composite_score(query, &city.name, city.coords, origin, options.weights);
            (city, score)
        })
        .collect();

    let matched = scored.len();

    // sort_by is stable, so ties stay in gazetteer order
    scored.sort_by(|a, b| b.1.total_cmp(&a.1));

    if let Some(limit) = options.limit() {
        scored.truncate(limit);
    }

    debug!(query, matched, returned = scored.len(), "Ranked suggestions");

    scored
        .into_iter()
        .map(|(city, score)| Suggestion {
            name: city.name.clone(),
            latitude: city.lat.clone(),
            longitude: city.long.clone(),
            score,
        })
        .collect()
}
