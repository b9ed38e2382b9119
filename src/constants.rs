//! Centralized constants for the city-suggest crate

/// Geographic constants
pub mod geo {
    /// Mean Earth radius in kilometers
    pub const EARTH_RADIUS_KM: f64 = 6371.0;

    /// Distance that maps to a location score of zero (the Earth's diameter)
    pub const MAX_DISTANCE_KM: f64 = 2.0 * EARTH_RADIUS_KM;
}

/// Ranking constants
pub mod ranking {
    /// Maximum number of suggestions returned per query
    pub const MAX_SUGGESTIONS: i64 = 20;

    /// Weight of the name-prefix score in the composite score
    pub const WEIGHT_NAME: f64 = 0.5;

    /// Weight of the proximity score in the composite score
    pub const WEIGHT_LOCATION: f64 = 0.5;
}
