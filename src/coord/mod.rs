//! Geographic coordinates
//!
//! This module handles:
//! - Parsing and validating latitude/longitude pairs
//! - Great-circle distance between two points

pub mod distance;

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// A geographic coordinate (latitude, longitude) in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    /// Sentinel origin used when a caller supplies no location
    pub const ORIGIN: Coordinates = Coordinates { lat: 0.0, lng: 0.0 };

    /// Create new coordinates
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Parse coordinates from their textual form and validate them
    pub fn parse(lat: &str, lng: &str) -> Result<Self> {
        let coords = Self::new(parse_degrees("latitude", lat)?, parse_degrees("longitude", lng)?);
        coords.validate()?;
        Ok(coords)
    }

    /// Validate that coordinates are within valid ranges
    ///
    /// Latitude: -90 to 90
    /// Longitude: -180 to 180
    pub fn validate(&self) -> Result<()> {
        if !(-90.0..=90.0).contains(&self.lat) {
            return Err(Error::MalformedCoordinate(format!(
                "Latitude {} is out of range [-90, 90]",
                self.lat
            )));
        }
        if !(-180.0..=180.0).contains(&self.lng) {
            return Err(Error::MalformedCoordinate(format!(
                "Longitude {} is out of range [-180, 180]",
                self.lng
            )));
        }
        Ok(())
    }
}

/// Parse a single angle in decimal degrees
///
/// NaN and infinities are rejected so they never reach the distance math.
fn parse_degrees(label: &str, text: &str) -> Result<f64> {
    let value: f64 = text.trim().parse().map_err(|_| {
        Error::MalformedCoordinate(format!("{} '{}' is not a number", label, text))
    })?;

    if !value.is_finite() {
        return Err(Error::MalformedCoordinate(format!(
            "{} '{}' is not a finite number",
            label, text
        )));
    }

    Ok(value)
}

/// Resolve the caller-supplied origin
///
/// Both parts must be present for an origin to be used. A lone latitude or
/// longitude is ignored, as are empty strings. When both are present they
/// must parse to a valid coordinate.
pub fn parse_origin(lat: Option<&str>, lng: Option<&str>) -> Result<Option<Coordinates>> {
    let lat = lat.filter(|s| !s.is_empty());
    let lng = lng.filter(|s| !s.is_empty());

    match (lat, lng) {
        (Some(lat), Some(lng)) => Coordinates::parse(lat, lng).map(Some),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let coords = Coordinates::parse("43.70011", "-79.4163").unwrap();
        assert_eq!(coords, Coordinates::new(43.70011, -79.4163));
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let coords = Coordinates::parse(" 35.7 ", "139.7\n").unwrap();
        assert_eq!(coords, Coordinates::new(35.7, 139.7));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            Coordinates::parse("north", "10"),
            Err(Error::MalformedCoordinate(_))
        ));
        assert!(matches!(
            Coordinates::parse("10", ""),
            Err(Error::MalformedCoordinate(_))
        ));
    }

    #[test]
    fn test_parse_rejects_non_finite() {
        assert!(Coordinates::parse("NaN", "0").is_err());
        assert!(Coordinates::parse("0", "inf").is_err());
    }

    #[test]
    fn test_validate_ranges() {
        assert!(Coordinates::new(90.0, 180.0).validate().is_ok());
        assert!(Coordinates::new(-90.0, -180.0).validate().is_ok());
        assert!(Coordinates::new(90.5, 0.0).validate().is_err());
        assert!(Coordinates::new(0.0, -180.5).validate().is_err());
    }

    #[test]
    fn test_parse_origin_both_present() {
        let origin = parse_origin(Some("43.7"), Some("-79.4")).unwrap();
        assert_eq!(origin, Some(Coordinates::new(43.7, -79.4)));
    }

    #[test]
    fn test_parse_origin_absent_or_partial() {
        assert_eq!(parse_origin(None, None).unwrap(), None);
        assert_eq!(parse_origin(Some("43.7"), None).unwrap(), None);
        assert_eq!(parse_origin(None, Some("-79.4")).unwrap(), None);
        assert_eq!(parse_origin(Some(""), Some("")).unwrap(), None);
    }

    #[test]
    fn test_parse_origin_malformed() {
        let result = parse_origin(Some("abc"), Some("-79.4"));
        assert!(matches!(result, Err(Error::MalformedCoordinate(_))));
    }
}
