//! Scoring functions
//!
//! Each sub-score lies in [0, 1]. The composite score is their weighted sum.

use crate::constants::geo::MAX_DISTANCE_KM;
use crate::coord::distance::haversine_distance_km;
use crate::coord::Coordinates;

/// Weights applied to the sub-scores
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weights {
    pub name: f64,
    pub location: f64,
}

impl Default for Weights {
    fn default() -> Self {
        use crate::constants::ranking::{WEIGHT_LOCATION, WEIGHT_NAME};
        Self {
            name: WEIGHT_NAME,
            location: WEIGHT_LOCATION,
        }
    }
}

/// Name similarity: shared leading characters over the name length
///
/// Both strings are lower-cased. Counting stops at the first differing
/// character or when either string runs out. An empty name scores 0.
pub fn name_score(query: &str, name: &str) -> f64 {
    let query = query.to_lowercase();
    let name = name.to_lowercase();

    let name_len = name.chars().count();
    if name_len == 0 {
        return 0.0;
    }

    let shared = query
        .chars()
        .zip(name.chars())
        .take_while(|(q, n)| q == n)
        .count();

    shared as f64 / name_len as f64
}

/// Proximity: 1 at the origin, falling linearly with great-circle distance
///
/// The distance is normalized by the Earth's diameter and the result is
/// clamped to [0, 1]. Non-finite input scores 0.
pub fn location_score(dest: Coordinates, origin: Coordinates) -> f64 {
    let distance = haversine_distance_km(dest, origin);
    if !distance.is_finite() {
        return 0.0;
    }

    (1.0 - distance / MAX_DISTANCE_KM).clamp(0.0, 1.0)
}

/// Weighted sum of name and location scores
pub fn composite_score(
    query: &str,
    name: &str,
    dest: Coordinates,
    origin: Coordinates,
    weights: Weights,
) -> f64 {
    weights.name * name_score(query, name) + weights.location * location_score(dest, origin)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_name_score_prefix() {
        assert_relative_eq!(name_score("To", "Toronto"), 2.0 / 7.0);
        assert_relative_eq!(name_score("to", "TOKYO"), 2.0 / 5.0);
        assert_relative_eq!(name_score("toronto", "Toronto"), 1.0);
    }

    #[test]
    fn test_name_score_empty_query() {
        assert_eq!(name_score("", "Toronto"), 0.0);
    }

    #[test]
    fn test_name_score_empty_name() {
        assert_eq!(name_score("abc", ""), 0.0);
        assert_eq!(name_score("", ""), 0.0);
    }

    #[test]
    fn test_name_score_stops_at_mismatch() {
        assert_relative_eq!(name_score("tox", "Toronto"), 2.0 / 7.0);
        assert_eq!(name_score("x", "Toronto"), 0.0);
    }

    #[test]
    fn test_name_score_query_longer_than_name() {
        assert_relative_eq!(name_score("Romeville", "Rome"), 1.0);
    }

    #[test]
    fn test_name_score_counts_characters() {
        assert_relative_eq!(name_score("mont", "Montréal"), 4.0 / 8.0);
        assert_relative_eq!(name_score("montré", "MONTRÉAL"), 6.0 / 8.0);
    }

    #[test]
    fn test_name_score_monotonic_in_shared_prefix() {
        let name = "Saskatoon";
        let mut last = 0.0;
        for end in 0..=name.len() {
            let score = name_score(&name[..end], name);
            assert!(score >= last, "score dropped at prefix length {}", end);
            last = score;
        }
        assert_relative_eq!(last, 1.0);
    }

    #[test]
    fn test_location_score_identity() {
        let toronto = Coordinates::new(43.7, -79.4);
        assert_eq!(location_score(toronto, toronto), 1.0);
    }

    #[test]
    fn test_location_score_decreases_with_distance() {
        let origin = Coordinates::new(0.0, 0.0);
        let mut last = location_score(origin, origin);

        // Scores reach zero at 2 radians of arc (~114.6 degrees)
        for step in 1..=11 {
            let dest = Coordinates::new(0.0, step as f64 * 10.0);
            let score = location_score(dest, origin);
            assert!(score < last, "score did not decrease at {} degrees", step * 10);
            last = score;
        }

        // From 2 radians out to half the circumference the clamp holds it at 0
        for degrees in [120.0, 150.0, 180.0] {
            let dest = Coordinates::new(0.0, degrees);
            assert_eq!(location_score(dest, origin), 0.0, "at {} degrees", degrees);
        }
    }

    #[test]
    fn test_location_score_antipode() {
        // Half the circumference over the diameter: 1 - pi/2 clamps to 0
        let a = Coordinates::new(0.0, 0.0);
        let b = Coordinates::new(0.0, 180.0);
        assert_eq!(location_score(a, b), 0.0);
    }

    #[test]
    fn test_location_score_nan() {
        let nan = Coordinates::new(f64::NAN, 0.0);
        assert_eq!(location_score(nan, Coordinates::ORIGIN), 0.0);
    }

    #[test]
    fn test_composite_score_in_unit_range() {
        let weights = Weights::default();
        let points = [
            Coordinates::new(43.7, -79.4),
            Coordinates::new(35.7, 139.7),
            Coordinates::new(-33.9, 151.2),
            Coordinates::new(0.0, 180.0),
        ];
        let names = ["Toronto", "Tokyo", "Sydney", "", "T"];

        for dest in points {
            for origin in points {
                for name in names {
                    let score = composite_score("t", name, dest, origin, weights);
                    assert!((0.0..=1.0).contains(&score), "score {} out of range", score);
                }
            }
        }
    }

    #[test]
    fn test_composite_score_weights() {
        let here = Coordinates::new(43.7, -79.4);
        let weights = Weights {
            name: 1.0,
            location: 0.0,
        };
        assert_relative_eq!(composite_score("To", "Toronto", here, here, weights), 2.0 / 7.0);

        let weights = Weights {
            name: 0.0,
            location: 1.0,
        };
        assert_relative_eq!(composite_score("To", "Toronto", here, here, weights), 1.0);
    }
}
