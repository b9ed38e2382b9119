//! Great-circle distance
//!
//! Haversine distance on a spherical Earth.

use crate::constants::geo::EARTH_RADIUS_KM;
use crate::coord::Coordinates;

/// Calculate the distance between two points in kilometers (Haversine formula)
///
/// # Arguments
/// * `p1` - First point
/// * `p2` - Second point
///
/// # Returns
/// Distance in kilometers
pub fn haversine_distance_km(p1: Coordinates, p2: Coordinates) -> f64 {
    let lat1 = p1.lat.to_radians();
    let lat2 = p2.lat.to_radians();
    let delta_lat = lat2 - lat1;
    let delta_lng = p2.lng.to_radians() - p1.lng.to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_same_point_is_zero() {
        let toronto = Coordinates::new(43.7, -79.4);
        assert_eq!(haversine_distance_km(toronto, toronto), 0.0);
    }

    #[test]
    fn test_one_degree_latitude() {
        let a = Coordinates::new(40.0, -74.0);
        let b = Coordinates::new(41.0, -74.0);

        // 1 degree of arc = 6371 * pi / 180
        assert_relative_eq!(haversine_distance_km(a, b), 111.19, epsilon = 0.01);
    }

    #[test]
    fn test_symmetric() {
        let toronto = Coordinates::new(43.7, -79.4);
        let tokyo = Coordinates::new(35.7, 139.7);
        assert_relative_eq!(
            haversine_distance_km(toronto, tokyo),
            haversine_distance_km(tokyo, toronto),
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_antipodal_is_half_circumference() {
        let a = Coordinates::new(0.0, 0.0);
        let b = Coordinates::new(0.0, 180.0);
        assert_relative_eq!(
            haversine_distance_km(a, b),
            std::f64::consts::PI * EARTH_RADIUS_KM,
            epsilon = 1e-6
        );
    }
}
