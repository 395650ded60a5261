//! Great-circle distance (Haversine).
//!
//! Straight-line distance over the Earth's surface. Ignores roads, but is pure
//! and always available.

use crate::stop::Stop;
use crate::traits::DistanceMatrixProvider;

/// Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Calculate haversine distance between two (lat, lng) points in kilometers.
///
/// Out-of-range coordinates are not rejected; they yield a finite but
/// geometrically meaningless value.
pub fn haversine_km(from: (f64, f64), to: (f64, f64)) -> f64 {
    let (lat1, lng1) = from;
    let (lat2, lng2) = to;

    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lng = (lng2 - lng1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Distance between two stops in kilometers.
pub fn distance(a: &Stop, b: &Stop) -> f64 {
    haversine_km(a.location(), b.location())
}

/// Total length of a route visited in the given order, in kilometers.
pub fn route_distance(route: &[Stop]) -> f64 {
    route.windows(2).map(|leg| distance(&leg[0], &leg[1])).sum()
}

/// Haversine-based distance matrix provider.
#[derive(Debug, Clone, Copy, Default)]
pub struct HaversineMatrix;

impl DistanceMatrixProvider for HaversineMatrix {
    fn matrix_for(&self, locations: &[(f64, f64)]) -> Vec<Vec<f64>> {
        let n = locations.len();
        let mut matrix = vec![vec![0.0; n]; n];

        for i in 0..n {
            for j in (i + 1)..n {
                let km = haversine_km(locations[i], locations[j]);
                matrix[i][j] = km;
                matrix[j][i] = km;
            }
        }

        matrix
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_haversine_same_point() {
        let dist = haversine_km((44.43, 26.10), (44.43, 26.10));
        assert_eq!(dist, 0.0, "Same point should have zero distance");
    }

    #[test]
    fn test_haversine_known_distance() {
        // Bucharest (44.43, 26.10) to Constanta (44.17, 28.63), roughly 203 km
        let dist = haversine_km((44.4268, 26.1025), (44.1733, 28.6383));
        assert!(
            dist > 195.0 && dist < 210.0,
            "Bucharest to Constanta should be ~203km, got {}",
            dist
        );
    }

    #[test]
    fn test_distance_is_symmetric() {
        let a = Stop::waypoint(44.42, 26.09);
        let b = Stop::waypoint(44.44, 26.12);
        let ab = distance(&a, &b);
        let ba = distance(&b, &a);
        assert!((ab - ba).abs() <= 1e-9 * ab.max(1.0));
    }

    #[test]
    fn test_out_of_range_coordinates_do_not_panic() {
        let dist = haversine_km((120.0, 400.0), (-95.0, -720.0));
        assert!(dist.is_finite());
        assert!(dist >= 0.0);
    }

    #[test]
    fn test_route_distance_sums_legs() {
        let route = vec![
            Stop::waypoint(44.42, 26.09),
            Stop::waypoint(44.43, 26.10),
            Stop::waypoint(44.44, 26.12),
        ];
        let expected = distance(&route[0], &route[1]) + distance(&route[1], &route[2]);
        assert!((route_distance(&route) - expected).abs() < 1e-12);
        assert_eq!(route_distance(&route[..1]), 0.0);
    }

    #[test]
    fn test_matrix_diagonal_is_zero_and_symmetric() {
        let locations = vec![(44.42, 26.09), (44.43, 26.11), (44.44, 26.12)];
        let matrix = HaversineMatrix.matrix_for(&locations);

        for i in 0..locations.len() {
            assert_eq!(matrix[i][i], 0.0, "Diagonal should be zero");
            for j in 0..locations.len() {
                assert_eq!(matrix[i][j], matrix[j][i], "Matrix should be symmetric");
            }
        }
    }
}
