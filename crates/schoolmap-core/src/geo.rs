//! Great-circle distance and proximity ranking.
//!
//! Distances use the haversine formula on a sphere of radius 6371 km. The
//! formula is total over the full coordinate domain: `sqrt(1 - a)` is never
//! negative and `atan2` handles the antipodal boundary (`a = 1`) without a
//! division by zero.

use crate::school::{RankedSchool, School};
use serde::{Deserialize, Serialize};

/// Earth's radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A (latitude, longitude) pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
}

impl Coordinate {
    /// Creates a coordinate from degrees.
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Computes the haversine great-circle distance between two points, in
/// kilometers.
///
/// Identical points yield exactly 0; antipodal points yield approximately
/// `PI * 6371` km. Callers are responsible for supplying finite coordinates;
/// the validation gates guarantee that for request-derived input.
#[must_use]
pub fn haversine_km(from: Coordinate, to: Coordinate) -> f64 {
    let lat1 = from.latitude.to_radians();
    let lat2 = to.latitude.to_radians();
    let d_lat = (to.latitude - from.latitude).to_radians();
    let d_lon = (to.longitude - from.longitude).to_radians();

    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Ranks schools by ascending distance from the reference coordinate.
///
/// The output is a permutation of the input with each element annotated with
/// its computed distance; nothing is filtered or deduplicated. The sort is
/// stable, so equal distances keep store-fetch order.
#[must_use]
pub fn rank_by_distance(origin: Coordinate, schools: Vec<School>) -> Vec<RankedSchool> {
    let mut ranked: Vec<RankedSchool> = schools
        .into_iter()
        .map(|school| {
            let dist = haversine_km(origin, school.coordinate());
            RankedSchool { school, dist }
        })
        .collect();

    ranked.sort_by(|a, b| a.dist.total_cmp(&b.dist));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn school(id: i64, latitude: f64, longitude: f64) -> School {
        School {
            id,
            name: format!("School {id}"),
            address: format!("{id} Main St"),
            latitude,
            longitude,
        }
    }

    #[test]
    fn identity_distance_is_zero() {
        let point = Coordinate::new(45.0, -122.0);
        assert!(haversine_km(point, point).abs() < 1e-9);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = Coordinate::new(43.6, 1.4);
        let b = Coordinate::new(49.0, 2.5);
        let ab = haversine_km(a, b);
        let ba = haversine_km(b, a);
        assert!((ab - ba).abs() < 1e-9);
    }

    #[test]
    fn one_degree_of_longitude_at_equator() {
        let dist = haversine_km(Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 1.0));
        assert!((dist - 111.19).abs() < 1.0, "expected ~111.19 km, got {dist}");
    }

    #[test]
    fn antipodal_points_span_half_the_circumference() {
        let dist = haversine_km(Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 180.0));
        let expected = std::f64::consts::PI * EARTH_RADIUS_KM;
        assert!((dist - expected).abs() < 1.0, "expected ~{expected}, got {dist}");
    }

    #[test]
    fn ranking_sorts_ascending() {
        let origin = Coordinate::new(0.0, 0.0);
        let schools = vec![school(1, 0.0, 10.0), school(2, 0.0, 1.0), school(3, 5.0, 5.0)];

        let ranked = rank_by_distance(origin, schools);

        assert_eq!(ranked.len(), 3);
        for pair in ranked.windows(2) {
            assert!(pair[0].dist <= pair[1].dist);
        }
        assert_eq!(ranked[0].school.id, 2);
    }

    #[test]
    fn ranking_is_a_permutation_of_the_input() {
        let origin = Coordinate::new(12.0, 77.0);
        let schools: Vec<School> = (1..=8).map(|i| school(i, i as f64 * 3.0, -i as f64)).collect();
        let mut input_ids: Vec<i64> = schools.iter().map(|s| s.id).collect();

        let ranked = rank_by_distance(origin, schools);
        let mut output_ids: Vec<i64> = ranked.iter().map(|r| r.school.id).collect();

        input_ids.sort_unstable();
        output_ids.sort_unstable();
        assert_eq!(input_ids, output_ids);
    }

    #[test]
    fn ties_keep_input_order() {
        // Two schools equidistant from the origin, east and west.
        let origin = Coordinate::new(0.0, 0.0);
        let schools = vec![school(10, 0.0, 2.0), school(20, 0.0, -2.0)];

        let ranked = rank_by_distance(origin, schools);

        assert!((ranked[0].dist - ranked[1].dist).abs() < 1e-9);
        assert_eq!(ranked[0].school.id, 10);
        assert_eq!(ranked[1].school.id, 20);
    }

    #[test]
    fn distances_are_non_negative() {
        let origin = Coordinate::new(-33.9, 151.2);
        let schools = vec![school(1, 51.5, -0.1), school(2, -33.9, 151.2), school(3, 90.0, 0.0)];

        for ranked in rank_by_distance(origin, schools) {
            assert!(ranked.dist >= 0.0);
        }
    }
}
