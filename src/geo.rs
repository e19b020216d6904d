use serde::{Deserialize, Serialize};

/// A WGS84 point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Fallback reference point when no device fix is available: Cebu City.
pub const DEFAULT_CENTER: Coordinate = Coordinate::new(10.3157, 123.8854);

const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Great-circle distance between two points, in meters (haversine).
pub fn distance_meters(a: Coordinate, b: Coordinate) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();
    let lat_a = a.lat.to_radians();
    let lat_b = b.lat.to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat_a.cos() * lat_b.cos() * (d_lng / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_M * h.sqrt().asin()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_distance_for_same_point() {
        let p = Coordinate::new(10.3157, 123.8854);
        assert_eq!(distance_meters(p, p), 0.0);
    }

    #[test]
    fn known_distance_within_city() {
        // Fuente Osmena Circle to Ayala Center Cebu is roughly 1.9 km.
        let fuente = Coordinate::new(10.3111, 123.8914);
        let ayala = Coordinate::new(10.3187, 123.9048);
        let d = distance_meters(fuente, ayala);
        assert!((1500.0..2500.0).contains(&d), "got {d}");
    }

    #[test]
    fn distance_is_symmetric() {
        let a = Coordinate::new(10.30, 123.88);
        let b = Coordinate::new(10.33, 123.91);
        let forward = distance_meters(a, b);
        let back = distance_meters(b, a);
        assert!((forward - back).abs() < 1e-6);
    }
}
