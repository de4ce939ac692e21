use serde::{Deserialize, Serialize};

/// Mean Earth radius used by the Haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A WGS-84 coordinate pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

/// Great-circle distance between two points, in kilometres.
pub fn haversine_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_point_is_zero_distance() {
        let p = GeoPoint::new(23.8103, 90.4125);
        assert!(haversine_km(p, p).abs() < 1e-9);
    }

    #[test]
    fn one_degree_of_longitude_on_equator() {
        let d = haversine_km(GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 1.0));
        assert!((d - 111.195).abs() < 0.01, "got {d}");
    }

    #[test]
    fn distance_is_symmetric() {
        let gulshan = GeoPoint::new(23.7925, 90.4078);
        let motijheel = GeoPoint::new(23.7330, 90.4172);
        let there = haversine_km(gulshan, motijheel);
        let back = haversine_km(motijheel, gulshan);
        assert!((there - back).abs() < 1e-9);
        assert!(there > 6.0 && there < 7.0, "got {there}");
    }

    #[test]
    fn validity_checks_ranges() {
        assert!(GeoPoint::new(45.0, -120.0).is_valid());
        assert!(!GeoPoint::new(91.0, 0.0).is_valid());
        assert!(!GeoPoint::new(0.0, 181.0).is_valid());
        assert!(!GeoPoint::new(f64::NAN, 0.0).is_valid());
    }
}
