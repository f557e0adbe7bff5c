use crate::map::models::GeoPoint;

/// Mean Earth radius, kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;
pub const MAX_SCORE: f64 = 100.0;
pub const DEFAULT_MAX_DISTANCE_KM: f64 = 1000.0;
/// Shinjuku station, where the marker starts.
pub const INITIAL_MARKER: GeoPoint = GeoPoint::new_unchecked(35.6905, 139.6995);
