use consts::{EARTH_RADIUS_KM, MAX_SCORE};
use models::GeoPoint;

pub mod consts;
pub mod models;

/// Great-circle distance between two points, in kilometers (Haversine).
pub fn distance_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let phi_1 = a.lat().to_radians();
    let phi_2 = b.lat().to_radians();
    let delta_phi = (b.lat() - a.lat()).to_radians();
    let delta_lambda = (b.lng() - a.lng()).to_radians();
    let h = (delta_phi / 2.0).sin().powi(2)
        + phi_1.cos() * phi_2.cos() * (delta_lambda / 2.0).sin().powi(2);
    // Rounding can push `h` slightly outside of [0, 1] near identical or antipodal points.
    let h = h.clamp(0.0, 1.0);
    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}

/// Maps a distance onto `[0, MAX_SCORE]`, reaching zero at `max_distance_km`.
pub fn score(distance_km: f64, max_distance_km: f64) -> f64 {
    (MAX_SCORE - (distance_km / max_distance_km) * MAX_SCORE).max(0.0)
}
