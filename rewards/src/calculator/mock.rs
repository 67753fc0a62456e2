//! A number of methods to generate random coordinates for testing.

use super::Coordinate;
use geo::{HaversineDestination, Point};
use rand::Rng;

/// Generate a random coordinate anywhere on earth.
pub fn generate_coordinate() -> Coordinate {
    let mut rng = rand::thread_rng();
    let latitude = rng.gen_range(-90.0..=90.0);
    let longitude = rng.gen_range(-180.0..=180.0);

    // ranges above are always valid
    Coordinate::new(latitude, longitude)
        .unwrap_or_else(|e| panic!("(generate_coordinate) generated invalid coordinate: {e}"))
}

/// Generate a vector of random coordinates.
pub fn generate_coordinates(capacity: usize) -> Vec<Coordinate> {
    (0..capacity).map(|_| generate_coordinate()).collect()
}

/// Generate a random coordinate within `radius_km` of `center`.
///
/// Picks a random bearing and distance and walks from `center` along the
/// great circle, so the result is never further than `radius_km` away.
pub fn generate_coordinate_near(center: &Coordinate, radius_km: f64) -> Coordinate {
    let mut rng = rand::thread_rng();
    let bearing = rng.gen_range(0.0..360.0);
    let distance_m = rng.gen_range(0.0..=radius_km) * 1000.0;

    let origin: Point = (*center).into();
    let destination = origin.haversine_destination(bearing, distance_m);

    let latitude = destination.y().clamp(-90.0, 90.0);
    let longitude = (destination.x() + 540.0).rem_euclid(360.0) - 180.0;

    Coordinate::new(latitude, longitude).unwrap_or_else(|e| {
        panic!("(generate_coordinate_near) generated invalid coordinate: {e}")
    })
}
