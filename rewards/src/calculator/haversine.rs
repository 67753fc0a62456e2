//! Implementation of the Haversine formula for calculating the distance
//! between two points on a sphere.
//!
//! See [Wikipedia](https://en.wikipedia.org/wiki/Haversine_formula) for
//! more.
//!
//! **Distance is returned in kilometers**.

use super::{Coordinate, RewardError, EARTH_RADIUS_KM};

/// Calculate the great-circle distance between two coordinates.
///
/// # Notes
/// The formula treats the earth as a sphere of radius
/// [`EARTH_RADIUS_KM`]; altitude is not taken into account.
///
/// The result is symmetric, `0.0` for identical coordinates, and never
/// exceeds half the circumference (`π · R`).
pub fn distance_km(start: &Coordinate, end: &Coordinate) -> f64 {
    let d_lat = (end.latitude() - start.latitude()).to_radians();
    let d_lon = (end.longitude() - start.longitude()).to_radians();
    let lat1 = start.latitude().to_radians();
    let lat2 = end.latitude().to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);

    // rounding can push h a hair outside [0, 1] for near-antipodal points
    let h = h.clamp(0.0, 1.0);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

/// Validate raw latitude/longitude pairs and calculate the distance
/// between them.
///
/// # Errors
/// [`RewardError::InvalidInput`] if any value is non-finite or out of
/// range.
pub fn distance_between(
    start_latitude: f64,
    start_longitude: f64,
    end_latitude: f64,
    end_longitude: f64,
) -> Result<f64, RewardError> {
    let start = Coordinate::new(start_latitude, start_longitude)?;
    let end = Coordinate::new(end_latitude, end_longitude)?;

    let distance = distance_km(&start, &end);
    calc_debug!(
        "(distance_between) {} -> {} = {} km.",
        start,
        end,
        distance
    );

    Ok(distance)
}
