//! Struct definitions and implementations for [`Coordinate`].
//!
//! A [`Coordinate`] can only be built from a finite latitude within
//! [-90, 90] and a finite longitude within [-180, 180]. Deserialization
//! goes through the same checks, so every `Coordinate` in the program is
//! a valid input to [`distance_km`](super::haversine::distance_km).

use super::RewardError;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// A geographic position in degrees (WGS84).
///
/// Typically created from a geocoding result or a device location
/// sensor, and consumed by a single distance computation.
#[derive(Debug, PartialEq, Hash, Eq, Copy, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawCoordinate")]
pub struct Coordinate {
    latitude: OrderedFloat<f64>,
    longitude: OrderedFloat<f64>,
}

/// Unchecked wire shape of a [`Coordinate`].
#[derive(Deserialize)]
struct RawCoordinate {
    latitude: f64,
    longitude: f64,
}

impl TryFrom<RawCoordinate> for Coordinate {
    type Error = RewardError;

    fn try_from(raw: RawCoordinate) -> Result<Self, Self::Error> {
        Coordinate::new(raw.latitude, raw.longitude)
    }
}

impl Coordinate {
    /// Creates a new coordinate from latitude and longitude in degrees.
    ///
    /// # Errors
    /// [`RewardError::InvalidInput`] if either value is NaN or infinite,
    /// or lies outside its valid range.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, RewardError> {
        if !latitude.is_finite() {
            calc_warn!("(new) latitude is not finite: {}", latitude);
            return Err(RewardError::InvalidInput("latitude must be finite"));
        }

        if !longitude.is_finite() {
            calc_warn!("(new) longitude is not finite: {}", longitude);
            return Err(RewardError::InvalidInput("longitude must be finite"));
        }

        if !(-90.0..=90.0).contains(&latitude) {
            calc_warn!("(new) latitude out of range: {}", latitude);
            return Err(RewardError::InvalidInput(
                "latitude must be within [-90, 90]",
            ));
        }

        if !(-180.0..=180.0).contains(&longitude) {
            calc_warn!("(new) longitude out of range: {}", longitude);
            return Err(RewardError::InvalidInput(
                "longitude must be within [-180, 180]",
            ));
        }

        Ok(Self {
            latitude: OrderedFloat(latitude),
            longitude: OrderedFloat(longitude),
        })
    }

    /// Latitude in degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude.into_inner()
    }

    /// Longitude in degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude.into_inner()
    }

    /// Whether this is (0, 0), the value geocoders and sensors tend to
    /// return when they failed to resolve a place. Callers should treat it
    /// as an unresolved location.
    pub fn is_null_island(&self) -> bool {
        self.latitude() == 0.0 && self.longitude() == 0.0
    }
}

impl std::str::FromStr for Coordinate {
    type Err = RewardError;

    /// Parses `"LAT,LON"`, e.g. `"51.5074,-0.1278"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((latitude, longitude)) = s.split_once(',') else {
            return Err(RewardError::InvalidInput(
                "coordinate must be formatted as LAT,LON",
            ));
        };

        let latitude: f64 = latitude
            .trim()
            .parse()
            .map_err(|_| RewardError::InvalidInput("latitude is not a number"))?;
        let longitude: f64 = longitude
            .trim()
            .parse()
            .map_err(|_| RewardError::InvalidInput("longitude is not a number"))?;

        Coordinate::new(latitude, longitude)
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{},{}", self.latitude(), self.longitude())
    }
}

impl From<Coordinate> for geo::Point {
    fn from(coordinate: Coordinate) -> Self {
        geo::Point::new(coordinate.longitude(), coordinate.latitude())
    }
}
