//! Reward calculator
//!
//! Turns a pair of resolved coordinates into the distance travelled and the
//! rewards earned for that trip. Every function in this module is pure: no
//! shared state, no I/O, and the same inputs always produce the same output.

#[macro_use]
pub mod macros;
pub mod coordinate;
pub mod haversine;
pub mod reward;
pub mod trip;

#[cfg(feature = "mock")]
#[allow(dead_code)]
pub mod mock;

pub use coordinate::Coordinate;
pub use haversine::{distance_between, distance_km};
pub use reward::{compute_reward, TripComputation};
pub use trip::{plan_trip, TripError};

//-----------------------------------------------------
// Constants
//-----------------------------------------------------

/// Mean earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Points awarded per kilometer travelled.
pub const POINTS_PER_KM: f64 = 10.0;

/// kg CO2 saved per kilometer compared to driving.
pub const CARBON_KG_PER_KM: f64 = 0.12;

/// Monetary equivalent (USD) of one kg of CO2 saved.
pub const MONETARY_VALUE_PER_CARBON_KG: f64 = 2.5;

/// kg CO2 absorbed by one tree.
pub const CARBON_KG_PER_TREE: f64 = 22.0;

/// Reasons a calculation was refused
#[derive(Debug, PartialEq, Copy, Clone)]
pub enum RewardError {
    /// Input was non-finite, out of range, or negative where it must not be.
    InvalidInput(&'static str),
}

impl std::fmt::Display for RewardError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            RewardError::InvalidInput(reason) => write!(f, "Invalid input: {}", reason),
        }
    }
}

impl std::error::Error for RewardError {}

/// Largest distance (exclusive) whose points award fits in a `u64`.
pub const MAX_DISTANCE_KM: f64 = u64::MAX as f64 / POINTS_PER_KM;

/// Round to two decimal places, half away from zero.
pub(crate) fn round_2dp(value: f64) -> f64 {
    // at this magnitude an f64 has no fractional digits left
    if value.abs() >= 2f64.powi(52) / 100.0 {
        return value;
    }

    (value * 100.0).round() / 100.0
}
