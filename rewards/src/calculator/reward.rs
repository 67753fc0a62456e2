//! Conversion of a travelled distance into points, carbon savings and the
//! display metrics derived from them.

use super::{
    round_2dp, RewardError, CARBON_KG_PER_KM, CARBON_KG_PER_TREE, MAX_DISTANCE_KM,
    MONETARY_VALUE_PER_CARBON_KG, POINTS_PER_KM,
};
use serde::{Deserialize, Serialize};

/// Everything a single sustainable trip is worth.
///
/// Every field is a pure function of `distance_km` and the rate constants
/// in [`crate::calculator`]. The record is not persisted here; the caller
/// attaches it to its own trip record.
#[derive(Debug, PartialEq, Copy, Clone, Serialize, Deserialize)]
pub struct TripComputation {
    /// Great-circle distance travelled.
    pub distance_km: f64,

    /// `round(distance_km * 10)`.
    pub points_earned: u64,

    /// `distance_km * 0.12`, rounded to 2 decimal places.
    pub carbon_saved_kg: f64,

    /// Whole trees needed to absorb `carbon_saved_kg` (22 kg each).
    pub trees_equivalent: u64,

    /// `carbon_saved_kg * 2.5` USD, rounded to 2 decimal places.
    pub monetary_value: f64,
}

/// Compute the rewards for a trip of `distance_km` kilometers.
///
/// # Errors
/// [`RewardError::InvalidInput`] if the distance is negative, NaN,
/// infinite, or so large that its points award does not fit in a `u64`
/// (see [`MAX_DISTANCE_KM`]). The function never substitutes zero or a
/// saturated value for bad input.
pub fn compute_reward(distance_km: f64) -> Result<TripComputation, RewardError> {
    if !distance_km.is_finite() {
        calc_warn!("(compute_reward) distance is not finite: {}", distance_km);
        return Err(RewardError::InvalidInput("distance must be finite"));
    }

    if distance_km < 0.0 {
        calc_warn!("(compute_reward) distance is negative: {}", distance_km);
        return Err(RewardError::InvalidInput("distance must not be negative"));
    }

    if distance_km >= MAX_DISTANCE_KM {
        calc_warn!("(compute_reward) distance is too large: {}", distance_km);
        return Err(RewardError::InvalidInput(
            "distance is too large to award points for",
        ));
    }

    // -0.0 passes the check above, keep it out of the output
    let distance_km = distance_km.abs();

    let points_earned = (distance_km * POINTS_PER_KM).round() as u64;
    let carbon_saved_kg = round_2dp(distance_km * CARBON_KG_PER_KM);
    let trees_equivalent = (carbon_saved_kg / CARBON_KG_PER_TREE).floor() as u64;
    let monetary_value = round_2dp(carbon_saved_kg * MONETARY_VALUE_PER_CARBON_KG);

    calc_debug!(
        "(compute_reward) {} km -> {} points, {} kg CO2.",
        distance_km,
        points_earned,
        carbon_saved_kg
    );

    Ok(TripComputation {
        distance_km,
        points_earned,
        carbon_saved_kg,
        trees_equivalent,
        monetary_value,
    })
}
