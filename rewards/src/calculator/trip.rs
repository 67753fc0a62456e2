//! Gate between location resolution and the reward calculation.
//!
//! A trip is only computed once both ends have been resolved to a real
//! coordinate. Unresolved ends are reported instead of being treated as a
//! zero-length trip.

use super::{compute_reward, distance_km, Coordinate, RewardError, TripComputation};

/// Reasons a trip could not be computed
#[derive(Debug, PartialEq, Copy, Clone)]
pub enum TripError {
    /// The start location could not be resolved to a coordinate.
    UnresolvedStart,

    /// The end location could not be resolved to a coordinate.
    UnresolvedEnd,

    /// The calculation itself rejected its input.
    Reward(RewardError),
}

impl std::fmt::Display for TripError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            TripError::UnresolvedStart => write!(f, "Start location could not be resolved"),
            TripError::UnresolvedEnd => write!(f, "End location could not be resolved"),
            TripError::Reward(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for TripError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TripError::Reward(e) => Some(e),
            _ => None,
        }
    }
}

impl From<RewardError> for TripError {
    fn from(error: RewardError) -> Self {
        TripError::Reward(error)
    }
}

/// Compute the rewards for a trip between two possibly unresolved
/// locations.
///
/// `None` and (0, 0) both count as unresolved: geocoders return the latter
/// when they fail, and a silent zero distance would hide that.
pub fn plan_trip(
    start: Option<Coordinate>,
    end: Option<Coordinate>,
) -> Result<TripComputation, TripError> {
    let Some(start) = start.filter(|c| !c.is_null_island()) else {
        calc_info!("(plan_trip) start location is unresolved.");
        return Err(TripError::UnresolvedStart);
    };

    let Some(end) = end.filter(|c| !c.is_null_island()) else {
        calc_info!("(plan_trip) end location is unresolved.");
        return Err(TripError::UnresolvedEnd);
    };

    let computation = compute_reward(distance_km(&start, &end))?;
    calc_info!(
        "(plan_trip) {} -> {}: {} km, {} points.",
        start,
        end,
        computation.distance_km,
        computation.points_earned
    );

    Ok(computation)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_trip() {
        let start = Coordinate::new(0.0, 1.0).ok();
        let end = Coordinate::new(0.0, 2.0).ok();

        let trip = plan_trip(start, end).unwrap();
        assert!((trip.distance_km - 111.19).abs() < 0.1);
        assert_eq!(trip.points_earned, 1112);
        assert_eq!(trip.carbon_saved_kg, 13.34);
    }

    #[test]
    fn test_plan_trip_unresolved() {
        let resolved = Coordinate::new(51.5074, -0.1278).ok();

        assert_eq!(plan_trip(None, resolved), Err(TripError::UnresolvedStart));
        assert_eq!(plan_trip(resolved, None), Err(TripError::UnresolvedEnd));
        assert_eq!(plan_trip(None, None), Err(TripError::UnresolvedStart));
    }

    #[test]
    fn test_plan_trip_null_island_is_unresolved() {
        let null_island = Coordinate::new(0.0, 0.0).ok();
        let resolved = Coordinate::new(51.5074, -0.1278).ok();

        assert_eq!(
            plan_trip(null_island, resolved),
            Err(TripError::UnresolvedStart)
        );
        assert_eq!(
            plan_trip(resolved, null_island),
            Err(TripError::UnresolvedEnd)
        );
    }

    #[test]
    fn test_trip_error_display() {
        assert_eq!(
            TripError::UnresolvedEnd.to_string(),
            "End location could not be resolved"
        );
        assert_eq!(
            TripError::from(RewardError::InvalidInput("distance must be finite")).to_string(),
            "Invalid input: distance must be finite"
        );
    }
}
