//! Running reward totals for a single user.
//!
//! The profile is a plain value: recording a trip returns the new totals
//! and leaves persisting them to the caller.

use crate::calculator::{round_2dp, TripComputation};
use serde::{Deserialize, Serialize};

/// A user's accumulated rewards.
#[derive(Debug, Default, PartialEq, Copy, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    /// Total points earned across all trips.
    pub points: u64,

    /// Total kg CO2 saved across all trips, kept at 2 decimal places.
    pub total_carbon_saved_kg: f64,

    /// Number of trips logged.
    pub trips_logged: u32,
}

impl UserProfile {
    /// Creates a profile from previously stored totals.
    pub fn new(points: u64, total_carbon_saved_kg: f64, trips_logged: u32) -> Self {
        Self {
            points,
            total_carbon_saved_kg,
            trips_logged,
        }
    }

    /// Returns the totals after adding `trip` to this profile.
    pub fn record_trip(&self, trip: &TripComputation) -> UserProfile {
        let points = match self.points.checked_add(trip.points_earned) {
            Some(points) => points,
            None => {
                profile_warn!("(record_trip) points total saturated at u64::MAX.");
                u64::MAX
            }
        };

        let updated = UserProfile {
            points,
            total_carbon_saved_kg: round_2dp(self.total_carbon_saved_kg + trip.carbon_saved_kg),
            trips_logged: self.trips_logged.saturating_add(1),
        };

        profile_info!(
            "(record_trip) +{} points, +{} kg CO2; totals now {} points, {} kg CO2, {} trips.",
            trip.points_earned,
            trip.carbon_saved_kg,
            updated.points,
            updated.total_carbon_saved_kg,
            updated.trips_logged
        );

        updated
    }
}
