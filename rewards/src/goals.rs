//! Monthly goal tracking for points, CO2 savings and trip count.

use crate::profile::UserProfile;
use crate::Config;
use serde::{Deserialize, Serialize};

/// Monthly targets a user works towards.
#[derive(Debug, PartialEq, Copy, Clone, Serialize, Deserialize)]
pub struct MonthlyGoals {
    /// Points target.
    pub points: u64,

    /// CO2 savings target in kg.
    pub carbon_kg: f64,

    /// Number of trips target.
    pub trips: u32,
}

impl Default for MonthlyGoals {
    fn default() -> Self {
        Self {
            points: 1000,
            carbon_kg: 50.0,
            trips: 20,
        }
    }
}

impl From<&Config> for MonthlyGoals {
    fn from(config: &Config) -> Self {
        Self {
            points: config.monthly_points_goal,
            carbon_kg: config.monthly_carbon_goal_kg,
            trips: config.monthly_trips_goal,
        }
    }
}

/// Whole-number completion percentages for each goal.
///
/// Values are not capped, so a user past their target reports more than
/// 100.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Serialize, Deserialize)]
pub struct GoalProgress {
    /// Points goal completion.
    pub points_percent: u32,

    /// CO2 goal completion.
    pub carbon_percent: u32,

    /// Trips goal completion.
    pub trips_percent: u32,
}

impl GoalProgress {
    /// Whether every goal has been reached.
    pub fn all_complete(&self) -> bool {
        self.points_percent >= 100 && self.carbon_percent >= 100 && self.trips_percent >= 100
    }
}

/// `round(value / goal * 100)`; a goal of zero is always complete.
fn percent_of(value: f64, goal: f64) -> u32 {
    if !value.is_finite() {
        profile_warn!("(percent_of) progress value is not finite: {}", value);
        return 0;
    }

    if goal <= 0.0 {
        return 100;
    }

    // float to int casts saturate
    ((value / goal) * 100.0).round() as u32
}

impl MonthlyGoals {
    /// How far `profile` is towards each goal.
    pub fn progress(&self, profile: &UserProfile) -> GoalProgress {
        let progress = GoalProgress {
            points_percent: percent_of(profile.points as f64, self.points as f64),
            carbon_percent: percent_of(profile.total_carbon_saved_kg, self.carbon_kg),
            trips_percent: percent_of(profile.trips_logged as f64, self.trips as f64),
        };
        profile_debug!("(progress) {:?}", progress);
        progress
    }
}
