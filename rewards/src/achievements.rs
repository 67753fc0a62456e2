//! Definition for the [`Achievement`] badges, implemented by an enum.
use crate::profile::UserProfile;
use serde::{Deserialize, Serialize};

/// A badge unlocked by reaching a lifetime total.
#[derive(Debug, PartialEq, Hash, Eq, Copy, Clone, Serialize, Deserialize)]
pub enum Achievement {
    /// Logged at least one trip.
    FirstJourney,
    /// Earned at least 100 points.
    FirstHundredPoints,
    /// Logged at least 5 trips.
    FiveGreenTrips,
    /// Saved at least 10 kg CO2.
    EcoWarrior,
    /// Saved at least 100 kg CO2.
    TreeSaver,
}

impl Achievement {
    /// All achievements, in display order.
    pub const ALL: [Achievement; 5] = [
        Achievement::FirstJourney,
        Achievement::FirstHundredPoints,
        Achievement::FiveGreenTrips,
        Achievement::EcoWarrior,
        Achievement::TreeSaver,
    ];

    /// Badge title.
    pub fn title(&self) -> &'static str {
        match self {
            Achievement::FirstJourney => "First Journey",
            Achievement::FirstHundredPoints => "First 100 Points",
            Achievement::FiveGreenTrips => "5 Green Trips",
            Achievement::EcoWarrior => "Eco Warrior",
            Achievement::TreeSaver => "Tree Saver",
        }
    }

    /// What it takes to unlock the badge.
    pub fn description(&self) -> &'static str {
        match self {
            Achievement::FirstJourney => "Complete your first eco journey",
            Achievement::FirstHundredPoints => "Earn 100 points",
            Achievement::FiveGreenTrips => "Log 5 sustainable trips",
            Achievement::EcoWarrior => "Save 10kg CO₂",
            Achievement::TreeSaver => "Save 100kg CO₂",
        }
    }

    /// Whether `profile` has unlocked this badge.
    pub fn is_earned_by(&self, profile: &UserProfile) -> bool {
        match self {
            Achievement::FirstJourney => profile.trips_logged >= 1,
            Achievement::FirstHundredPoints => profile.points >= 100,
            Achievement::FiveGreenTrips => profile.trips_logged >= 5,
            Achievement::EcoWarrior => profile.total_carbon_saved_kg >= 10.0,
            Achievement::TreeSaver => profile.total_carbon_saved_kg >= 100.0,
        }
    }

    /// Every badge `profile` has unlocked, in display order.
    pub fn earned(profile: &UserProfile) -> Vec<Achievement> {
        Achievement::ALL
            .into_iter()
            .filter(|achievement| achievement.is_earned_by(profile))
            .collect()
    }
}

impl std::fmt::Display for Achievement {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.title())
    }
}
