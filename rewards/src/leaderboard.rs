//! Leaderboard ranking.
//!
//! Entries come from the profile store unordered; [`rank`] orders them,
//! cuts the list to the configured size and adds what a leaderboard view
//! needs to render each row.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Stored totals for one user.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    /// User email, used as the identity of the row.
    pub email: String,

    /// Total points.
    pub points: u64,

    /// Total kg CO2 saved.
    pub total_carbon_saved_kg: f64,
}

/// Medal shown next to the top three rows.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Serialize, Deserialize)]
pub enum Podium {
    /// First place.
    Gold,
    /// Second place.
    Silver,
    /// Third place.
    Bronze,
}

/// A leaderboard row ready for display.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct RankedEntry {
    /// 1-based position.
    pub position: usize,

    /// The part of the email before `@`.
    pub display_name: String,

    /// Total points.
    pub points: u64,

    /// Total kg CO2 saved.
    pub total_carbon_saved_kg: f64,

    /// Whether this row belongs to the user viewing the board.
    pub is_current_user: bool,

    /// Medal, for the top three only.
    pub podium: Option<Podium>,
}

fn display_name(email: &str) -> String {
    email.split('@').next().unwrap_or(email).to_string()
}

fn podium(position: usize) -> Option<Podium> {
    match position {
        1 => Some(Podium::Gold),
        2 => Some(Podium::Silver),
        3 => Some(Podium::Bronze),
        _ => None,
    }
}

/// Points descending, then CO2 descending, then email ascending.
fn compare(a: &LeaderboardEntry, b: &LeaderboardEntry) -> Ordering {
    b.points
        .cmp(&a.points)
        .then_with(|| b.total_carbon_saved_kg.total_cmp(&a.total_carbon_saved_kg))
        .then_with(|| a.email.cmp(&b.email))
}

/// Order `entries` into a leaderboard of at most `limit` rows.
///
/// `current_email` marks the viewing user's row, if it made the cut.
pub fn rank(
    mut entries: Vec<LeaderboardEntry>,
    limit: usize,
    current_email: Option<&str>,
) -> Vec<RankedEntry> {
    profile_debug!(
        "(rank) ranking {} entries, limit {}.",
        entries.len(),
        limit
    );

    entries.sort_by(compare);
    entries
        .into_iter()
        .take(limit)
        .enumerate()
        .map(|(index, entry)| {
            let position = index + 1;
            RankedEntry {
                position,
                display_name: display_name(&entry.email),
                points: entry.points,
                total_carbon_saved_kg: entry.total_carbon_saved_kg,
                is_current_user: current_email == Some(entry.email.as_str()),
                podium: podium(position),
            }
        })
        .collect()
}
