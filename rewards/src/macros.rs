//! log macro's for profile, goal and leaderboard logging

/// Writes a debug! message to the app::profile logger
#[macro_export]
macro_rules! profile_debug {
    ($($arg:tt)+) => {
        log::debug!(target: "app::profile", $($arg)+)
    };
}

/// Writes an info! message to the app::profile logger
#[macro_export]
macro_rules! profile_info {
    ($($arg:tt)+) => {
        log::info!(target: "app::profile", $($arg)+)
    };
}

/// Writes an warn! message to the app::profile logger
#[macro_export]
macro_rules! profile_warn {
    ($($arg:tt)+) => {
        log::warn!(target: "app::profile", $($arg)+)
    };
}
