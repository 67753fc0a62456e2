//! log macro's for reward calculator logging

/// Writes a debug! message to the app::calculator logger
#[macro_export]
macro_rules! calc_debug {
    ($($arg:tt)+) => {
        log::debug!(target: "app::calculator", $($arg)+)
    };
}

/// Writes an info! message to the app::calculator logger
#[macro_export]
macro_rules! calc_info {
    ($($arg:tt)+) => {
        log::info!(target: "app::calculator", $($arg)+)
    };
}

/// Writes an warn! message to the app::calculator logger
#[macro_export]
macro_rules! calc_warn {
    ($($arg:tt)+) => {
        log::warn!(target: "app::calculator", $($arg)+)
    };
}
