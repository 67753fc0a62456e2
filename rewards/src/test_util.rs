//! test utilities. Provides log macros for unit tests.

/// Writes an info! message to the test::ut logger
#[macro_export]
macro_rules! ut_info {
    ($($arg:tt)+) => {
        log::info!(target: "test::ut", $($arg)+)
    };
}
