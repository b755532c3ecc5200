// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Logging initialization.
//!
//! The crate itself only emits through the `log` facade. These helpers
//! install `env_logger` for binaries and tests that do not bring their own.

use log::LevelFilter;

/// Initialize console logging at `level`.
///
/// Returns `false` if a logger was already installed.
pub fn init_logging(level: LevelFilter) -> bool {
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp_millis()
        .try_init()
        .is_ok()
}

/// Initialize console logging from `RUST_LOG`, falling back to `default_level`.
///
/// Returns `false` if a logger was already installed.
pub fn init_logging_env(default_level: LevelFilter) -> bool {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(default_level.to_string()),
    )
    .format_timestamp_millis()
    .try_init()
    .is_ok()
}

/// Initialize console logging with a filter string (e.g. `"fixgen=trace"`).
pub fn init_logging_with_filter(filter: &str) -> bool {
    env_logger::Builder::new()
        .parse_filters(filter)
        .format_timestamp_millis()
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_reports_already_installed() {
        let _ = init_logging(LevelFilter::Warn);
        assert!(!init_logging_env(LevelFilter::Info));
        assert!(!init_logging_with_filter("fixgen=debug"));
    }
}
