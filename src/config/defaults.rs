use std::time::Duration;

use crate::analysis::DEFAULT_SIMULATED_DELAY;

/// Longest simulated delay accepted from the config file.
pub(super) const MAX_SIMULATED_DELAY_MS: u64 = 60_000;
/// Shortest timeout accepted from the config file.
pub(super) const MIN_TIMEOUT_MS: u64 = 100;

pub(super) fn default_true() -> bool {
    true
}

pub(super) fn default_simulated_delay_ms() -> u64 {
    DEFAULT_SIMULATED_DELAY.as_millis() as u64
}

pub(super) fn default_timeout_ms() -> u64 {
    Duration::from_secs(30).as_millis() as u64
}

pub(super) fn clamp_simulated_delay_ms(value: u64) -> u64 {
    value.min(MAX_SIMULATED_DELAY_MS)
}

/// `0` disables the timeout and is kept as-is.
pub(super) fn clamp_timeout_ms(value: u64) -> u64 {
    if value == 0 { 0 } else { value.max(MIN_TIMEOUT_MS) }
}
