//! Simulation configuration: grid dimensions and frame pacing.
//!
//! Raw command-line values arrive as signed integers so that non-positive
//! input reaches [`SimConfig::sanitized`] instead of being rejected at the
//! parser; invalid values are corrected to their defaults with a logged
//! warning. The core constructors only ever see positive dimensions.

use std::time::Duration;

use log::warn;

/// Default number of grid rows.
pub const DEFAULT_ROWS: usize = 30;
/// Default number of grid columns.
pub const DEFAULT_COLS: usize = 60;
/// Default pause between generations, in milliseconds.
pub const DEFAULT_INTERVAL_MS: u64 = 100;

/// Validated simulation parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimConfig {
    /// Number of grid rows (always positive).
    pub rows: usize,
    /// Number of grid columns (always positive).
    pub cols: usize,
    /// Pause between generations (always non-zero).
    pub interval: Duration,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            interval: Duration::from_millis(DEFAULT_INTERVAL_MS),
        }
    }
}

impl SimConfig {
    /// Build a config from raw command-line values, replacing any
    /// non-positive value with its default and logging a warning.
    pub fn sanitized(rows: i64, cols: i64, interval_ms: i64) -> Self {
        Self {
            rows: positive_or_default(rows, DEFAULT_ROWS, "rows"),
            cols: positive_or_default(cols, DEFAULT_COLS, "columns"),
            interval: Duration::from_millis(if interval_ms > 0 {
                u64::try_from(interval_ms).unwrap_or(DEFAULT_INTERVAL_MS)
            } else {
                warn!("invalid interval {interval_ms}, using default {DEFAULT_INTERVAL_MS}");
                DEFAULT_INTERVAL_MS
            }),
        }
    }
}

/// Accept a positive value, or fall back to the default with a warning.
fn positive_or_default(value: i64, default: usize, what: &str) -> usize {
    if value > 0 {
        usize::try_from(value).unwrap_or(default)
    } else {
        warn!("invalid {what} {value}, using default {default}");
        default
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SimConfig::default();
        assert_eq!(config.rows, 30);
        assert_eq!(config.cols, 60);
        assert_eq!(config.interval, Duration::from_millis(100));
    }

    #[test]
    fn test_sanitized_keeps_positive_values() {
        let config = SimConfig::sanitized(12, 34, 250);
        assert_eq!(config.rows, 12);
        assert_eq!(config.cols, 34);
        assert_eq!(config.interval, Duration::from_millis(250));
    }

    #[test]
    fn test_sanitized_corrects_zero_rows() {
        let config = SimConfig::sanitized(0, 34, 250);
        assert_eq!(config.rows, DEFAULT_ROWS);
        assert_eq!(config.cols, 34);
    }

    #[test]
    fn test_sanitized_corrects_negative_values() {
        let config = SimConfig::sanitized(-1, -20, -100);
        assert_eq!(config, SimConfig::default());
    }
}
