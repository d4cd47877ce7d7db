//! Elapsed-time breakdown used across all timing metrics.

use serde::{Deserialize, Serialize};

use crate::domain::shared::Timestamp;

/// Round to 2 decimal places, the reporting precision for all durations.
#[must_use]
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// An elapsed time expressed in seconds, minutes and hours, each rounded to
/// 2 decimal places.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DurationBreakdown {
    /// Elapsed seconds.
    pub seconds: f64,
    /// Elapsed minutes.
    pub minutes: f64,
    /// Elapsed hours.
    pub hours: f64,
}

impl DurationBreakdown {
    /// Build a breakdown from raw elapsed seconds.
    #[must_use]
    pub fn from_seconds(seconds: f64) -> Self {
        Self {
            seconds: round2(seconds),
            minutes: round2(seconds / 60.0),
            hours: round2(seconds / 3600.0),
        }
    }

    /// Elapsed time between two timestamps.
    #[must_use]
    pub fn between(start: Timestamp, end: Timestamp) -> Self {
        Self::from_seconds(end.seconds_since(start))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_seconds_rounds_to_two_places() {
        let d = DurationBreakdown::from_seconds(100.0);
        assert_eq!(d.seconds, 100.0);
        assert_eq!(d.minutes, 1.67);
        assert_eq!(d.hours, 0.03);
    }

    #[test]
    fn between_timestamps() {
        let start = Timestamp::parse("2026-03-02T12:00:00Z").unwrap();
        let end = Timestamp::parse("2026-03-02T12:30:00Z").unwrap();

        let d = DurationBreakdown::between(start, end);
        assert_eq!(d.seconds, 1800.0);
        assert_eq!(d.minutes, 30.0);
        assert_eq!(d.hours, 0.5);
    }

    #[test]
    fn between_is_negative_when_reversed() {
        let start = Timestamp::parse("2026-03-02T12:00:00Z").unwrap();
        let end = Timestamp::parse("2026-03-02T11:00:00Z").unwrap();

        let d = DurationBreakdown::between(start, end);
        assert_eq!(d.hours, -1.0);
    }

    #[test]
    fn round2_behaviour() {
        assert_eq!(round2(1.234), 1.23);
        assert_eq!(round2(1.236), 1.24);
        assert_eq!(round2(0.0), 0.0);
    }
}
