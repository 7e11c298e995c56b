//! Half-open time intervals.

use crate::error::ScheduleError;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// A half-open span of time `[start, end)`.
///
/// Invariant: `start < end`. Intervals that merely touch at a boundary
/// do not overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval {
    /// Start of the span (inclusive).
    pub start: DateTime<FixedOffset>,
    /// End of the span (exclusive).
    pub end: DateTime<FixedOffset>,
}

impl Interval {
    /// Creates an interval, enforcing `start < end`.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::InvalidInterval`] if `start >= end`.
    pub fn new(
        start: DateTime<FixedOffset>,
        end: DateTime<FixedOffset>,
    ) -> Result<Self, ScheduleError> {
        if start < end {
            Ok(Self { start, end })
        } else {
            Err(ScheduleError::InvalidInterval { start, end })
        }
    }

    /// Returns the length of the interval in whole minutes.
    #[must_use]
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    /// Returns true if the two intervals share any instant.
    ///
    /// Touching intervals (one ends exactly where the other starts) do
    /// not overlap.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Returns true if `[start, start + duration)` lies entirely inside
    /// this interval.
    #[must_use]
    pub fn contains_span(&self, start: DateTime<FixedOffset>, end: DateTime<FixedOffset>) -> bool {
        self.start <= start && self.end >= end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(hm: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(&format!("2025-07-15T{hm}:00+05:30")).expect("valid instant")
    }

    #[test]
    fn rejects_inverted_bounds() {
        let result = Interval::new(at("11:00"), at("10:00"));
        assert!(matches!(
            result,
            Err(ScheduleError::InvalidInterval { .. })
        ));
    }

    #[test]
    fn rejects_empty_interval() {
        assert!(Interval::new(at("10:00"), at("10:00")).is_err());
    }

    #[test]
    fn duration_in_whole_minutes() {
        let interval = Interval::new(at("10:00"), at("11:15")).expect("valid");
        assert_eq!(interval.duration_minutes(), 75);
    }

    #[test]
    fn touching_intervals_do_not_overlap() {
        let a = Interval::new(at("09:00"), at("10:00")).expect("valid");
        let b = Interval::new(at("10:00"), at("11:00")).expect("valid");
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn overlapping_intervals_detected() {
        let a = Interval::new(at("09:00"), at("10:30")).expect("valid");
        let b = Interval::new(at("10:00"), at("11:00")).expect("valid");
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn contains_span_is_inclusive_at_boundaries() {
        let interval = Interval::new(at("10:00"), at("13:00")).expect("valid");
        assert!(interval.contains_span(at("10:00"), at("13:00")));
        assert!(interval.contains_span(at("10:30"), at("11:15")));
        assert!(!interval.contains_span(at("12:45"), at("13:15")));
    }

    #[test]
    fn interval_serde_roundtrip() {
        let interval = Interval::new(at("10:00"), at("11:00")).expect("valid");
        let json = serde_json::to_string(&interval).expect("serialize");
        let parsed: Interval = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(interval, parsed);
    }
}
