//! Working-day window in the boss's local timezone.

use chrono::{DateTime, FixedOffset, NaiveDate};

/// First working hour of the day (local time).
pub const WORK_START_HOUR: u32 = 9;

/// Hour at which the working day ends (local time, exclusive).
pub const WORK_END_HOUR: u32 = 17;

/// Minimum length, in minutes, for a gap to be reported as free.
///
/// This is a fixed reporting threshold; a request with a longer duration
/// still needs a free interval at least as long as the request itself.
pub const MIN_VIABLE_GAP_MINUTES: i64 = 30;

/// Longest bookable duration: the full working day.
///
/// No free interval can ever exceed this, so longer requests are
/// rejected up front instead of scanned for.
pub const MAX_DURATION_MINUTES: i64 = ((WORK_END_HOUR - WORK_START_HOUR) as i64) * 60;

/// One calendar day evaluated against the fixed working hours.
///
/// Working hours are a fixed policy (09:00 to 17:00 local); the day is
/// not persisted anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkDay {
    /// The calendar date.
    pub date: NaiveDate,
    /// The boss's local UTC offset.
    pub offset: FixedOffset,
}

impl WorkDay {
    /// Creates a work day for the given date and offset.
    #[must_use]
    pub const fn new(date: NaiveDate, offset: FixedOffset) -> Self {
        Self { date, offset }
    }

    /// Returns the work day containing the given instant, evaluated in
    /// the instant's own offset.
    #[must_use]
    pub fn containing(instant: DateTime<FixedOffset>) -> Self {
        Self {
            date: instant.date_naive(),
            offset: *instant.offset(),
        }
    }

    /// Start of working hours on this day.
    #[must_use]
    pub fn work_start(&self) -> DateTime<FixedOffset> {
        self.at_hour(WORK_START_HOUR)
    }

    /// End of working hours on this day.
    #[must_use]
    pub fn work_end(&self) -> DateTime<FixedOffset> {
        self.at_hour(WORK_END_HOUR)
    }

    /// The following calendar day, or `None` at the end of the
    /// representable calendar range.
    #[must_use]
    pub fn next(&self) -> Option<Self> {
        self.date.succ_opt().map(|date| Self {
            date,
            offset: self.offset,
        })
    }

    fn at_hour(&self, hour: u32) -> DateTime<FixedOffset> {
        let wall = self
            .date
            .and_hms_opt(hour, 0, 0)
            .expect("whole hours are valid wall-clock times");
        wall.and_local_timezone(self.offset)
            .single()
            .expect("fixed offsets map wall-clock times uniquely")
    }
}
