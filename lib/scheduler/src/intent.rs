//! Scheduling-intent parsing.
//!
//! The handler receives intents as a single string of the form
//! `ISO-8601-instant|durationMinutes`, with the duration segment
//! optional. Instants without a UTC offset are interpreted in the
//! configured boss offset.

use crate::error::ScheduleError;
use crate::workday::MAX_DURATION_MINUTES;
use chrono::{DateTime, FixedOffset, NaiveDateTime};

/// Duration assumed when the intent omits one.
pub const DEFAULT_DURATION_MINUTES: i64 = 30;

/// A parsed scheduling intent: the requested instant plus duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchedulingIntent {
    /// Requested meeting start.
    pub start: DateTime<FixedOffset>,
    /// Requested duration in whole minutes.
    pub duration_minutes: i64,
}

/// Parses an intent string like `2025-07-12T11:00:00+05:30|60`.
///
/// # Errors
///
/// Returns [`ScheduleError::Parse`] if the instant is malformed or the
/// duration segment is not a positive whole number of minutes no longer
/// than a working day.
pub fn parse_intent(
    input: &str,
    default_offset: FixedOffset,
) -> Result<SchedulingIntent, ScheduleError> {
    let (instant_part, duration_part) = match input.split_once('|') {
        Some((instant, duration)) => (instant.trim(), Some(duration.trim())),
        None => (input.trim(), None),
    };

    let start = parse_instant(instant_part, default_offset)?;

    let duration_minutes = match duration_part {
        Some(segment) => {
            let minutes: i64 = segment.parse().map_err(|_| ScheduleError::Parse {
                input: input.to_string(),
                reason: format!("duration '{segment}' is not a whole number of minutes"),
            })?;
            if minutes <= 0 {
                return Err(ScheduleError::Parse {
                    input: input.to_string(),
                    reason: format!("duration must be positive, got {minutes}"),
                });
            }
            if minutes > MAX_DURATION_MINUTES {
                return Err(ScheduleError::Parse {
                    input: input.to_string(),
                    reason: format!(
                        "duration must be at most {MAX_DURATION_MINUTES} minutes, got {minutes}"
                    ),
                });
            }
            minutes
        }
        None => DEFAULT_DURATION_MINUTES,
    };

    Ok(SchedulingIntent {
        start,
        duration_minutes,
    })
}

fn parse_instant(
    text: &str,
    default_offset: FixedOffset,
) -> Result<DateTime<FixedOffset>, ScheduleError> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(text) {
        return Ok(instant);
    }
    // Offset-less instants are interpreted as boss-local wall-clock time.
    NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S")
        .ok()
        .and_then(|naive| naive.and_local_timezone(default_offset).single())
        .ok_or_else(|| ScheduleError::Parse {
            input: text.to_string(),
            reason: "expected an ISO-8601 instant like 2025-07-12T11:00:00+05:30".to_string(),
        })
}
