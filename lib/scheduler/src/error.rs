//! Error types for the scheduler crate.

use chrono::{DateTime, FixedOffset};
use std::fmt;

/// Errors from calendar gateway operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// The calendar backend could not be reached.
    Unreachable {
        /// Description of the transport fault.
        reason: String,
    },
    /// The slot was taken between the availability read and the write.
    SlotTaken {
        /// Start of the contested slot.
        start: DateTime<FixedOffset>,
    },
    /// The backend reported an error.
    Backend {
        /// Description of the backend failure.
        reason: String,
    },
}

impl fmt::Display for GatewayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unreachable { reason } => {
                write!(f, "calendar gateway unreachable: {reason}")
            }
            Self::SlotTaken { start } => {
                write!(f, "slot starting at {start} is no longer available")
            }
            Self::Backend { reason } => write!(f, "calendar backend error: {reason}"),
        }
    }
}

impl std::error::Error for GatewayError {}

/// Errors from scheduling operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// A scheduling intent or instant could not be parsed.
    Parse {
        /// The offending input.
        input: String,
        /// Why parsing failed.
        reason: String,
    },
    /// An interval with `start >= end` was requested.
    InvalidInterval {
        start: DateTime<FixedOffset>,
        end: DateTime<FixedOffset>,
    },
    /// A duration outside the bookable range was requested.
    InvalidDuration {
        /// The offending duration in minutes.
        minutes: i64,
    },
    /// A gateway operation failed.
    Gateway(GatewayError),
}

impl fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse { input, reason } => {
                write!(f, "could not parse scheduling input '{input}': {reason}")
            }
            Self::InvalidInterval { start, end } => {
                write!(f, "invalid interval: start {start} is not before end {end}")
            }
            Self::InvalidDuration { minutes } => {
                write!(f, "duration of {minutes} minutes is outside the bookable range")
            }
            Self::Gateway(e) => write!(f, "gateway error: {e}"),
        }
    }
}

impl std::error::Error for ScheduleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Gateway(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GatewayError> for ScheduleError {
    fn from(e: GatewayError) -> Self {
        Self::Gateway(e)
    }
}
