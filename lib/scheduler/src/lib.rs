//! Calendar availability engine and booking logic.
//!
//! The engine computes free intervals within the boss's working hours,
//! answers slot-availability queries, and scans forward for the nearest
//! open slot. [`MeetingScheduler`] layers the booking decision policy on
//! top: structurally invalid times are redirected without an availability
//! check, free slots are booked through the [`CalendarGateway`], and busy
//! slots produce a suggested alternative.

pub mod booking;
pub mod engine;
pub mod error;
pub mod gateway;
pub mod intent;
pub mod interval;
pub mod workday;

pub use booking::{BookingOutcome, BookingRequest, MeetingScheduler};
pub use engine::{AvailabilityEngine, SCAN_DAYS, free_intervals};
pub use error::{GatewayError, ScheduleError};
pub use gateway::{CalendarGateway, InMemoryCalendar};
pub use intent::{DEFAULT_DURATION_MINUTES, SchedulingIntent, parse_intent};
pub use interval::Interval;
pub use workday::{
    MAX_DURATION_MINUTES, MIN_VIABLE_GAP_MINUTES, WORK_END_HOUR, WORK_START_HOUR, WorkDay,
};
