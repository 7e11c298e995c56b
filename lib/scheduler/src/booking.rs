//! Booking decision logic.

use crate::engine::{AvailabilityEngine, SCAN_DAYS};
use crate::error::{GatewayError, ScheduleError};
use crate::gateway::CalendarGateway;
use crate::intent::SchedulingIntent;
use crate::interval::Interval;
use crate::workday::{MAX_DURATION_MINUTES, WORK_END_HOUR, WORK_START_HOUR, WorkDay};
use chrono::{DateTime, Duration, FixedOffset};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Summary attached to calendar events created by bookings.
const EVENT_SUMMARY: &str = "Meeting with the boss";

/// A request to book a meeting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    /// Requested meeting start.
    pub start: DateTime<FixedOffset>,
    /// Requested duration in whole minutes.
    pub duration_minutes: i64,
}

impl BookingRequest {
    /// The requested meeting end.
    #[must_use]
    pub fn end(&self) -> DateTime<FixedOffset> {
        self.start + Duration::minutes(self.duration_minutes)
    }

    /// Returns true if the whole requested span lies within working
    /// hours on its day.
    ///
    /// A request starting before 09:00, at or after 17:00, or running
    /// past 17:00 is structurally invalid and is never checked for
    /// availability. The window is evaluated in the start's own offset;
    /// callers normalize to the boss's zone first via [`normalized`].
    ///
    /// [`normalized`]: BookingRequest::normalized
    #[must_use]
    pub fn is_within_working_hours(&self) -> bool {
        let day = WorkDay::containing(self.start);
        self.start >= day.work_start()
            && self.start < day.work_end()
            && self.end() <= day.work_end()
    }

    /// Returns the request with its start expressed in the given offset.
    ///
    /// The instant is unchanged; only the wall-clock representation
    /// moves, so working-hours checks run in the boss's local zone.
    #[must_use]
    pub fn normalized(&self, offset: FixedOffset) -> Self {
        Self {
            start: self.start.with_timezone(&offset),
            duration_minutes: self.duration_minutes,
        }
    }
}

impl From<SchedulingIntent> for BookingRequest {
    fn from(intent: SchedulingIntent) -> Self {
        Self {
            start: intent.start,
            duration_minutes: intent.duration_minutes,
        }
    }
}

/// The outcome of a booking attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum BookingOutcome {
    /// The meeting was booked.
    Booked {
        start: DateTime<FixedOffset>,
        end: DateTime<FixedOffset>,
    },
    /// The requested slot was not bookable; the nearest alternative.
    Suggested { next_start: DateTime<FixedOffset> },
    /// No booking and no alternative.
    Rejected { reason: String },
}

/// Books meetings against a calendar gateway.
///
/// Only the `Booked` path writes to the calendar; every other path is
/// read-only.
pub struct MeetingScheduler<G> {
    engine: AvailabilityEngine<G>,
    gateway: Arc<G>,
    boss_offset: FixedOffset,
}

impl<G: CalendarGateway> MeetingScheduler<G> {
    /// Creates a scheduler over the given gateway.
    ///
    /// `boss_offset` is the boss's local UTC offset; all requests are
    /// normalized to it before working hours are evaluated.
    #[must_use]
    pub fn new(gateway: Arc<G>, boss_offset: FixedOffset) -> Self {
        Self {
            engine: AvailabilityEngine::new(Arc::clone(&gateway), boss_offset),
            gateway,
            boss_offset,
        }
    }

    /// Returns the availability engine backing this scheduler.
    #[must_use]
    pub fn engine(&self) -> &AvailabilityEngine<G> {
        &self.engine
    }

    /// Attempts to book the requested slot.
    ///
    /// Structurally invalid times bypass the availability check and go
    /// straight to the forward scan. Available slots are written through
    /// the gateway; if the write loses the race to a concurrent booking
    /// the slot is not retried and the scan runs instead.
    ///
    /// # Errors
    ///
    /// Returns an error if the gateway cannot be reached or the
    /// duration falls outside the bookable range.
    pub async fn schedule(&self, request: &BookingRequest) -> Result<BookingOutcome, ScheduleError> {
        if request.duration_minutes <= 0 || request.duration_minutes > MAX_DURATION_MINUTES {
            return Err(ScheduleError::InvalidDuration {
                minutes: request.duration_minutes,
            });
        }
        let request = &request.normalized(self.boss_offset);

        if !request.is_within_working_hours() {
            tracing::debug!(start = %request.start, "request outside working hours");
            return self.suggest_alternative(request).await;
        }

        if !self
            .engine
            .is_slot_available(request.start, request.duration_minutes)
            .await?
        {
            return self.suggest_alternative(request).await;
        }

        let interval = Interval::new(request.start, request.end())?;
        match self.gateway.create_event(&interval, EVENT_SUMMARY).await {
            Ok(event_id) => {
                tracing::info!(%event_id, start = %interval.start, "meeting booked");
                Ok(BookingOutcome::Booked {
                    start: interval.start,
                    end: interval.end,
                })
            }
            Err(GatewayError::SlotTaken { start }) => {
                tracing::warn!(%start, "slot lost to a concurrent booking");
                self.suggest_alternative(request).await
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn suggest_alternative(
        &self,
        request: &BookingRequest,
    ) -> Result<BookingOutcome, ScheduleError> {
        match self
            .engine
            .find_next_available(request.start, request.duration_minutes)
            .await?
        {
            Some(next_start) => Ok(BookingOutcome::Suggested { next_start }),
            None => Ok(BookingOutcome::Rejected {
                reason: format!(
                    "no free {}-minute slot within {SCAN_DAYS} days",
                    request.duration_minutes
                ),
            }),
        }
    }
}

impl BookingOutcome {
    /// Renders the outcome as a message for the user.
    ///
    /// `within_hours` selects the wording for suggestions: a
    /// structurally invalid request gets the working-hours notice, a
    /// busy slot gets the conflict notice.
    #[must_use]
    pub fn describe(&self, within_hours: bool) -> String {
        match self {
            Self::Booked { start, end } => {
                let minutes = (*end - *start).num_minutes();
                format!("Meeting booked at {} for {minutes} minutes.", start.to_rfc3339())
            }
            Self::Suggested { next_start } if within_hours => format!(
                "The boss has another meeting at that time. The nearest available time is {}.",
                next_start.to_rfc3339()
            ),
            Self::Suggested { next_start } => format!(
                "The boss's working hours are {WORK_START_HOUR}:00 to {WORK_END_HOUR}:00. \
                 The closest available time is {}.",
                next_start.to_rfc3339()
            ),
            Self::Rejected { .. } => {
                "The boss is not available within the next month. Please try another time."
                    .to_string()
            }
        }
    }
}
