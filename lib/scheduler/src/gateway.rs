//! Calendar gateway seam.
//!
//! The gateway is the only resource shared across concurrent runs, so
//! implementations must serialize `create_event` per calendar and
//! re-validate the slot immediately before inserting. Authentication
//! and session lifecycle are the implementation's concern.

use crate::error::GatewayError;
use crate::interval::Interval;
use crate::workday::WorkDay;
use amber_concierge_core::EventId;
use async_trait::async_trait;
use std::sync::{Mutex, PoisonError};

/// External calendar operations consumed by the availability engine.
#[async_trait]
pub trait CalendarGateway: Send + Sync {
    /// Lists the busy intervals recorded on the given day.
    ///
    /// The result need not be sorted or disjoint. This read is
    /// idempotent and may be retried by implementations.
    async fn list_busy_intervals(&self, day: &WorkDay) -> Result<Vec<Interval>, GatewayError>;

    /// Creates an event occupying the given interval.
    ///
    /// Implementations must re-check the interval against a fresh busy
    /// list within their exclusion scope and fail with
    /// [`GatewayError::SlotTaken`] if it was lost to a concurrent
    /// booking. Writes are never retried by callers.
    async fn create_event(&self, interval: &Interval, summary: &str)
    -> Result<EventId, GatewayError>;
}

/// In-memory calendar.
///
/// Serializes writes behind a mutex and re-validates each insertion
/// against the stored events, which makes it both the reference for the
/// optimistic-concurrency contract and the test double for every crate
/// above this one.
#[derive(Debug, Default)]
pub struct InMemoryCalendar {
    events: Mutex<Vec<(EventId, Interval)>>,
}

impl InMemoryCalendar {
    /// Creates an empty calendar.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a calendar pre-seeded with busy intervals.
    #[must_use]
    pub fn with_busy(intervals: Vec<Interval>) -> Self {
        let events = intervals
            .into_iter()
            .map(|interval| (EventId::new(), interval))
            .collect();
        Self {
            events: Mutex::new(events),
        }
    }

    /// Returns the number of stored events.
    #[must_use]
    pub fn event_count(&self) -> usize {
        self.lock_events().len()
    }

    fn lock_events(&self) -> std::sync::MutexGuard<'_, Vec<(EventId, Interval)>> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl CalendarGateway for InMemoryCalendar {
    async fn list_busy_intervals(&self, day: &WorkDay) -> Result<Vec<Interval>, GatewayError> {
        let events = self.lock_events();
        Ok(events
            .iter()
            .map(|(_, interval)| *interval)
            .filter(|interval| interval.start.with_timezone(&day.offset).date_naive() == day.date)
            .collect())
    }

    async fn create_event(
        &self,
        interval: &Interval,
        _summary: &str,
    ) -> Result<EventId, GatewayError> {
        let mut events = self.lock_events();
        // Re-validate inside the lock: the slot may have been taken
        // since the caller's availability read.
        if events.iter().any(|(_, existing)| existing.overlaps(interval)) {
            return Err(GatewayError::SlotTaken {
                start: interval.start,
            });
        }
        let id = EventId::new();
        events.push((id, *interval));
        Ok(id)
    }
}
