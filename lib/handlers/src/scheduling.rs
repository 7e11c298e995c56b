//! The scheduling handler.
//!
//! Unlike the capability-backed handlers, scheduling runs in-process:
//! it parses the intent from the task text, drives the meeting
//! scheduler, and renders the outcome as a user-facing reply.

use crate::capability::TaskInput;
use crate::error::HandlerError;
use crate::task::TaskHandler;
use amber_concierge_conversation::{ConversationState, HandlerName, Message};
use amber_concierge_scheduler::{
    BookingRequest, CalendarGateway, MeetingScheduler, ScheduleError, parse_intent,
};
use async_trait::async_trait;
use chrono::FixedOffset;
use std::sync::Arc;

/// Handles meeting requests against the boss's calendar.
pub struct SchedulingHandler<G> {
    scheduler: MeetingScheduler<G>,
    default_offset: FixedOffset,
}

impl<G: CalendarGateway> SchedulingHandler<G> {
    /// Creates a handler over the given calendar gateway.
    ///
    /// `default_offset` is the boss's UTC offset: intents carrying no
    /// offset are parsed in it, and every request is normalized to it
    /// before working hours are evaluated.
    #[must_use]
    pub fn new(gateway: Arc<G>, default_offset: FixedOffset) -> Self {
        Self {
            scheduler: MeetingScheduler::new(gateway, default_offset),
            default_offset,
        }
    }

    fn parse_failure_reply(error: &ScheduleError) -> String {
        tracing::debug!(%error, "unparseable scheduling intent");
        "Could not understand the requested meeting time. \
         Use a format like 2025-07-12T11:00:00+05:30|60."
            .to_string()
    }
}

#[async_trait]
impl<G: CalendarGateway> TaskHandler for SchedulingHandler<G> {
    fn name(&self) -> HandlerName {
        HandlerName::Scheduling
    }

    async fn invoke(
        &self,
        task: TaskInput,
        mut state: ConversationState,
    ) -> Result<ConversationState, HandlerError> {
        let reply = match parse_intent(&task.text, self.default_offset) {
            Ok(intent) => {
                let request = BookingRequest::from(intent).normalized(self.default_offset);
                let within_hours = request.is_within_working_hours();
                match self.scheduler.schedule(&request).await {
                    Ok(outcome) => outcome.describe(within_hours),
                    Err(error) => {
                        tracing::warn!(%error, "calendar backend fault during booking");
                        "Sorry, the calendar is currently unavailable. Please try again later."
                            .to_string()
                    }
                }
            }
            Err(error) => Self::parse_failure_reply(&error),
        };

        state.push(Message::agent(reply).from_handler(HandlerName::Scheduling));
        Ok(state)
    }
}
