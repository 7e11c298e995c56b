//! The uniform task-handler contract and the generic capability adapter.

use crate::capability::{Capability, TaskInput};
use crate::error::{CapabilityError, HandlerError};
use amber_concierge_conversation::{ConversationState, HandlerName, Message};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

/// Default bound on a single capability call, in seconds.
pub const DEFAULT_CALL_TIMEOUT_SECS: u64 = 30;

/// A specialized task handler invoked by the supervisor.
///
/// Handlers receive the conversation state by value and return a
/// replacement with their reply appended. They never decide the next
/// step; control always returns to the supervisor.
#[async_trait]
pub trait TaskHandler: Send + Sync {
    /// The handler's routing name.
    fn name(&self) -> HandlerName;

    /// Performs the task and returns the updated conversation state.
    ///
    /// # Errors
    ///
    /// Returns an error only for handler-internal defects; transport
    /// faults are reported as a degraded reply in the returned state.
    async fn invoke(
        &self,
        task: TaskInput,
        state: ConversationState,
    ) -> Result<ConversationState, HandlerError>;
}

/// Adapts one external [`Capability`] to the [`TaskHandler`] contract.
///
/// Bounds each call with a timeout. A successful call appends the
/// capability's reply as an agent message attributed to this handler; a
/// transport fault or timeout appends an apologetic degraded reply
/// instead, and the run continues.
pub struct CapabilityHandler {
    name: HandlerName,
    capability: Arc<dyn Capability>,
    call_timeout: Duration,
}

impl CapabilityHandler {
    /// Creates a handler for the given name and capability.
    #[must_use]
    pub fn new(name: HandlerName, capability: Arc<dyn Capability>) -> Self {
        Self {
            name,
            capability,
            call_timeout: Duration::from_secs(DEFAULT_CALL_TIMEOUT_SECS),
        }
    }

    /// Overrides the per-call timeout.
    #[must_use]
    pub fn with_call_timeout(mut self, timeout: Duration) -> Self {
        self.call_timeout = timeout;
        self
    }

    fn degraded_reply(&self, error: &CapabilityError) -> String {
        format!(
            "Sorry, the {} service is currently unavailable ({error}). Please try again later.",
            self.name()
        )
    }
}

#[async_trait]
impl TaskHandler for CapabilityHandler {
    fn name(&self) -> HandlerName {
        self.name
    }

    async fn invoke(
        &self,
        task: TaskInput,
        mut state: ConversationState,
    ) -> Result<ConversationState, HandlerError> {
        let result = tokio::time::timeout(self.call_timeout, self.capability.invoke(&task)).await;

        let reply = match result {
            Ok(Ok(reply)) => {
                tracing::debug!(handler = %self.name, "capability call succeeded");
                reply
            }
            Ok(Err(error)) => {
                tracing::warn!(handler = %self.name, %error, "capability call failed");
                self.degraded_reply(&error)
            }
            Err(_) => {
                let error = CapabilityError::TimedOut {
                    timeout_secs: self.call_timeout.as_secs(),
                };
                tracing::warn!(handler = %self.name, %error, "capability call timed out");
                self.degraded_reply(&error)
            }
        };

        state.push(Message::agent(reply).from_handler(self.name));
        Ok(state)
    }
}
