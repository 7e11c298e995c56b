//! The orchestration state machine.

use crate::error::SupervisorError;
use crate::policy::RoutingPolicy;
use amber_concierge_conversation::{ConversationState, HandlerName, HandoffTarget, Message};
use amber_concierge_handlers::{TaskHandler, TaskInput};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Step limit applied when the configuration does not set one.
pub const DEFAULT_MAX_STEPS: u32 = 32;

/// Tunables for the supervisor loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupervisorConfig {
    /// Maximum number of routing steps per run.
    ///
    /// A policy that keeps bouncing between handlers hits this bound
    /// instead of looping forever.
    pub max_steps: u32,
}

impl Default for SupervisorConfig {
    fn default() -> Self {
        Self {
            max_steps: DEFAULT_MAX_STEPS,
        }
    }
}

/// Routes one conversation through the registered task handlers.
///
/// The supervisor is the only component that moves the conversation
/// forward. Each turn it asks the policy for a directive, records the
/// transfer, invokes the named handler, and takes back control. The
/// topology is a star: handlers never hand off to each other.
pub struct Supervisor {
    policy: Box<dyn RoutingPolicy>,
    handlers: HashMap<HandlerName, Box<dyn TaskHandler>>,
    config: SupervisorConfig,
}

impl Supervisor {
    /// Creates a supervisor with no registered handlers.
    #[must_use]
    pub fn new(policy: Box<dyn RoutingPolicy>, config: SupervisorConfig) -> Self {
        Self {
            policy,
            handlers: HashMap::new(),
            config,
        }
    }

    /// Registers a handler under its own name.
    ///
    /// A later registration for the same name replaces the earlier one.
    #[must_use]
    pub fn with_handler(mut self, handler: Box<dyn TaskHandler>) -> Self {
        self.handlers.insert(handler.name(), handler);
        self
    }

    /// Runs one conversation to completion.
    ///
    /// Seeds the state with the inbound user message, then loops:
    /// policy decision, transfer notice, handler invocation. A handler
    /// that fails its task is recorded in-band and the loop continues;
    /// the run ends when the policy issues a terminal directive.
    ///
    /// `attachment` is opaque auxiliary context (a file path, say)
    /// passed through to every handler invoked during the run.
    ///
    /// # Errors
    ///
    /// Returns an error for wiring faults: a policy with no decision,
    /// a directive naming an unregistered handler, or a run exceeding
    /// the step limit.
    pub async fn run_once(
        &self,
        user_message: impl Into<String>,
        attachment: Option<String>,
    ) -> Result<ConversationState, SupervisorError> {
        let mut state = ConversationState::with_user_message(user_message);
        tracing::info!(run_id = %state.run_id, "run started");

        for step in 0..self.config.max_steps {
            let directive = self
                .policy
                .decide(&state)
                .ok_or(SupervisorError::NoDirective)?;
            tracing::debug!(run_id = %state.run_id, step, target = ?directive.target, "directive");

            let name = match directive.target {
                HandoffTarget::Handler { name } => name,
                HandoffTarget::Respond => {
                    tracing::info!(run_id = %state.run_id, step, "responding to caller");
                    return Ok(state);
                }
                HandoffTarget::Terminate => {
                    tracing::info!(run_id = %state.run_id, step, "run terminated");
                    return Ok(state);
                }
            };

            let handler = self
                .handlers
                .get(&name)
                .ok_or(SupervisorError::UnknownHandler { name })?;

            state.push(Message::tool(format!("Transferring to {name}")));

            let mut task = TaskInput::new(state.latest_user_text().unwrap_or_default());
            if let Some(aux) = &attachment {
                task = task.with_aux(aux.clone());
            }

            match handler.invoke(task, state.clone()).await {
                Ok(next) => state = next,
                Err(error) => {
                    // Task faults stay in-band; the policy sees them and
                    // decides what to do next.
                    tracing::warn!(run_id = %state.run_id, %name, %error, "handler failed");
                    state.push(Message::system(format!("Handler {name} failed: {error}")));
                }
            }
        }

        Err(SupervisorError::StepLimitExceeded {
            limit: self.config.max_steps,
        })
    }
}
