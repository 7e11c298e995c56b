//! Routing policy seam.
//!
//! The supervisor never inspects message content itself; it asks the
//! policy for one directive per turn. Production deployments put a
//! language model behind this trait; tests script the decisions.

use amber_concierge_conversation::{ConversationState, HandoffDirective};
use std::collections::VecDeque;
use std::sync::Mutex;

/// Decides the next handoff from the current conversation state.
pub trait RoutingPolicy: Send + Sync {
    /// Returns the directive for the next supervisor turn.
    ///
    /// `None` means the policy has no decision to offer, which aborts
    /// the run.
    fn decide(&self, state: &ConversationState) -> Option<HandoffDirective>;
}

/// A policy that replays a fixed sequence of directives.
pub struct ScriptedPolicy {
    script: Mutex<VecDeque<HandoffDirective>>,
}

impl ScriptedPolicy {
    /// Creates a policy that yields the given directives in order.
    #[must_use]
    pub fn new(directives: impl IntoIterator<Item = HandoffDirective>) -> Self {
        Self {
            script: Mutex::new(directives.into_iter().collect()),
        }
    }
}

impl RoutingPolicy for ScriptedPolicy {
    fn decide(&self, _state: &ConversationState) -> Option<HandoffDirective> {
        self.script
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .pop_front()
    }
}
