//! Append-only conversation state for a single orchestration run.

use crate::message::{Message, MessageRole};
use amber_concierge_core::RunId;
use serde::{Deserialize, Serialize};

/// The ordered message record for one orchestration run.
///
/// The record is append-only: messages are never reordered or deleted
/// within a run, and the API exposes no mutation besides [`push`].
/// The supervisor owns the state for the duration of the run; handlers
/// receive it by value and return a replacement.
///
/// [`push`]: ConversationState::push
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationState {
    /// The run this state belongs to.
    pub run_id: RunId,
    messages: Vec<Message>,
}

impl ConversationState {
    /// Creates an empty state for a new run.
    #[must_use]
    pub fn new() -> Self {
        Self {
            run_id: RunId::new(),
            messages: Vec::new(),
        }
    }

    /// Creates a state seeded with the inbound user message.
    #[must_use]
    pub fn with_user_message(text: impl Into<String>) -> Self {
        let mut state = Self::new();
        state.push(Message::user(text));
        state
    }

    /// Appends a message.
    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Returns the number of messages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns true if no messages have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Returns the latest message, if any.
    #[must_use]
    pub fn latest(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Returns the text of the most recent user message, if any.
    #[must_use]
    pub fn latest_user_text(&self) -> Option<&str> {
        self.messages
            .iter()
            .rev()
            .find(|m| m.role == MessageRole::User)
            .map(|m| m.text.as_str())
    }

    /// Iterates over the messages in append order.
    pub fn iter(&self) -> impl Iterator<Item = &Message> {
        self.messages.iter()
    }

    /// Returns the messages as a slice.
    #[must_use]
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }
}

impl Default for ConversationState {
    fn default() -> Self {
        Self::new()
    }
}
