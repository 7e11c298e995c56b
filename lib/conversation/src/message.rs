//! Message types for conversations.

use crate::directive::HandlerName;
use amber_concierge_core::MessageId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The role of a message sender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// User/human message.
    User,
    /// Reply produced by a handler or the supervisor.
    Agent,
    /// Control-transfer notice emitted by the supervisor.
    Tool,
    /// Synthetic message describing an internal condition (handler failure).
    System,
}

/// A message in a conversation.
///
/// Messages are immutable once appended to a [`crate::ConversationState`];
/// there is no mutator API beyond the initial builders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Unique message identifier.
    pub id: MessageId,
    /// Message role.
    pub role: MessageRole,
    /// Message text.
    pub text: String,
    /// The handler that produced this message, if any.
    pub handler: Option<HandlerName>,
    /// When the message was created.
    pub timestamp: DateTime<Utc>,
}

impl Message {
    /// Creates a new message.
    #[must_use]
    pub fn new(role: MessageRole, text: impl Into<String>) -> Self {
        Self {
            id: MessageId::new(),
            role,
            text: text.into(),
            handler: None,
            timestamp: Utc::now(),
        }
    }

    /// Creates a user message.
    #[must_use]
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(MessageRole::User, text)
    }

    /// Creates an agent message.
    #[must_use]
    pub fn agent(text: impl Into<String>) -> Self {
        Self::new(MessageRole::Agent, text)
    }

    /// Creates a tool (transfer notice) message.
    #[must_use]
    pub fn tool(text: impl Into<String>) -> Self {
        Self::new(MessageRole::Tool, text)
    }

    /// Creates a system message.
    #[must_use]
    pub fn system(text: impl Into<String>) -> Self {
        Self::new(MessageRole::System, text)
    }

    /// Attributes this message to a handler.
    #[must_use]
    pub fn from_handler(mut self, handler: HandlerName) -> Self {
        self.handler = Some(handler);
        self
    }
}
