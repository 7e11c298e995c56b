//! Conversation record shared across handler handoffs.
//!
//! One conversation run owns a single [`ConversationState`]: an append-only
//! sequence of immutable messages. Handlers receive the state by value and
//! return a replacement; nothing mutates the record across a component
//! boundary. The routing vocabulary ([`HandlerName`], [`HandoffDirective`])
//! lives here too, since directives are decisions about the conversation.

pub mod directive;
pub mod message;
pub mod state;

pub use directive::{HandoffDirective, HandoffTarget, HandlerName};
pub use message::{Message, MessageRole};
pub use state::ConversationState;
