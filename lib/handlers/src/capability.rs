//! External capability seam.
//!
//! The actual work of each handler (summarizing a document, transcribing
//! audio, querying a search index, dispatching an email) happens in an
//! external collaborator behind this trait. The orchestration layer
//! treats it as a black box: text in, text out.

use crate::error::CapabilityError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// The input handed to a capability for one invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskInput {
    /// The task text, taken from the latest user message.
    pub text: String,
    /// Opaque auxiliary context (file path, query, recipient data).
    ///
    /// Passed through unvalidated; its meaning is the capability's
    /// business.
    pub aux: Option<String>,
}

impl TaskInput {
    /// Creates an input with no auxiliary context.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            aux: None,
        }
    }

    /// Attaches auxiliary context.
    #[must_use]
    pub fn with_aux(mut self, aux: impl Into<String>) -> Self {
        self.aux = Some(aux.into());
        self
    }
}

/// An external task capability.
#[async_trait]
pub trait Capability: Send + Sync {
    /// Performs the capability's work and returns its reply text.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing service is unreachable or fails.
    async fn invoke(&self, input: &TaskInput) -> Result<String, CapabilityError>;
}

/// A capability that always returns the same reply.
///
/// Stands in for external summarizer/news/mailer processes in wiring
/// and tests.
#[derive(Debug, Clone)]
pub struct StaticCapability {
    reply: String,
}

impl StaticCapability {
    /// Creates a capability with a canned reply.
    #[must_use]
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
        }
    }
}

#[async_trait]
impl Capability for StaticCapability {
    async fn invoke(&self, _input: &TaskInput) -> Result<String, CapabilityError> {
        Ok(self.reply.clone())
    }
}
