//! Routing directives produced by the supervisor's policy.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Names of the specialized task handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HandlerName {
    /// Document summarization.
    DocSummary,
    /// Audio transcription and summarization.
    AudioSummary,
    /// News retrieval.
    News,
    /// Email dispatch.
    Email,
    /// Meeting scheduling.
    Scheduling,
}

impl HandlerName {
    /// Returns the canonical snake_case name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::DocSummary => "doc_summary",
            Self::AudioSummary => "audio_summary",
            Self::News => "news",
            Self::Email => "email",
            Self::Scheduling => "scheduling",
        }
    }
}

impl fmt::Display for HandlerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the supervisor should transfer control next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HandoffTarget {
    /// Invoke the named handler, then return to the supervisor.
    Handler {
        /// The handler to invoke.
        name: HandlerName,
    },
    /// Emit the latest message to the caller and end the run.
    Respond,
    /// End the run without further output.
    Terminate,
}

impl HandoffTarget {
    /// Returns true if this target ends the run.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Respond | Self::Terminate)
    }
}

/// The per-turn routing decision.
///
/// The policy produces exactly one directive per supervisor turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandoffDirective {
    /// The next state of the orchestration machine.
    pub target: HandoffTarget,
    /// Free-form note recorded with the transfer.
    pub note: String,
}

impl HandoffDirective {
    /// Creates a directive targeting a handler.
    #[must_use]
    pub fn to_handler(name: HandlerName) -> Self {
        Self {
            target: HandoffTarget::Handler { name },
            note: String::new(),
        }
    }

    /// Creates a directive that responds to the caller and ends the run.
    #[must_use]
    pub fn respond() -> Self {
        Self {
            target: HandoffTarget::Respond,
            note: String::new(),
        }
    }

    /// Creates a directive that terminates the run.
    #[must_use]
    pub fn terminate() -> Self {
        Self {
            target: HandoffTarget::Terminate,
            note: String::new(),
        }
    }

    /// Attaches a note to the directive.
    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handler_name_display() {
        assert_eq!(HandlerName::DocSummary.to_string(), "doc_summary");
        assert_eq!(HandlerName::Scheduling.to_string(), "scheduling");
    }

    #[test]
    fn terminal_targets() {
        assert!(HandoffTarget::Respond.is_terminal());
        assert!(HandoffTarget::Terminate.is_terminal());
        assert!(
            !HandoffTarget::Handler {
                name: HandlerName::Email
            }
            .is_terminal()
        );
    }

    #[test]
    fn directive_builder() {
        let directive =
            HandoffDirective::to_handler(HandlerName::News).with_note("user asked for headlines");

        assert_eq!(
            directive.target,
            HandoffTarget::Handler {
                name: HandlerName::News
            }
        );
        assert_eq!(directive.note, "user asked for headlines");
    }

    #[test]
    fn directive_serde_roundtrip() {
        let directive = HandoffDirective::to_handler(HandlerName::Scheduling);
        let json = serde_json::to_string(&directive).expect("serialize");
        let parsed: HandoffDirective = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(directive, parsed);
    }
}
