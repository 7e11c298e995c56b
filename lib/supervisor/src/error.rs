//! Errors that abort an orchestration run.

use amber_concierge_conversation::HandlerName;
use std::fmt;

/// Fatal orchestration faults.
///
/// These are wiring or policy defects, not task failures; a handler
/// that fails its task reports in-band and the run continues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SupervisorError {
    /// The routing policy produced no directive for the current state.
    NoDirective,
    /// A directive named a handler that is not registered.
    UnknownHandler {
        /// The unregistered handler name.
        name: HandlerName,
    },
    /// The run exceeded the configured step limit.
    StepLimitExceeded {
        /// The limit that was hit.
        limit: u32,
    },
}

impl fmt::Display for SupervisorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoDirective => write!(f, "routing policy produced no directive"),
            Self::UnknownHandler { name } => {
                write!(f, "directive names unregistered handler '{name}'")
            }
            Self::StepLimitExceeded { limit } => {
                write!(f, "run exceeded the {limit}-step limit")
            }
        }
    }
}

impl std::error::Error for SupervisorError {}
