//! Error types for the handler boundary.

use std::fmt;

/// Errors from an external capability invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CapabilityError {
    /// The capability's backing service could not be reached.
    Unreachable {
        /// Description of the transport fault.
        reason: String,
    },
    /// The capability ran but reported a failure.
    Failed {
        /// Description of the failure.
        reason: String,
    },
    /// The call exceeded its timeout.
    TimedOut {
        /// The timeout that elapsed, in seconds.
        timeout_secs: u64,
    },
}

impl fmt::Display for CapabilityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unreachable { reason } => write!(f, "capability unreachable: {reason}"),
            Self::Failed { reason } => write!(f, "capability failed: {reason}"),
            Self::TimedOut { timeout_secs } => {
                write!(f, "capability call exceeded {timeout_secs}s timeout")
            }
        }
    }
}

impl std::error::Error for CapabilityError {}

/// Errors a handler may raise to the supervisor.
///
/// Transport faults never take this path; they become a degraded reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerError {
    /// The handler received input it cannot act on.
    InvalidTask {
        /// Why the task was unusable.
        reason: String,
    },
}

impl fmt::Display for HandlerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTask { reason } => write!(f, "invalid task: {reason}"),
        }
    }
}

impl std::error::Error for HandlerError {}
