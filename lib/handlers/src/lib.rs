//! Task handler boundary.
//!
//! Every specialized capability (document summary, audio summary, news,
//! email, scheduling) is invoked through the uniform [`TaskHandler`]
//! contract: the handler receives the conversation state by value,
//! appends its reply, and returns the replacement. Transport-level
//! faults from external collaborators surface as a degraded reply
//! message, never as a raised error; the run always continues.

pub mod capability;
pub mod error;
pub mod scheduling;
pub mod task;

pub use capability::{Capability, StaticCapability, TaskInput};
pub use error::{CapabilityError, HandlerError};
pub use scheduling::SchedulingHandler;
pub use task::{CapabilityHandler, DEFAULT_CALL_TIMEOUT_SECS, TaskHandler};
