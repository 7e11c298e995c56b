//! Orchestration state machine.
//!
//! A single supervisor routes each conversation through the registered
//! task handlers. Every handoff is explicit and star-shaped: the policy
//! picks a handler, the supervisor records the transfer and invokes it,
//! and control returns to the supervisor. Runs end on a terminal
//! directive or at the step limit.

pub mod error;
pub mod policy;
pub mod supervisor;

pub use error::SupervisorError;
pub use policy::{RoutingPolicy, ScriptedPolicy};
pub use supervisor::{DEFAULT_MAX_STEPS, Supervisor, SupervisorConfig};
