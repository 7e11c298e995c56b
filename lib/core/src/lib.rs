//! Core domain types for the amber-concierge assistant platform.
//!
//! This crate provides the strongly-typed identifiers shared by the
//! conversation, scheduling, handler, and supervisor crates.

pub mod id;

pub use id::{EventId, MessageId, ParseIdError, RunId};
