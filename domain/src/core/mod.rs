//! Core domain concepts shared across all subdomains.
//!
//! - [`participant::ParticipantId`]: opaque identity of a caller
//! - [`context::CallContext`]: who is calling, and when
//! - [`error::ArenaError`]: the error taxonomy surfaced to callers

pub mod context;
pub mod error;
pub mod participant;
