//! Topic domain
//!
//! The weekly topic is agreed by exact-match consensus, so every validator
//! must emit byte-identical text. [`TopicProposal::canonicalize`] produces
//! that canonical form.

pub mod proposal;

pub use proposal::{TopicError, TopicProposal};
