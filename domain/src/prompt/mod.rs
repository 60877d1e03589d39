//! Prompt domain
//!
//! Templates for every prompt the arena sends: topic selection, argument
//! scoring, and validator verification.

mod template;

pub use template::{PromptTemplate, SCORING_CRITERIA};
