//! Application-level configuration.
//!
//! - [`ArenaParams`]: parameters the use cases read (topic excerpt length)

pub mod arena_params;

pub use arena_params::{ArenaParams, DEFAULT_TOPIC_MAX_CHARS};
