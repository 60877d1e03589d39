//! Port definitions
//!
//! Ports are interfaces that define how the application layer interacts
//! with external systems. Implementations (adapters) live in the
//! infrastructure layer.

pub mod audit_log;
pub mod consensus;
pub mod llm_gateway;
pub mod progress;
pub mod state_store;
pub mod topic_source;
