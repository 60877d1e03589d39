//! Infrastructure layer for verdict-arena
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod consensus;
pub mod llm;
pub mod logging;
pub mod storage;
pub mod topic;

// Re-export commonly used types
pub use config::{
    ConfigIssue, ConfigLoader, FileArenaConfig, FileAuditConfig, FileConfig, FileConsensusConfig,
    FileOracleConfig, FileStorageConfig, FileTopicConfig, Severity,
};
pub use consensus::ValidatorPoolRuntime;
pub use llm::{OpenAiCompatGateway, OpenAiSession, OpenAiSettings};
pub use logging::JsonlAuditLog;
pub use storage::{JsonFileStore, MemoryStore};
pub use topic::{HttpTopicSource, html_to_text};
