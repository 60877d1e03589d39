//! Persistence and audit configuration from TOML (`[storage]`, `[audit]`)

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileStorageConfig {
    /// JSON file holding the arena state
    pub state_path: String,
}

impl Default for FileStorageConfig {
    fn default() -> Self {
        Self {
            state_path: "arena-state.json".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAuditConfig {
    /// JSONL audit trail; auditing is off when unset
    pub path: Option<String>,
}
