//! Arena identity from TOML (`[arena]` section)

use serde::{Deserialize, Serialize};

/// ```toml
/// [arena]
/// host = "alice"   # identity allowed to open and judge rounds
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileArenaConfig {
    /// Host identity recorded when a fresh arena state is created
    pub host: String,
}

impl Default for FileArenaConfig {
    fn default() -> Self {
        Self {
            host: "host".to_string(),
        }
    }
}
