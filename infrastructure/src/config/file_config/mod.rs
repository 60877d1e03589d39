//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly; string fields that map onto domain types
//! are parsed by the `parse_*` helpers, which report problems as
//! [`ConfigIssue`]s instead of failing.

mod arena;
mod consensus;
mod oracle;
mod storage;
mod topic;

pub use arena::FileArenaConfig;
pub use consensus::FileConsensusConfig;
pub use oracle::FileOracleConfig;
pub use storage::{FileAuditConfig, FileStorageConfig};
pub use topic::FileTopicConfig;

use serde::{Deserialize, Serialize};

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: the configuration works but may not behave as expected.
    Warning,
}

/// A detected issue in the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    pub severity: Severity,
    /// Dotted path of the offending key (e.g. `consensus.rule`)
    pub field: String,
    pub message: String,
}

impl ConfigIssue {
    fn error(field: &str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            field: field.to_string(),
            message: message.into(),
        }
    }

    fn warning(field: &str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Arena identity
    pub arena: FileArenaConfig,
    /// Where topics come from
    pub topic: FileTopicConfig,
    /// Scoring oracle endpoint
    pub oracle: FileOracleConfig,
    /// Validator pool settings
    pub consensus: FileConsensusConfig,
    /// State persistence
    pub storage: FileStorageConfig,
    /// Audit trail
    pub audit: FileAuditConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.arena.host.trim().is_empty() {
            issues.push(ConfigIssue::error("arena.host", "arena.host cannot be empty"));
        }

        if self.topic.max_chars == 0 {
            issues.push(ConfigIssue::error(
                "topic.max_chars",
                "topic.max_chars must be greater than 0",
            ));
        }

        if self.oracle.model.trim().is_empty() {
            issues.push(ConfigIssue::error("oracle.model", "oracle.model cannot be empty"));
        }

        if !(0.0..=2.0).contains(&self.oracle.temperature) {
            issues.push(ConfigIssue::warning(
                "oracle.temperature",
                format!(
                    "oracle.temperature {} is outside 0.0-2.0 and may be refused",
                    self.oracle.temperature
                ),
            ));
        }

        issues.extend(self.consensus.parse_rule().1);

        if self.consensus.validators.iter().any(|m| m.trim().is_empty()) {
            issues.push(ConfigIssue::error(
                "consensus.validators",
                "validator model name cannot be empty",
            ));
        }

        let validators = self.consensus.validator_models(&self.oracle.model).len();
        if validators < self.consensus.min_validators {
            issues.push(ConfigIssue::error(
                "consensus.validators",
                format!(
                    "{} validator(s) configured, consensus.min_validators requires {}",
                    validators, self.consensus.min_validators
                ),
            ));
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[arena]
host = "alice"

[topic]
url = "https://lobste.rs"
max_chars = 2000

[oracle]
base_url = "http://localhost:11434/v1"
model = "llama3"
temperature = 0.2

[consensus]
validators = ["llama3", "mistral", "qwen"]
rule = "unanimous"
min_validators = 3

[storage]
state_path = "/var/lib/arena/state.json"

[audit]
path = "audit.jsonl"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.arena.host, "alice");
        assert_eq!(config.topic.max_chars, 2000);
        assert_eq!(config.oracle.model, "llama3");
        assert_eq!(config.consensus.validators.len(), 3);
        assert_eq!(config.storage.state_path, "/var/lib/arena/state.json");
        assert_eq!(config.audit.path.as_deref(), Some("audit.jsonl"));
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let config: FileConfig = toml::from_str("[oracle]\nmodel = \"gpt-4o\"\n").unwrap();
        assert_eq!(config.oracle.model, "gpt-4o");
        // Defaults should apply
        assert_eq!(config.oracle.api_key_env, "OPENAI_API_KEY");
        assert_eq!(config.topic.url, "https://news.ycombinator.com");
        assert!(config.audit.path.is_none());
    }

    #[test]
    fn test_validate_valid_config() {
        let config = FileConfig::default();
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_validate_reports_every_issue() {
        let mut config = FileConfig::default();
        config.arena.host = "  ".to_string();
        config.consensus.rule = "plurality".to_string();
        config.consensus.min_validators = 2;

        let fields: Vec<_> = config.validate().into_iter().map(|i| i.field).collect();
        assert_eq!(
            fields,
            vec!["arena.host", "consensus.rule", "consensus.validators"]
        );
    }

    #[test]
    fn test_temperature_is_a_warning() {
        let mut config = FileConfig::default();
        config.oracle.temperature = 3.5;
        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Warning);
    }
}
