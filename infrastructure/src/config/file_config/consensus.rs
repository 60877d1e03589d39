//! Consensus configuration from TOML (`[consensus]` section)
//!
//! Example configuration:
//!
//! ```toml
//! [consensus]
//! validators = ["gpt-4o-mini", "gpt-4o", "gpt-4.1-mini"]
//! rule = "majority"           # or "unanimous", "atleast:2", "75%"
//! min_validators = 3
//! ```

use super::{ConfigIssue, Severity};
use arena_domain::QuorumRule;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConsensusConfig {
    /// Validator models; empty means the oracle model alone
    pub validators: Vec<String>,
    /// Quorum rule for tolerant decisions: "majority", "unanimous", "atleast:N", "N%"
    pub rule: String,
    /// Minimum number of validators required
    pub min_validators: usize,
}

impl Default for FileConsensusConfig {
    fn default() -> Self {
        Self {
            validators: Vec::new(),
            rule: "majority".to_string(),
            min_validators: 1,
        }
    }
}

impl FileConsensusConfig {
    /// Parse the rule string, falling back to majority with an issue.
    pub fn parse_rule(&self) -> (QuorumRule, Option<ConfigIssue>) {
        match self.rule.parse() {
            Ok(rule) => (rule, None),
            Err(e) => (
                QuorumRule::default(),
                Some(ConfigIssue {
                    severity: Severity::Error,
                    field: "consensus.rule".to_string(),
                    message: format!("consensus.rule: {}", e),
                }),
            ),
        }
    }

    /// Validator models, with `fallback` standing in for an empty list.
    pub fn validator_models(&self, fallback: &str) -> Vec<String> {
        if self.validators.is_empty() {
            vec![fallback.to_string()]
        } else {
            self.validators.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rule_variants() {
        let mut config = FileConsensusConfig::default();
        assert_eq!(config.parse_rule().0, QuorumRule::Majority);

        config.rule = "atleast:2".to_string();
        assert_eq!(config.parse_rule().0, QuorumRule::AtLeast(2));

        config.rule = "75%".to_string();
        assert_eq!(config.parse_rule().0, QuorumRule::Percentage(75));
    }

    #[test]
    fn test_unknown_rule_reports_issue() {
        let config = FileConsensusConfig {
            rule: "most".to_string(),
            ..Default::default()
        };
        let (rule, issue) = config.parse_rule();
        assert_eq!(rule, QuorumRule::Majority);
        assert_eq!(issue.unwrap().field, "consensus.rule");
    }

    #[test]
    fn test_validator_fallback() {
        let config = FileConsensusConfig::default();
        assert_eq!(config.validator_models("gpt-4o-mini"), vec!["gpt-4o-mini"]);
    }
}
