//! Validator votes and their tally

use super::rule::QuorumRule;
use serde::{Deserialize, Serialize};

/// One validator's judgement of a proposal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorVote {
    /// Validator identifier (model name or node id)
    pub validator: String,
    pub accepted: bool,
    /// Full text the validator gave for its decision
    pub reasoning: String,
}

impl ValidatorVote {
    pub fn accept(validator: impl Into<String>, reasoning: impl Into<String>) -> Self {
        Self {
            validator: validator.into(),
            accepted: true,
            reasoning: reasoning.into(),
        }
    }

    pub fn reject(validator: impl Into<String>, reasoning: impl Into<String>) -> Self {
        Self {
            validator: validator.into(),
            accepted: false,
            reasoning: reasoning.into(),
        }
    }
}

/// Aggregated votes under a [`QuorumRule`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub rule: QuorumRule,
    pub passed: bool,
    pub accept_count: usize,
    pub reject_count: usize,
    pub votes: Vec<ValidatorVote>,
}

impl Tally {
    pub fn from_votes(votes: Vec<ValidatorVote>, rule: QuorumRule) -> Self {
        let accept_count = votes.iter().filter(|v| v.accepted).count();
        let reject_count = votes.len() - accept_count;
        Self {
            rule,
            passed: rule.is_satisfied(accept_count, votes.len()),
            accept_count,
            reject_count,
            votes,
        }
    }

    pub fn total(&self) -> usize {
        self.votes.len()
    }

    /// Visual summary, one mark per validator (e.g. `[●●○]`).
    pub fn summary(&self) -> String {
        let marks: String = self
            .votes
            .iter()
            .map(|v| if v.accepted { '●' } else { '○' })
            .collect();
        format!("[{}]", marks)
    }

    /// Reasons given by rejecting validators, one per line.
    pub fn rejection_feedback(&self) -> String {
        self.votes
            .iter()
            .filter(|v| !v.accepted)
            .map(|v| format!("{}: {}", v.validator, v.reasoning.trim()))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {}/{} accepted ({})",
            self.summary(),
            self.accept_count,
            self.total(),
            self.rule
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn votes() -> Vec<ValidatorVote> {
        vec![
            ValidatorVote::accept("v1", "ACCEPT"),
            ValidatorVote::accept("v2", "ACCEPT, scores look fair"),
            ValidatorVote::reject("v3", "REJECT: total does not add up"),
        ]
    }

    #[test]
    fn test_majority_tally() {
        let tally = Tally::from_votes(votes(), QuorumRule::Majority);
        assert!(tally.passed);
        assert_eq!(tally.accept_count, 2);
        assert_eq!(tally.reject_count, 1);
        assert_eq!(tally.summary(), "[●●○]");
    }

    #[test]
    fn test_unanimous_tally_fails() {
        let tally = Tally::from_votes(votes(), QuorumRule::Unanimous);
        assert!(!tally.passed);
        assert_eq!(
            tally.rejection_feedback(),
            "v3: REJECT: total does not add up"
        );
    }

    #[test]
    fn test_display() {
        let tally = Tally::from_votes(votes(), QuorumRule::Majority);
        assert_eq!(tally.to_string(), "[●●○] 2/3 accepted (majority)");
    }
}
