//! Consensus decision records, kept for auditing.

use super::mode::EquivalenceMode;
use super::vote::Tally;
use serde::{Deserialize, Serialize};

/// Outcome of one consensus decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsensusOutcome {
    /// Validators agreed on a value
    Agreed,
    /// Exact-match outputs differed
    Diverged,
    /// Tolerant validators did not reach the quorum
    Rejected,
    /// The wrapped operation itself failed
    Failed,
}

impl ConsensusOutcome {
    pub fn is_agreed(&self) -> bool {
        matches!(self, ConsensusOutcome::Agreed)
    }
}

impl std::fmt::Display for ConsensusOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConsensusOutcome::Agreed => write!(f, "Agreed"),
            ConsensusOutcome::Diverged => write!(f, "Diverged"),
            ConsensusOutcome::Rejected => write!(f, "Rejected"),
            ConsensusOutcome::Failed => write!(f, "Failed"),
        }
    }
}

/// What happened during a single consensus decision.
///
/// # Example
///
/// ```
/// use arena_domain::{ConsensusOutcome, ConsensusRecord, EquivalenceMode};
///
/// let record = ConsensusRecord::new("fetch_topic", EquivalenceMode::ExactMatch, 3)
///     .finish(ConsensusOutcome::Diverged)
///     .with_detail("2 distinct outputs");
/// assert!(!record.outcome.is_agreed());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsensusRecord {
    /// Label of the wrapped operation (e.g. `fetch_topic`, `score:alice`)
    pub operation: String,
    pub mode: EquivalenceMode,
    pub outcome: ConsensusOutcome,
    /// Number of validators that took part
    pub validators: usize,
    /// Votes, for tolerant decisions
    pub tally: Option<Tally>,
    /// Free-form detail (divergence summary, error message)
    pub detail: Option<String>,
}

impl ConsensusRecord {
    /// Start a record; the outcome is `Failed` until [`finish`](Self::finish) is called.
    pub fn new(operation: impl Into<String>, mode: EquivalenceMode, validators: usize) -> Self {
        Self {
            operation: operation.into(),
            mode,
            outcome: ConsensusOutcome::Failed,
            validators,
            tally: None,
            detail: None,
        }
    }

    pub fn finish(mut self, outcome: ConsensusOutcome) -> Self {
        self.outcome = outcome;
        self
    }

    pub fn with_tally(mut self, tally: Tally) -> Self {
        self.tally = Some(tally);
        self
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consensus::{QuorumRule, ValidatorVote};

    #[test]
    fn test_record_defaults_to_failed() {
        let record = ConsensusRecord::new("fetch_topic", EquivalenceMode::ExactMatch, 3);
        assert_eq!(record.outcome, ConsensusOutcome::Failed);
        assert!(record.tally.is_none());
    }

    #[test]
    fn test_record_with_tally_serializes() {
        let tally = Tally::from_votes(
            vec![ValidatorVote::accept("v1", "ACCEPT")],
            QuorumRule::Majority,
        );
        let record = ConsensusRecord::new("score:alice", EquivalenceMode::Tolerant, 1)
            .finish(ConsensusOutcome::Agreed)
            .with_tally(tally);

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["mode"], "tolerant");
        assert_eq!(json["outcome"], "agreed");
        assert_eq!(json["tally"]["accept_count"], 1);
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(ConsensusOutcome::Agreed.to_string(), "Agreed");
        assert_eq!(ConsensusOutcome::Rejected.to_string(), "Rejected");
    }
}
