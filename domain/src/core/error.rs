//! Domain error types

use thiserror::Error;

/// Errors surfaced by arena operations.
///
/// Every variant is terminal for the invocation that produced it: nothing is
/// retried locally and no default value is substituted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArenaError {
    #[error("Only the host can {action} (caller: {caller})")]
    Unauthorized { caller: String, action: &'static str },

    #[error("A round is already open for {period}")]
    RoundAlreadyOpen { period: String },

    #[error("Round for {period} already played")]
    PeriodAlreadyPlayed { period: String },

    #[error("No round is currently open")]
    RoundNotOpen,

    #[error("Judging is already complete for this round")]
    AlreadyJudged,

    #[error("Invalid side '{0}': must be 'a' or 'b'")]
    InvalidSide(String),

    #[error("Argument too short: {len} characters (minimum {min})")]
    TextTooShort { len: usize, min: usize },

    #[error("Argument too long: {len} characters (maximum {max})")]
    TextTooLong { len: usize, max: usize },

    #[error("No submissions to judge")]
    NoSubmissions,

    #[error("Validators diverged: {0}")]
    ConsensusDivergence(String),

    #[error("Validators rejected the proposal: {0}")]
    ConsensusRejected(String),

    #[error("Oracle unavailable: {0}")]
    OracleUnavailable(String),
}

impl ArenaError {
    /// Whether this error came out of the oracle/consensus path rather than
    /// from a gate on the state machine.
    pub fn is_oracle_failure(&self) -> bool {
        matches!(
            self,
            ArenaError::ConsensusDivergence(_)
                | ArenaError::ConsensusRejected(_)
                | ArenaError::OracleUnavailable(_)
        )
    }

    /// Stable snake_case identifier, used in audit records and JSON output.
    pub fn code(&self) -> &'static str {
        match self {
            ArenaError::Unauthorized { .. } => "unauthorized",
            ArenaError::RoundAlreadyOpen { .. } => "round_already_open",
            ArenaError::PeriodAlreadyPlayed { .. } => "period_already_played",
            ArenaError::RoundNotOpen => "round_not_open",
            ArenaError::AlreadyJudged => "already_judged",
            ArenaError::InvalidSide(_) => "invalid_side",
            ArenaError::TextTooShort { .. } => "text_too_short",
            ArenaError::TextTooLong { .. } => "text_too_long",
            ArenaError::NoSubmissions => "no_submissions",
            ArenaError::ConsensusDivergence(_) => "consensus_divergence",
            ArenaError::ConsensusRejected(_) => "consensus_rejected",
            ArenaError::OracleUnavailable(_) => "oracle_unavailable",
        }
    }
}
