//! Domain layer for verdict-arena
//!
//! This crate contains the round state machine, the submission ledger,
//! score parsing and the leaderboard projections. It has no dependencies on
//! infrastructure or presentation concerns, and it never talks to an oracle
//! directly.
//!
//! # Core Concepts
//!
//! ## Round lifecycle
//!
//! ```text
//!   (idle) ──open_round──▶ open ──judge_all──▶ judged ──open_round──▶ open ...
//!                           │ ▲
//!                           └─┘ submit_argument
//! ```
//!
//! A round is identified by its ISO week ([`PeriodId`]). At most one round is
//! played per week, and only the host may open or judge it.
//!
//! ## Dual consensus
//!
//! - **Exact match**: every validator must reproduce the same bytes (topic).
//! - **Tolerant**: validators accept or reject a single proposal (scores).

pub mod consensus;
pub mod core;
pub mod leaderboard;
pub mod prompt;
pub mod round;
pub mod scoring;
pub mod state;
pub mod submission;
pub mod topic;
pub mod util;

// Re-export commonly used types
pub use core::{context::CallContext, error::ArenaError, participant::ParticipantId};
pub use leaderboard::{
    LeaderboardEntry, LifetimeLeaderboard, PeriodLeaderboard, PlayerScore, lifetime_leaderboard,
    period_leaderboard, player_score,
};
pub use prompt::PromptTemplate;
pub use round::{PeriodId, Round, RoundSnapshot};
pub use scoring::{LifetimeBook, PeriodScores, ScoreCard, ScoreCardError, ScoringRequest, Verdict};
pub use state::ArenaState;
pub use submission::{ArgumentText, Side, Submission, SubmissionLedger};
pub use topic::{TopicError, TopicProposal};

// Re-export consensus types
pub use consensus::{
    ConsensusOutcome, ConsensusRecord, EquivalenceMode, QuorumRule, Tally, ValidatorVote,
    parse_verdict,
};
