//! Scoring domain
//!
//! - [`ScoringRequest`]: what gets sent to the scoring oracle for one participant
//! - [`ScoreCard`]: the strictly validated oracle answer
//! - [`PeriodScores`] / [`LifetimeBook`]: where points end up

pub mod books;
pub mod request;
pub mod score_card;

pub use books::{LifetimeBook, PeriodScores};
pub use request::{ScoringRequest, Verdict};
pub use score_card::{
    CREATIVITY_MAX, LOGIC_MAX, PERSUASIVENESS_MAX, ScoreCard, ScoreCardError,
};
