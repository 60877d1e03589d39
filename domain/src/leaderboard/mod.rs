//! Leaderboard projections
//!
//! Pure read-side views over [`ArenaState`](crate::ArenaState). Nothing here
//! mutates state or fails.

pub mod projector;

pub use projector::{
    LeaderboardEntry, LifetimeLeaderboard, PeriodLeaderboard, PlayerScore, lifetime_leaderboard,
    period_leaderboard, player_score,
};
