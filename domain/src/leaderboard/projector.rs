//! Ranking of period and lifetime scores

use crate::core::participant::ParticipantId;
use crate::round::PeriodId;
use crate::state::ArenaState;
use serde::{Deserialize, Serialize};

/// One ranked row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    /// 1-based rank
    pub rank: usize,
    pub participant: ParticipantId,
    pub score: u64,
}

/// Ranking of the current round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodLeaderboard {
    pub period_id: PeriodId,
    pub topic: String,
    pub entries: Vec<LeaderboardEntry>,
}

/// Ranking across every round ever judged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifetimeLeaderboard {
    pub entries: Vec<LeaderboardEntry>,
}

/// One participant's standing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerScore {
    pub participant: ParticipantId,
    pub period_score: u32,
    pub lifetime_score: u64,
}

/// Rank the current roster by period score.
///
/// Unscored participants count as 0. Ties keep roster (submission) order.
pub fn period_leaderboard(state: &ArenaState) -> PeriodLeaderboard {
    let scores = state.period_scores();
    let rows = state
        .ledger()
        .roster()
        .iter()
        .map(|p| (p.clone(), u64::from(scores.get(p))));

    PeriodLeaderboard {
        period_id: state.round().period_id.clone(),
        topic: state.round().topic.clone(),
        entries: rank(rows),
    }
}

/// Rank everyone who was ever credited by lifetime score.
///
/// Driven by the lifetime book itself rather than the per-round roster, so
/// players from earlier rounds stay visible. Ties keep first-credited order.
pub fn lifetime_leaderboard(state: &ArenaState) -> LifetimeLeaderboard {
    let rows = state.lifetime().iter().map(|(p, total)| (p.clone(), total));
    LifetimeLeaderboard {
        entries: rank(rows),
    }
}

pub fn player_score(state: &ArenaState, participant: &ParticipantId) -> PlayerScore {
    PlayerScore {
        participant: participant.clone(),
        period_score: state.period_scores().get(participant),
        lifetime_score: state.lifetime().get(participant),
    }
}

fn rank(rows: impl Iterator<Item = (ParticipantId, u64)>) -> Vec<LeaderboardEntry> {
    let mut rows: Vec<_> = rows.collect();
    // sort_by is stable: equal scores keep their incoming order
    rows.sort_by(|a, b| b.1.cmp(&a.1));
    rows.into_iter()
        .enumerate()
        .map(|(i, (participant, score))| LeaderboardEntry {
            rank: i + 1,
            participant,
            score,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::context::CallContext;
    use crate::scoring::{ScoreCard, Verdict};
    use crate::topic::TopicProposal;
    use chrono::{TimeZone, Utc};

    fn card(total: i64) -> ScoreCard {
        let logic = total.min(40);
        let creativity = (total - logic).min(30);
        ScoreCard {
            logic,
            creativity,
            persuasiveness: total - logic - creativity,
            total,
            one_line_feedback: "ok".to_string(),
        }
    }

    fn play_round(state: &mut ArenaState, day: u32, results: &[(&str, i64)]) {
        let host = state.host().clone();
        let now = Utc.with_ymd_and_hms(2025, 3, day, 10, 0, 0).unwrap();
        state
            .open_round(
                &CallContext::new(host, now),
                TopicProposal {
                    topic: "T".to_string(),
                    side_a: "A".to_string(),
                    side_b: "B".to_string(),
                },
            )
            .unwrap();
        for (who, _) in results {
            state
                .submit(&ParticipantId::new(*who), "a", "an argument of enough length")
                .unwrap();
        }
        let verdicts: Vec<_> = results
            .iter()
            .map(|(who, total)| Verdict::new(ParticipantId::new(*who), card(*total)))
            .collect();
        state.commit_verdicts(&verdicts).unwrap();
    }

    fn names(entries: &[LeaderboardEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.participant.as_str()).collect()
    }

    #[test]
    fn test_period_sorted_descending_with_ranks() {
        let mut state = ArenaState::new(ParticipantId::new("host"));
        play_round(&mut state, 3, &[("p1", 40), ("p2", 75), ("p3", 60)]);

        let board = period_leaderboard(&state);
        assert_eq!(board.period_id.as_str(), "2025-W10");
        assert_eq!(names(&board.entries), vec!["p2", "p3", "p1"]);
        let ranks: Vec<_> = board.entries.iter().map(|e| e.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3]);
    }

    #[test]
    fn test_period_tie_keeps_submission_order() {
        let mut state = ArenaState::new(ParticipantId::new("host"));
        play_round(&mut state, 3, &[("late", 50), ("early", 50), ("top", 90)]);

        let board = period_leaderboard(&state);
        assert_eq!(names(&board.entries), vec!["top", "late", "early"]);
    }

    #[test]
    fn test_period_unscored_participants_show_zero() {
        let mut state = ArenaState::new(ParticipantId::new("host"));
        let host = state.host().clone();
        let now = Utc.with_ymd_and_hms(2025, 3, 3, 10, 0, 0).unwrap();
        state
            .open_round(
                &CallContext::new(host, now),
                TopicProposal {
                    topic: "T".to_string(),
                    side_a: "A".to_string(),
                    side_b: "B".to_string(),
                },
            )
            .unwrap();
        state
            .submit(&ParticipantId::new("p1"), "b", "an argument of enough length")
            .unwrap();

        let board = period_leaderboard(&state);
        assert_eq!(board.entries.len(), 1);
        assert_eq!(board.entries[0].score, 0);
    }

    #[test]
    fn test_lifetime_includes_earlier_rounds() {
        let mut state = ArenaState::new(ParticipantId::new("host"));
        play_round(&mut state, 3, &[("veteran", 80), ("p2", 20)]);
        play_round(&mut state, 10, &[("p2", 30), ("newcomer", 45)]);

        let board = lifetime_leaderboard(&state);
        assert_eq!(names(&board.entries), vec!["veteran", "p2", "newcomer"]);
        assert_eq!(board.entries[0].score, 80);
        assert_eq!(board.entries[1].score, 50);
        assert_eq!(board.entries[2].score, 45);

        // The current round only knows its own roster
        assert_eq!(names(&period_leaderboard(&state).entries), vec!["newcomer", "p2"]);
    }

    #[test]
    fn test_lifetime_tie_keeps_first_credit_order() {
        let mut state = ArenaState::new(ParticipantId::new("host"));
        play_round(&mut state, 3, &[("first", 30)]);
        play_round(&mut state, 10, &[("second", 30)]);

        assert_eq!(
            names(&lifetime_leaderboard(&state).entries),
            vec!["first", "second"]
        );
    }

    #[test]
    fn test_player_score_unknown_is_zero() {
        let state = ArenaState::new(ParticipantId::new("host"));
        let score = player_score(&state, &ParticipantId::new("nobody"));
        assert_eq!(score.period_score, 0);
        assert_eq!(score.lifetime_score, 0);
    }
}
