//! Arena service
//!
//! [`ArenaService`] owns the one live [`ArenaState`] and is the public
//! surface of the arena. Mutations run on a copy of the state; the copy is
//! persisted and swapped in only when the whole operation succeeded.

use crate::config::ArenaParams;
use crate::ports::audit_log::AuditLog;
use crate::ports::consensus::ConsensusRuntime;
use crate::ports::llm_gateway::LlmGateway;
use crate::ports::progress::{JudgingProgress, NoProgress};
use crate::ports::state_store::{StateStore, StoreError};
use crate::ports::topic_source::TopicSource;
use crate::use_cases::judge_all::JudgeAllUseCase;
use crate::use_cases::open_round::OpenRoundUseCase;
use crate::use_cases::submit_argument::SubmitArgumentUseCase;
use arena_domain::{
    ArenaError, ArenaState, CallContext, LifetimeLeaderboard, ParticipantId, PeriodLeaderboard,
    PlayerScore, RoundSnapshot, lifetime_leaderboard, period_leaderboard, player_score,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum ArenaServiceError {
    #[error(transparent)]
    Arena(#[from] ArenaError),

    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),
}

impl ArenaServiceError {
    /// The arena error, if this is one.
    pub fn arena(&self) -> Option<&ArenaError> {
        match self {
            ArenaServiceError::Arena(e) => Some(e),
            ArenaServiceError::Storage(_) => None,
        }
    }
}

/// Adapters the service is wired with.
#[derive(Clone)]
pub struct ArenaPorts {
    pub source: Arc<dyn TopicSource>,
    pub gateway: Arc<dyn LlmGateway>,
    pub runtime: Arc<dyn ConsensusRuntime>,
    pub store: Arc<dyn StateStore>,
    pub audit: Arc<dyn AuditLog>,
}

pub struct ArenaService {
    state: ArenaState,
    store: Arc<dyn StateStore>,
    open_round: OpenRoundUseCase,
    submit: SubmitArgumentUseCase,
    judge: JudgeAllUseCase,
}

impl ArenaService {
    /// Resume from the store, or start fresh with `host` if nothing is stored.
    ///
    /// A stored state keeps its own host.
    pub fn load(
        host: ParticipantId,
        ports: ArenaPorts,
        params: ArenaParams,
    ) -> Result<Self, StoreError> {
        let state = match ports.store.load()? {
            Some(state) => {
                debug!("Resumed arena state (host {})", state.host());
                state
            }
            None => {
                info!("No stored arena state, starting fresh with host {}", host);
                ArenaState::new(host)
            }
        };
        Ok(Self::with_state(state, ports, params))
    }

    pub fn with_state(state: ArenaState, ports: ArenaPorts, params: ArenaParams) -> Self {
        Self {
            state,
            store: Arc::clone(&ports.store),
            open_round: OpenRoundUseCase::new(
                Arc::clone(&ports.source),
                Arc::clone(&ports.gateway),
                Arc::clone(&ports.runtime),
                Arc::clone(&ports.audit),
                params,
            ),
            submit: SubmitArgumentUseCase::new(Arc::clone(&ports.audit)),
            judge: JudgeAllUseCase::new(ports.gateway, ports.runtime, ports.audit),
        }
    }

    pub fn state(&self) -> &ArenaState {
        &self.state
    }

    // ==================== Mutations ====================

    pub async fn open_round(&mut self, ctx: &CallContext) -> Result<String, ArenaServiceError> {
        let mut next = self.state.clone();
        let message = self.open_round.execute(&mut next, ctx).await?;
        self.commit(next)?;
        Ok(message)
    }

    pub fn submit_argument(
        &mut self,
        ctx: &CallContext,
        side: &str,
        text: &str,
    ) -> Result<String, ArenaServiceError> {
        let mut next = self.state.clone();
        let message = self.submit.execute(&mut next, &ctx.caller, side, text)?;
        self.commit(next)?;
        Ok(message)
    }

    pub async fn judge_all(&mut self, ctx: &CallContext) -> Result<String, ArenaServiceError> {
        self.judge_all_with_progress(ctx, &NoProgress).await
    }

    pub async fn judge_all_with_progress(
        &mut self,
        ctx: &CallContext,
        progress: &dyn JudgingProgress,
    ) -> Result<String, ArenaServiceError> {
        let mut next = self.state.clone();
        let message = self
            .judge
            .execute_with_progress(&mut next, &ctx.caller, progress)
            .await?;
        self.commit(next)?;
        Ok(message)
    }

    fn commit(&mut self, next: ArenaState) -> Result<(), StoreError> {
        self.store.save(&next)?;
        self.state = next;
        Ok(())
    }

    // ==================== Queries ====================

    pub fn get_leaderboard(&self) -> PeriodLeaderboard {
        period_leaderboard(&self.state)
    }

    pub fn get_all_time_leaderboard(&self) -> LifetimeLeaderboard {
        lifetime_leaderboard(&self.state)
    }

    pub fn get_round_info(&self) -> RoundSnapshot {
        self.state.snapshot()
    }

    pub fn get_my_score(&self, participant: &ParticipantId) -> PlayerScore {
        player_score(&self.state, participant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::audit_log::NoAuditLog;
    use crate::use_cases::test_support::{
        MockGateway, ScriptedRuntime, StaticTopicSource, host, week10, week11,
    };
    use std::sync::Mutex;

    const TOPIC_REPLY: &str =
        r#"{"topic": "Should homework be banned?", "side_a": "Ban it", "side_b": "Keep it"}"#;

    fn card(logic: i64, creativity: i64, persuasiveness: i64) -> String {
        format!(
            r#"{{"logic": {}, "creativity": {}, "persuasiveness": {}, "total": {}, "one_line_feedback": "Good."}}"#,
            logic,
            creativity,
            persuasiveness,
            logic + creativity + persuasiveness
        )
    }

    #[derive(Default)]
    struct InMemoryStore {
        saved: Mutex<Option<ArenaState>>,
        fail: bool,
    }

    impl StateStore for InMemoryStore {
        fn load(&self) -> Result<Option<ArenaState>, StoreError> {
            Ok(self.saved.lock().unwrap().clone())
        }

        fn save(&self, state: &ArenaState) -> Result<(), StoreError> {
            if self.fail {
                return Err(StoreError::Io {
                    path: "memory".to_string(),
                    message: "disk full".to_string(),
                });
            }
            *self.saved.lock().unwrap() = Some(state.clone());
            Ok(())
        }
    }

    fn service(replies: Vec<String>, store: Arc<InMemoryStore>) -> ArenaService {
        let ports = ArenaPorts {
            source: Arc::new(StaticTopicSource::ok("headline one, headline two")),
            gateway: Arc::new(MockGateway::scripted(replies.into_iter().map(Ok).collect())),
            runtime: Arc::new(ScriptedRuntime::agreeing()),
            store,
            audit: Arc::new(NoAuditLog),
        };
        ArenaService::load(host(), ports, ArenaParams::default()).unwrap()
    }

    fn ctx(who: &str) -> CallContext {
        CallContext::new(ParticipantId::new(who), week10())
    }

    #[tokio::test]
    async fn test_full_week_scenario() {
        let store = Arc::new(InMemoryStore::default());
        let mut arena = service(
            vec![TOPIC_REPLY.to_string(), card(30, 20, 15), card(38, 28, 27)],
            store.clone(),
        );

        let opened = arena.open_round(&ctx("host")).await.unwrap();
        assert_eq!(opened, "Round 2025-W10 opened! Topic: Should homework be banned?");

        arena
            .submit_argument(&ctx("alice"), "a", "Kids need time to play and rest.")
            .unwrap();
        arena
            .submit_argument(&ctx("bob"), "b", "Practice at home builds lasting skill.")
            .unwrap();

        let info = arena.get_round_info();
        assert_eq!(info.participant_count, 2);
        assert!(info.round_open);

        arena.judge_all(&ctx("host")).await.unwrap();

        let board = arena.get_leaderboard();
        assert_eq!(board.period_id.as_str(), "2025-W10");
        assert_eq!(board.topic, "Should homework be banned?");
        let rows: Vec<_> = board
            .entries
            .iter()
            .map(|e| (e.rank, e.participant.as_str(), e.score))
            .collect();
        assert_eq!(rows, vec![(1, "bob", 93), (2, "alice", 65)]);

        let all_time = arena.get_all_time_leaderboard();
        assert_eq!(all_time.entries.len(), 2);
        assert_eq!(all_time.entries[0].score, 93);

        let mine = arena.get_my_score(&ParticipantId::new("alice"));
        assert_eq!((mine.period_score, mine.lifetime_score), (65, 65));

        assert_eq!(
            arena
                .submit_argument(&ctx("carol"), "a", "Too late for this round sadly.")
                .unwrap_err()
                .arena(),
            Some(&ArenaError::RoundNotOpen)
        );
        assert!(matches!(
            arena.open_round(&ctx("host")).await.unwrap_err().arena(),
            Some(ArenaError::PeriodAlreadyPlayed { .. })
        ));

        // Every successful mutation was persisted
        assert_eq!(store.load().unwrap().as_ref(), Some(arena.state()));
    }

    #[tokio::test]
    async fn test_lifetime_is_non_decreasing_across_rounds() {
        let store = Arc::new(InMemoryStore::default());
        let mut arena = service(
            vec![
                TOPIC_REPLY.to_string(),
                card(20, 10, 10),
                TOPIC_REPLY.to_string(),
                card(10, 5, 5),
            ],
            store,
        );
        let alice = ParticipantId::new("alice");

        arena.open_round(&ctx("host")).await.unwrap();
        arena
            .submit_argument(&ctx("alice"), "a", "First week argument, decent.")
            .unwrap();
        arena.judge_all(&ctx("host")).await.unwrap();
        let after_first = arena.get_my_score(&alice).lifetime_score;

        let next_week = CallContext::new(host(), week11());
        arena.open_round(&next_week).await.unwrap();
        assert_eq!(arena.get_my_score(&alice).period_score, 0);
        assert_eq!(arena.get_my_score(&alice).lifetime_score, after_first);

        arena
            .submit_argument(&ctx("alice"), "b", "Second week argument, shorter.")
            .unwrap();
        arena.judge_all(&next_week).await.unwrap();

        assert_eq!(after_first, 40);
        assert_eq!(arena.get_my_score(&alice).lifetime_score, 60);
    }

    #[tokio::test]
    async fn test_failed_save_keeps_previous_state() {
        let store = Arc::new(InMemoryStore {
            fail: true,
            ..InMemoryStore::default()
        });
        let mut arena = service(vec![TOPIC_REPLY.to_string()], store);

        let err = arena.open_round(&ctx("host")).await.unwrap_err();
        assert!(matches!(err, ArenaServiceError::Storage(_)));
        assert!(!arena.get_round_info().round_open);
    }

    #[tokio::test]
    async fn test_resumes_stored_state() {
        let store = Arc::new(InMemoryStore::default());
        {
            let mut arena = service(vec![TOPIC_REPLY.to_string()], store.clone());
            arena.open_round(&ctx("host")).await.unwrap();
            arena
                .submit_argument(&ctx("alice"), "a", "Persisted between processes.")
                .unwrap();
        }

        let arena = service(vec![], store);
        let info = arena.get_round_info();
        assert!(info.round_open);
        assert_eq!(info.participant_count, 1);
        assert_eq!(info.period_id.as_str(), "2025-W10");
    }
}
