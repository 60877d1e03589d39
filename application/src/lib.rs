//! Application layer for verdict-arena
//!
//! This crate contains use cases, port definitions, the equivalence
//! strategies and the [`ArenaService`] surface. It depends only on the
//! domain layer.

pub mod config;
pub mod equivalence;
pub mod ports;
pub mod service;
pub mod use_cases;

// Re-export commonly used types
pub use config::ArenaParams;
pub use equivalence::{EquivalenceStrategy, ExactMatch, TolerantJudge};
pub use ports::{
    audit_log::{AuditEvent, AuditLog, NoAuditLog},
    consensus::{ConsensusError, ConsensusRuntime, NondetOperation, OperationError},
    llm_gateway::{GatewayError, LlmGateway, LlmSession},
    progress::{JudgingProgress, NoProgress},
    state_store::{StateStore, StoreError},
    topic_source::{SourceError, TopicSource},
};
pub use service::{ArenaPorts, ArenaService, ArenaServiceError};
pub use use_cases::judge_all::{JudgeAllUseCase, ScoreArgumentOperation};
pub use use_cases::open_round::{FetchTopicOperation, OpenRoundUseCase};
pub use use_cases::submit_argument::SubmitArgumentUseCase;
