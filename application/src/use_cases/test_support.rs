//! Shared test mocks for the use cases and the service.

use crate::ports::audit_log::{AuditEvent, AuditLog};
use crate::ports::consensus::{ConsensusError, ConsensusRuntime, NondetOperation};
use crate::ports::llm_gateway::{GatewayError, LlmGateway, LlmSession};
use crate::ports::topic_source::{SourceError, TopicSource};
use arena_domain::ParticipantId;
use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

pub fn host() -> ParticipantId {
    ParticipantId::new("host")
}

/// Wednesday of ISO week 2025-W10.
pub fn week10() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 5, 12, 0, 0).unwrap()
}

pub fn week11() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 12, 12, 0, 0).unwrap()
}

// ==================== Gateway ====================

type Replies = Arc<Mutex<VecDeque<Result<String, GatewayError>>>>;

/// Gateway whose sessions pop replies from one shared queue.
pub struct MockGateway {
    replies: Replies,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl MockGateway {
    pub fn with_replies<const N: usize>(replies: [&str; N]) -> Self {
        Self::scripted(replies.iter().map(|r| Ok(r.to_string())).collect())
    }

    pub fn scripted(replies: Vec<Result<String, GatewayError>>) -> Self {
        Self {
            replies: Arc::new(Mutex::new(VecDeque::from(replies))),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Every prompt sent through any session, in order.
    pub fn prompts(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.prompts)
    }
}

#[async_trait]
impl LlmGateway for MockGateway {
    async fn create_session(
        &self,
        model: &str,
        _system_prompt: &str,
    ) -> Result<Box<dyn LlmSession>, GatewayError> {
        Ok(Box::new(MockSession {
            model: model.to_string(),
            replies: Arc::clone(&self.replies),
            prompts: Arc::clone(&self.prompts),
        }))
    }
}

struct MockSession {
    model: String,
    replies: Replies,
    prompts: Arc<Mutex<Vec<String>>>,
}

#[async_trait]
impl LlmSession for MockSession {
    fn model(&self) -> &str {
        &self.model
    }

    async fn send(&self, content: &str) -> Result<String, GatewayError> {
        self.prompts.lock().unwrap().push(content.to_string());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(GatewayError::RequestFailed("No more replies".to_string())))
    }
}

// ==================== Topic source ====================

pub struct StaticTopicSource {
    page: Result<String, SourceError>,
}

impl StaticTopicSource {
    pub fn ok(page: &str) -> Self {
        Self {
            page: Ok(page.to_string()),
        }
    }

    pub fn failing(err: SourceError) -> Self {
        Self { page: Err(err) }
    }
}

#[async_trait]
impl TopicSource for StaticTopicSource {
    async fn fetch(&self) -> Result<String, SourceError> {
        self.page.clone()
    }

    fn describe(&self) -> String {
        "static".to_string()
    }
}

// ==================== Consensus runtime ====================

/// Runs every operation once and decides by script.
///
/// Tolerant decisions pop from `tolerant_script`; an empty script accepts.
#[derive(Default)]
pub struct ScriptedRuntime {
    diverge: bool,
    tolerant_script: Mutex<VecDeque<bool>>,
    pub tolerant_calls: Mutex<Vec<String>>,
}

impl ScriptedRuntime {
    pub fn agreeing() -> Self {
        Self::default()
    }

    pub fn diverging() -> Self {
        Self {
            diverge: true,
            ..Self::default()
        }
    }

    pub fn with_tolerant_script(script: impl IntoIterator<Item = bool>) -> Self {
        Self {
            tolerant_script: Mutex::new(script.into_iter().collect()),
            ..Self::default()
        }
    }
}

#[async_trait]
impl ConsensusRuntime for ScriptedRuntime {
    async fn run_exact(&self, op: Arc<dyn NondetOperation>) -> Result<String, ConsensusError> {
        let output = op.run("leader-model").await?;
        if self.diverge {
            return Err(ConsensusError::Divergence(format!(
                "{}: 2 distinct outputs",
                op.label()
            )));
        }
        Ok(output)
    }

    async fn run_tolerant(
        &self,
        op: Arc<dyn NondetOperation>,
        _task: &str,
        _criteria: &str,
    ) -> Result<String, ConsensusError> {
        self.tolerant_calls.lock().unwrap().push(op.label());
        let proposal = op.run("leader-model").await?;
        let accepted = self.tolerant_script.lock().unwrap().pop_front().unwrap_or(true);
        if accepted {
            Ok(proposal)
        } else {
            Err(ConsensusError::Rejected(format!("{}: [●○○]", op.label())))
        }
    }
}

// ==================== Audit ====================

#[derive(Default)]
pub struct RecordingAudit {
    events: Mutex<Vec<AuditEvent>>,
}

impl RecordingAudit {
    pub fn types(&self) -> Vec<&'static str> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .map(|e| e.event_type)
            .collect()
    }
}

impl AuditLog for RecordingAudit {
    fn log(&self, event: AuditEvent) {
        self.events.lock().unwrap().push(event);
    }
}
