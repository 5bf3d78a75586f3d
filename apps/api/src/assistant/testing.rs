//! Scripted `ChatModel` for pipeline tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::llm_client::{ChatModel, CompletionRequest, LlmError};

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub system: String,
    pub user: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub json_mode: bool,
}

/// Returns queued replies in order and records every request it receives.
/// An exhausted queue answers `EmptyContent`.
pub struct ScriptedModel {
    configured: bool,
    replies: Mutex<VecDeque<Result<String, LlmError>>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl ScriptedModel {
    pub fn unconfigured() -> Self {
        Self::scripted(false, Vec::new())
    }

    pub fn replying<const N: usize>(replies: [&str; N]) -> Self {
        Self::scripted(
            true,
            replies.into_iter().map(|r| Ok(r.to_string())).collect(),
        )
    }

    pub fn scripted(configured: bool, replies: Vec<Result<String, LlmError>>) -> Self {
        Self {
            configured,
            replies: Mutex::new(replies.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatModel for ScriptedModel {
    async fn complete(&self, request: &CompletionRequest<'_>) -> Result<String, LlmError> {
        self.requests.lock().unwrap().push(RecordedRequest {
            system: request.system.to_string(),
            user: request.user.to_string(),
            temperature: request.temperature,
            max_tokens: request.max_tokens,
            json_mode: request.json_mode,
        });
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(LlmError::EmptyContent))
    }

    fn is_configured(&self) -> bool {
        self.configured
    }

    fn model_name(&self) -> &str {
        "scripted"
    }
}
