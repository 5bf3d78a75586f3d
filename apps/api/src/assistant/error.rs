use thiserror::Error;

use crate::assistant::intent::IntentKind;
use crate::llm_client::LlmError;

/// Failures inside the assistant pipeline. The orchestrator converts every
/// variant into a safe reply; none of them reach the HTTP layer.
#[derive(Debug, Error)]
pub enum AssistantError {
    /// No usable provider credentials, or the provider rejected them.
    #[error("LLM provider unavailable: {0}")]
    UpstreamUnavailable(String),

    /// The provider answered with no content or content we could not parse.
    #[error("Malformed LLM response: {0}")]
    MalformedResponse(String),

    #[error("Action handler for '{intent}' failed: {reason}")]
    HandlerFault { intent: IntentKind, reason: String },

    /// Transport failures and non-auth API errors.
    #[error("LLM provider error: {0}")]
    Provider(LlmError),
}

impl From<LlmError> for AssistantError {
    fn from(err: LlmError) -> Self {
        let message = err.to_string();
        match err {
            LlmError::NotConfigured => AssistantError::UpstreamUnavailable(message),
            LlmError::Api { status, .. } if status == 401 || status == 403 => {
                AssistantError::UpstreamUnavailable(message)
            }
            LlmError::EmptyContent | LlmError::Parse(_) => {
                AssistantError::MalformedResponse(message)
            }
            other => AssistantError::Provider(other),
        }
    }
}
