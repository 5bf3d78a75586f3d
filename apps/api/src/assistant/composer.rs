//! Response Composer: second LLM call, free text in a role-appropriate tone.

use tracing::debug;

use crate::assistant::error::AssistantError;
use crate::assistant::intent::ResolvedIntent;
use crate::assistant::prompts::response_system_prompt;
use crate::llm_client::{ChatModel, CompletionRequest};
use crate::models::conversation::ConversationContext;

const COMPOSE_TEMPERATURE: f32 = 0.3;
const COMPOSE_MAX_TOKENS: u32 = 800;

pub async fn compose(
    message: &str,
    intent: &ResolvedIntent,
    context: &ConversationContext,
    model: &dyn ChatModel,
) -> Result<String, AssistantError> {
    let system = response_system_prompt(intent, context);
    let request = CompletionRequest {
        system: &system,
        user: message,
        temperature: COMPOSE_TEMPERATURE,
        max_tokens: COMPOSE_MAX_TOKENS,
        json_mode: false,
    };

    let text = model.complete(&request).await?;
    let text = text.trim();
    if text.is_empty() {
        return Err(AssistantError::MalformedResponse(
            "response text was empty".to_string(),
        ));
    }

    debug!("Composed {} chars for intent '{}'", text.len(), intent.intent);
    Ok(text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assistant::intent::IntentKind;
    use crate::assistant::testing::ScriptedModel;
    use crate::llm_client::LlmError;
    use crate::models::conversation::UserRole;

    fn context() -> ConversationContext {
        ConversationContext::new(UserRole::Principal, "sunrise-academy", "principal-1")
    }

    fn intent() -> ResolvedIntent {
        ResolvedIntent::synthetic(IntentKind::RetentionRiskAnalysis, 0.87)
    }

    #[tokio::test]
    async fn test_returns_trimmed_text() {
        let model = ScriptedModel::replying(["\n  Two teachers need attention this term.  \n"]);
        let text = compose("who might leave?", &intent(), &context(), &model)
            .await
            .unwrap();
        assert_eq!(text, "Two teachers need attention this term.");
    }

    #[tokio::test]
    async fn test_request_is_free_text() {
        let model = ScriptedModel::replying(["Noted."]);
        compose("who might leave?", &intent(), &context(), &model)
            .await
            .unwrap();
        let seen = model.requests();
        assert!(!seen[0].json_mode);
        assert_eq!(seen[0].max_tokens, COMPOSE_MAX_TOKENS);
        assert!((seen[0].temperature - COMPOSE_TEMPERATURE).abs() < f32::EPSILON);
        assert!(seen[0].system.contains("Intent: retention_risk_analysis"));
        assert!(seen[0].system.contains("strategic"));
    }

    #[tokio::test]
    async fn test_whitespace_only_is_malformed() {
        let model = ScriptedModel::replying(["   \n\t"]);
        let err = compose("who might leave?", &intent(), &context(), &model)
            .await
            .unwrap_err();
        assert!(matches!(err, AssistantError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn test_transport_failure_is_provider_error() {
        let model = ScriptedModel::scripted(
            true,
            vec![Err(LlmError::Api {
                status: 500,
                message: "upstream overloaded".to_string(),
            })],
        );
        let err = compose("who might leave?", &intent(), &context(), &model)
            .await
            .unwrap_err();
        assert!(matches!(err, AssistantError::Provider(_)));
    }
}
