//! Intent Resolver: first LLM call, JSON mode.

use tracing::info;

use crate::assistant::error::AssistantError;
use crate::assistant::intent::ResolvedIntent;
use crate::assistant::prompts::intent_system_prompt;
use crate::llm_client::{complete_json, ChatModel, CompletionRequest};
use crate::models::conversation::ConversationContext;

const RESOLVE_TEMPERATURE: f32 = 0.1;
const RESOLVE_MAX_TOKENS: u32 = 500;

/// Classifies `message` into an intent with extracted entities. Single attempt.
pub async fn resolve(
    message: &str,
    context: &ConversationContext,
    model: &dyn ChatModel,
) -> Result<ResolvedIntent, AssistantError> {
    if !model.is_configured() {
        return Err(AssistantError::UpstreamUnavailable(format!(
            "no API key configured for {}",
            model.model_name()
        )));
    }

    let system = intent_system_prompt(context);
    let request = CompletionRequest {
        system: &system,
        user: message,
        temperature: RESOLVE_TEMPERATURE,
        max_tokens: RESOLVE_MAX_TOKENS,
        json_mode: true,
    };

    let intent: ResolvedIntent = complete_json(model, &request).await?;
    info!(
        "Resolved intent '{}' (confidence {:.2}, {} entities)",
        intent.intent,
        intent.confidence,
        intent.entities.len()
    );
    Ok(intent)
}
