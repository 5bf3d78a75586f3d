//! Orchestrator: runs resolve → dispatch → compose for one message.
//!
//! `process_message` never fails: any pipeline error is logged and replaced by
//! a safe `error` reply. Without a configured provider the keyword fallback
//! answers and the model is never called.

use std::sync::Arc;

use tracing::{error, info, warn};

use crate::assistant::composer::compose;
use crate::assistant::dispatcher::dispatch;
use crate::assistant::error::AssistantError;
use crate::assistant::fallback::fallback;
use crate::assistant::reply::AssistantReply;
use crate::assistant::resolver::resolve;
use crate::assistant::tone::apology_closing;
use crate::llm_client::ChatModel;
use crate::models::conversation::ConversationContext;

const UPSTREAM_UNAVAILABLE_REPLY: &str = "I'm unable to reach my AI service right now. \
    Please contact your administrator to check the HR Guru configuration.";

const GENERIC_APOLOGIES: [&str; 3] = [
    "I apologize, but I'm experiencing technical difficulties.",
    "Sorry, something went wrong while I was working on that.",
    "I couldn't complete that request just now. Please try again in a moment.",
];

/// The assistant. Holds only read-only state and is shared across requests.
pub struct HrGuru {
    model: Arc<dyn ChatModel>,
}

impl HrGuru {
    pub fn new(model: Arc<dyn ChatModel>) -> Self {
        Self { model }
    }

    pub fn is_configured(&self) -> bool {
        self.model.is_configured()
    }

    pub fn model_name(&self) -> &str {
        self.model.model_name()
    }

    /// Answers `message`. Failures come back as an `error` reply, never as `Err`.
    pub async fn process_message(
        &self,
        message: &str,
        context: &ConversationContext,
    ) -> AssistantReply {
        match self.try_process_message(message, context).await {
            Ok(reply) => reply,
            Err(err) => {
                match &err {
                    AssistantError::HandlerFault { .. } => warn!("Assistant pipeline failed: {err}"),
                    _ => error!("Assistant pipeline failed: {err}"),
                }
                failure_reply(&err, message, context)
            }
        }
    }

    pub async fn try_process_message(
        &self,
        message: &str,
        context: &ConversationContext,
    ) -> Result<AssistantReply, AssistantError> {
        if !self.model.is_configured() {
            info!("LLM provider not configured, answering with keyword fallback");
            return Ok(fallback(message));
        }

        let intent = resolve(message, context, self.model.as_ref()).await?;
        let data = if intent.is_actionable() {
            dispatch(&intent, context)?
        } else {
            None
        };
        let response_text = compose(message, &intent, context, self.model.as_ref()).await?;

        Ok(AssistantReply::from_intent(response_text, intent, data))
    }
}

/// Safe reply for a failed pipeline. Wording is a pure function of the error
/// kind, the message, and the caller's role.
fn failure_reply(
    err: &AssistantError,
    message: &str,
    context: &ConversationContext,
) -> AssistantReply {
    let text = match err {
        AssistantError::UpstreamUnavailable(_) => UPSTREAM_UNAVAILABLE_REPLY.to_string(),
        AssistantError::MalformedResponse(_)
        | AssistantError::HandlerFault { .. }
        | AssistantError::Provider(_) => format!(
            "{} {}",
            generic_apology(message),
            apology_closing(context.role)
        ),
    };
    AssistantReply::failure(text)
}

fn generic_apology(message: &str) -> &'static str {
    let seed = message
        .bytes()
        .fold(0usize, |acc, b| acc.wrapping_add(b as usize));
    GENERIC_APOLOGIES[seed % GENERIC_APOLOGIES.len()]
}
