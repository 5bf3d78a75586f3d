use serde::Serialize;

use crate::assistant::actions::ActionResult;
use crate::assistant::intent::{IntentKind, ResolvedIntent};

/// What the assistant hands back for one message.
///
/// Invariant: `data` is only ever present on actionable replies.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssistantReply {
    #[serde(rename = "response")]
    pub response_text: String,
    pub intent: ResolvedIntent,
    pub actionable: bool,
    pub data: Option<ActionResult>,
}

impl AssistantReply {
    /// Reply from the model path. `actionable` follows the intent; data on a
    /// non-actionable intent is dropped.
    pub fn from_intent(
        response_text: String,
        intent: ResolvedIntent,
        data: Option<ActionResult>,
    ) -> Self {
        let actionable = intent.is_actionable();
        Self {
            response_text,
            intent,
            actionable,
            data: data.filter(|_| actionable),
        }
    }

    /// A reply carrying no data, used for informational and failure answers.
    pub fn informational(response_text: String, intent: ResolvedIntent) -> Self {
        Self {
            response_text,
            intent,
            actionable: false,
            data: None,
        }
    }

    /// Safe reply substituted for a pipeline failure.
    pub fn failure(response_text: String) -> Self {
        Self::informational(response_text, ResolvedIntent::synthetic(IntentKind::Error, 0.0))
    }
}
