use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use tracing::warn;
use uuid::Uuid;

use crate::assistant::history::{
    find_or_create_session, list_messages, save_assistant_message, save_user_message,
};
use crate::assistant::reply::AssistantReply;
use crate::errors::AppError;
use crate::models::chat::ChatMessageRow;
use crate::models::conversation::{ConversationContext, UserRole};
use crate::state::AppState;

const DEFAULT_SCHOOL_ID: &str = "demo-school";
const DEFAULT_ACTOR_ID: &str = "demo-user";
/// Returned as `sessionId` when the exchange was not stored.
const TEMP_SESSION_ID: &str = "temp-session";

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
    pub school_id: Option<String>,
    pub session_id: Option<String>,
    pub role: Option<UserRole>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub success: bool,
    #[serde(flatten)]
    pub reply: AssistantReply,
    pub session_id: String,
}

#[derive(Serialize)]
pub struct AssistantStatus {
    pub llm_configured: bool,
    pub model: String,
    pub persistence_enabled: bool,
}

/// POST /api/v1/chat
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let message = req.message.trim();
    if message.is_empty() {
        return Err(AppError::Validation("message must not be empty".to_string()));
    }

    let context = ConversationContext::new(
        req.role.unwrap_or_default(),
        req.school_id
            .unwrap_or_else(|| DEFAULT_SCHOOL_ID.to_string()),
        req.session_id
            .unwrap_or_else(|| DEFAULT_ACTOR_ID.to_string()),
    );

    let session_id = match &state.db {
        Some(db) => record_user_turn(db, &context, message).await,
        None => None,
    };

    let reply = state.assistant.process_message(message, &context).await;

    if let (Some(db), Some(session_id)) = (&state.db, session_id) {
        if let Err(e) = save_assistant_message(db, session_id, &reply).await {
            warn!("Failed to store assistant reply in session {session_id}: {e}");
        }
    }

    Ok(Json(ChatResponse {
        success: true,
        reply,
        session_id: session_id
            .map(|id| id.to_string())
            .unwrap_or_else(|| TEMP_SESSION_ID.to_string()),
    }))
}

/// Stores the incoming message. Storage problems never block the chat.
async fn record_user_turn(
    db: &PgPool,
    context: &ConversationContext,
    message: &str,
) -> Option<Uuid> {
    let session = match find_or_create_session(db, context).await {
        Ok(session) => session,
        Err(e) => {
            warn!("Chat history unavailable, continuing without it: {e}");
            return None;
        }
    };
    if let Err(e) = save_user_message(db, session.id, message).await {
        warn!("Failed to store user message in session {}: {e}", session.id);
    }
    Some(session.id)
}

/// GET /api/v1/chat/sessions/:id/messages
pub async fn handle_session_messages(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<ChatMessageRow>>, AppError> {
    let db = state.db.as_ref().ok_or(AppError::PersistenceDisabled)?;
    let messages = list_messages(db, id).await?;
    Ok(Json(messages))
}

/// GET /api/v1/assistant/status
pub async fn handle_status(State(state): State<AppState>) -> Json<AssistantStatus> {
    Json(AssistantStatus {
        llm_configured: state.assistant.is_configured(),
        model: state.assistant.model_name().to_string(),
        persistence_enabled: state.db.is_some(),
    })
}
