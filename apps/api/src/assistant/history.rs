//! Conversation history: chat sessions and their messages in PostgreSQL.
//!
//! Sessions are keyed by (user, role): the most recently active one is reused.

use serde_json::{json, Value};
use sqlx::PgPool;
use uuid::Uuid;

use crate::assistant::reply::AssistantReply;
use crate::errors::AppError;
use crate::models::chat::{ChatMessageRow, ChatSessionRow};
use crate::models::conversation::ConversationContext;

const USER_ROLE: &str = "USER";
const ASSISTANT_ROLE: &str = "ASSISTANT";

pub async fn find_or_create_session(
    db: &PgPool,
    context: &ConversationContext,
) -> Result<ChatSessionRow, sqlx::Error> {
    let existing: Option<ChatSessionRow> = sqlx::query_as(
        "SELECT * FROM chat_sessions WHERE user_id = $1 AND user_role = $2 ORDER BY updated_at DESC LIMIT 1",
    )
    .bind(&context.actor_id)
    .bind(context.role.as_str())
    .fetch_optional(db)
    .await?;

    if let Some(session) = existing {
        return Ok(session);
    }

    sqlx::query_as(
        r#"
        INSERT INTO chat_sessions (id, user_id, user_role, school_id)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&context.actor_id)
    .bind(context.role.as_str())
    .bind(&context.school_id)
    .fetch_one(db)
    .await
}

pub async fn save_user_message(
    db: &PgPool,
    session_id: Uuid,
    content: &str,
) -> Result<ChatMessageRow, sqlx::Error> {
    insert_message(db, session_id, USER_ROLE, content, None, None, None).await
}

/// Stores the reply text with its intent, entities, and action payload.
pub async fn save_assistant_message(
    db: &PgPool,
    session_id: Uuid,
    reply: &AssistantReply,
) -> Result<ChatMessageRow, sqlx::Error> {
    let entities = Value::Object(reply.intent.entities.clone());
    let response = json!({
        "actionable": reply.actionable,
        "data": reply.data,
    });
    let row = insert_message(
        db,
        session_id,
        ASSISTANT_ROLE,
        &reply.response_text,
        Some(reply.intent.intent.as_str()),
        Some(entities),
        Some(response),
    )
    .await?;

    sqlx::query("UPDATE chat_sessions SET updated_at = NOW() WHERE id = $1")
        .bind(session_id)
        .execute(db)
        .await?;

    Ok(row)
}

/// Messages of one session, oldest first.
pub async fn list_messages(db: &PgPool, session_id: Uuid) -> Result<Vec<ChatMessageRow>, AppError> {
    let session: Option<ChatSessionRow> =
        sqlx::query_as("SELECT * FROM chat_sessions WHERE id = $1")
            .bind(session_id)
            .fetch_optional(db)
            .await?;

    if session.is_none() {
        return Err(AppError::NotFound(format!("Chat session {session_id} not found")));
    }

    let messages = sqlx::query_as(
        "SELECT * FROM chat_messages WHERE session_id = $1 ORDER BY created_at ASC, id ASC",
    )
    .bind(session_id)
    .fetch_all(db)
    .await?;

    Ok(messages)
}

async fn insert_message(
    db: &PgPool,
    session_id: Uuid,
    role: &str,
    content: &str,
    intent: Option<&str>,
    entities: Option<Value>,
    response: Option<Value>,
) -> Result<ChatMessageRow, sqlx::Error> {
    sqlx::query_as(
        r#"
        INSERT INTO chat_messages (id, session_id, role, content, intent, entities, response)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(session_id)
    .bind(role)
    .bind(content)
    .bind(intent)
    .bind(entities)
    .bind(response)
    .fetch_one(db)
    .await
}
