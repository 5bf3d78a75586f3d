use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ChatSessionRow {
    pub id: Uuid,
    pub user_id: String,
    pub user_role: String,
    pub school_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One stored chat turn. `role` is `USER` or `ASSISTANT`; the intent columns
/// are only filled for assistant turns.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ChatMessageRow {
    pub id: Uuid,
    pub session_id: Uuid,
    pub role: String,
    pub content: String,
    pub intent: Option<String>,
    pub entities: Option<Value>,
    pub response: Option<Value>,
    pub created_at: DateTime<Utc>,
}
