use std::sync::Arc;

use sqlx::PgPool;

use crate::assistant::HrGuru;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Built once at start-up around the shared LLM client.
    pub assistant: Arc<HrGuru>,
    /// Conversation history. `None` when `DATABASE_URL` is unset.
    pub db: Option<PgPool>,
}
