pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::assistant::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Chat API
        .route("/api/v1/chat", post(handlers::handle_chat))
        .route(
            "/api/v1/chat/sessions/:id/messages",
            get(handlers::handle_session_messages),
        )
        .route("/api/v1/assistant/status", get(handlers::handle_status))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::assistant::testing::ScriptedModel;
    use crate::assistant::HrGuru;

    fn app_with(model: ScriptedModel) -> Router {
        build_router(AppState {
            assistant: Arc::new(HrGuru::new(Arc::new(model))),
            db: None,
        })
    }

    fn offline_app() -> Router {
        app_with(ScriptedModel::unconfigured())
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn post_chat(body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/v1/chat")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(offline_app(), get("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "hr-guru-api");
    }

    #[tokio::test]
    async fn test_chat_offline_answers_from_fallback() {
        let (status, body) = send(
            offline_app(),
            post_chat(json!({
                "message": "Initiate police verification for new hire Anjali Verma",
                "schoolId": "dps-rk-puram"
            })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["intent"]["intent"], "background_check_initiation");
        assert_eq!(body["actionable"], true);
        assert!(!body["data"]["process_steps"].as_array().unwrap().is_empty());
        assert_eq!(body["sessionId"], "temp-session");
        assert!(body["response"].as_str().unwrap().contains("verification"));
    }

    #[tokio::test]
    async fn test_chat_with_model_and_role() {
        let app = app_with(ScriptedModel::replying([
            r#"{"intent": "find_substitute_teacher", "entities": {"subject": "Mathematics", "grade": "7"}, "confidence": 0.91}"#,
            "Ms. Meera Iyer is free tomorrow for Class 7 Mathematics.",
        ]));
        let (status, body) = send(
            app,
            post_chat(json!({
                "message": "Need a maths substitute for class 7",
                "role": "HOD",
                "sessionId": "hod-science"
            })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["intent"]["intent"], "find_substitute_teacher");
        assert_eq!(body["data"]["requested_subject"], "Mathematics");
        assert_eq!(body["data"]["requested_grade"], "7");
        assert_eq!(body["sessionId"], "temp-session");
    }

    #[tokio::test]
    async fn test_chat_failure_still_returns_success_envelope() {
        let app = app_with(ScriptedModel::replying(["definitely not json"]));
        let (status, body) = send(app, post_chat(json!({"message": "payroll please"}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["intent"]["intent"], "error");
        assert_eq!(body["intent"]["confidence"], 0.0);
        assert!(body["data"].is_null());
    }

    #[tokio::test]
    async fn test_chat_rejects_blank_message() {
        for payload in [json!({"message": "   "}), json!({})] {
            let (status, body) = send(offline_app(), post_chat(payload)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        }
    }

    #[tokio::test]
    async fn test_history_requires_persistence() {
        let (status, body) = send(
            offline_app(),
            get("/api/v1/chat/sessions/5f0c6c1e-3f55-4c57-9d2e-0d8a3c1f6b21/messages"),
        )
        .await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["error"]["code"], "PERSISTENCE_DISABLED");
    }

    #[tokio::test]
    async fn test_status_never_exposes_key() {
        let (status, body) = send(offline_app(), get("/api/v1/assistant/status")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["llm_configured"], false);
        assert_eq!(body["persistence_enabled"], false);
        assert_eq!(body["model"], "scripted");
        assert_eq!(body.as_object().unwrap().len(), 3);
    }
}
