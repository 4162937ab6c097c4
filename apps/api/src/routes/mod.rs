pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::ask::handlers::handle_ask;
use crate::fit::handlers::handle_fit;
use crate::knowledge::handlers::handle_get_profile;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/profile", get(handle_get_profile))
        .route("/api/v1/fit", post(handle_fit))
        .route("/api/v1/ask", post(handle_ask))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt; // for `oneshot`

    use crate::ask::prompts::build_resume_context;
    use crate::fit::engine::RuleFitAnalyzer;
    use crate::gateway::GatewayClient;
    use crate::knowledge::KnowledgeBase;

    fn test_state() -> AppState {
        let knowledge = Arc::new(KnowledgeBase::builtin());
        let system_prompt: Arc<str> = build_resume_context(&knowledge).into();
        AppState {
            // Unroutable address: tests below never reach the gateway.
            gateway: GatewayClient::new(
                "test-key".to_string(),
                "http://127.0.0.1:9/v1/chat/completions".to_string(),
            ),
            knowledge,
            system_prompt,
            fit_analyzer: Arc::new(RuleFitAnalyzer),
        }
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_returns_ok() {
        let app = build_router(test_state());
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["status"], "ok");
    }

    #[tokio::test]
    async fn test_profile_serves_knowledge_base() {
        let app = build_router(test_state());
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/profile")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["profile"]["name"], "Deepak Dhami");
        assert_eq!(json["experience"].as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_fit_blank_input_is_rejected_with_inline_message() {
        let app = build_router(test_state());
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/fit")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"job_description": "   "}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(
            json["error"]["message"],
            "Please enter a job description to analyze."
        );
    }

    #[tokio::test]
    async fn test_fit_strong_example_round_trip() {
        let app = build_router(test_state());
        let body = serde_json::json!({
            "job_description": "Lead SDET — Series B Fintech\n\nWe're looking for someone \
                with deep test automation experience, AI/ML testing knowledge, and the \
                ability to lead cross-functional QA initiatives."
        });
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/fit")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["status"], "Strong Fit");
        assert_eq!(json["matches"].as_array().unwrap().len(), 7);
    }

    #[tokio::test]
    async fn test_ask_round_trip_returns_answer_with_confidence() {
        let addr = crate::gateway::test_support::spawn_fixture_server(
            "200 OK",
            r#"{"choices":[{"message":{"role":"assistant","content":"A seasoned QA leader."}}]}"#,
        )
        .await;
        let mut state = test_state();
        state.gateway = GatewayClient::new(
            "test-key".to_string(),
            format!("http://{addr}/v1/chat/completions"),
        );
        let app = build_router(state);

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/ask")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(
                        r#"{"question": "Tell me about his leadership"}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["answer"], "A seasoned QA leader.");
        assert_eq!(json["confidence"], 95);
    }

    #[tokio::test]
    async fn test_ask_missing_question_is_rejected() {
        let app = build_router(test_state());
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/ask")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from("{}"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"]["message"], "Question is required");
    }

    #[tokio::test]
    async fn test_ask_non_string_question_is_rejected() {
        let app = build_router(test_state());
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/ask")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"question": 42}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"]["message"], "Question is required");
    }
}
