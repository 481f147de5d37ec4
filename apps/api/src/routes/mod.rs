pub mod health;

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/analyses",
            post(handlers::handle_analyze).get(handlers::handle_list),
        )
        .route("/api/v1/analyses/:id", get(handlers::handle_get))
        .route(
            "/api/v1/analyses/:id/skills",
            patch(handlers::handle_toggle_skill),
        )
        .route("/api/v1/analyses/:id/export", get(handlers::handle_export))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::analysis::engine::Analyzer;
    use crate::config::{Config, DEFAULT_HISTORY_KEY};
    use crate::store::slot::MemorySlot;
    use crate::store::AnalysisStore;

    fn app() -> Router {
        let state = AppState {
            store: AnalysisStore::new(Arc::new(MemorySlot::new())),
            analyzer: Arc::new(Analyzer::default()),
            config: Config {
                redis_url: None,
                history_file: None,
                history_key: DEFAULT_HISTORY_KEY.to_string(),
                port: 0,
                rust_log: "info".to_string(),
            },
        };
        build_router(state)
    }

    fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, bytes.to_vec())
    }

    async fn send_json(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let (status, bytes) = send(app, request).await;
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    async fn create(app: &Router, jd: &str, company: &str) -> Value {
        let (status, body) = send_json(
            app,
            json_request(
                "POST",
                "/api/v1/analyses",
                json!({"jd_text": jd, "company": company, "role": "SDE"}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        body
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send_json(&app(), get_request("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_analyze_saves_and_lists() {
        let app = app();
        let body = create(&app, "React and Node.js developer with SQL", "Google").await;
        let analysis = &body["analysis"];
        assert_eq!(analysis["extractedSkills"]["Web"], json!(["React", "Node.js"]));
        assert_eq!(analysis["smartRounds"].as_array().unwrap().len(), 4);
        assert_eq!(analysis["questions"].as_array().unwrap().len(), 10);
        assert_eq!(body["warnings"][0]["code"], "short_description");

        let (status, list) = send_json(&app, get_request("/api/v1/analyses")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(list.as_array().unwrap().len(), 1);
        assert_eq!(list[0]["id"], analysis["id"]);
    }

    #[tokio::test]
    async fn test_blank_jd_is_bad_request() {
        let (status, body) = send_json(
            &app(),
            json_request("POST", "/api/v1/analyses", json!({"jd_text": "  "})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_get_unknown_is_not_found() {
        let uri = format!("/api/v1/analyses/{}", uuid::Uuid::new_v4());
        let (status, body) = send_json(&app(), get_request(&uri)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_toggle_skill_rescores_from_base() {
        let app = app();
        let created = create(&app, "Python and Docker engineer", "Tiny Robots").await;
        let id = created["analysis"]["id"].as_str().unwrap().to_string();
        let base = created["analysis"]["baseScore"].as_u64().unwrap();
        let uri = format!("/api/v1/analyses/{id}/skills");

        let (status, known) = send_json(
            &app,
            json_request("PATCH", &uri, json!({"skill": "Python", "confidence": "know"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(known["readinessScore"].as_u64().unwrap(), base + 2);
        assert_eq!(known["skillConfidenceMap"]["Python"], "know");

        let (_, practice) = send_json(
            &app,
            json_request("PATCH", &uri, json!({"skill": "Python", "confidence": "practice"})),
        )
        .await;
        assert_eq!(practice["readinessScore"].as_u64().unwrap(), base - 2);
        assert_eq!(practice["baseScore"].as_u64().unwrap(), base);
    }

    #[tokio::test]
    async fn test_toggle_undetected_skill_is_rejected() {
        let app = app();
        let created = create(&app, "Python engineer", "").await;
        let id = created["analysis"]["id"].as_str().unwrap().to_string();
        let (status, _) = send_json(
            &app,
            json_request(
                "PATCH",
                &format!("/api/v1/analyses/{id}/skills"),
                json!({"skill": "Haskell", "confidence": "know"}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_export_questions_as_text() {
        let app = app();
        let created = create(&app, "Java backend role", "Acme").await;
        let id = created["analysis"]["id"].as_str().unwrap().to_string();
        let (status, bytes) = send(
            &app,
            get_request(&format!("/api/v1/analyses/{id}/export?section=questions")),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.starts_with("1. Tell me about yourself"));
        assert!(text.contains("\n10. "));
    }
}
