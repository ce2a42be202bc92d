//! HTTP Routes
//!
//! API Endpoints:
//! - /api/tts/save        POST    保存朗读记录
//! - /api/tts/history     GET     获取朗读历史（userId/limit 可选）
//! - /api/tts/statistics  GET     获取朗读统计（userId 可选）
//! - /api/tts/:id         DELETE  删除单条记录（幂等）
//! - /health              GET     健康检查

use axum::{
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .nest("/api/tts", tts_routes())
        .route("/health", get(handlers::health))
}

/// TTS 路由
fn tts_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/save", post(handlers::save_speech))
        .route("/history", get(handlers::get_history))
        .route("/statistics", get(handlers::get_statistics))
        .route("/:id", delete(handlers::delete_speech))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::util::ServiceExt;

    use crate::infrastructure::memory::InMemorySpeechStore;

    fn test_app() -> Router {
        let store = InMemorySpeechStore::new().arc();
        let state = Arc::new(AppState::new(store, "memory"));
        create_routes().with_state(state)
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn post_save(body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/tts/save")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_save_then_history() {
        let app = test_app();

        let response = app
            .clone()
            .oneshot(post_save(json!({"text": "Hello world"})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["success"], json!(true));
        assert_eq!(body["speech"]["text"], json!("Hello world"));
        assert_eq!(body["speech"]["voiceName"], json!("Default"));
        assert_eq!(body["message"], json!("Speech record saved successfully"));

        let response = app
            .oneshot(get("/api/tts/history?limit=1"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["success"], json!(true));
        assert_eq!(body["count"], json!(1));
        assert_eq!(body["speeches"][0]["text"], json!("Hello world"));
    }

    #[tokio::test]
    async fn test_save_empty_text_is_bad_request() {
        let app = test_app();

        let response = app
            .oneshot(post_save(json!({"text": "   "})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["success"], json!(false));
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_save_missing_text_is_bad_request() {
        let app = test_app();

        let response = app.oneshot(post_save(json!({}))).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["error"], json!("Text is required"));
    }

    #[tokio::test]
    async fn test_save_out_of_range_pitch_is_bad_request() {
        let app = test_app();

        let response = app
            .oneshot(post_save(json!({"text": "hi", "pitch": 2.5})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_history_non_numeric_limit_is_bad_request() {
        let app = test_app();

        let response = app
            .oneshot(get("/api/tts/history?limit=abc"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["success"], json!(false));
    }

    #[tokio::test]
    async fn test_statistics_shape() {
        let app = test_app();

        for text in ["abc", "abcde", "abcdefghij"] {
            let response = app
                .clone()
                .oneshot(post_save(json!({"text": text})))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        }

        let response = app.oneshot(get("/api/tts/statistics")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["success"], json!(true));
        assert_eq!(body["statistics"]["totalSpeeches"], json!(3));
        assert_eq!(body["statistics"]["totalCharacters"], json!(18));
        assert_eq!(body["statistics"]["averageLength"], json!(6));
    }

    #[tokio::test]
    async fn test_delete_unknown_id_succeeds() {
        let app = test_app();

        let request = Request::builder()
            .method("DELETE")
            .uri("/api/tts/00000000-0000-0000-0000-000000000000")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["success"], json!(true));
        assert_eq!(
            body["message"],
            json!("Speech record deleted successfully")
        );
    }

    #[tokio::test]
    async fn test_history_filtered_by_user() {
        let app = test_app();

        for (text, user) in [("mine", "u1"), ("theirs", "u2")] {
            app.clone()
                .oneshot(post_save(json!({"text": text, "userId": user})))
                .await
                .unwrap();
        }

        let response = app
            .oneshot(get("/api/tts/history?userId=u1"))
            .await
            .unwrap();
        let body = body_json(response).await;
        assert_eq!(body["count"], json!(1));
        assert_eq!(body["speeches"][0]["userId"], json!("u1"));
    }

    #[tokio::test]
    async fn test_health() {
        let app = test_app();

        let response = app.oneshot(get("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["status"], json!("OK"));
        assert_eq!(body["database"], json!("memory"));
    }
}
