// Integration tests for the HTTP API

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use cquiz_backend::config::QuizConfig;
use cquiz_backend::routes::build_router;
use cquiz_backend::state::AppState;

fn app() -> (Router, Arc<AppState>) {
    let mut cfg = QuizConfig::default();
    cfg.engine.rng_seed = Some(42);
    let state = Arc::new(AppState::new(cfg));
    (build_router(state.clone()), state)
}

async fn call(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let req = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(b) => req
            .header("content-type", "application/json")
            .body(Body::from(b.to_string()))
            .unwrap(),
        None => req.body(Body::empty()).unwrap(),
    };
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

#[tokio::test]
async fn test_health_and_categories() {
    let (app, _) = app();
    let (status, body) = call(&app, "GET", "/api/v1/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "ok": true }));

    let (status, body) = call(&app, "GET", "/api/v1/categories", None).await;
    assert_eq!(status, StatusCode::OK);
    let cats = body["categories"].as_array().unwrap();
    assert_eq!(cats.len(), 6);
    assert_eq!(cats[0], json!({ "key": "c-basics", "questions": 30 }));
}

#[tokio::test]
async fn test_quiz_hides_answers_then_grades() {
    let (app, state) = app();
    let (status, body) = call(&app, "POST", "/api/v1/quiz", Some(json!({ "category": "c-basics" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["category"], "c-basics");
    let questions = body["questions"].as_array().unwrap();
    assert_eq!(questions.len(), 30);
    assert!(questions[0].get("answer").is_none());
    assert!(questions[0].get("explanation").is_none());

    let quiz_id = body["quizId"].as_str().unwrap().to_string();
    let expected = state.get_question(&quiz_id, 5).await.unwrap().answer;

    let (status, body) = call(
        &app,
        "POST",
        "/api/v1/answer",
        Some(json!({ "quizId": quiz_id, "index": 5, "answer": format!("  {}  ", expected) })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["correct"], true);
    assert_eq!(body["expected"], expected.as_str());

    let (status, body) = call(
        &app,
        "POST",
        "/api/v1/submit",
        Some(json!({ "quizId": quiz_id, "answers": [] })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["score"], 0);
    assert_eq!(body["total"], 30);
    assert_eq!(body["results"].as_array().unwrap().len(), 30);
}

#[tokio::test]
async fn test_error_statuses() {
    let (app, _) = app();
    let (status, body) = call(&app, "POST", "/api/v1/quiz", Some(json!({ "category": "kernel" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "unknown quiz category: kernel");

    let (status, _) = call(
        &app,
        "POST",
        "/api/v1/answer",
        Some(json!({ "quizId": "missing", "index": 0, "answer": "1" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = call(&app, "POST", "/api/v1/quiz", Some(json!({ "category": "algorithms" }))).await;
    let quiz_id = body["quizId"].as_str().unwrap().to_string();
    let (status, body) = call(
        &app,
        "POST",
        "/api/v1/answer",
        Some(json!({ "quizId": quiz_id, "index": 20, "answer": "O(n)" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("has no question 20"));
}
