//! Integration tests for the leaderboard API endpoints.
//!
//! Tests use Axum's `Router` directly via `tower::ServiceExt` without
//! starting a TCP server, against the in-memory backend. This validates
//! handler logic, validation, and the reconciliation semantics shared by
//! both storage modes without needing a live database.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, Response, StatusCode};
use axum::Router;
use highscore_api::router::build_router;
use highscore_api::state::AppState;
use serde_json::{json, Value};
use tower::ServiceExt;

fn make_router() -> Router {
    build_router(Arc::new(AppState::in_memory()))
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn post_score(router: &Router, body: &Value) -> Response<Body> {
    router
        .clone()
        .oneshot(
            Request::post("/api/score")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

async fn get_leaderboard(router: &Router) -> Value {
    let response = router
        .clone()
        .oneshot(
            Request::get("/api/leaderboard")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    body_to_json(response.into_body()).await
}

// =========================================================================
// Tests
// =========================================================================

#[tokio::test]
async fn test_index_returns_html() {
    let router = make_router();

    let response = router
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap();
    assert!(content_type.contains("text/html"));
}

#[tokio::test]
async fn test_empty_leaderboard() {
    let router = make_router();

    let json = get_leaderboard(&router).await;
    assert_eq!(json, json!([]));
}

#[tokio::test]
async fn test_submit_new_handle() {
    let router = make_router();

    let response = post_score(&router, &json!({"handle": "AAA", "score": 100})).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json, json!({"message": "Score saved successfully"}));

    let board = get_leaderboard(&router).await;
    assert_eq!(board, json!([{"handle": "AAA", "score": 100.0}]));
}

#[tokio::test]
async fn test_lower_score_keeps_stored_value() {
    let router = make_router();
    post_score(&router, &json!({"handle": "AAA", "score": 100})).await;

    let response = post_score(&router, &json!({"handle": "AAA", "score": 50})).await;
    // Still a 201 -- the caller cannot tell a no-op from an update.
    assert_eq!(response.status(), StatusCode::CREATED);

    let board = get_leaderboard(&router).await;
    assert_eq!(board, json!([{"handle": "AAA", "score": 100.0}]));
}

#[tokio::test]
async fn test_equal_score_keeps_stored_value() {
    let router = make_router();
    post_score(&router, &json!({"handle": "AAA", "score": 100})).await;

    let response = post_score(&router, &json!({"handle": "AAA", "score": 100})).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let board = get_leaderboard(&router).await;
    assert_eq!(board, json!([{"handle": "AAA", "score": 100.0}]));
}

#[tokio::test]
async fn test_higher_score_replaces_stored_value() {
    let router = make_router();
    post_score(&router, &json!({"handle": "AAA", "score": 100})).await;

    let response = post_score(&router, &json!({"handle": "AAA", "score": 150})).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let board = get_leaderboard(&router).await;
    assert_eq!(board, json!([{"handle": "AAA", "score": 150.0}]));
}

#[tokio::test]
async fn test_missing_handle_is_rejected() {
    let router = make_router();

    let response = post_score(&router, &json!({"score": 10})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json, json!({"error": "Handle and score are required"}));

    // No side effect.
    let board = get_leaderboard(&router).await;
    assert_eq!(board, json!([]));
}

#[tokio::test]
async fn test_missing_score_is_rejected() {
    let router = make_router();

    let response = post_score(&router, &json!({"handle": "AAA"})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json, json!({"error": "Handle and score are required"}));

    let board = get_leaderboard(&router).await;
    assert_eq!(board, json!([]));
}

#[tokio::test]
async fn test_empty_handle_is_rejected() {
    let router = make_router();

    let response = post_score(&router, &json!({"handle": "", "score": 10})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let board = get_leaderboard(&router).await;
    assert_eq!(board, json!([]));
}

#[tokio::test]
async fn test_zero_is_a_valid_score() {
    let router = make_router();

    let response = post_score(&router, &json!({"handle": "AAA", "score": 0})).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let board = get_leaderboard(&router).await;
    assert_eq!(board, json!([{"handle": "AAA", "score": 0.0}]));
}

#[tokio::test]
async fn test_one_entry_per_handle() {
    let router = make_router();
    post_score(&router, &json!({"handle": "AAA", "score": 10})).await;
    post_score(&router, &json!({"handle": "AAA", "score": 30})).await;
    post_score(&router, &json!({"handle": "AAA", "score": 20})).await;

    let board = get_leaderboard(&router).await;
    assert_eq!(board, json!([{"handle": "AAA", "score": 30.0}]));
}

#[tokio::test]
async fn test_leaderboard_caps_at_ten_descending() {
    let router = make_router();

    // Eleven distinct handles with distinct scores.
    for i in 1..=11_u32 {
        let response = post_score(
            &router,
            &json!({"handle": format!("player-{i:02}"), "score": i * 10}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let board = get_leaderboard(&router).await;
    let entries = board.as_array().unwrap();
    assert_eq!(entries.len(), 10);

    // The ten highest, descending: 110 down to 20; score 10 fell off.
    let scores: Vec<f64> = entries
        .iter()
        .map(|e| e["score"].as_f64().unwrap())
        .collect();
    let expected: Vec<f64> = (2..=11_u32).rev().map(|i| f64::from(i * 10)).collect();
    assert_eq!(scores, expected);
}

#[tokio::test]
async fn test_nonexistent_route_returns_404() {
    let router = make_router();

    let response = router
        .oneshot(
            Request::get("/api/nonexistent")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
