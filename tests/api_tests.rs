//! Route-level tests against the full router.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::json;
use tower::ServiceExt;

mod common;

#[tokio::test]
async fn health_reports_ok() {
    let app = common::create_test_app();

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
    let body = common::body_json(response).await;
    assert_eq!(body["ok"], json!(true));
}

#[tokio::test]
async fn exercises_lists_default_pool() {
    let app = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/exercises")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    let pool = body.as_array().expect("pool is an array");
    assert_eq!(pool.len(), 9);
    assert!(pool.iter().any(|ex| ex["id"] == json!("basics_1")));
    assert!(pool.iter().all(|ex| ex["difficulty"].is_string()));
}

#[tokio::test]
async fn answer_updates_mastery() {
    let app = common::create_test_app();

    let response = app
        .oneshot(common::json_request(
            "/answer",
            json!({ "exercise_id": "basics_1", "correct": true, "latency_ms": 500 }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    let mastery = body["updated_mastery"]["Basics"].as_f64().unwrap();
    assert!(mastery > 0.2, "fast correct answer must raise mastery: {mastery}");
    // Untouched skills stay at the prior.
    assert_eq!(body["updated_mastery"]["Plurals"], json!(0.2));
}

#[tokio::test]
async fn answer_unknown_exercise_is_404() {
    let app = common::create_test_app();

    let response = app
        .oneshot(common::json_request(
            "/answer",
            json!({ "exercise_id": "nope", "correct": true, "latency_ms": 500 }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = common::body_json(response).await;
    assert_eq!(body["code"], json!("UNKNOWN_EXERCISE"));
}

#[tokio::test]
async fn answer_negative_latency_is_400() {
    let app = common::create_test_app();

    let response = app
        .oneshot(common::json_request(
            "/answer",
            json!({ "exercise_id": "basics_1", "correct": true, "latency_ms": -1 }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = common::body_json(response).await;
    assert_eq!(body["code"], json!("VALIDATION_ERROR"));
}

#[tokio::test]
async fn next_returns_exercise_reason_and_mastery() {
    let app = common::create_test_app();

    let response = app
        .oneshot(common::json_request("/next", json!({})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    assert!(body["exercise"]["id"].is_string());
    // Fresh session: every skill is tied at L0, Basics wins the id tie-break,
    // and low mastery maps to an easy exercise.
    assert_eq!(body["exercise"]["skill"], json!("Basics"));
    assert_eq!(body["exercise"]["difficulty"], json!("easy"));
    assert!(body["reason"].as_str().unwrap().contains("mastery is 20%"));
    assert_eq!(body["mastery"]["IrregularVerbs"], json!(0.2));
}

#[tokio::test]
async fn next_excluding_whole_pool_is_404() {
    let app = common::create_test_app();

    let all_ids = json!([
        "basics_1", "basics_2", "basics_3",
        "plurals_1", "plurals_2", "plurals_3",
        "irregular_1", "irregular_2", "irregular_3"
    ]);
    let response = app
        .oneshot(common::json_request("/next", json!({ "exclude_ids": all_ids })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = common::body_json(response).await;
    assert_eq!(body["code"], json!("NO_EXERCISE_AVAILABLE"));
}

#[tokio::test]
async fn reset_restores_priors() {
    let app = common::create_test_app();

    let response = app
        .clone()
        .oneshot(common::json_request(
            "/answer",
            json!({ "exercise_id": "plurals_1", "correct": true, "latency_ms": 500 }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(common::json_request("/session/reset", json!({})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(common::json_request("/next", json!({})))
        .await
        .unwrap();
    let body = common::body_json(response).await;
    assert_eq!(body["mastery"]["Plurals"], json!(0.2));
}
