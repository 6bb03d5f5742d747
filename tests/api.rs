//! Integration tests for the /getAnalysis endpoint.
//!
//! The LLM backend is stubbed with a mock HTTP server so the
//! model-dependent fields are deterministic.

use answer_evaluator::config::Config;
use answer_evaluator::server::{app, AppState};
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use mockito::{Matcher, ServerGuard};
use serde_json::{json, Value};
use tower::ServiceExt;

/// Build the app router against the given LLM endpoint.
fn test_app(api_base: &str) -> axum::Router {
    let config = Config::with_llm(api_base, "test-key", "test-model");
    app(AppState::from_config(&config))
}

fn analysis_request(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/getAnalysis")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn response_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Chat-completion body whose single choice carries `content`.
fn completion_body(content: &str) -> String {
    json!({
        "choices": [{ "message": { "content": content } }]
    })
    .to_string()
}

/// Stub the reference-generation call (matched on its prompt wording).
async fn mock_reference(server: &mut ServerGuard, content: &str) {
    server
        .mock("POST", "/v1/chat/completions")
        .match_body(Matcher::Regex("3 sentences".to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_body(content))
        .create_async()
        .await;
}

/// Stub the comparison call (matched on its prompt wording).
async fn mock_comparison(server: &mut ServerGuard, content: &str) {
    server
        .mock("POST", "/v1/chat/completions")
        .match_body(Matcher::Regex("similarity score".to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_body(content))
        .create_async()
        .await;
}

#[tokio::test]
async fn missing_qa_pairs_is_rejected() {
    let app = test_app("http://127.0.0.1:9");

    let response = app
        .oneshot(analysis_request(json!({ "other": 1 })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(body["error"], "qaPairs must be an array");
}

#[tokio::test]
async fn non_array_qa_pairs_is_rejected() {
    let app = test_app("http://127.0.0.1:9");

    let response = app
        .oneshot(analysis_request(json!({ "qaPairs": { "question": "q" } })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert!(body.get("error").is_some());
}

#[tokio::test]
async fn empty_batch_yields_empty_report() {
    let app = test_app("http://127.0.0.1:9");

    let response = app
        .oneshot(analysis_request(json!({ "qaPairs": [] })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["report"], json!([]));
}

#[tokio::test]
async fn report_preserves_input_order_and_fields() {
    let mut server = mockito::Server::new_async().await;
    mock_reference(&mut server, "A solid reference answer.").await;
    mock_comparison(&mut server, r#"{"similarity": 0.8, "missing": ["m1", "m2"]}"#).await;

    let app = test_app(&server.url());
    let response = app
        .oneshot(analysis_request(json!({
            "qaPairs": [
                { "question": "First question?", "userAnswer": "First answer." },
                { "question": "Second question?", "userAnswer": "Second answer." }
            ]
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["success"], true);

    let report = body["report"].as_array().unwrap();
    assert_eq!(report.len(), 2);

    assert_eq!(report[0]["Question"], "First question?");
    assert_eq!(report[0]["User Answer"], "First answer.");
    assert_eq!(report[0]["Reference Answer"], "A solid reference answer.");
    assert_eq!(report[0]["Similarity Score"], 0.8);
    assert_eq!(report[0]["Missing Points"], "m1 . m2");

    assert_eq!(report[1]["Question"], "Second question?");
    assert_eq!(report[1]["User Answer"], "Second answer.");
}

#[tokio::test]
async fn unparseable_comparison_degrades_to_raw_text() {
    let mut server = mockito::Server::new_async().await;
    mock_reference(&mut server, "A solid reference answer.").await;
    mock_comparison(&mut server, "not json").await;

    let app = test_app(&server.url());
    let response = app
        .oneshot(analysis_request(json!({
            "qaPairs": [{ "question": "q?", "userAnswer": "a." }]
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    let report = body["report"].as_array().unwrap();

    assert!(report[0]["Similarity Score"].is_null());
    assert_eq!(report[0]["Missing Points"], "not json");
}

#[tokio::test]
async fn model_failure_aborts_the_batch() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/v1/chat/completions")
        .with_status(500)
        .with_header("content-type", "application/json")
        .with_body(r#"{"error": {"message": "quota exceeded"}}"#)
        .create_async()
        .await;

    let app = test_app(&server.url());
    let response = app
        .oneshot(analysis_request(json!({
            "qaPairs": [{ "question": "q?", "userAnswer": "a." }]
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = response_json(response).await;
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().contains("quota exceeded"));
}

#[tokio::test]
async fn malformed_pair_entry_is_rejected_before_any_model_call() {
    let app = test_app("http://127.0.0.1:9");

    // Entry missing the required userAnswer field.
    let response = app
        .oneshot(analysis_request(json!({
            "qaPairs": [{ "question": "q?" }]
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert!(body.get("error").is_some());
}
