// End-to-end generate-reply tests against a mocked Fireworks upstream

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use mockito::{Matcher, Server};
use replygen::config::AppConfig;
use replygen::server::create_router;
use serde_json::{json, Value};
use tower::ServiceExt;

fn app_with_upstream(url: &str, max_retries: u32) -> axum::Router {
    let mut config = AppConfig::default();
    config.fireworks.api_base_url = url.to_string();
    config.fireworks.max_retries = max_retries;
    create_router(config).unwrap()
}

fn post_reply(payload: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/generate-reply")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn completion_body(content: &str) -> String {
    json!({
        "id": "cmpl-test",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop",
        }],
        "usage": {"prompt_tokens": 50, "completion_tokens": 12},
    })
    .to_string()
}

#[tokio::test]
async fn test_successful_reply() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .match_header("authorization", "Bearer fw_test_key")
        .match_body(Matcher::AllOf(vec![
            // Deterministic sampling, system + user message pair
            Matcher::PartialJson(json!({"temperature": 0.0})),
            Matcher::Regex("Author: alice".to_string()),
            Matcher::Regex("Great weather today!".to_string()),
            Matcher::Regex("Reply:".to_string()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_body("Sounds like a perfect day!"))
        .expect(1)
        .create_async()
        .await;

    let app = app_with_upstream(&server.url(), 1);
    let response = app
        .oneshot(post_reply(&json!({
            "tweet": "Great weather today!",
            "author": "alice",
            "fireworksApiKey": "fw_test_key",
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["reply"], "Sounds like a perfect day!");
    assert_eq!(body["length"], "Sounds like a perfect day!".len());
    assert_eq!(body["tweet_analyzed"], "Great weather today!");
    assert_eq!(body["author"], "alice");

    mock.assert_async().await;
}

#[tokio::test]
async fn test_quoted_reply_is_unwrapped() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_body("\"hello world\""))
        .create_async()
        .await;

    let app = app_with_upstream(&server.url(), 1);
    let response = app
        .oneshot(post_reply(&json!({
            "tweet": "something",
            "fireworksApiKey": "fw_test_key",
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["reply"], "hello world");
    assert_eq!(body["length"], 11);
}

#[tokio::test]
async fn test_overlong_reply_is_truncated_to_280() {
    let mut server = Server::new_async().await;
    let long_reply = "x".repeat(400);
    let _mock = server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_body(&long_reply))
        .create_async()
        .await;

    let app = app_with_upstream(&server.url(), 1);
    let response = app
        .oneshot(post_reply(&json!({
            "tweet": "something",
            "fireworksApiKey": "fw_test_key",
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let reply = body["reply"].as_str().unwrap();
    assert_eq!(reply.chars().count(), 280);
    assert!(reply.ends_with("..."));
    assert_eq!(body["length"], 280);
}

#[tokio::test]
async fn test_tweet_at_limit_reaches_upstream() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_body("ok"))
        .expect(1)
        .create_async()
        .await;

    let app = app_with_upstream(&server.url(), 1);
    let response = app
        .oneshot(post_reply(&json!({
            "tweet": "a".repeat(10_000),
            "fireworksApiKey": "fw_test_key",
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_missing_credential_skips_upstream() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .expect(0)
        .create_async()
        .await;

    let app = app_with_upstream(&server.url(), 1);
    let response = app
        .oneshot(post_reply(&json!({"tweet": "hello"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_upstream_failure_surfaces_as_bad_gateway() {
    let mut server = Server::new_async().await;
    // Transient failure: with one retry configured the upstream sees two calls
    let mock = server
        .mock("POST", "/chat/completions")
        .with_status(503)
        .with_header("content-type", "application/json")
        .with_body(r#"{"error": {"message": "model overloaded"}}"#)
        .expect(2)
        .create_async()
        .await;

    let app = app_with_upstream(&server.url(), 1);
    let response = app
        .oneshot(post_reply(&json!({
            "tweet": "hello",
            "fireworksApiKey": "fw_test_key",
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("model overloaded"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_auth_rejection_is_not_retried() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .with_status(401)
        .with_header("content-type", "application/json")
        .with_body(r#"{"error": {"message": "invalid api key"}}"#)
        .expect(1)
        .create_async()
        .await;

    let app = app_with_upstream(&server.url(), 1);
    let response = app
        .oneshot(post_reply(&json!({
            "tweet": "hello",
            "fireworksApiKey": "fw_bad_key",
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("invalid api key"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_surfaced_upstream_error_redacts_credentials() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/chat/completions")
        .with_status(401)
        .with_header("content-type", "application/json")
        .with_body(r#"{"error": {"message": "key fw_secret123 was rejected"}}"#)
        .create_async()
        .await;

    let app = app_with_upstream(&server.url(), 1);
    let response = app
        .oneshot(post_reply(&json!({
            "tweet": "hello",
            "fireworksApiKey": "fw_secret123",
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body = body_json(response).await;
    let error = body["error"].as_str().unwrap();
    assert!(!error.contains("fw_secret123"));
    assert!(error.contains("[REDACTED_API_KEY]"));
}

#[tokio::test]
async fn test_malformed_upstream_body_is_an_upstream_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("this is not json")
        .create_async()
        .await;

    let app = app_with_upstream(&server.url(), 1);
    let response = app
        .oneshot(post_reply(&json!({
            "tweet": "hello",
            "fireworksApiKey": "fw_test_key",
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body = body_json(response).await;
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("Response parsing error"));
}

#[tokio::test]
async fn test_empty_choices_is_an_upstream_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id": "cmpl-test", "choices": []}"#)
        .create_async()
        .await;

    let app = app_with_upstream(&server.url(), 1);
    let response = app
        .oneshot(post_reply(&json!({
            "tweet": "hello",
            "fireworksApiKey": "fw_test_key",
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body = body_json(response).await;
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("no completion choices"));
}

#[tokio::test]
async fn test_custom_prompt_reaches_upstream() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .match_body(Matcher::Regex("Respond like a pirate.".to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_body("Arr, fine weather indeed!"))
        .expect(1)
        .create_async()
        .await;

    let app = app_with_upstream(&server.url(), 1);
    let response = app
        .oneshot(post_reply(&json!({
            "tweet": "Great weather today!",
            "author": "alice",
            "prompt": "Respond like a pirate.",
            "fireworksApiKey": "fw_test_key",
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["reply"], "Arr, fine weather indeed!");
    mock.assert_async().await;
}
