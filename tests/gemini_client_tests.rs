// GeminiClient tests against a local stub upstream bound to 127.0.0.1:0.

use axum::extract::Query;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use promptforge::AppConfig;
use promptforge::model::{GeminiClient, ModelError, ModelProvider};
use serde_json::{Value, json};
use std::collections::HashMap;
use std::net::SocketAddr;
use tokio::net::TcpListener;

const GENERATE_PATH: &str = "/v1beta/models/gemini-2.0-flash:generateContent";

async fn spawn_upstream(app: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub upstream");
    let addr = listener.local_addr().expect("stub upstream addr");
    tokio::spawn(async move {
        axum::serve(listener, app.into_make_service())
            .await
            .expect("stub upstream serve");
    });
    addr
}

fn config_for(addr: SocketAddr) -> AppConfig {
    AppConfig {
        endpoint: format!("http://{addr}"),
        api_path: "v1beta/models".to_string(),
        model: "gemini-2.0-flash".to_string(),
        api_key_env: "PROMPTFORGE_TEST_UNUSED".to_string(),
        timeout_secs: 5,
    }
}

fn client_for(addr: SocketAddr) -> GeminiClient {
    GeminiClient::with_api_key(&config_for(addr), Some("test-key".to_string()))
        .expect("build client")
}

#[tokio::test]
async fn sends_query_key_and_single_turn_payload() {
    async fn echo(
        Query(params): Query<HashMap<String, String>>,
        Json(body): Json<Value>,
    ) -> Json<Value> {
        Json(json!({ "key": params.get("key"), "body": body }))
    }

    let addr = spawn_upstream(Router::new().route(GENERATE_PATH, post(echo))).await;
    let client = client_for(addr);

    let received = client.generate("Say hi").await.expect("generate succeeds");

    assert_eq!(received["key"], "test-key");
    assert_eq!(received["body"]["contents"][0]["role"], "user");
    assert_eq!(received["body"]["contents"][0]["parts"][0]["text"], "Say hi");
}

#[tokio::test]
async fn success_body_is_passed_through_unchanged() {
    async fn ok() -> Json<Value> {
        Json(json!({"ok": true}))
    }

    let addr = spawn_upstream(Router::new().route(GENERATE_PATH, post(ok))).await;
    let client = client_for(addr);

    let body = client.generate("hello").await.expect("generate succeeds");
    assert_eq!(body, json!({"ok": true}));
}

#[tokio::test]
async fn upstream_error_status_and_message_are_extracted() {
    async fn rate_limited() -> (StatusCode, Json<Value>) {
        (
            StatusCode::TOO_MANY_REQUESTS,
            Json(json!({"error": {"message": "rate limited"}})),
        )
    }

    let addr = spawn_upstream(Router::new().route(GENERATE_PATH, post(rate_limited))).await;
    let client = client_for(addr);

    let error = client.generate("hello").await.expect_err("429 must fail");
    match error {
        ModelError::Upstream { status, message } => {
            assert_eq!(status, 429);
            assert_eq!(message, "rate limited");
        }
        other => panic!("expected Upstream error, got {other:?}"),
    }
}

#[tokio::test]
async fn non_json_error_body_falls_back_to_status_message() {
    async fn broken() -> (StatusCode, &'static str) {
        (StatusCode::INTERNAL_SERVER_ERROR, "boom")
    }

    let addr = spawn_upstream(Router::new().route(GENERATE_PATH, post(broken))).await;
    let client = client_for(addr);

    let error = client.generate("hello").await.expect_err("500 must fail");
    match error {
        ModelError::Upstream { status, message } => {
            assert_eq!(status, 500);
            assert!(message.contains("500"), "message was {message}");
        }
        other => panic!("expected Upstream error, got {other:?}"),
    }
}

#[tokio::test]
async fn non_json_success_body_is_an_invalid_response() {
    async fn plain() -> &'static str {
        "not json"
    }

    let addr = spawn_upstream(Router::new().route(GENERATE_PATH, post(plain))).await;
    let client = client_for(addr);

    let error = client
        .generate("hello")
        .await
        .expect_err("non-JSON success body must fail");
    assert!(matches!(error, ModelError::InvalidResponse { .. }));
}

#[tokio::test]
async fn connection_refused_is_a_network_error() {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind probe port");
    let addr = listener.local_addr().expect("probe addr");
    drop(listener);

    let client = client_for(addr);
    let error = client
        .generate("hello")
        .await
        .expect_err("closed port must fail");
    assert!(matches!(error, ModelError::Network { .. }));
}

#[tokio::test]
async fn missing_key_fails_before_any_network_attempt() {
    // Unroutable config: if the client attempted the call, it would error
    // differently than MissingApiKey.
    let config = AppConfig {
        endpoint: "http://127.0.0.1:1".to_string(),
        api_path: "v1beta/models".to_string(),
        model: "gemini-2.0-flash".to_string(),
        api_key_env: "PROMPTFORGE_TEST_UNUSED".to_string(),
        timeout_secs: 5,
    };
    let client = GeminiClient::with_api_key(&config, None).expect("build client");

    let error = client
        .generate("hello")
        .await
        .expect_err("missing key must fail");
    assert!(matches!(error, ModelError::MissingApiKey));
}
