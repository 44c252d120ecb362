//! End-to-end tests against a running server.
//!
//! The application is bound to a random port and talks to a wiremock
//! upstream, so no network access or API key is needed.

use relay_service::config::{AnthropicConfig, RelayConfig};
use relay_service::startup::Application;
use reqwest::Client;
use secrecy::Secret;
use serde_json::json;
use service_core::config::Config;
use std::time::Duration;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Spawn the application on a random port and return the port number.
async fn spawn_app(upstream_url: String) -> u16 {
    let config = RelayConfig {
        common: Config { port: 0 },
        anthropic: AnthropicConfig {
            api_key: Secret::new("test-api-key".to_string()),
            model: "claude-3-5-sonnet-20241022".to_string(),
            base_url: upstream_url,
            timeout_secs: 5,
        },
    };

    let app = Application::build(config)
        .await
        .expect("Failed to build application");
    let port = app.port();

    tokio::spawn(async move {
        let _ = app.run_until_stopped().await;
    });

    port
}

#[tokio::test]
async fn index_returns_ok() {
    let port = spawn_app("http://127.0.0.1:1".to_string()).await;

    let response = Client::new()
        .get(format!("http://localhost:{}/", port))
        .timeout(Duration::from_secs(5))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let text = response.text().await.unwrap();
    assert!(!text.is_empty());
}

#[tokio::test]
async fn prompt_round_trip_over_http() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .and(header("x-api-key", "test-api-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "content": [{ "type": "text", "text": "Quick context: git\n**FINAL ANSWER:** git status" }]
        })))
        .expect(1)
        .mount(&upstream)
        .await;

    let port = spawn_app(upstream.uri()).await;

    let response = Client::new()
        .post(format!("http://localhost:{}/api/gpt", port))
        .json(&json!({ "prompt": "show working tree status" }))
        .timeout(Duration::from_secs(10))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(
        body["output_text"],
        "Quick context: git\n**FINAL ANSWER:** git status"
    );
}
