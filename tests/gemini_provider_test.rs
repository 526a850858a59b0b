//! Gemini provider 端到端测试
//!
//! 通过 create_provider() 构建 provider，使用 mockito 模拟 generateContent：
//! - commit message 生成（含 markdown 代码块清理）
//! - 空响应
//! - HTTP 错误与建议

use commitbrew::config::AppConfig;
use commitbrew::credentials::ApiKey;
use commitbrew::error::CommitBrewError;
use commitbrew::llm::provider::create_provider;
use commitbrew::llm::provider::test_utils::{
    ensure_crypto_provider, test_llm_config, test_network_config,
};
use mockito::{Matcher, Server};
use pretty_assertions::assert_eq;

const DIFF: &str = "diff --git a/README.md b/README.md\n+## Usage\n";

fn config_for(server: &Server, model: &str) -> AppConfig {
    let mut config = AppConfig::default();
    config.llm = test_llm_config(server.url());
    config.llm.model = model.to_string();
    config.network = test_network_config();
    config
}

fn text_response(text: &str) -> String {
    serde_json::json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": text }] },
            "finishReason": "STOP"
        }]
    })
    .to_string()
}

#[tokio::test]
async fn test_generate_commit_message_end_to_end() {
    ensure_crypto_provider();
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v1beta/models/gemini-1.5-pro:generateContent")
        .match_header("x-goog-api-key", "AIza-e2e")
        .match_body(Matcher::Regex("## Usage".to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(text_response("```\ndocs(readme): add usage section\n```"))
        .create_async()
        .await;

    let provider =
        create_provider(&config_for(&server, "gemini-1.5-pro"), ApiKey::new("AIza-e2e")).unwrap();
    let message = provider.generate_commit_message(DIFF).await.unwrap();

    assert_eq!(message, "docs(readme): add usage section");
    assert_eq!(provider.name(), "gemini");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_whitespace_response_is_empty_completion() {
    ensure_crypto_provider();
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/v1beta/models/gemini-1.5-flash:generateContent")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(text_response("  \n  "))
        .create_async()
        .await;

    let provider =
        create_provider(&config_for(&server, "gemini-1.5-flash"), ApiKey::new("k")).unwrap();
    let err = provider.generate_commit_message(DIFF).await.unwrap_err();

    assert!(matches!(err, CommitBrewError::EmptyCompletion));
    assert!(err.to_string().starts_with("Gemini API error:"));
}

#[tokio::test]
async fn test_rate_limit_error_has_suggestion() {
    ensure_crypto_provider();
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v1beta/models/gemini-1.5-flash:generateContent")
        .with_status(429)
        .with_body(r#"{"error":{"code":429,"status":"RESOURCE_EXHAUSTED"}}"#)
        .expect(1)
        .create_async()
        .await;

    let provider =
        create_provider(&config_for(&server, "gemini-1.5-flash"), ApiKey::new("k")).unwrap();
    let err = provider.generate_commit_message(DIFF).await.unwrap_err();

    match &err {
        CommitBrewError::LlmApi { status, body } => {
            assert_eq!(*status, 429);
            assert!(body.contains("RESOURCE_EXHAUSTED"));
        }
        other => panic!("expected LlmApi, got {:?}", other),
    }
    assert!(err.suggestion().is_some());
    // 不重试
    mock.assert_async().await;
}

#[tokio::test]
async fn test_unreachable_endpoint_is_connection_error() {
    ensure_crypto_provider();
    let mut config = AppConfig::default();
    // 保留端口，没有服务监听
    config.llm = test_llm_config("http://127.0.0.1:9".to_string());
    config.network = test_network_config();

    let provider = create_provider(&config, ApiKey::new("k")).unwrap();
    let err = provider.send_prompt("hello").await.unwrap_err();

    assert!(
        matches!(err, CommitBrewError::Llm(_) | CommitBrewError::Network(_)),
        "unexpected error: {:?}",
        err
    );
}
