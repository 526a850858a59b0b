pub mod gemini;
pub mod request;
pub mod response;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;

use crate::config::{AppConfig, NetworkConfig};
use crate::credentials::ApiKey;
use crate::error::{CommitBrewError, Result};
use crate::llm::LLMProvider;

/// 创建 HTTP 客户端
///
/// user agent 形如 `commitbrew/0.1.0 (linux)`，超时取自 `[network]`。
pub(crate) fn create_http_client(network_config: &NetworkConfig) -> Result<Client> {
    let user_agent = format!(
        "{}/{} ({})",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS
    );

    Client::builder()
        .user_agent(user_agent)
        .timeout(Duration::from_secs(network_config.request_timeout))
        .connect_timeout(Duration::from_secs(network_config.connect_timeout))
        .build()
        .map_err(|e| {
            CommitBrewError::Llm(
                rust_i18n::t!("provider.http_client_create_failed", error = e.to_string())
                    .to_string(),
            )
        })
}

/// 根据配置创建 Gemini provider
pub fn create_provider(config: &AppConfig, api_key: ApiKey) -> Result<Arc<dyn LLMProvider>> {
    let provider = gemini::GeminiProvider::new(&config.llm, api_key, &config.network)?;
    Ok(Arc::new(provider))
}
