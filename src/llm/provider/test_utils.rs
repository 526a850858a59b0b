//! Test utilities for provider tests

use crate::config::{LLMConfig, NetworkConfig};

/// 在测试中安装 rustls crypto provider
///
/// reqwest 0.13 + rustls-no-provider 需要手动安装 crypto provider，
/// 生产代码在 main.rs 中完成，测试需要单独调用。
/// 多次调用是安全的（install_default 失败时忽略即可）。
pub fn ensure_crypto_provider() {
    let _ = rustls::crypto::ring::default_provider().install_default();
}

/// Create an `LLMConfig` pointing at a mock server
///
/// # Example
/// ```
/// use commitbrew::llm::provider::test_utils::test_llm_config;
///
/// let config = test_llm_config("http://localhost:8080".to_string());
/// assert_eq!(config.model, "gemini-1.5-flash");
/// ```
pub fn test_llm_config(base_url: String) -> LLMConfig {
    LLMConfig {
        endpoint: base_url,
        ..Default::default()
    }
}

/// Network config with short timeouts
pub fn test_network_config() -> NetworkConfig {
    NetworkConfig {
        request_timeout: 5,
        connect_timeout: 2,
    }
}
