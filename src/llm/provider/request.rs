//! HTTP 请求发送
//!
//! 单次请求，不重试：网络错误和非 2xx 状态码都直接返回。

use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::response::truncate_for_preview;
use crate::error::{CommitBrewError, Result};

/// 发送 JSON 请求并解析 JSON 响应
///
/// # Arguments
/// * `client` - HTTP 客户端
/// * `endpoint` - 完整 URL
/// * `headers` - 额外的请求头
/// * `request_body` - 请求体
/// * `provider_name` - Provider 名称（用于日志和错误信息）
pub async fn send_llm_request<Req, Resp>(
    client: &Client,
    endpoint: &str,
    headers: &[(&str, &str)],
    request_body: &Req,
    provider_name: &str,
) -> Result<Resp>
where
    Req: Serialize,
    Resp: DeserializeOwned,
{
    let mut req = client
        .post(endpoint)
        .header("Content-Type", "application/json");

    for (key, value) in headers {
        req = req.header(*key, *value);
    }

    tracing::debug!("Sending request to: {}", endpoint);

    let response = req.json(request_body).send().await.map_err(|e| {
        tracing::debug!("{} API request failed: {}", provider_name, e);
        if e.is_timeout() {
            CommitBrewError::Llm(
                rust_i18n::t!(
                    "provider.api_request_timeout",
                    provider = provider_name,
                    detail = e.to_string()
                )
                .to_string(),
            )
        } else if e.is_connect() {
            CommitBrewError::Llm(
                rust_i18n::t!(
                    "provider.api_connection_failed",
                    provider = provider_name,
                    detail = e.to_string()
                )
                .to_string(),
            )
        } else {
            CommitBrewError::Network(e)
        }
    })?;

    let status = response.status();
    let response_text = response.text().await?;

    tracing::debug!("{} API response status: {}", provider_name, status);
    tracing::debug!("{} API response body: {}", provider_name, response_text);

    if !status.is_success() {
        return Err(CommitBrewError::LlmApi {
            status: status.as_u16(),
            body: truncate_for_preview(&response_text),
        });
    }

    serde_json::from_str(&response_text).map_err(|e| {
        CommitBrewError::Llm(
            rust_i18n::t!(
                "provider.parse_response_failed",
                provider = provider_name,
                error = e.to_string(),
                response = truncate_for_preview(&response_text)
            )
            .to_string(),
        )
    })
}
