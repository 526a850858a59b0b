use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::request::send_llm_request;
use crate::config::{LLMConfig, NetworkConfig};
use crate::credentials::ApiKey;
use crate::error::{CommitBrewError, Result};
use crate::llm::LLMProvider;

/// Google Gemini API provider
///
/// 调用 `generateContent`，单次请求，不重试。
///
/// # Configuration example
/// ```toml
/// [llm]
/// model = "gemini-1.5-flash"
/// endpoint = "https://generativelanguage.googleapis.com" # Optional
/// max_output_tokens = 400 # optional
/// temperature = 0.3 # optional
/// ```
pub struct GeminiProvider {
    client: Client,
    api_key: ApiKey,
    base_url: String,
    model: String,
    max_output_tokens: Option<u32>,
    temperature: Option<f32>,
}

// ============================================================================
// Request/response structure
// ============================================================================

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Serialize)]
struct GeminiContent {
    role: String,
    parts: Vec<GeminiPart>,
}

#[derive(Serialize)]
struct GeminiPart {
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiResponse {
    candidates: Option<Vec<GeminiCandidate>>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiCandidate {
    content: Option<GeminiResponseContent>,
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct GeminiResponseContent {
    #[serde(default)]
    parts: Vec<GeminiResponsePart>,
}

#[derive(Deserialize)]
struct GeminiResponsePart {
    #[serde(default)]
    text: Option<String>,
}

impl GeminiResponse {
    /// 第一个 candidate 的所有文本 part 拼接
    ///
    /// 没有 candidate 时返回空字符串，由调用方判定为空响应。
    fn into_text(self) -> Result<String> {
        if let Some(reason) = self.prompt_feedback.and_then(|f| f.block_reason) {
            tracing::warn!("Gemini prompt blocked: {}", reason);
            return Err(CommitBrewError::LlmContentBlocked { reason });
        }

        let Some(candidate) = self.candidates.and_then(|c| c.into_iter().next()) else {
            return Ok(String::new());
        };

        // 异常结束（SAFETY、RECITATION 等）
        if let Some(reason) = &candidate.finish_reason {
            match reason.as_str() {
                "STOP" => {}
                "MAX_TOKENS" => {
                    tracing::warn!("Gemini response truncated (MAX_TOKENS)");
                }
                _ => {
                    tracing::warn!("Gemini response finished with reason: {}", reason);
                    return Err(CommitBrewError::LlmContentBlocked {
                        reason: reason.clone(),
                    });
                }
            }
        }

        Ok(candidate
            .content
            .map(|c| {
                c.parts
                    .into_iter()
                    .filter_map(|p| p.text)
                    .collect::<String>()
            })
            .unwrap_or_default())
    }
}

impl GeminiProvider {
    pub fn new(config: &LLMConfig, api_key: ApiKey, network_config: &NetworkConfig) -> Result<Self> {
        Ok(Self {
            client: super::create_http_client(network_config)?,
            api_key,
            base_url: config.endpoint.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            max_output_tokens: config.max_output_tokens,
            temperature: config.temperature,
        })
    }

    /// /v1beta/models/{model}:generateContent
    fn generate_content_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }

    fn build_request(&self, prompt: &str) -> GeminiRequest {
        let generation_config = if self.temperature.is_some() || self.max_output_tokens.is_some() {
            Some(GenerationConfig {
                temperature: self.temperature,
                max_output_tokens: self.max_output_tokens,
            })
        } else {
            None
        };

        GeminiRequest {
            contents: vec![GeminiContent {
                role: "user".to_string(),
                parts: vec![GeminiPart {
                    text: prompt.to_string(),
                }],
            }],
            generation_config,
        }
    }
}

#[async_trait]
impl LLMProvider for GeminiProvider {
    async fn send_prompt(&self, prompt: &str) -> Result<String> {
        let request = self.build_request(prompt);

        tracing::debug!(
            "Gemini API request: model={}, temperature={:?}, max_output_tokens={:?}, prompt_len={}",
            self.model,
            self.temperature,
            self.max_output_tokens,
            prompt.len()
        );

        let endpoint = self.generate_content_url();
        let response: GeminiResponse = send_llm_request(
            &self.client,
            &endpoint,
            &[("x-goog-api-key", self.api_key.expose())],
            &request,
            "Gemini",
        )
        .await?;

        response.into_text()
    }

    fn name(&self) -> &str {
        "gemini"
    }
}
