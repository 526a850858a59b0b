//! Gemini model configuration.

use serde::{Deserialize, Serialize};

use crate::constants::llm::{DEFAULT_GEMINI_ENDPOINT, DEFAULT_MODEL};
use crate::error::{CommitBrewError, Result};

/// Model configuration.
///
/// The API key is not part of this section; it is read from a `.env` file
/// or the `GEMINI_API_KEY` environment variable (see [`crate::credentials`]).
///
/// # Fields
/// - `model`: Gemini model name (default: `gemini-1.5-flash`)
/// - `endpoint`: API base URL (default: `https://generativelanguage.googleapis.com`)
/// - `temperature`: sampling temperature in `0.0..=2.0` (optional, server default when unset)
/// - `max_output_tokens`: completion size limit (optional)
///
/// # Example
/// ```toml
/// [llm]
/// model = "gemini-1.5-flash"
/// temperature = 0.3
/// max_output_tokens = 400
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LLMConfig {
    /// Model name.
    #[serde(default = "default_model")]
    pub model: String,

    /// API base URL.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Sampling temperature.
    #[serde(default)]
    pub temperature: Option<f32>,

    /// Maximum generated token count.
    #[serde(default)]
    pub max_output_tokens: Option<u32>,
}

impl Default for LLMConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            endpoint: default_endpoint(),
            temperature: None,
            max_output_tokens: None,
        }
    }
}

impl LLMConfig {
    /// Validates model configuration.
    pub fn validate(&self) -> Result<()> {
        if self.model.trim().is_empty() {
            return Err(CommitBrewError::Config("llm.model cannot be empty".into()));
        }
        if self.endpoint.trim().is_empty() {
            return Err(CommitBrewError::Config(
                "llm.endpoint cannot be empty".into(),
            ));
        }
        if let Some(temp) = self.temperature
            && !(0.0..=2.0).contains(&temp)
        {
            return Err(CommitBrewError::Config(format!(
                "llm.temperature {} out of range [0.0, 2.0]",
                temp
            )));
        }
        Ok(())
    }
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_endpoint() -> String {
    DEFAULT_GEMINI_ENDPOINT.to_string()
}
