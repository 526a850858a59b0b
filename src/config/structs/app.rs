//! Top-level application configuration.

use serde::{Deserialize, Serialize};

use crate::error::Result;

use super::commit::CommitConfig;
use super::llm::LLMConfig;
use super::network::NetworkConfig;

/// Application configuration.
///
/// Effective configuration is merged from multiple sources (low to high):
/// 1. Rust defaults (`Default` + `serde(default)`)
/// 2. User-level config file (platform-specific config directory)
/// 3. `COMMITBREW__*` environment variables
///
/// # Configuration File Locations
/// - Linux: `~/.config/commitbrew/config.toml`
/// - macOS: `~/Library/Application Support/commitbrew/config.toml`
/// - Windows: `%APPDATA%\commitbrew\config\config.toml`
///
/// # Example
/// ```toml
/// [llm]
/// model = "gemini-1.5-flash"
///
/// [commit]
/// confirm_before_commit = true
///
/// [ui]
/// colored = true
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct AppConfig {
    /// Gemini model settings.
    #[serde(default)]
    pub llm: LLMConfig,

    /// Commit workflow behavior.
    #[serde(default)]
    pub commit: CommitConfig,

    /// Terminal UI behavior.
    #[serde(default)]
    pub ui: UIConfig,

    /// HTTP timeout settings.
    #[serde(default)]
    pub network: NetworkConfig,
}

impl AppConfig {
    /// Validates configuration consistency.
    pub fn validate(&self) -> Result<()> {
        self.llm.validate()?;
        self.network.validate()?;
        Ok(())
    }
}

/// UI configuration.
///
/// # Fields
/// - `colored`: enable colored output (default: `true`)
/// - `language`: UI language in BCP 47 format (`"en"`, `"zh-CN"`), auto-detected by default
///
/// # Example
/// ```toml
/// [ui]
/// colored = true
/// language = "zh-CN"
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UIConfig {
    /// Whether to enable color output.
    #[serde(default = "default_true")]
    pub colored: bool,

    /// UI language. `None` means auto-detect from system locale.
    #[serde(default)]
    pub language: Option<String>,
}

impl Default for UIConfig {
    fn default() -> Self {
        Self {
            colored: true,
            language: None,
        }
    }
}

fn default_true() -> bool {
    true
}
