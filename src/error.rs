use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CommitBrewError>;

#[derive(Error, Debug)]
pub enum CommitBrewError {
    #[error("No workspace folder found at '{}'. Open or pass an existing folder first.", .0.display())]
    NoWorkspace(PathBuf),

    #[error("Not a Git repository. Please initialize Git first using `git init`.")]
    NotARepository,

    #[error("No staged changes found. Please stage some changes first using `git add`.")]
    NoStagedChanges,

    #[error("GEMINI_API_KEY not found. Please add your API key to the .env file.")]
    CredentialMissing {
        /// 新生成的 `.env` 模板路径（如果本次写入了模板）
        template: Option<PathBuf>,
    },

    #[error("Credential file '{}' could not be accessed: {source}", .path.display())]
    CredentialFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("git executable not found in PATH")]
    GitNotInstalled,

    #[error("Git command failed: {0}")]
    GitCommand(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration parsing error: {0}")]
    ConfigParse(#[from] config::ConfigError),

    #[error("Gemini API error: {0}")]
    Llm(String),

    #[error("Gemini API error: {status} {body}")]
    LlmApi { status: u16, body: String },

    #[error("Gemini API error: response blocked ({reason})")]
    LlmContentBlocked { reason: String },

    #[error("Gemini API error: Gemini returned empty response")]
    EmptyCompletion,

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("UI error: {0}")]
    Prompt(#[from] inquire::InquireError),

    #[error("Operation cancelled by user")]
    UserCancelled,
}

impl CommitBrewError {
    /// 获取错误的解决建议（已本地化）
    pub fn suggestion(&self) -> Option<String> {
        let hint = match self {
            CommitBrewError::NoWorkspace(_) => rust_i18n::t!("suggestion.no_workspace"),
            CommitBrewError::NotARepository => rust_i18n::t!("suggestion.not_a_repository"),
            CommitBrewError::NoStagedChanges => rust_i18n::t!("suggestion.no_staged_changes"),
            CommitBrewError::CredentialMissing {
                template: Some(path),
            } => rust_i18n::t!(
                "suggestion.credential_template",
                path = path.display().to_string()
            ),
            CommitBrewError::CredentialMissing { template: None } => {
                rust_i18n::t!("suggestion.credential_missing")
            }
            CommitBrewError::GitNotInstalled => rust_i18n::t!("suggestion.git_not_installed"),
            CommitBrewError::Network(_) => rust_i18n::t!("suggestion.network"),
            CommitBrewError::LlmApi {
                status: 400 | 401 | 403,
                ..
            } => rust_i18n::t!("suggestion.api_key_invalid"),
            CommitBrewError::LlmApi { status: 429, .. } => rust_i18n::t!("suggestion.rate_limited"),
            CommitBrewError::LlmApi { status, .. } if *status >= 500 => {
                rust_i18n::t!("suggestion.service_unavailable")
            }
            CommitBrewError::Llm(msg) if msg.contains("timeout") => {
                rust_i18n::t!("suggestion.timeout")
            }
            CommitBrewError::Llm(msg) if msg.contains("connection failed") => {
                rust_i18n::t!("suggestion.connection_failed")
            }
            CommitBrewError::LlmContentBlocked { .. } => {
                rust_i18n::t!("suggestion.content_blocked")
            }
            CommitBrewError::ConfigParse(_) | CommitBrewError::Config(_) => {
                rust_i18n::t!("suggestion.config")
            }
            _ => return None,
        };
        Some(hint.to_string())
    }
}
