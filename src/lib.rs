//! # commitbrew
//!
//! 根据 staged changes 调用 Google Gemini 生成 Git commit message。
//!
//! ## 流程
//! 1. 检查工作区是否为 Git 仓库，读取 `git diff --cached`
//! 2. 从 `.env` 加载 `GEMINI_API_KEY`（找不到时写入模板）
//! 3. 调用 Gemini `generateContent` 生成 message
//! 4. 编辑、确认后执行 `git commit`，输出新的 revision
//!
//! ## 快速开始
//! ```bash
//! # 写入 .env 模板，然后填入 API key
//! commitbrew init
//!
//! # 生成 commit message
//! git add .
//! commitbrew
//! ```
//!
//! ## 作为库使用
//! ```no_run
//! use std::path::Path;
//!
//! use commitbrew::config::AppConfig;
//! use commitbrew::credentials::CredentialLoader;
//! use commitbrew::git::GitOperations;
//! use commitbrew::git::repository::GitRepository;
//! use commitbrew::llm::provider::create_provider;
//!
//! # async fn example() -> commitbrew::error::Result<()> {
//! let workspace = Path::new(".");
//! let repo = GitRepository::open(workspace)?;
//! let diff = repo.get_staged_diff().await?;
//!
//! let api_key = CredentialLoader::for_workspace(workspace).load()?;
//! let provider = create_provider(&AppConfig::default(), api_key)?;
//!
//! let message = provider.generate_commit_message(&diff).await?;
//! println!("Generated: {}", message);
//! # Ok(())
//! # }
//! ```
//!
//! ## 核心模块
//! - [`git`] - Git 子进程操作
//! - [`credentials`] - `.env` API key 加载
//! - [`llm`] - LLM provider 接口和 Gemini 实现
//! - [`commands`] - CLI 命令实现
//! - [`config`] - 配置管理
//! - [`error`] - 统一错误类型
//! - [`ui`] - 用户界面工具
//!
//! ## 配置
//! 配置文件位置：
//! - Linux: `~/.config/commitbrew/config.toml`
//! - macOS: `~/Library/Application Support/commitbrew/config.toml`
//! - Windows: `%APPDATA%\commitbrew\config\config.toml`
//!
//! 示例配置：
//! ```toml
//! [llm]
//! model = "gemini-1.5-pro"
//! temperature = 0.3
//!
//! [commit]
//! confirm_before_commit = true
//! ```

#[macro_use]
extern crate rust_i18n;

pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod credentials;
pub mod error;
pub mod git;
pub mod llm;
pub mod ui;

// Initialize i18n for library modules
i18n!("locales", fallback = "en");
