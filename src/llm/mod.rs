//! LLM 抽象
//!
//! [`LLMProvider`] 只要求实现 [`send_prompt`](LLMProvider::send_prompt)；
//! commit message 生成由默认方法完成（构建 prompt → 发送 → 清理 → 拒绝空结果）。

/// Prompt 构建
pub mod prompt;
/// Provider 实现（Gemini）
pub mod provider;

use async_trait::async_trait;

use crate::error::{CommitBrewError, Result};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// LLM provider 统一接口
///
/// # 自定义 Provider 示例
/// ```no_run
/// use async_trait::async_trait;
/// use commitbrew::llm::LLMProvider;
/// use commitbrew::error::Result;
///
/// struct EchoProvider;
///
/// #[async_trait]
/// impl LLMProvider for EchoProvider {
///     async fn send_prompt(&self, prompt: &str) -> Result<String> {
///         Ok(format!("chore: {}", prompt.len()))
///     }
///
///     fn name(&self) -> &str {
///         "echo"
///     }
/// }
/// ```
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait LLMProvider: Send + Sync {
    /// 发送完整 prompt，返回模型的原始文本
    async fn send_prompt(&self, prompt: &str) -> Result<String>;

    /// 根据 staged diff 生成 commit message
    ///
    /// 返回的文本已去掉首尾空白和包裹的代码块；结果为空时返回
    /// [`CommitBrewError::EmptyCompletion`]，不会把空 message 交给提交步骤。
    async fn generate_commit_message(&self, diff: &str) -> Result<String> {
        let prompt = prompt::build_commit_prompt(diff);
        tracing::debug!("Commit prompt ({} chars):\n{}", prompt.len(), prompt);

        let response = self.send_prompt(&prompt).await?;
        let message = provider::response::process_commit_response(response);
        if message.is_empty() {
            return Err(CommitBrewError::EmptyCompletion);
        }
        Ok(message)
    }

    /// Provider 名称
    fn name(&self) -> &str;
}
