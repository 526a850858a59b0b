//! 仓库检查：工作区必须是 Git 仓库，且存在 staged changes。
//!
//! 两项检查都在读取凭据和发起网络请求之前完成。

use super::GitOperations;
use crate::error::{CommitBrewError, Result};

/// 确认工作区是 Git 仓库
pub async fn ensure_repository(git: &dyn GitOperations) -> Result<()> {
    if git.is_repository().await? {
        Ok(())
    } else {
        Err(CommitBrewError::NotARepository)
    }
}

/// 读取 staged diff，去掉首尾空白后为空则报错
pub async fn require_staged_diff(git: &dyn GitOperations) -> Result<String> {
    let diff = git.get_staged_diff().await.map_err(|e| match e {
        CommitBrewError::GitCommand(msg) => {
            CommitBrewError::GitCommand(format!("Failed to get staged changes: {}", msg))
        }
        other => other,
    })?;

    let trimmed = diff.trim();
    if trimmed.is_empty() {
        return Err(CommitBrewError::NoStagedChanges);
    }
    Ok(trimmed.to_string())
}
