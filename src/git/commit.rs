use super::GitOperations;
use crate::constants::ui::SHORT_HASH_LENGTH;
use crate::error::{CommitBrewError, Result};

/// 一次提交的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitReport {
    pub message: String,
    /// 提交后解析到的 revision；解析失败时为 `None`（提交本身已经存在）
    pub hash: Option<String>,
}

impl CommitReport {
    /// revision 的前 8 个字符
    pub fn short_hash(&self) -> Option<&str> {
        self.hash.as_deref().map(short_hash)
    }
}

/// 截取 revision 的前 8 个字符
pub fn short_hash(hash: &str) -> &str {
    match hash.char_indices().nth(SHORT_HASH_LENGTH) {
        Some((idx, _)) => &hash[..idx],
        None => hash,
    }
}

/// 提交并解析新的 revision
///
/// 两步之间没有原子性：`git commit` 成功而 `git rev-parse HEAD` 失败时，
/// 返回的报告中 `hash` 为 `None`。
pub async fn commit_changes(git: &dyn GitOperations, message: &str) -> Result<CommitReport> {
    git.commit(message).await.map_err(|e| match e {
        CommitBrewError::GitCommand(msg) => {
            CommitBrewError::GitCommand(format!("Failed to commit changes: {}", msg))
        }
        other => other,
    })?;

    let hash = match git.head_revision().await {
        Ok(hash) => Some(hash.trim().to_string()),
        Err(e) => {
            tracing::warn!("Commit created but revision lookup failed: {}", e);
            None
        }
    };

    Ok(CommitReport {
        message: message.to_string(),
        hash,
    })
}
