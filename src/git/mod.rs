pub mod commit;
pub mod diff;
pub mod guard;
pub mod repository;

use async_trait::async_trait;
use serde::Serialize;

use crate::error::Result;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Git 子进程操作的统一接口
///
/// 主要实现：[`GitRepository`](repository::GitRepository)，
/// 所有调用都在工作区目录下执行 `git` 可执行文件。
///
/// 支持 mock 测试（通过 `mockall`，需 `test-utils` feature）。
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait GitOperations: Send + Sync {
    /// 工作区是否位于 Git 仓库中
    ///
    /// 等价于 `git rev-parse --git-dir` 的退出码是否为 0。
    async fn is_repository(&self) -> Result<bool>;

    /// 获取 staged changes 的 diff
    ///
    /// 等价于 `git diff --cached`，返回原始输出（可能为空字符串）。
    async fn get_staged_diff(&self) -> Result<String>;

    /// 执行 `git commit -m <message>`
    ///
    /// 走 git CLI 而不是库调用，这样 hooks、GPG 签名和用户的 git config 都会生效。
    async fn commit(&self, message: &str) -> Result<()>;

    /// 解析 `HEAD` 的完整 revision（`git rev-parse HEAD`）
    async fn head_revision(&self) -> Result<String>;
}

/// Diff 统计信息
///
/// # 示例
/// ```
/// use commitbrew::git::DiffStats;
///
/// let stats = DiffStats {
///     files_changed: vec!["src/main.rs".to_string(), "README.md".to_string()],
///     insertions: 42,
///     deletions: 13,
/// };
/// assert_eq!(stats.files_changed.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DiffStats {
    pub files_changed: Vec<String>,
    pub insertions: usize,
    pub deletions: usize,
}
