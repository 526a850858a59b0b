use std::path::{Path, PathBuf};
use std::process::Output;

use async_trait::async_trait;
use tokio::process::Command;

use super::GitOperations;
use crate::error::{CommitBrewError, Result};

/// 基于 git CLI 的仓库实现
///
/// 所有命令都以工作区目录为当前目录执行，不设超时。
#[derive(Debug, Clone)]
pub struct GitRepository {
    workdir: PathBuf,
    git_bin: PathBuf,
}

impl GitRepository {
    /// 在 `workdir` 上打开仓库（只定位 `git` 可执行文件，不做仓库检查）
    ///
    /// # 错误
    /// - [`CommitBrewError::NoWorkspace`] - 目录不存在
    /// - [`CommitBrewError::GitNotInstalled`] - PATH 中找不到 `git`
    pub fn open(workdir: &Path) -> Result<Self> {
        if !workdir.is_dir() {
            return Err(CommitBrewError::NoWorkspace(workdir.to_path_buf()));
        }
        let git_bin = which::which("git").map_err(|_| CommitBrewError::GitNotInstalled)?;
        Ok(Self {
            workdir: workdir.to_path_buf(),
            git_bin,
        })
    }

    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    async fn output(&self, args: &[&str]) -> Result<Output> {
        tracing::debug!("Running git {:?} in {}", args, self.workdir.display());
        let output = Command::new(&self.git_bin)
            .args(args)
            .current_dir(&self.workdir)
            .output()
            .await?;
        Ok(output)
    }

    /// 执行 git 命令，非零退出码转换为 [`CommitBrewError::GitCommand`]
    async fn run(&self, args: &[&str]) -> Result<String> {
        let output = self.output(args).await?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let error_msg = if stderr.trim().is_empty() {
                // 有些 git 错误输出到 stdout 而不是 stderr
                String::from_utf8_lossy(&output.stdout).trim().to_string()
            } else {
                stderr.trim().to_string()
            };
            tracing::debug!("git {:?} failed: {}", args, error_msg);
            return Err(CommitBrewError::GitCommand(error_msg));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

#[async_trait]
impl GitOperations for GitRepository {
    async fn is_repository(&self) -> Result<bool> {
        let output = self.output(&["rev-parse", "--git-dir"]).await?;
        Ok(output.status.success())
    }

    async fn get_staged_diff(&self) -> Result<String> {
        self.run(&["diff", "--cached"]).await
    }

    async fn commit(&self, message: &str) -> Result<()> {
        self.run(&["commit", "-m", message]).await?;
        Ok(())
    }

    async fn head_revision(&self) -> Result<String> {
        let hash = self.run(&["rev-parse", "HEAD"]).await?;
        Ok(hash.trim().to_string())
    }
}
