//! GitRepository 集成测试
//!
//! 在临时目录中调用真实的 git 可执行文件：
//! - 非仓库目录
//! - 空的暂存区
//! - staged diff
//! - commit + rev-parse HEAD

use commitbrew::error::CommitBrewError;
use commitbrew::git::commit::commit_changes;
use commitbrew::git::guard::{ensure_repository, require_staged_diff};
use commitbrew::git::{GitOperations, repository::GitRepository};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

// ========== 辅助函数 ==========

fn git(dir: &Path, args: &[&str]) {
    let status = Command::new("git")
        .args(args)
        .current_dir(dir)
        .env("GIT_CEILING_DIRECTORIES", dir.parent().unwrap_or(dir))
        .status()
        .expect("failed to run git");
    assert!(status.success(), "git {:?} failed", args);
}

fn init_repo() -> TempDir {
    let dir = TempDir::new().unwrap();
    git(dir.path(), &["init", "-q"]);
    git(dir.path(), &["config", "user.name", "Test User"]);
    git(dir.path(), &["config", "user.email", "test@example.com"]);
    git(dir.path(), &["config", "commit.gpgsign", "false"]);
    dir
}

fn stage_file(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
    git(dir, &["add", name]);
}

// ========== 打开仓库 ==========

#[test]
fn test_open_missing_directory() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope");
    let err = GitRepository::open(&missing).unwrap_err();
    assert!(matches!(err, CommitBrewError::NoWorkspace(_)));
}

#[tokio::test]
async fn test_plain_directory_is_not_a_repository() {
    let dir = TempDir::new().unwrap();
    let repo = GitRepository::open(dir.path()).unwrap();

    // 临时目录可能位于某个仓库之内，此时跳过
    if repo.is_repository().await.unwrap() {
        return;
    }

    let err = ensure_repository(&repo).await.unwrap_err();
    assert!(matches!(err, CommitBrewError::NotARepository));
}

// ========== staged diff ==========

#[tokio::test]
async fn test_empty_index_has_no_staged_changes() {
    let dir = init_repo();
    fs::write(dir.path().join("untracked.txt"), "not staged").unwrap();
    let repo = GitRepository::open(dir.path()).unwrap();

    assert!(repo.is_repository().await.unwrap());
    let err = require_staged_diff(&repo).await.unwrap_err();
    assert!(matches!(err, CommitBrewError::NoStagedChanges));
}

#[tokio::test]
async fn test_staged_diff_is_returned_trimmed() {
    let dir = init_repo();
    stage_file(dir.path(), "hello.txt", "hello world\n");
    let repo = GitRepository::open(dir.path()).unwrap();

    let diff = require_staged_diff(&repo).await.unwrap();

    assert!(diff.starts_with("diff --git a/hello.txt b/hello.txt"));
    assert!(diff.contains("+hello world"));
    assert_eq!(diff, diff.trim());
}

// ========== commit ==========

#[tokio::test]
async fn test_commit_and_head_revision() {
    let dir = init_repo();
    stage_file(dir.path(), "lib.rs", "pub fn answer() -> u32 { 42 }\n");
    let repo = GitRepository::open(dir.path()).unwrap();

    let report = commit_changes(&repo, "feat: add answer").await.unwrap();

    let hash = report.hash.clone().unwrap();
    assert_eq!(hash.len(), 40);
    assert_eq!(report.short_hash(), Some(&hash[..8]));
    assert_eq!(repo.head_revision().await.unwrap(), hash);

    // 提交后暂存区为空
    assert!(matches!(
        require_staged_diff(&repo).await,
        Err(CommitBrewError::NoStagedChanges)
    ));
}

#[tokio::test]
async fn test_commit_without_staged_changes_fails() {
    let dir = init_repo();
    let repo = GitRepository::open(dir.path()).unwrap();

    let err = commit_changes(&repo, "chore: nothing").await.unwrap_err();
    assert!(err.to_string().contains("Failed to commit changes"));
}

#[tokio::test]
async fn test_head_revision_fails_before_first_commit() {
    let dir = init_repo();
    let repo = GitRepository::open(dir.path()).unwrap();

    assert!(matches!(
        repo.head_revision().await,
        Err(CommitBrewError::GitCommand(_))
    ));
}
