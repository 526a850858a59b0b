//! API key 加载
//!
//! 按固定顺序在若干目录中查找 `.env`，提取 `GEMINI_API_KEY`。
//! 找不到时在工作区根目录写入模板文件，并返回 [`CommitBrewError::CredentialMissing`]。
//!
//! 查找顺序：
//! 1. 当前工作目录
//! 2. 可执行文件所在目录
//! 3. 可执行文件所在目录的上一级
//! 4. 工作区根目录
//!
//! 文件读取或模板写入失败会直接返回错误，不会被静默忽略。

mod dotenv;

pub use dotenv::{extract_api_key, is_placeholder, template_content};

use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::credentials::{API_KEY_VAR, ENV_FILE_NAME};
use crate::error::{CommitBrewError, Result};

/// Gemini API key
///
/// `Debug` 输出会打码，避免 key 出现在日志里。
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// 取出明文（仅用于请求头）
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ApiKey").field(&mask_api_key(&self.0)).finish()
    }
}

/// 打码 API key：保留前 4 位
pub fn mask_api_key(key: &str) -> String {
    let prefix: String = key.chars().take(4).collect();
    if key.chars().count() <= 4 {
        "****".to_string()
    } else {
        format!("{}****", prefix)
    }
}

/// 模板写入结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateStatus {
    Created(PathBuf),
    AlreadyExists(PathBuf),
}

/// 凭据加载器
#[derive(Debug, Clone)]
pub struct CredentialLoader {
    search_paths: Vec<PathBuf>,
    template_dir: Option<PathBuf>,
    env_fallback: bool,
}

impl CredentialLoader {
    /// 使用默认查找目录创建加载器，模板写入 `workspace`
    pub fn for_workspace(workspace: &Path) -> Self {
        Self::new(
            default_search_paths(Some(workspace)),
            Some(workspace.to_path_buf()),
        )
    }

    pub fn new(search_paths: Vec<PathBuf>, template_dir: Option<PathBuf>) -> Self {
        Self {
            search_paths: dedup_paths(search_paths),
            template_dir,
            env_fallback: true,
        }
    }

    /// 是否在 `.env` 都找不到时读取 `GEMINI_API_KEY` 环境变量（默认开启）
    pub fn with_env_fallback(mut self, enabled: bool) -> Self {
        self.env_fallback = enabled;
        self
    }

    pub fn search_paths(&self) -> &[PathBuf] {
        &self.search_paths
    }

    /// 加载 API key
    ///
    /// # 错误
    /// - [`CommitBrewError::CredentialFile`] - `.env` 存在但无法读取，或模板写入失败
    /// - [`CommitBrewError::CredentialMissing`] - 没有可用的 key（可能已写入模板）
    pub fn load(&self) -> Result<ApiKey> {
        for dir in &self.search_paths {
            let env_path = dir.join(ENV_FILE_NAME);
            if !env_path.is_file() {
                continue;
            }

            let content =
                fs::read_to_string(&env_path).map_err(|source| CommitBrewError::CredentialFile {
                    path: env_path.clone(),
                    source,
                })?;

            match extract_api_key(&content) {
                Some(key) => {
                    tracing::debug!("Loaded {} from {}", API_KEY_VAR, env_path.display());
                    return Ok(ApiKey::new(key));
                }
                None => {
                    tracing::debug!("No usable {} in {}", API_KEY_VAR, env_path.display());
                }
            }
        }

        if self.env_fallback
            && let Some(key) = key_from_environment()
        {
            tracing::debug!("Loaded {} from process environment", API_KEY_VAR);
            return Ok(ApiKey::new(key));
        }

        let template = match &self.template_dir {
            Some(dir) => match write_template(dir, false)? {
                TemplateStatus::Created(path) => {
                    tracing::info!("Created credential template at {}", path.display());
                    Some(path)
                }
                TemplateStatus::AlreadyExists(_) => None,
            },
            None => None,
        };

        Err(CommitBrewError::CredentialMissing { template })
    }
}

/// 默认查找目录（已去重，顺序固定）
pub fn default_search_paths(workspace: Option<&Path>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd);
    }

    if let Ok(exe) = std::env::current_exe()
        && let Some(exe_dir) = exe.parent()
    {
        paths.push(exe_dir.to_path_buf());
        if let Some(parent) = exe_dir.parent() {
            paths.push(parent.to_path_buf());
        }
    }

    if let Some(workspace) = workspace {
        paths.push(workspace.to_path_buf());
    }

    dedup_paths(paths)
}

/// 在 `dir` 下写入 `.env` 模板
///
/// 已存在且 `force == false` 时不覆盖。
pub fn write_template(dir: &Path, force: bool) -> Result<TemplateStatus> {
    let path = dir.join(ENV_FILE_NAME);
    if path.exists() && !force {
        return Ok(TemplateStatus::AlreadyExists(path));
    }

    fs::write(&path, template_content()).map_err(|source| CommitBrewError::CredentialFile {
        path: path.clone(),
        source,
    })?;
    Ok(TemplateStatus::Created(path))
}

fn key_from_environment() -> Option<String> {
    std::env::var(API_KEY_VAR)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty() && !is_placeholder(v))
}

fn dedup_paths(paths: Vec<PathBuf>) -> Vec<PathBuf> {
    let mut unique: Vec<PathBuf> = Vec::with_capacity(paths.len());
    for path in paths {
        if !unique.contains(&path) {
            unique.push(path);
        }
    }
    unique
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_mask_api_key() {
        assert_eq!(mask_api_key("AIzaSyD-secret"), "AIza****");
        assert_eq!(mask_api_key("abc"), "****");
    }

    #[test]
    fn test_api_key_debug_is_masked() {
        let key = ApiKey::new("AIzaSyD-secret");
        let debug = format!("{:?}", key);
        assert!(!debug.contains("secret"));
        assert!(debug.contains("AIza****"));
    }

    #[test]
    fn test_dedup_keeps_first_occurrence() {
        let paths = vec![
            PathBuf::from("/a"),
            PathBuf::from("/b"),
            PathBuf::from("/a"),
            PathBuf::from("/c"),
        ];
        assert_eq!(
            dedup_paths(paths),
            vec![PathBuf::from("/a"), PathBuf::from("/b"), PathBuf::from("/c")]
        );
    }

    #[test]
    fn test_default_search_paths_ends_with_workspace() {
        let dir = TempDir::new().unwrap();
        let paths = default_search_paths(Some(dir.path()));
        assert!(paths.contains(&dir.path().to_path_buf()));
        if let Ok(cwd) = std::env::current_dir() {
            assert_eq!(paths.first(), Some(&cwd));
        }
    }

    #[test]
    fn test_write_template_does_not_overwrite() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".env");
        fs::write(&path, "GEMINI_API_KEY=real\n").unwrap();

        let status = write_template(dir.path(), false).unwrap();
        assert_eq!(status, TemplateStatus::AlreadyExists(path.clone()));
        assert_eq!(fs::read_to_string(&path).unwrap(), "GEMINI_API_KEY=real\n");
    }

    #[test]
    fn test_write_template_force_overwrites() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".env");
        fs::write(&path, "junk").unwrap();

        let status = write_template(dir.path(), true).unwrap();
        assert_eq!(status, TemplateStatus::Created(path.clone()));
        assert_eq!(fs::read_to_string(&path).unwrap(), template_content());
    }
}
