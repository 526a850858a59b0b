//! Command implementations.
//!
//! # Modules
//! - `generate` - Commit message generation workflow.
//! - `init` - `.env` template creation.
//! - `options` - Command option structs.

/// Commit message generation workflow.
pub mod generate;
/// Credential template initialization.
pub mod init;
/// Command option structs.
pub mod options;

pub use options::GenerateOptions;

use std::path::{Path, PathBuf};

use crate::error::{CommitBrewError, Result};

/// 解析工作区目录：显式传入的路径优先，否则使用当前目录
pub fn resolve_workspace(workdir: Option<&Path>) -> Result<PathBuf> {
    let path = match workdir {
        Some(dir) => dir.to_path_buf(),
        None => std::env::current_dir()?,
    };

    if !path.is_dir() {
        return Err(CommitBrewError::NoWorkspace(path));
    }
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_explicit_workspace() {
        let dir = TempDir::new().unwrap();
        let resolved = resolve_workspace(Some(dir.path())).unwrap();
        assert_eq!(resolved, dir.path());
    }

    #[test]
    fn test_resolve_missing_workspace() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("gone");
        let err = resolve_workspace(Some(&missing)).unwrap_err();
        assert!(matches!(err, CommitBrewError::NoWorkspace(p) if p == missing));
    }
}
