//! Commit workflow configuration.

use serde::{Deserialize, Serialize};

/// Commit workflow configuration.
///
/// # Fields
/// - `confirm_before_commit`: ask "Commit now?" after editing (default: `true`)
/// - `use_editor`: edit the generated message in `$VISUAL`/`$EDITOR` instead of
///   the inline prompt (default: `false`)
///
/// # Example
/// ```toml
/// [commit]
/// confirm_before_commit = true
/// use_editor = false
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CommitConfig {
    /// Whether to ask for confirmation before running `git commit`.
    #[serde(default = "default_true")]
    pub confirm_before_commit: bool,

    /// Whether to open the external editor for the edit step.
    #[serde(default)]
    pub use_editor: bool,
}

impl Default for CommitConfig {
    fn default() -> Self {
        Self {
            confirm_before_commit: true,
            use_editor: false,
        }
    }
}

fn default_true() -> bool {
    true
}
