//! Command option structure
//!
//! Built from parsed CLI arguments and passed to `commands::generate::run()`.

use std::path::PathBuf;

use crate::cli::GenerateArgs;

/// Generate command options
///
/// # Field description
/// - `yes`: commit without the confirm prompt
/// - `no_edit`: skip the edit prompt (use the generated message directly)
/// - `dry_run`: only print the message, never commit
/// - `use_editor`: edit in `$VISUAL`/`$EDITOR` instead of the inline prompt
/// - `model`: override `llm.model`
/// - `workdir`: workspace folder (current directory when `None`)
///
/// # Example
/// ```
/// use commitbrew::commands::GenerateOptions;
///
/// let options = GenerateOptions {
///     dry_run: true,
///     ..Default::default()
/// };
/// assert!(!options.yes);
/// ```
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    pub yes: bool,
    pub no_edit: bool,
    pub dry_run: bool,
    pub use_editor: bool,
    pub model: Option<String>,
    pub workdir: Option<PathBuf>,
    pub verbose: bool,
}

impl GenerateOptions {
    pub fn from_cli(args: &GenerateArgs, verbose: bool) -> Self {
        Self {
            yes: args.yes,
            no_edit: args.no_edit,
            dry_run: args.dry_run,
            use_editor: args.editor,
            model: args.model.clone(),
            workdir: args.workdir.clone(),
            verbose,
        }
    }
}
