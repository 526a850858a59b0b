use std::path::Path;

use crate::credentials::{TemplateStatus, write_template};
use crate::error::Result;
use crate::ui;

/// 在工作区写入 `.env` 模板
pub fn run(workdir: Option<&Path>, force: bool, colored: bool) -> Result<TemplateStatus> {
    let workspace = super::resolve_workspace(workdir)?;
    let status = write_template(&workspace, force)?;

    match &status {
        TemplateStatus::Created(path) => {
            ui::success(
                &rust_i18n::t!("init.created", path = path.display().to_string()),
                colored,
            );
            println!();
            println!("{}", ui::info(&rust_i18n::t!("init.next_step"), colored));
        }
        TemplateStatus::AlreadyExists(path) => {
            ui::warning(
                &rust_i18n::t!("init.exists", path = path.display().to_string()),
                colored,
            );
            println!("{}", rust_i18n::t!("init.use_force"));
        }
    }

    Ok(status)
}
