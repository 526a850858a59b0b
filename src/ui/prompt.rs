use inquire::validator::Validation;
use inquire::{Confirm, InquireError, Text};

use crate::error::{CommitBrewError, Result};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// 交互式提示接口
///
/// 生成 message 之后的两个交互步骤：编辑与确认提交。
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait Prompter {
    /// 编辑生成的 message
    ///
    /// 返回 `Ok(None)` 表示用户取消（Esc 或清空内容）。
    fn edit_message(&self, initial: &str) -> Result<Option<String>>;

    /// 询问是否立即提交
    fn confirm_commit(&self) -> Result<bool>;
}

/// 基于 inquire / 外部编辑器的终端实现
#[derive(Debug, Clone, Default)]
pub struct TerminalPrompter {
    use_editor: bool,
}

impl TerminalPrompter {
    pub fn new(use_editor: bool) -> Self {
        Self { use_editor }
    }
}

impl Prompter for TerminalPrompter {
    fn edit_message(&self, initial: &str) -> Result<Option<String>> {
        // 单行输入框放不下多行 message，直接交给编辑器
        if self.use_editor || initial.contains('\n') {
            return super::editor::edit_text(initial);
        }

        let empty_error = rust_i18n::t!("prompt.empty_message").to_string();
        let answer = Text::new(&rust_i18n::t!("prompt.edit_message"))
            .with_initial_value(initial)
            .with_placeholder(&rust_i18n::t!("prompt.placeholder"))
            .with_validator(move |input: &str| {
                if input.trim().is_empty() {
                    Ok(Validation::Invalid(empty_error.clone().into()))
                } else {
                    Ok(Validation::Valid)
                }
            })
            .prompt_skippable();

        match answer {
            Ok(edited) => Ok(edited.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())),
            Err(InquireError::OperationInterrupted) => Err(CommitBrewError::UserCancelled),
            Err(e) => Err(e.into()),
        }
    }

    fn confirm_commit(&self) -> Result<bool> {
        let answer = Confirm::new(&rust_i18n::t!("prompt.confirm_commit"))
            .with_default(true)
            .prompt_skippable();

        match answer {
            Ok(choice) => Ok(choice.unwrap_or(false)),
            Err(InquireError::OperationInterrupted) => Err(CommitBrewError::UserCancelled),
            Err(e) => Err(e.into()),
        }
    }
}
