/// Commit message 指令模板，`{diff}` 处原样嵌入 staged diff
const COMMIT_PROMPT_TEMPLATE: &str = "Generate a concise and descriptive Git commit message based on the following staged changes.
The message should follow conventional commit format (e.g., feat:, fix:, docs:, style:, refactor:, test:, chore:) and be clear about what changes were made.

Staged changes:
{diff}

Please provide only the commit message, no additional text or formatting.";

/// 构建 commit message prompt
///
/// diff 不做截断或转义。
pub fn build_commit_prompt(diff: &str) -> String {
    COMMIT_PROMPT_TEMPLATE.replacen("{diff}", diff, 1)
}
