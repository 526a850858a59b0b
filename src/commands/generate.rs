use std::sync::Arc;

use crate::commands::options::GenerateOptions;
use crate::config::AppConfig;
use crate::credentials::CredentialLoader;
use crate::error::Result;
use crate::git::commit::{CommitReport, commit_changes};
use crate::git::guard::{ensure_repository, require_staged_diff};
use crate::git::repository::GitRepository;
use crate::git::{GitOperations, diff::parse_diff_stats};
use crate::llm::LLMProvider;
use crate::llm::provider::create_provider;
use crate::ui::{self, Prompter, Spinner, TerminalPrompter};

/// 一次 generate 的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    /// 已提交
    Committed(CommitReport),
    /// `--dry-run`：只输出了 message
    Printed { message: String },
    /// 用户在编辑或确认阶段放弃
    Cancelled,
}

/// 执行 generate 命令
pub async fn run(options: &GenerateOptions, config: &AppConfig) -> Result<CommitOutcome> {
    let mut config = config.clone();
    if let Some(model) = &options.model {
        config.llm.model = model.clone();
    }

    let workspace = super::resolve_workspace(options.workdir.as_deref())?;
    let repo = GitRepository::open(&workspace)?;
    let prompter = TerminalPrompter::new(options.use_editor || config.commit.use_editor);

    // 凭据和 provider 延迟到仓库检查通过之后再创建
    let connect = || {
        let api_key = CredentialLoader::for_workspace(&workspace).load()?;
        create_provider(&config, api_key)
    };

    run_with_deps(options, &config, &repo, &prompter, connect).await
}

/// 执行 generate 命令（可测试版本，接受 trait 对象）
///
/// `connect` 只会在确认存在 staged changes 之后调用一次。
pub async fn run_with_deps<F>(
    options: &GenerateOptions,
    config: &AppConfig,
    repo: &dyn GitOperations,
    prompter: &dyn Prompter,
    connect: F,
) -> Result<CommitOutcome>
where
    F: FnOnce() -> Result<Arc<dyn LLMProvider>>,
{
    let colored = config.ui.colored;

    // 1. 仓库与 staged changes 检查
    ensure_repository(repo).await?;
    let diff = require_staged_diff(repo).await?;

    let stats = parse_diff_stats(&diff);
    println!(
        "{}",
        ui::info(&ui::format_diff_stats(&stats, colored), colored)
    );

    // 2. 凭据 + provider
    let provider = connect()?;
    tracing::debug!("Using provider: {} ({})", provider.name(), config.llm.model);

    // 3. 生成 message
    let message = generate_message(provider.as_ref(), &diff, colored).await?;

    if options.dry_run {
        ui::message_block(&message, colored);
        return Ok(CommitOutcome::Printed { message });
    }

    // 4. 编辑
    let message = if options.no_edit {
        ui::message_block(&message, colored);
        message
    } else {
        match prompter.edit_message(&message)? {
            Some(edited) => edited,
            None => {
                ui::warning(&rust_i18n::t!("generate.cancelled"), colored);
                return Ok(CommitOutcome::Cancelled);
            }
        }
    };

    // 5. 确认
    if config.commit.confirm_before_commit && !options.yes && !prompter.confirm_commit()? {
        ui::warning(&rust_i18n::t!("generate.cancelled"), colored);
        return Ok(CommitOutcome::Cancelled);
    }

    // 6. 提交
    let report = commit_changes(repo, &message).await?;
    ui::success(&rust_i18n::t!("generate.committed"), colored);
    match report.short_hash() {
        Some(hash) => println!("{}", format_commit_hash_line(hash)),
        None => ui::warning(&rust_i18n::t!("generate.hash_unavailable"), colored),
    }

    Ok(CommitOutcome::Committed(report))
}

async fn generate_message(provider: &dyn LLMProvider, diff: &str, colored: bool) -> Result<String> {
    let spinner = Spinner::new(&rust_i18n::t!("generate.analyzing"), colored);
    spinner.set_message(&rust_i18n::t!("generate.generating"));

    let result = provider.generate_commit_message(diff).await;
    spinner.finish_and_clear();

    let message = result?;
    tracing::debug!("Generated commit message:\n{}", message);
    ui::success(&rust_i18n::t!("generate.ready"), colored);
    Ok(message)
}

/// 提交成功后展示的 hash 行
pub fn format_commit_hash_line(short_hash: &str) -> String {
    rust_i18n::t!("generate.commit_hash", hash = short_hash).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CommitBrewError;
    use crate::git::MockGitOperations;
    use crate::llm::MockLLMProvider;
    use crate::ui::MockPrompter;
    use pretty_assertions::assert_eq;

    const DIFF: &str = "diff --git a/src/lib.rs b/src/lib.rs\n--- a/src/lib.rs\n+++ b/src/lib.rs\n@@ -1 +1,2 @@\n+pub fn hello() {}\n";

    fn quiet_config() -> AppConfig {
        let mut config = AppConfig::default();
        config.ui.colored = false;
        config
    }

    fn staged_repo() -> MockGitOperations {
        let mut repo = MockGitOperations::new();
        repo.expect_is_repository().returning(|| Ok(true));
        repo.expect_get_staged_diff()
            .returning(|| Ok(DIFF.to_string()));
        repo
    }

    fn provider_returning(message: &'static str) -> Arc<dyn LLMProvider> {
        let mut provider = MockLLMProvider::new();
        provider
            .expect_generate_commit_message()
            .returning(move |_| Ok(message.to_string()));
        provider.expect_name().return_const("mock".to_string());
        Arc::new(provider)
    }

    #[tokio::test]
    async fn test_dry_run_prints_without_prompting() {
        let repo = staged_repo();
        let prompter = MockPrompter::new();
        let options = GenerateOptions {
            dry_run: true,
            ..Default::default()
        };

        let outcome = run_with_deps(&options, &quiet_config(), &repo, &prompter, || {
            Ok(provider_returning("feat: add hello"))
        })
        .await
        .unwrap();

        assert_eq!(
            outcome,
            CommitOutcome::Printed {
                message: "feat: add hello".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_not_a_repository_stops_early() {
        let mut repo = MockGitOperations::new();
        repo.expect_is_repository().returning(|| Ok(false));
        repo.expect_get_staged_diff().never();
        let prompter = MockPrompter::new();

        let result = run_with_deps(
            &GenerateOptions::default(),
            &quiet_config(),
            &repo,
            &prompter,
            || -> Result<Arc<dyn LLMProvider>> { panic!("provider must not be created") },
        )
        .await;

        assert!(matches!(result, Err(CommitBrewError::NotARepository)));
    }

    #[tokio::test]
    async fn test_declined_confirmation_skips_commit() {
        let mut repo = staged_repo();
        repo.expect_commit().never();
        let mut prompter = MockPrompter::new();
        prompter
            .expect_edit_message()
            .returning(|initial| Ok(Some(initial.to_string())));
        prompter.expect_confirm_commit().returning(|| Ok(false));

        let outcome = run_with_deps(
            &GenerateOptions::default(),
            &quiet_config(),
            &repo,
            &prompter,
            || Ok(provider_returning("fix: typo")),
        )
        .await
        .unwrap();

        assert_eq!(outcome, CommitOutcome::Cancelled);
    }

    #[tokio::test]
    async fn test_confirm_disabled_in_config_commits_directly() {
        let mut repo = staged_repo();
        repo.expect_commit()
            .withf(|message: &str| message == "docs: readme")
            .times(1)
            .returning(|_| Ok(()));
        repo.expect_head_revision()
            .returning(|| Ok("0123456789abcdef".to_string()));
        let mut prompter = MockPrompter::new();
        prompter.expect_confirm_commit().never();

        let mut config = quiet_config();
        config.commit.confirm_before_commit = false;
        let options = GenerateOptions {
            no_edit: true,
            ..Default::default()
        };

        let outcome = run_with_deps(&options, &config, &repo, &prompter, || {
            Ok(provider_returning("docs: readme"))
        })
        .await
        .unwrap();

        match outcome {
            CommitOutcome::Committed(report) => assert_eq!(report.short_hash(), Some("01234567")),
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_format_commit_hash_line_contains_hash() {
        rust_i18n::set_locale("en");
        assert!(format_commit_hash_line("abcdef12").contains("abcdef12"));
    }
}
