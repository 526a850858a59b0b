#[macro_use]
extern crate rust_i18n;

// Re-export all library modules
use commitbrew::*;

use anyhow::Result;
use clap::{CommandFactory, FromArgMatches};
use cli::{Cli, Commands};
use commitbrew::config::AppConfig;
use commitbrew::error::CommitBrewError;
use tokio::runtime::Runtime;

// Initialize i18n for binary crate
i18n!("locales", fallback = "en");

fn main() -> Result<()> {
    human_panic::setup_panic!();

    // 在解析 CLI 之前初始化语言（支持多语言 help text）
    init_locale_early();

    let cli = parse_cli_localized()?;

    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(log_level.into()),
        )
        .init();

    // reqwest 使用 rustls-no-provider，需要显式安装 crypto provider
    let _ = rustls::crypto::ring::default_provider().install_default();

    // init 不依赖配置，配置损坏时也能运行
    let config = match &cli.command {
        Some(Commands::Init { .. }) => config::load_config().unwrap_or_default(),
        _ => match config::load_config() {
            Ok(config) => config,
            Err(e) => exit_with_error(&e, true),
        },
    };

    let rt = Runtime::new()?;

    rt.block_on(async {
        match &cli.command {
            Some(Commands::Init { force, workdir }) => {
                if let Err(e) = commands::init::run(workdir.as_deref(), *force, config.ui.colored)
                {
                    exit_with_error(&e, config.ui.colored);
                }
            }
            Some(Commands::Generate(args)) => run_generate(args, cli.verbose, &config).await,
            None => run_generate(&cli.generate, cli.verbose, &config).await,
        }
        Ok(())
    })
}

async fn run_generate(args: &cli::GenerateArgs, verbose: bool, config: &AppConfig) {
    let options = commands::GenerateOptions::from_cli(args, verbose);
    if let Err(e) = commands::generate::run(&options, config).await {
        exit_with_error(&e, config.ui.colored);
    }
}

/// 输出错误与建议后退出
///
/// 用户取消不算错误，正常退出。
fn exit_with_error(e: &CommitBrewError, colored: bool) -> ! {
    if matches!(e, CommitBrewError::UserCancelled) {
        std::process::exit(0);
    }

    ui::error(
        &rust_i18n::t!("error.prefix", error = e.to_string()),
        colored,
    );
    if let Some(suggestion) = e.suggestion() {
        println!();
        println!("{}", ui::info(&suggestion, colored));
    }
    std::process::exit(1);
}

/// Parse CLI arguments with localized help text
///
/// Uses clap's derive + runtime override pattern:
/// 1. Get Command from derive macro (type-safe parsing)
/// 2. Override help text at runtime with rust_i18n::t!()
/// 3. Parse and reconstruct the Cli struct
fn parse_cli_localized() -> Result<Cli> {
    let cmd = Cli::command()
        .about(rust_i18n::t!("cli.about").to_string())
        .mut_arg("verbose", |arg| {
            arg.help(rust_i18n::t!("cli.verbose").to_string())
        })
        .mut_arg("yes", |arg| arg.help(rust_i18n::t!("cli.generate.yes").to_string()))
        .mut_arg("no_edit", |arg| {
            arg.help(rust_i18n::t!("cli.generate.no_edit").to_string())
        })
        .mut_arg("dry_run", |arg| {
            arg.help(rust_i18n::t!("cli.generate.dry_run").to_string())
        })
        .mut_arg("editor", |arg| {
            arg.help(rust_i18n::t!("cli.generate.editor").to_string())
        })
        .mut_arg("model", |arg| {
            arg.help(rust_i18n::t!("cli.generate.model").to_string())
        })
        .mut_arg("workdir", |arg| {
            arg.help(rust_i18n::t!("cli.workdir").to_string())
        })
        .mut_subcommand("generate", |cmd| {
            cmd.about(rust_i18n::t!("cli.generate").to_string())
                .mut_arg("yes", |arg| arg.help(rust_i18n::t!("cli.generate.yes").to_string()))
                .mut_arg("no_edit", |arg| {
                    arg.help(rust_i18n::t!("cli.generate.no_edit").to_string())
                })
                .mut_arg("dry_run", |arg| {
                    arg.help(rust_i18n::t!("cli.generate.dry_run").to_string())
                })
                .mut_arg("editor", |arg| {
                    arg.help(rust_i18n::t!("cli.generate.editor").to_string())
                })
                .mut_arg("model", |arg| {
                    arg.help(rust_i18n::t!("cli.generate.model").to_string())
                })
                .mut_arg("workdir", |arg| {
                    arg.help(rust_i18n::t!("cli.workdir").to_string())
                })
        })
        .mut_subcommand("init", |cmd| {
            cmd.about(rust_i18n::t!("cli.init").to_string())
                .mut_arg("force", |arg| {
                    arg.help(rust_i18n::t!("cli.init.force").to_string())
                })
                .mut_arg("workdir", |arg| {
                    arg.help(rust_i18n::t!("cli.workdir").to_string())
                })
        });

    let matches = cmd.get_matches();
    Cli::from_arg_matches(&matches)
        .map_err(|e| anyhow::anyhow!("Failed to parse CLI arguments: {}", e))
}

/// Initialize locale early in the startup process
///
/// Priority order:
/// 1. Environment variable COMMITBREW_UI_LANGUAGE (highest priority)
/// 2. Configuration file ui.language
/// 3. System locale detection
/// 4. Fallback to English
fn init_locale_early() {
    let locale = std::env::var("COMMITBREW_UI_LANGUAGE")
        .ok()
        .or_else(|| get_language_from_config().ok())
        .or_else(detect_system_locale)
        .unwrap_or_else(|| "en".to_string());

    rust_i18n::set_locale(&locale);
}

/// Attempt to read language setting from config file
///
/// Only parses the ui.language field, without validating the rest.
fn get_language_from_config() -> Result<String> {
    let config_path = config::get_config_path()
        .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

    if !config_path.exists() {
        return Err(anyhow::anyhow!("Config file not found"));
    }

    let content = std::fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;

    value
        .get("ui")
        .and_then(|ui| ui.get("language"))
        .and_then(|lang| lang.as_str())
        .map(str::to_string)
        .ok_or_else(|| anyhow::anyhow!("ui.language not found in config"))
}

/// Detect system locale using sys-locale crate
///
/// Returns locale in BCP 47 format (e.g., "en", "zh-CN")
fn detect_system_locale() -> Option<String> {
    sys_locale::get_locale().map(|locale| {
        // Normalize locale format: "zh_CN" -> "zh-CN"
        locale.replace('_', "-")
    })
}
