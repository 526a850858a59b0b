use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, builder::styling};

const STYLES: styling::Styles = styling::Styles::styled()
    .header(styling::AnsiColor::Green.on_default().bold())
    .usage(styling::AnsiColor::Green.on_default().bold())
    .literal(styling::AnsiColor::Cyan.on_default().bold())
    .placeholder(styling::AnsiColor::Cyan.on_default());

#[derive(Parser)]
#[command(name = "commitbrew")]
#[command(author, version, long_about = None)]
#[command(styles = STYLES)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Arguments used when no subcommand is given
    #[command(flatten)]
    pub generate: GenerateArgs,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a commit message for staged changes (default)
    Generate(GenerateArgs),

    /// Create a .env template for GEMINI_API_KEY in the workspace
    Init {
        /// Overwrite an existing .env file
        #[arg(short, long)]
        force: bool,

        /// Workspace folder (defaults to the current directory)
        #[arg(short = 'C', long)]
        workdir: Option<PathBuf>,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct GenerateArgs {
    /// Commit without asking for confirmation
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Use the generated message without editing
    #[arg(short, long)]
    pub no_edit: bool,

    /// Only generate and print the message, do not commit
    #[arg(short, long)]
    pub dry_run: bool,

    /// Edit the message in $VISUAL / $EDITOR
    #[arg(short, long)]
    pub editor: bool,

    /// Override the Gemini model
    #[arg(short, long)]
    pub model: Option<String>,

    /// Workspace folder (defaults to the current directory)
    #[arg(short = 'C', long)]
    pub workdir: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_uses_top_level_args() {
        let cli = Cli::try_parse_from(["commitbrew", "-y", "--model", "gemini-1.5-pro"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.generate.yes);
        assert_eq!(cli.generate.model.as_deref(), Some("gemini-1.5-pro"));
    }

    #[test]
    fn test_generate_subcommand() {
        let cli = Cli::try_parse_from(["commitbrew", "generate", "--dry-run", "-C", "/tmp"]).unwrap();
        match cli.command {
            Some(Commands::Generate(args)) => {
                assert!(args.dry_run);
                assert_eq!(args.workdir, Some(PathBuf::from("/tmp")));
            }
            _ => panic!("expected generate subcommand"),
        }
    }

    #[test]
    fn test_init_subcommand_with_verbose() {
        let cli = Cli::try_parse_from(["commitbrew", "init", "--force", "-v"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, Some(Commands::Init { force: true, .. })));
    }
}
