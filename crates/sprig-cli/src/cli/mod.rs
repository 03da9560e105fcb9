//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "sprig",
    bin_name = "sprig",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f331} Create projects from git templates",
    long_about = "Sprig copies a template (a registry name, a git repository, \
                  or a local directory) into a new project directory and \
                  records the result as the first git commit.",
    after_help = "EXAMPLES:\n\
        \x20 sprig create my-app --template vue\n\
        \x20 sprig create my-lib --template github:owner/repo#main\n\
        \x20 sprig create scratch --template ./templates/scratch --no-git\n\
        \x20 sprig list\n\
        \x20 sprig completions bash > /usr/share/bash-completion/completions/sprig",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new project from a template.
    #[command(
        visible_alias = "new",
        about = "Create a new project",
        after_help = "EXAMPLES:\n\
            \x20 sprig create my-app -t vue\n\
            \x20 sprig create my-app -t https://github.com/owner/repo.git -d ~/code\n\
            \x20 sprig create my-app -t ~/templates/basic --no-git -y"
    )]
    Create(CreateArgs),

    /// List available templates.
    #[command(
        visible_alias = "ls",
        about = "List available templates",
        after_help = "EXAMPLES:\n\
            \x20 sprig list\n\
            \x20 sprig list --format json"
    )]
    List(ListArgs),

    /// Initialise a Sprig configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 sprig init           # default location\n\
            \x20 sprig init --force   # overwrite an existing file"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 sprig completions bash > ~/.local/share/bash-completion/completions/sprig\n\
            \x20 sprig completions zsh  > ~/.zfunc/_sprig\n\
            \x20 sprig completions fish > ~/.config/fish/completions/sprig.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Sprig configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 sprig config get defaults.template\n\
            \x20 sprig config list\n\
            \x20 sprig config path"
    )]
    Config(ConfigCommands),
}

// ── create ────────────────────────────────────────────────────────────────────

/// Arguments for `sprig create`.
#[derive(Debug, Args)]
pub struct CreateArgs {
    /// Project name; also the name of the new directory.
    #[arg(value_name = "NAME", help = "Project name")]
    pub name: String,

    /// Template to copy.
    #[arg(
        short = 't',
        long = "template",
        value_name = "TEMPLATE",
        help = "Registry name, git URL, owner/repo, or local path"
    )]
    pub template: Option<String>,

    /// Parent directory of the new project.
    #[arg(
        short = 'd',
        long = "directory",
        value_name = "DIR",
        help = "Create the project inside DIR (default: current directory)"
    )]
    pub directory: Option<PathBuf>,

    /// Do not initialise a git repository.
    #[arg(long = "no-git", help = "Skip git init and the initial commit")]
    pub no_git: bool,

    /// Skip the confirmation prompt.
    #[arg(
        short = 'y',
        long = "yes",
        help = "Skip confirmation and create immediately"
    )]
    pub yes: bool,

    /// Write into an existing, non-empty directory.
    #[arg(long = "force", help = "Allow an existing non-empty target directory")]
    pub force: bool,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `sprig list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One name per line.
    List,
    /// JSON array.
    Json,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `sprig init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `sprig completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `sprig config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.template`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_create_command() {
        let cli = Cli::parse_from([
            "sprig",
            "create",
            "my-project",
            "--template",
            "vue",
            "-d",
            "/tmp/work",
            "--no-git",
        ]);
        let Commands::Create(args) = cli.command else {
            panic!("expected Create command");
        };
        assert_eq!(args.name, "my-project");
        assert_eq!(args.template.as_deref(), Some("vue"));
        assert_eq!(args.directory, Some(PathBuf::from("/tmp/work")));
        assert!(args.no_git);
        assert!(!args.force);
    }

    #[test]
    fn no_color_flag_needs_no_value() {
        let cli = Cli::parse_from(["sprig", "--no-color", "list"]);
        assert!(cli.global.no_color);
    }

    #[test]
    fn new_is_an_alias_for_create() {
        let cli = Cli::parse_from(["sprig", "new", "app", "-t", "owner/repo"]);
        assert!(matches!(cli.command, Commands::Create(_)));
    }

    #[test]
    fn template_is_optional() {
        let cli = Cli::parse_from(["sprig", "create", "app"]);
        let Commands::Create(args) = cli.command else {
            panic!("expected Create command");
        };
        assert!(args.template.is_none());
    }

    #[test]
    fn list_format_defaults_to_table() {
        let cli = Cli::parse_from(["sprig", "list"]);
        let Commands::List(args) = cli.command else {
            panic!("expected List command");
        };
        assert_eq!(args.format, ListFormat::Table);
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["sprig", "list", "-vv", "--output-format", "json"]);
        assert_eq!(cli.global.verbose, 2);
        assert_eq!(cli.global.output_format, OutputFormat::Json);
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        // clap should reject --quiet --verbose together
        let result = Cli::try_parse_from(["sprig", "--quiet", "--verbose", "list"]);
        assert!(result.is_err());
    }
}
