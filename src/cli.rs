//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::checks::Scope;

/// agentlint - convention checker for agent collections
///
/// Validate agent definitions, context documents and project metadata of a
/// markdown agent collection.
#[derive(Parser, Debug)]
#[command(
    name = "agentlint",
    author,
    version,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Convention checker for markdown agent collections",
    long_about = "agentlint checks that a collection of markdown agent definitions and \
                  context documents follows its conventions: frontmatter fields, required \
                  sections, context references, directory layout and project metadata.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  agentlint check\n    \
                  agentlint check --only agents --format json\n    \
                  agentlint frontmatter agents/static-analyzer.md\n    \
                  agentlint config"
)]
pub struct Cli {
    /// Collection root directory (defaults to current directory)
    #[arg(long, short = 'c', global = true, env = "AGENTLINT_COLLECTION")]
    pub collection: Option<PathBuf>,

    /// Configuration file (defaults to agentlint.yaml in the collection root)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run convention checks on the collection
    Check(CheckArgs),

    /// Show the parsed frontmatter of a markdown file
    Frontmatter(FrontmatterArgs),

    /// Print the effective configuration
    Config,

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Output format of the check report
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

/// Output format of the frontmatter command
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FrontmatterFormat {
    /// Parsed mapping as JSON
    #[default]
    Json,
    /// Parsed mapping as YAML
    Yaml,
    /// Parsed mapping written back in frontmatter notation
    Block,
    /// The block text exactly as found
    Raw,
}

/// Arguments for the check command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Check everything:\n    agentlint check\n\n\
                  Check only agent files:\n    agentlint check --only agents\n\n\
                  Machine-readable report:\n    agentlint check --format json\n\n\
                  Check another directory:\n    agentlint -c ../code-quality check")]
pub struct CheckArgs {
    /// Restrict checks to these groups (repeatable)
    #[arg(long, value_enum, value_name = "GROUP")]
    pub only: Vec<Scope>,

    /// Report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,

    /// List passed and skipped checks too
    #[arg(long)]
    pub show_passed: bool,
}

/// Arguments for the frontmatter command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Show parsed frontmatter as JSON:\n    agentlint frontmatter agents/static-analyzer.md\n\n\
                  Show the raw block:\n    agentlint frontmatter agents/static-analyzer.md --format raw\n\n\
                  Show lines the parser skipped:\n    agentlint -v frontmatter agents/static-analyzer.md")]
pub struct FrontmatterArgs {
    /// Markdown file to read (relative paths resolve against the current directory)
    pub file: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = FrontmatterFormat::Json)]
    pub format: FrontmatterFormat,
}

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    agentlint completions --shell bash > ~/.bash_completion.d/agentlint\n\n\
                  Generate zsh completions:\n    agentlint completions --shell zsh > ~/.zfunc/_agentlint\n\n\
                  Generate fish completions:\n    agentlint completions --shell fish > ~/.config/fish/completions/agentlint.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    #[arg(long)]
    pub shell: String,
}
