//! agentlint - convention checker for agent collections
//!
//! Checks a collection of markdown agent definitions and context documents:
//! frontmatter fields, required sections, context references, directory
//! layout and project metadata.

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod checks;
mod cli;
mod collection;
mod commands;
mod config;
mod error;
mod frontmatter;

use cli::{Cli, Commands};

/// Log filter used when RUST_LOG is not set
fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "agentlint=debug"
    } else {
        "agentlint=warn"
    }
}

fn init_logging(verbose: bool) {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(verbose).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Check(args) => commands::check::run(cli.collection, cli.config, args),
        Commands::Frontmatter(args) => commands::frontmatter::run(args, cli.verbose),
        Commands::Config => commands::config::run(cli.collection, cli.config),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
