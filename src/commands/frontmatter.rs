//! Frontmatter command implementation
//!
//! Extracts and parses the frontmatter of one markdown file and prints it.

use std::fs;

use console::Style;

use crate::cli::{FrontmatterArgs, FrontmatterFormat};
use crate::error::{LintError, Result, fs as fs_error, lint};
use crate::frontmatter::{self, ParseReport};

/// Run frontmatter command
pub fn run(args: FrontmatterArgs, verbose: bool) -> Result<()> {
    let display = args.file.display().to_string();
    if !args.file.is_file() {
        return Err(fs_error::not_found(display));
    }
    let content =
        fs::read_to_string(&args.file).map_err(|e| fs_error::read_failed(&display, e.to_string()))?;

    let block = frontmatter::extract(&content).ok_or_else(|| lint::frontmatter_missing(&display))?;
    let parsed = frontmatter::parse_with_report(block);

    if verbose {
        for line in skipped_lines(&parsed) {
            eprintln!("{line}");
        }
    }

    println!("{}", format_output(block, &parsed, args.format)?);
    Ok(())
}

fn format_output(block: &str, parsed: &ParseReport, format: FrontmatterFormat) -> Result<String> {
    let output = match format {
        FrontmatterFormat::Json => serde_json::to_string_pretty(&parsed.mapping)?,
        FrontmatterFormat::Yaml => serde_yaml::to_string(&parsed.mapping)
            .map_err(|e| LintError::SerializeFailed {
                message: e.to_string(),
            })?
            .trim_end()
            .to_string(),
        FrontmatterFormat::Block => frontmatter::render(&parsed.mapping),
        FrontmatterFormat::Raw => block.to_string(),
    };
    Ok(output)
}

fn skipped_lines(parsed: &ParseReport) -> Vec<String> {
    parsed
        .skipped
        .iter()
        .map(|skipped| {
            format!(
                "{} line {}: {}: {}",
                Style::new().yellow().apply_to("skipped"),
                skipped.number,
                skipped.reason,
                skipped.text.trim_end()
            )
        })
        .collect()
}
