//! Check command implementation
//!
//! Runs the convention checks and prints a report. Exits with an error when
//! any check fails.

use std::path::PathBuf;

use console::Style;
use serde::Serialize;

use super::helpers::open_collection;
use crate::checks::{self, CheckResult, Report, Status};
use crate::cli::{CheckArgs, ReportFormat};
use crate::error::{Result, lint};

/// Run check command
pub fn run(collection: Option<PathBuf>, config: Option<PathBuf>, args: CheckArgs) -> Result<()> {
    let (collection, config) = open_collection(collection, config.as_deref())?;
    let report = checks::run_checks(&collection, &config, &args.only);

    match args.format {
        ReportFormat::Text => {
            for line in text_report(&config.name, &report, args.show_passed) {
                println!("{line}");
            }
        }
        ReportFormat::Json => {
            let summary = JsonReport::new(&config.name, &report);
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
    }

    if report.is_success() {
        Ok(())
    } else {
        Err(lint::checks_failed(
            report.count(Status::Fail),
            report.results.len(),
        ))
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    collection: &'a str,
    passed: usize,
    failed: usize,
    skipped: usize,
    results: &'a [CheckResult],
}

impl<'a> JsonReport<'a> {
    fn new(collection: &'a str, report: &'a Report) -> Self {
        Self {
            collection,
            passed: report.count(Status::Pass),
            failed: report.count(Status::Fail),
            skipped: report.count(Status::Skip),
            results: &report.results,
        }
    }
}

/// Lines of the human-readable report
fn text_report(name: &str, report: &Report, show_passed: bool) -> Vec<String> {
    let mut lines = vec![format!(
        "Checked {} ({} checks)",
        Style::new().bold().yellow().apply_to(name),
        report.results.len()
    )];

    let shown: Vec<&CheckResult> = report
        .results
        .iter()
        .filter(|r| show_passed || r.status == Status::Fail)
        .collect();
    if !shown.is_empty() {
        lines.push(String::new());
    }
    for result in shown {
        lines.push(format!(
            "  {} {} {}",
            status_label(result.status),
            Style::new().bold().apply_to(&result.id),
            result.subject
        ));
        if let Some(ref message) = result.message {
            lines.push(format!("      {message}"));
        }
    }

    lines.push(String::new());
    lines.push(format!(
        "{} {} passed, {} failed, {} skipped",
        Style::new().bold().apply_to("Summary:"),
        Style::new().green().apply_to(report.count(Status::Pass)),
        Style::new().red().apply_to(report.count(Status::Fail)),
        report.count(Status::Skip)
    ));
    lines
}

fn status_label(status: Status) -> String {
    match status {
        Status::Pass => Style::new().green().apply_to("PASS").to_string(),
        Status::Fail => Style::new().red().bold().apply_to("FAIL").to_string(),
        Status::Skip => Style::new().dim().apply_to("SKIP").to_string(),
    }
}
