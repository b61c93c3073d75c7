//! Convention checks over an agent collection
//!
//! Each check asserts one thing about one subject (a file, or the collection
//! as a whole) and records a [`CheckResult`] in a [`Report`]. Checks never
//! abort: unreadable inputs turn into failures or skips of the checks that
//! depend on them.

mod agents;
mod context;
mod project;
mod text;

use serde::Serialize;

use crate::collection::Collection;
use crate::config::CollectionConfig;

/// Group of checks selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    /// Directory layout, pyproject.toml, README, LICENSE, examples
    Collection,
    /// Agent definition files
    Agents,
    /// Context documents
    Context,
}

impl Scope {
    pub const ALL: [Scope; 3] = [Scope::Collection, Scope::Agents, Scope::Context];
}

/// Outcome of a single check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Pass,
    Fail,
    Skip,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    /// Dotted check identifier, e.g. `agent.frontmatter`
    pub id: String,
    /// Collection-relative path, or `.` for collection-wide checks
    pub subject: String,
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Accumulated check results
#[derive(Debug, Clone, Default, Serialize)]
pub struct Report {
    pub results: Vec<CheckResult>,
}

impl Report {
    fn record(&mut self, id: &str, subject: &str, status: Status, message: Option<String>) {
        tracing::debug!(id, subject, ?status, message = message.as_deref(), "check");
        self.results.push(CheckResult {
            id: id.to_string(),
            subject: subject.to_string(),
            status,
            message,
        });
    }

    pub fn pass(&mut self, id: &str, subject: &str) {
        self.record(id, subject, Status::Pass, None);
    }

    pub fn fail(&mut self, id: &str, subject: &str, message: impl Into<String>) {
        self.record(id, subject, Status::Fail, Some(message.into()));
    }

    pub fn skip(&mut self, id: &str, subject: &str, reason: impl Into<String>) {
        self.record(id, subject, Status::Skip, Some(reason.into()));
    }

    /// Record a pass when `ok`, otherwise a failure with the lazily built message
    pub fn check<F>(&mut self, id: &str, subject: &str, ok: bool, message: F)
    where
        F: FnOnce() -> String,
    {
        if ok {
            self.pass(id, subject);
        } else {
            self.fail(id, subject, message());
        }
    }

    pub fn count(&self, status: Status) -> usize {
        self.results.iter().filter(|r| r.status == status).count()
    }

    pub fn failures(&self) -> impl Iterator<Item = &CheckResult> {
        self.results.iter().filter(|r| r.status == Status::Fail)
    }

    /// True when no check failed
    pub fn is_success(&self) -> bool {
        self.failures().next().is_none()
    }
}

/// Run the checks of the selected scopes; an empty selection runs all of them
pub fn run_checks(collection: &Collection, config: &CollectionConfig, scopes: &[Scope]) -> Report {
    let scopes: &[Scope] = if scopes.is_empty() { &Scope::ALL } else { scopes };
    let mut report = Report::default();

    for scope in Scope::ALL.iter().filter(|s| scopes.contains(s)) {
        tracing::info!(?scope, "running checks");
        match scope {
            Scope::Collection => project::run(collection, config, &mut report),
            Scope::Agents => agents::run(collection, config, &mut report),
            Scope::Context => context::run(collection, config, &mut report),
        }
    }

    report
}

#[cfg(test)]
pub(crate) mod fixtures;
