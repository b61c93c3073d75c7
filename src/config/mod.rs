//! Collection configuration (agentlint.yaml)
//!
//! Every field is optional. Missing fields fall back to the conventions of
//! the `code-quality` collection.

mod loader;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Result, config};

pub use loader::{CONFIG_FILE, load};

/// What a collection is expected to contain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CollectionConfig {
    /// Collection name, used as the `@<name>:context/` reference namespace
    /// and expected as `[project].name` in pyproject.toml
    pub name: String,

    /// Agent names; each must exist as `agents/<name>.md`
    pub agents: Vec<String>,

    /// Context file names under `context/`
    pub context_files: Vec<String>,

    pub required_dirs: Vec<String>,

    pub required_files: Vec<String>,

    /// Capabilities listed under `[tool.amplifier.collection]`
    pub capabilities: Vec<String>,

    /// Provider module every agent must reference
    pub provider: String,

    /// Marker the LICENSE file must contain
    pub license: String,

    /// Agents allowed to have no context references
    pub optional_context_agents: Vec<String>,

    /// Terms each context file must mention, keyed by file name
    pub context_terms: BTreeMap<String, Vec<String>>,

    pub limits: Limits,
}

/// Size thresholds. Lengths are in characters, sizes in bytes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Limits {
    pub agent_min_chars: usize,
    pub context_min_chars: usize,
    pub context_min_bytes: u64,
    pub context_max_bytes: u64,
    pub readme_min_chars: usize,
    pub example_min_chars: usize,
    pub license_min_chars: usize,
    /// Minimum number of `#` characters in an agent file
    pub min_headers: usize,
    /// Minimum number of `##` occurrences in a context file
    pub min_sections: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            agent_min_chars: 100,
            context_min_chars: 1000,
            context_min_bytes: 2000,
            context_max_bytes: 50_000,
            readme_min_chars: 1000,
            example_min_chars: 500,
            license_min_chars: 100,
            min_headers: 3,
            min_sections: 3,
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

impl Default for CollectionConfig {
    fn default() -> Self {
        let context_terms = [
            (
                "code-smells-patterns.md",
                &["complexity", "cyclomatic", "nesting", "function"][..],
            ),
            (
                "security-patterns.md",
                &["SQL injection", "XSS", "command injection", "hardcoded secret"][..],
            ),
            (
                "performance-patterns.md",
                &["O(n²)", "nested loop", "N+1", "performance"][..],
            ),
            (
                "documentation-standards.md",
                &["docstring", "README", "documentation", "comment"][..],
            ),
        ]
        .into_iter()
        .map(|(file, terms)| (file.to_string(), strings(terms)))
        .collect();

        Self {
            name: "code-quality".to_string(),
            agents: strings(&[
                "static-analyzer",
                "security-scanner",
                "performance-analyzer",
                "documentation-checker",
                "quality-aggregator",
            ]),
            context_files: strings(&[
                "code-smells-patterns.md",
                "security-patterns.md",
                "performance-patterns.md",
                "documentation-standards.md",
            ]),
            required_dirs: strings(&["agents", "context", "profiles", "tests", "examples"]),
            required_files: strings(&["pyproject.toml", "README.md", "LICENSE"]),
            capabilities: strings(&[
                "static-analysis",
                "security-scanning",
                "performance-analysis",
                "documentation-checking",
            ]),
            provider: "provider-anthropic".to_string(),
            license: "MIT".to_string(),
            optional_context_agents: strings(&["quality-aggregator"]),
            context_terms,
            limits: Limits::default(),
        }
    }
}

impl CollectionConfig {
    /// Parse configuration from YAML. An empty document yields the defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Serialize configuration to YAML
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Reject configurations no collection could satisfy
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(config::invalid("name must not be empty"));
        }
        if let Some(agent) = self.agents.iter().find(|a| !is_plain_name(a)) {
            return Err(config::invalid(format!(
                "agent name '{agent}' must be a bare name without path separators or extension"
            )));
        }
        if let Some(file) = self
            .context_files
            .iter()
            .find(|f| !f.ends_with(".md") || f.contains('/') || f.contains('\\'))
        {
            return Err(config::invalid(format!(
                "context file '{file}' must be a markdown file name"
            )));
        }
        if let Some(file) = self
            .context_terms
            .keys()
            .find(|f| !self.context_files.contains(f))
        {
            return Err(config::invalid(format!(
                "context_terms lists '{file}', which is not in context_files"
            )));
        }
        if self.limits.context_min_bytes >= self.limits.context_max_bytes {
            return Err(config::invalid(
                "limits.context_min_bytes must be below limits.context_max_bytes",
            ));
        }
        Ok(())
    }

    /// Whether `agent` may omit context references
    pub fn context_optional(&self, agent: &str) -> bool {
        self.optional_context_agents.iter().any(|a| a == agent)
    }
}

fn is_plain_name(name: &str) -> bool {
    !name.is_empty()
        && !name.contains('/')
        && !name.contains('\\')
        && !name.ends_with(".md")
}
