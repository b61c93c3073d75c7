//! On-disk collections for check tests.

use std::fs;

use tempfile::TempDir;

use crate::collection::Collection;
use crate::config::CollectionConfig;

const FILLER: &str = "Each pattern lists what to look for, why it matters, and how to fix it. ";

pub struct CollectionFixture {
    pub temp: TempDir,
}

impl CollectionFixture {
    /// A collection satisfying every default check
    pub fn complete() -> Self {
        let fixture = Self {
            temp: TempDir::new().expect("create temp dir"),
        };
        let config = CollectionConfig::default();

        for dir in &config.required_dirs {
            fs::create_dir_all(fixture.temp.path().join(dir)).expect("create dir");
        }

        fixture.write("pyproject.toml", &pyproject(&config));
        fixture.write("README.md", &readme(&config));
        fixture.write("LICENSE", &license());
        fixture.write("examples/basic-review.md", &example());

        for agent in &config.agents {
            let reference = if config.context_optional(agent) {
                None
            } else {
                config.context_files.first().map(String::as_str)
            };
            fixture.write(
                &format!("agents/{agent}.md"),
                &agent_document(agent, reference),
            );
        }

        for file in &config.context_files {
            let terms = config.context_terms.get(file).cloned().unwrap_or_default();
            fixture.write(&format!("context/{file}"), &context_document(file, &terms));
        }

        fixture
    }

    pub fn collection(&self) -> Collection {
        Collection::open(self.temp.path()).expect("open collection")
    }

    pub fn write(&self, relative: &str, content: &str) {
        let path = self.temp.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent");
        }
        fs::write(path, content).expect("write fixture file");
    }

    pub fn remove(&self, relative: &str) {
        fs::remove_file(self.temp.path().join(relative)).expect("remove fixture file");
    }
}

pub fn agent_document(name: &str, context_ref: Option<&str>) -> String {
    let reference = context_ref
        .map(|file| format!("Consult @code-quality:context/{file} before reporting.\n"))
        .unwrap_or_default();
    format!(
        "---\n\
         meta:\n  name: {name}\n  description: \"Reviews code for {name} findings\"\n\
         tools:\n  - module: tool-filesystem\n  - module: tool-bash\n\
         providers:\n  - module: provider-anthropic\n    config:\n      model: claude-sonnet\n      temperature: 0.2\n\
         ---\n\n\
         # {name}\n\n\
         ## Your Role\n\nYou are a careful reviewer.\n{reference}\n\
         ## Output Format\n\nReturn a JSON object with one entry per finding.\n\n\
         ## Example\n\n```bash\namplifier task {name} src/\n```\n"
    )
}

pub fn context_document(file: &str, terms: &[String]) -> String {
    let mut doc = format!(
        "# {file}\n\nCovers: {}.\n\n## Detection\n\n## Remediation\n\n## Examples\n\n```python\ndef f():\n    pass\n```\n\n",
        terms.join(", ")
    );
    doc.push_str(&FILLER.repeat(40));
    doc.push('\n');
    doc
}

fn pyproject(config: &CollectionConfig) -> String {
    let capabilities: Vec<String> = config
        .capabilities
        .iter()
        .map(|c| format!("\"{c}\""))
        .collect();
    format!(
        "[project]\nname = \"{}\"\nversion = \"1.0.0\"\ndescription = \"Code quality agents\"\n\n\
         [tool.amplifier.collection]\ncapabilities = [{}]\n",
        config.name,
        capabilities.join(", ")
    )
}

fn readme(config: &CollectionConfig) -> String {
    let mut doc = String::from("# Code Quality\n\n## Installation\n\nInstall with amplifier.\n\n## Usage\n\n```bash\namplifier task static-analyzer src/\n```\n\n## Agents\n\n");
    for agent in &config.agents {
        doc.push_str(&format!("- {agent}\n"));
    }
    doc.push('\n');
    doc.push_str(&FILLER.repeat(15));
    doc
}

fn license() -> String {
    format!("MIT License\n\nCopyright (c) 2025\n\n{}", FILLER.repeat(3))
}

fn example() -> String {
    format!("# Reviewing a service\n\n```bash\namplifier task quality-aggregator\n```\n\n{}", FILLER.repeat(8))
}
