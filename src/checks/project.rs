//! Collection-level checks: layout, pyproject.toml, README, LICENSE and
//! examples.

use super::Report;
use super::text::{char_len, contains_any, contains_ci};
use crate::collection::{AGENTS_DIR, CONTEXT_DIR, Collection, EXAMPLES_DIR};
use crate::config::CollectionConfig;

const PYPROJECT: &str = "pyproject.toml";
const README: &str = "README.md";
const LICENSE: &str = "LICENSE";

pub fn run(collection: &Collection, config: &CollectionConfig, report: &mut Report) {
    check_layout(collection, config, report);
    check_pyproject(collection, config, report);
    check_readme(collection, config, report);
    check_license(collection, config, report);
    check_examples(collection, config, report);
    check_completeness(collection, config, report);
}

fn check_layout(collection: &Collection, config: &CollectionConfig, report: &mut Report) {
    for dir in &config.required_dirs {
        let path = collection.path(dir);
        report.check("collection.dir", dir, path.is_dir(), || {
            if path.exists() {
                format!("not a directory: {dir}")
            } else {
                format!("missing required directory: {dir}")
            }
        });
    }

    for file in &config.required_files {
        let path = collection.path(file);
        report.check("collection.file", file, path.is_file(), || {
            if path.exists() {
                format!("not a file: {file}")
            } else {
                format!("missing required file: {file}")
            }
        });
    }
}

/// Read a top-level file for content checks; records a skip when absent
fn read_optional(
    collection: &Collection,
    id: &str,
    name: &str,
    report: &mut Report,
) -> Option<String> {
    let path = collection.path(name);
    if !path.is_file() {
        report.skip(id, name, format!("{name} missing"));
        return None;
    }
    match collection.read(&path) {
        Ok(content) => Some(content),
        Err(err) => {
            report.fail(id, name, err.to_string());
            None
        }
    }
}

fn check_pyproject(collection: &Collection, config: &CollectionConfig, report: &mut Report) {
    let Some(content) = read_optional(collection, "pyproject.parse", PYPROJECT, report) else {
        return;
    };

    let doc = match content.parse::<toml::Table>() {
        Ok(doc) => doc,
        Err(err) => {
            report.fail("pyproject.parse", PYPROJECT, format!("invalid TOML: {err}"));
            return;
        }
    };
    report.pass("pyproject.parse", PYPROJECT);

    match doc.get("project").and_then(toml::Value::as_table) {
        Some(project) => {
            report.pass("pyproject.project", PYPROJECT);
            let name = project.get("name").and_then(toml::Value::as_str);
            report.check("pyproject.name", PYPROJECT, name == Some(config.name.as_str()), || {
                format!(
                    "expected name = \"{}\", found {}",
                    config.name,
                    name.map_or_else(|| "nothing".to_string(), |n| format!("\"{n}\""))
                )
            });
            for field in ["version", "description"] {
                report.check(
                    &format!("pyproject.{field}"),
                    PYPROJECT,
                    project.contains_key(field),
                    || format!("[project] has no {field}"),
                );
            }
        }
        None => report.fail("pyproject.project", PYPROJECT, "missing [project] section"),
    }

    let section = doc
        .get("tool")
        .and_then(|t| t.get("amplifier"))
        .and_then(|a| a.get("collection"))
        .and_then(toml::Value::as_table);
    let Some(section) = section else {
        report.fail(
            "pyproject.collection",
            PYPROJECT,
            "missing [tool.amplifier.collection] section",
        );
        return;
    };
    report.pass("pyproject.collection", PYPROJECT);

    let Some(declared) = section.get("capabilities").and_then(toml::Value::as_array) else {
        report.fail("pyproject.capabilities", PYPROJECT, "capabilities list missing");
        return;
    };
    let declared: Vec<&str> = declared.iter().filter_map(toml::Value::as_str).collect();
    let missing: Vec<&str> = config
        .capabilities
        .iter()
        .map(String::as_str)
        .filter(|c| !declared.contains(c))
        .collect();
    report.check("pyproject.capabilities", PYPROJECT, missing.is_empty(), || {
        format!("missing capabilities: {}", missing.join(", "))
    });
}

fn check_readme(collection: &Collection, config: &CollectionConfig, report: &mut Report) {
    let Some(content) = read_optional(collection, "readme.length", README, report) else {
        return;
    };
    let min = config.limits.readme_min_chars;
    let chars = char_len(&content);
    report.check("readme.length", README, chars > min, || {
        format!("README too short: {chars} chars, need more than {min}")
    });

    report.check("readme.title", README, content.starts_with('#'), || {
        "README missing title".to_string()
    });

    let installation = contains_any(&content, &["## Installation", "### Installation"])
        || contains_ci(&content, "install");
    report.check("readme.installation", README, installation, || {
        "README has no installation instructions".to_string()
    });

    let usage = contains_any(&content, &["## Usage", "```bash", "amplifier task"]);
    report.check("readme.usage", README, usage, || {
        "README has no usage examples".to_string()
    });

    let unmentioned: Vec<&str> = config
        .agents
        .iter()
        .map(String::as_str)
        .filter(|agent| !content.contains(agent))
        .collect();
    report.check("readme.agents", README, unmentioned.is_empty(), || {
        format!("README doesn't mention agents: {}", unmentioned.join(", "))
    });
}

fn check_license(collection: &Collection, config: &CollectionConfig, report: &mut Report) {
    let Some(content) = read_optional(collection, "license.length", LICENSE, report) else {
        return;
    };
    let min = config.limits.license_min_chars;
    report.check("license.length", LICENSE, char_len(&content) > min, || {
        format!("LICENSE too short, need more than {min} chars")
    });
    report.check("license.kind", LICENSE, content.contains(&config.license), || {
        format!("LICENSE is not {}", config.license)
    });
}

fn check_examples(collection: &Collection, config: &CollectionConfig, report: &mut Report) {
    let examples = collection.markdown_files(EXAMPLES_DIR);
    report.check("examples.present", EXAMPLES_DIR, !examples.is_empty(), || {
        "no example files found".to_string()
    });

    let min = config.limits.example_min_chars;
    for path in &examples {
        let subject = collection.display(path);
        match collection.read(path) {
            Ok(content) => {
                let chars = char_len(&content);
                report.check("examples.length", &subject, chars > min, || {
                    format!("example too short: {chars} chars, need more than {min}")
                });
            }
            Err(err) => report.fail("examples.length", &subject, err.to_string()),
        }
    }
}

fn check_completeness(collection: &Collection, config: &CollectionConfig, report: &mut Report) {
    let agents = collection.markdown_files(AGENTS_DIR).len();
    let contexts = collection.markdown_files(CONTEXT_DIR).len();
    let missing_files: Vec<&str> = config
        .required_files
        .iter()
        .map(String::as_str)
        .filter(|f| !collection.path(f).exists())
        .collect();

    let mut problems = Vec::new();
    if agents != config.agents.len() {
        problems.push(format!("{agents} of {} agents", config.agents.len()));
    }
    if contexts != config.context_files.len() {
        problems.push(format!(
            "{contexts} of {} context files",
            config.context_files.len()
        ));
    }
    if !missing_files.is_empty() {
        problems.push(format!("missing {}", missing_files.join(", ")));
    }

    report.check("collection.complete", ".", problems.is_empty(), || {
        format!("collection incomplete: {}", problems.join("; "))
    });
}
