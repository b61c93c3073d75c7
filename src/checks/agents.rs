//! Checks for agent definition files (`agents/*.md`).

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use super::Report;
use super::text::{char_len, contains_any, contains_ci};
use crate::collection::{AGENTS_DIR, Collection, file_name, file_stem};
use crate::config::CollectionConfig;
use crate::frontmatter::{self, Mapping};

/// Frontmatter keys every agent block must mention
const REQUIRED_FIELDS: &[&str] = &["name", "description", "tools", "providers", "module", "temperature"];

const ROLE_MARKERS: &[&str] = &["## Your Role", "## Role", "You are", "You analyze"];
const OUTPUT_MARKERS: &[&str] = &["## Output Format", "Output:", "Returns:"];
const EXAMPLE_MARKERS: &[&str] = &["## Example", "```bash", "amplifier task"];

#[allow(clippy::expect_used)]
static MISPLACED_REF_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@context/|@[^:]+context/").expect("reference pattern is valid"));

/// Context reference patterns for one collection namespace
struct ReferencePatterns {
    /// `@<ns>:context/<file>.md`, capturing the file name
    reference: Regex,
    /// Strict form with a word-character file name
    well_formed: Regex,
}

impl ReferencePatterns {
    fn new(namespace: &str) -> Option<Self> {
        let ns = regex::escape(namespace);
        Some(Self {
            reference: Regex::new(&format!(r"@{ns}:context/([^\s]+\.md)")).ok()?,
            well_formed: Regex::new(&format!(r"@{ns}:context/[\w-]+\.md")).ok()?,
        })
    }
}

pub fn run(collection: &Collection, config: &CollectionConfig, report: &mut Report) {
    let patterns = ReferencePatterns::new(&config.name);

    for agent in &config.agents {
        check_agent(collection, config, patterns.as_ref(), agent, report);
    }

    let files = collection.markdown_files(AGENTS_DIR);
    check_unexpected(config, &files, report);
    check_unique_names(collection, &files, report);

    report.check(
        "agents.count",
        AGENTS_DIR,
        files.len() == config.agents.len(),
        || {
            format!(
                "expected {} agent files, found {}",
                config.agents.len(),
                files.len()
            )
        },
    );
}

fn check_agent(
    collection: &Collection,
    config: &CollectionConfig,
    patterns: Option<&ReferencePatterns>,
    agent: &str,
    report: &mut Report,
) {
    let path = collection.agent_path(agent);
    let subject = collection.display(&path);

    if !path.is_file() {
        report.fail("agent.exists", &subject, format!("agent file missing: {agent}.md"));
        return;
    }
    report.pass("agent.exists", &subject);

    let content = match collection.read(&path) {
        Ok(content) => content,
        Err(err) => {
            report.fail("agent.read", &subject, err.to_string());
            return;
        }
    };

    let min = config.limits.agent_min_chars;
    report.check("agent.length", &subject, char_len(&content) > min, || {
        format!("agent file too small: {} chars, need more than {min}", char_len(&content))
    });

    check_frontmatter(config, agent, &subject, &content, report);
    check_body(config, &subject, &content, report);
    check_context_references(collection, config, patterns, agent, &subject, &content, report);
}

fn check_frontmatter(
    config: &CollectionConfig,
    agent: &str,
    subject: &str,
    content: &str,
    report: &mut Report,
) {
    let Some(block) = frontmatter::extract(content) else {
        report.fail("agent.frontmatter", subject, "missing frontmatter block");
        report.skip("agent.fields", subject, "no frontmatter");
        return;
    };
    report.pass("agent.frontmatter", subject);

    let mapping = frontmatter::parse(block);
    report.check("agent.meta", subject, mapping.contains_key("meta"), || {
        "missing 'meta' section in frontmatter".to_string()
    });

    for field in REQUIRED_FIELDS {
        let id = format!("agent.field.{field}");
        report.check(&id, subject, block.contains(&format!("{field}:")), || {
            format!("missing '{field}' field in frontmatter")
        });
    }

    match agent_name(&mapping, block) {
        Some(name) => report.check("agent.name", subject, name == agent, || {
            format!("agent name '{name}' doesn't match filename '{agent}'")
        }),
        None => report.skip("agent.name", subject, "no name value"),
    }

    report.check("agent.provider", subject, block.contains(&config.provider), || {
        format!("agent should use {}", config.provider)
    });

    check_temperature(block, subject, report);
}

/// `meta.name` from the parsed block, or the first raw `name:` value
fn agent_name<'a>(mapping: &'a Mapping, block: &'a str) -> Option<&'a str> {
    frontmatter::get_nested(mapping, "meta", "name")
        .filter(|name| !name.is_empty())
        .or_else(|| frontmatter::find_field(block, "name"))
}

fn check_temperature(block: &str, subject: &str, report: &mut Report) {
    let Some(number) = frontmatter::find_number_field(block, "temperature") else {
        match frontmatter::find_field(block, "temperature") {
            Some(raw) => report.skip(
                "agent.temperature",
                subject,
                format!("non-numeric temperature '{raw}'"),
            ),
            None => report.skip("agent.temperature", subject, "no temperature value"),
        }
        return;
    };
    match number.parse::<f64>() {
        Ok(temp) => report.check(
            "agent.temperature",
            subject,
            (0.0..=1.0).contains(&temp),
            || format!("temperature {temp} out of range 0.0..=1.0"),
        ),
        Err(_) => report.fail(
            "agent.temperature",
            subject,
            format!("temperature '{number}' is not a number"),
        ),
    }
}

fn check_body(config: &CollectionConfig, subject: &str, content: &str, report: &mut Report) {
    report.check("agent.role", subject, contains_any(content, ROLE_MARKERS), || {
        "missing role description".to_string()
    });

    let has_output = contains_any(content, OUTPUT_MARKERS) || contains_ci(content, "json");
    report.check("agent.output-format", subject, has_output, || {
        "missing output format".to_string()
    });

    report.check("agent.example", subject, contains_any(content, EXAMPLE_MARKERS), || {
        "missing usage examples".to_string()
    });

    let headers = content.matches('#').count();
    let min = config.limits.min_headers;
    report.check("agent.headers", subject, headers >= min, || {
        format!("too few headers: {headers}, need at least {min}")
    });

    report.check("agent.code-block", subject, content.contains("```"), || {
        "no code blocks".to_string()
    });
}

fn check_context_references(
    collection: &Collection,
    config: &CollectionConfig,
    patterns: Option<&ReferencePatterns>,
    agent: &str,
    subject: &str,
    content: &str,
    report: &mut Report,
) {
    let Some(patterns) = patterns else {
        report.skip("agent.context-refs", subject, "collection name is not a valid namespace");
        return;
    };

    if content.contains('@') && content.contains("context") {
        let misplaced = MISPLACED_REF_RE.is_match(content);
        let well_formed = patterns.well_formed.is_match(content);
        report.check(
            "agent.context-ref-format",
            subject,
            !misplaced || well_formed,
            || format!("malformed context reference, expected @{}:context/<file>.md", config.name),
        );
    } else {
        report.pass("agent.context-ref-format", subject);
    }

    if config.context_optional(agent) {
        report.skip("agent.context-refs", subject, "context references optional");
        return;
    }

    let references: Vec<&str> = patterns
        .reference
        .captures_iter(content)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .collect();

    report.check("agent.context-refs", subject, !references.is_empty(), || {
        "no context references".to_string()
    });

    for reference in references {
        let target = collection.context_path(reference);
        report.check("agent.context-ref", subject, target.is_file(), || {
            format!("referenced context file missing: {reference}")
        });
    }
}

fn check_unexpected(
    config: &CollectionConfig,
    files: &[PathBuf],
    report: &mut Report,
) {
    let unexpected: Vec<String> = files
        .iter()
        .map(|p| file_name(p))
        .filter(|name| !config.agents.iter().any(|a| format!("{a}.md") == *name))
        .collect();

    report.check("agents.unexpected", AGENTS_DIR, unexpected.is_empty(), || {
        format!("unexpected agent files: {}", unexpected.join(", "))
    });
}

fn check_unique_names(collection: &Collection, files: &[PathBuf], report: &mut Report) {
    let mut owners: BTreeMap<String, Vec<String>> = BTreeMap::new();

    for path in files {
        let Some(name) = declared_name(collection, path) else {
            continue;
        };
        owners.entry(name).or_default().push(file_stem(path));
    }

    let duplicates: Vec<String> = owners
        .iter()
        .filter(|(_, files)| files.len() > 1)
        .map(|(name, files)| format!("{name} ({})", files.join(", ")))
        .collect();

    report.check("agents.unique-names", AGENTS_DIR, duplicates.is_empty(), || {
        format!("duplicate agent names: {}", duplicates.join("; "))
    });
}

fn declared_name(collection: &Collection, path: &Path) -> Option<String> {
    let content = collection.read(path).ok()?;
    let block = frontmatter::extract(&content)?;
    let mapping = frontmatter::parse(block);
    agent_name(&mapping, block).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::Status;
    use crate::checks::fixtures::{CollectionFixture, agent_document};

    fn run_agents(fixture: &CollectionFixture) -> Report {
        let mut report = Report::default();
        run(&fixture.collection(), &CollectionConfig::default(), &mut report);
        report
    }

    fn status_of(report: &Report, id: &str, subject: &str) -> Vec<Status> {
        report
            .results
            .iter()
            .filter(|r| r.id == id && r.subject == subject)
            .map(|r| r.status)
            .collect()
    }

    #[test]
    fn complete_collection_has_no_failures() {
        let report = run_agents(&CollectionFixture::complete());
        assert!(report.is_success(), "{:#?}", report.failures().collect::<Vec<_>>());
    }

    #[test]
    fn aggregator_context_refs_are_optional() {
        let report = run_agents(&CollectionFixture::complete());
        assert_eq!(
            status_of(&report, "agent.context-refs", "agents/quality-aggregator.md"),
            vec![Status::Skip]
        );
    }

    #[test]
    fn missing_agent_file() {
        let fixture = CollectionFixture::complete();
        fixture.remove("agents/security-scanner.md");
        let report = run_agents(&fixture);
        assert_eq!(
            status_of(&report, "agent.exists", "agents/security-scanner.md"),
            vec![Status::Fail]
        );
        assert_eq!(status_of(&report, "agents.count", "agents"), vec![Status::Fail]);
    }

    #[test]
    fn unexpected_agent_file() {
        let fixture = CollectionFixture::complete();
        fixture.write("agents/extra.md", &agent_document("extra", None));
        let report = run_agents(&fixture);
        let failure = report
            .failures()
            .find(|r| r.id == "agents.unexpected")
            .unwrap();
        assert!(failure.message.as_deref().unwrap().contains("extra.md"));
    }

    #[test]
    fn missing_frontmatter() {
        let fixture = CollectionFixture::complete();
        let body = "# static-analyzer\n\n## Your Role\n\nYou are a reviewer of code. Returns: JSON.\n\n## Example\n\n```bash\namplifier task static-analyzer\n```\n\nSee @code-quality:context/security-patterns.md\n";
        fixture.write("agents/static-analyzer.md", body);
        let report = run_agents(&fixture);
        let subject = "agents/static-analyzer.md";
        assert_eq!(status_of(&report, "agent.frontmatter", subject), vec![Status::Fail]);
        assert_eq!(status_of(&report, "agent.fields", subject), vec![Status::Skip]);
        assert_eq!(status_of(&report, "agent.role", subject), vec![Status::Pass]);
    }

    #[test]
    fn name_must_match_file_stem() {
        let fixture = CollectionFixture::complete();
        let doc = agent_document("static-analyzer", Some("security-patterns.md"))
            .replace("name: static-analyzer", "name: linter");
        fixture.write("agents/static-analyzer.md", &doc);
        let report = run_agents(&fixture);
        let failure = report.failures().find(|r| r.id == "agent.name").unwrap();
        assert_eq!(
            failure.message.as_deref(),
            Some("agent name 'linter' doesn't match filename 'static-analyzer'")
        );
    }

    #[test]
    fn duplicate_names_are_reported() {
        let fixture = CollectionFixture::complete();
        let doc = agent_document("static-analyzer", Some("security-patterns.md"));
        fixture.write("agents/security-scanner.md", &doc);
        let report = run_agents(&fixture);
        let failure = report
            .failures()
            .find(|r| r.id == "agents.unique-names")
            .unwrap();
        assert!(failure.message.as_deref().unwrap().contains("static-analyzer"));
    }

    #[test]
    fn temperature_out_of_range() {
        let fixture = CollectionFixture::complete();
        let doc = agent_document("static-analyzer", Some("security-patterns.md"))
            .replace("temperature: 0.2", "temperature: 1.5");
        fixture.write("agents/static-analyzer.md", &doc);
        let report = run_agents(&fixture);
        assert_eq!(
            status_of(&report, "agent.temperature", "agents/static-analyzer.md"),
            vec![Status::Fail]
        );
    }

    #[test]
    fn non_numeric_temperature_is_skipped() {
        let fixture = CollectionFixture::complete();
        let doc = agent_document("static-analyzer", Some("security-patterns.md"))
            .replace("temperature: 0.2", "temperature: low");
        fixture.write("agents/static-analyzer.md", &doc);
        let report = run_agents(&fixture);
        assert_eq!(
            status_of(&report, "agent.temperature", "agents/static-analyzer.md"),
            vec![Status::Skip]
        );
    }

    #[test]
    fn later_numeric_temperature_is_checked() {
        let fixture = CollectionFixture::complete();
        let doc = agent_document("static-analyzer", Some("security-patterns.md"))
            .replace("temperature: 0.2", "temperature: low\n      temperature: 1.7");
        fixture.write("agents/static-analyzer.md", &doc);
        let report = run_agents(&fixture);
        let failure = report
            .failures()
            .find(|r| r.id == "agent.temperature")
            .unwrap();
        assert_eq!(
            failure.message.as_deref(),
            Some("temperature 1.7 out of range 0.0..=1.0")
        );
    }

    #[test]
    fn hidden_agent_file_is_unexpected() {
        let fixture = CollectionFixture::complete();
        fixture.write("agents/.draft.md", &agent_document("draft", None));
        let report = run_agents(&fixture);
        assert_eq!(status_of(&report, "agents.count", "agents"), vec![Status::Fail]);
        let failure = report
            .failures()
            .find(|r| r.id == "agents.unexpected")
            .unwrap();
        assert!(failure.message.as_deref().unwrap().contains(".draft.md"));
    }

    #[test]
    fn wrong_provider() {
        let fixture = CollectionFixture::complete();
        let doc = agent_document("static-analyzer", Some("security-patterns.md"))
            .replace("provider-anthropic", "provider-openai");
        fixture.write("agents/static-analyzer.md", &doc);
        let report = run_agents(&fixture);
        assert_eq!(
            status_of(&report, "agent.provider", "agents/static-analyzer.md"),
            vec![Status::Fail]
        );
    }

    #[test]
    fn missing_context_reference_target() {
        let fixture = CollectionFixture::complete();
        fixture.write(
            "agents/static-analyzer.md",
            &agent_document("static-analyzer", Some("nonexistent.md")),
        );
        let report = run_agents(&fixture);
        let failure = report.failures().find(|r| r.id == "agent.context-ref").unwrap();
        assert!(failure.message.as_deref().unwrap().contains("nonexistent.md"));
    }

    #[test]
    fn agent_without_context_reference() {
        let fixture = CollectionFixture::complete();
        fixture.write(
            "agents/static-analyzer.md",
            &agent_document("static-analyzer", None),
        );
        let report = run_agents(&fixture);
        assert_eq!(
            status_of(&report, "agent.context-refs", "agents/static-analyzer.md"),
            vec![Status::Fail]
        );
    }

    #[test]
    fn misplaced_reference_without_namespace() {
        let fixture = CollectionFixture::complete();
        let doc = agent_document("static-analyzer", None)
            .replace("## Output Format", "See @context/security-patterns.md\n\n## Output Format");
        fixture.write("agents/static-analyzer.md", &doc);
        let report = run_agents(&fixture);
        assert_eq!(
            status_of(&report, "agent.context-ref-format", "agents/static-analyzer.md"),
            vec![Status::Fail]
        );
    }

    #[test]
    fn body_markers_missing() {
        let fixture = CollectionFixture::complete();
        let doc = "---\nmeta:\n  name: static-analyzer\n---\nplain text with no structure at all, padded so the file is long enough to pass the size check easily\n";
        fixture.write("agents/static-analyzer.md", doc);
        let report = run_agents(&fixture);
        let subject = "agents/static-analyzer.md";
        for id in ["agent.role", "agent.output-format", "agent.example", "agent.headers", "agent.code-block"] {
            assert_eq!(status_of(&report, id, subject), vec![Status::Fail], "{id}");
        }
        assert_eq!(status_of(&report, "agent.field.tools", subject), vec![Status::Fail]);
        assert_eq!(status_of(&report, "agent.name", subject), vec![Status::Pass]);
    }
}
