//! Checks for context documents (`context/*.md`).

use super::Report;
use super::text::{char_len, missing_terms};
use crate::collection::{CONTEXT_DIR, Collection, file_name};
use crate::config::CollectionConfig;

pub fn run(collection: &Collection, config: &CollectionConfig, report: &mut Report) {
    for file in &config.context_files {
        check_context_file(collection, config, file, report);
    }

    let unexpected: Vec<String> = collection
        .markdown_files(CONTEXT_DIR)
        .iter()
        .map(|p| file_name(p))
        .filter(|name| !config.context_files.contains(name))
        .collect();
    report.check("context.unexpected", CONTEXT_DIR, unexpected.is_empty(), || {
        format!("unexpected context files: {}", unexpected.join(", "))
    });
}

fn check_context_file(
    collection: &Collection,
    config: &CollectionConfig,
    file: &str,
    report: &mut Report,
) {
    let path = collection.context_path(file);
    let subject = collection.display(&path);

    if !path.is_file() {
        report.fail("context.exists", &subject, format!("context file missing: {file}"));
        return;
    }
    report.pass("context.exists", &subject);

    let content = match collection.read(&path) {
        Ok(content) => content,
        Err(err) => {
            report.fail("context.read", &subject, err.to_string());
            return;
        }
    };
    let limits = &config.limits;

    let chars = char_len(&content);
    report.check("context.length", &subject, chars > limits.context_min_chars, || {
        format!(
            "context file too small: {chars} chars, need more than {}",
            limits.context_min_chars
        )
    });

    report.check("context.title", &subject, content.starts_with('#'), || {
        "context file missing title".to_string()
    });

    let sections = content.matches("##").count();
    report.check("context.sections", &subject, sections >= limits.min_sections, || {
        format!(
            "too few sections: {sections}, need at least {}",
            limits.min_sections
        )
    });

    report.check("context.code-block", &subject, content.contains("```"), || {
        "no code examples".to_string()
    });

    if let Some(terms) = config.context_terms.get(file) {
        let missing = missing_terms(&content, terms);
        report.check("context.terms", &subject, missing.is_empty(), || {
            format!("missing terms: {}", missing.join(", "))
        });
    }

    match std::fs::metadata(&path) {
        Ok(meta) => {
            let size = meta.len();
            report.check("context.min-size", &subject, size > limits.context_min_bytes, || {
                format!(
                    "context file too small: {size} bytes, need more than {}",
                    limits.context_min_bytes
                )
            });
            report.check("context.max-size", &subject, size < limits.context_max_bytes, || {
                format!(
                    "context file too large: {size} bytes, limit {} - consider splitting",
                    limits.context_max_bytes
                )
            });
        }
        Err(err) => report.fail("context.min-size", &subject, err.to_string()),
    }
}
