//! Frontmatter extraction and parsing
//!
//! Agent and context documents open with a header block between `---`
//! marker lines. [`extract`] finds that block; [`parse`] turns it into a
//! [`Mapping`] of top-level keys to scalars, one-level nested sections, or
//! lists. The parser is permissive: lines it cannot place are skipped, and
//! [`parse_with_report`] lists them.

mod extract;
mod line;
mod parse;
mod render;

use std::collections::BTreeMap;

use serde::Serialize;

pub use extract::{extract, find_field, find_number_field, split};
pub use parse::{ParseReport, SkipReason, SkippedLine, parse, parse_with_report};
pub use render::render;

/// Value stored under a top-level key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Scalar(String),
    Section(BTreeMap<String, String>),
    List(Vec<String>),
}

impl Value {
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            Value::Scalar(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_section(&self) -> Option<&BTreeMap<String, String>> {
        match self {
            Value::Section(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_section_mut(&mut self) -> Option<&mut BTreeMap<String, String>> {
        match self {
            Value::Section(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }
}

/// Parsed frontmatter. Key order carries no meaning.
pub type Mapping = BTreeMap<String, Value>;

/// Look up `section.key` in a parsed mapping.
pub fn get_nested<'a>(mapping: &'a Mapping, section: &str, key: &str) -> Option<&'a str> {
    mapping
        .get(section)?
        .as_section()?
        .get(key)
        .map(String::as_str)
}
