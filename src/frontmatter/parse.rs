//! Permissive two-level parser for frontmatter blocks.

use std::mem;

use super::line::Line;
use super::{Mapping, Value};

/// Why a line did not make it into the mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The line matched none of the known shapes.
    Unrecognized,
    /// An indented pair whose current key does not hold a nested mapping.
    NoSection,
    /// A list item before any top-level key.
    OrphanListItem,
    /// A pair with nothing before the `:`.
    EmptyKey,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            SkipReason::Unrecognized => "unrecognized line",
            SkipReason::NoSection => "nested pair outside a section",
            SkipReason::OrphanListItem => "list item before any key",
            SkipReason::EmptyKey => "empty key",
        };
        f.write_str(text)
    }
}

/// A line dropped by the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number within the block.
    pub number: usize,
    pub text: String,
    pub reason: SkipReason,
}

/// Parsed mapping together with the lines that were dropped on the way.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParseReport {
    pub mapping: Mapping,
    pub skipped: Vec<SkippedLine>,
}

/// Fold state threaded through the lines of one block.
#[derive(Debug, Default)]
struct ParseState<'a> {
    mapping: Mapping,
    cursor: Option<&'a str>,
    pending: Vec<String>,
    skipped: Vec<SkippedLine>,
}

impl<'a> ParseState<'a> {
    fn step(mut self, number: usize, raw: &'a str) -> Self {
        match Line::classify(raw) {
            Line::Blank => {}
            Line::Scalar { key, value } => {
                self.open_key(key, Value::Scalar(value.to_string()));
            }
            Line::SectionStart { key } => {
                self.open_key(key, Value::Section(Default::default()));
            }
            Line::NestedPair { key, value } => {
                let section = self
                    .cursor
                    .and_then(|cursor| self.mapping.get_mut(cursor))
                    .and_then(Value::as_section_mut);
                match section {
                    Some(section) => {
                        section.insert(key.to_string(), value.to_string());
                    }
                    None => self.skip(number, raw, SkipReason::NoSection),
                }
            }
            Line::ListItem(item) => {
                if self.cursor.is_some() {
                    self.pending.push(item.to_string());
                } else {
                    self.skip(number, raw, SkipReason::OrphanListItem);
                }
            }
            Line::EmptyKey(_) => self.skip(number, raw, SkipReason::EmptyKey),
            Line::Unrecognized(_) => self.skip(number, raw, SkipReason::Unrecognized),
        }
        self
    }

    fn open_key(&mut self, key: &'a str, value: Value) {
        self.commit_pending();
        self.mapping.insert(key.to_string(), value);
        self.cursor = Some(key);
    }

    fn commit_pending(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        if let Some(cursor) = self.cursor {
            let items = mem::take(&mut self.pending);
            self.mapping.insert(cursor.to_string(), Value::List(items));
        }
    }

    fn skip(&mut self, number: usize, raw: &str, reason: SkipReason) {
        tracing::debug!(line = number, text = raw, %reason, "skipping frontmatter line");
        self.skipped.push(SkippedLine {
            number,
            text: raw.to_string(),
            reason,
        });
    }

    fn finish(mut self) -> ParseReport {
        self.commit_pending();
        ParseReport {
            mapping: self.mapping,
            skipped: self.skipped,
        }
    }
}

/// Parse a frontmatter block into a [`Mapping`].
///
/// Never fails: lines that fit none of the supported shapes are dropped.
/// A list collected under a key replaces whatever that key held before, and
/// a repeated key overwrites the earlier value.
pub fn parse(block: &str) -> Mapping {
    parse_with_report(block).mapping
}

/// Like [`parse`], but also returns the lines that were dropped.
pub fn parse_with_report(block: &str) -> ParseReport {
    block
        .split('\n')
        .enumerate()
        .fold(ParseState::default(), |state, (idx, raw)| {
            state.step(idx + 1, raw)
        })
        .finish()
}
