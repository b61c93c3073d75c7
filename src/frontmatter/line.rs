//! Classification of single frontmatter lines.

/// What one line of a frontmatter block contributes to the parsed mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// Empty or whitespace-only line.
    Blank,
    /// Unindented `key: value`.
    Scalar { key: &'a str, value: &'a str },
    /// Unindented `key:` with nothing after the separator.
    SectionStart { key: &'a str },
    /// Indented `key: value`, outside a list item.
    NestedPair { key: &'a str, value: &'a str },
    /// `- item`, at any indentation.
    ListItem(&'a str),
    /// A `: value` pair with nothing before the separator.
    EmptyKey(&'a str),
    /// Anything else. Skipped by the parser.
    Unrecognized(&'a str),
}

impl<'a> Line<'a> {
    /// Classify a single line (without its trailing `\n`).
    ///
    /// Unindented lines containing `:` are always keys, even when they start
    /// with `-`. Nested values lose surrounding `"` and `'` characters.
    pub fn classify(line: &'a str) -> Self {
        let trimmed = line.trim_start();
        if trimmed.trim_end().is_empty() {
            return Line::Blank;
        }
        let indented = trimmed.len() != line.len();

        if !indented {
            if let Some((key, value)) = line.split_once(':') {
                return top_level(line, key.trim(), value.trim());
            }
        } else if !trimmed.starts_with('-') {
            if let Some((key, value)) = trimmed.split_once(':') {
                let key = key.trim();
                if key.is_empty() {
                    return Line::EmptyKey(line);
                }
                let value = value.trim().trim_matches(|c| c == '"' || c == '\'');
                return Line::NestedPair { key, value };
            }
        }

        match trimmed.strip_prefix('-') {
            Some(rest) => Line::ListItem(rest.trim()),
            None => Line::Unrecognized(line),
        }
    }
}

fn top_level<'a>(line: &'a str, key: &'a str, value: &'a str) -> Line<'a> {
    if key.is_empty() {
        Line::EmptyKey(line)
    } else if value.is_empty() {
        Line::SectionStart { key }
    } else {
        Line::Scalar { key, value }
    }
}
