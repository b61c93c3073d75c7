//! Locate the `---` delimited block at the top of a document.

use std::sync::LazyLock;

use regex::Regex;

#[allow(clippy::expect_used)]
static BLOCK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\A---\s*\n(.*?)\n---\s*\n").expect("frontmatter pattern is valid")
});

/// `key: token` at the start of a line, after indentation or a list marker
#[allow(clippy::expect_used)]
static FIELD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t-]*(\w[\w-]*):[ \t]*(\S+)").expect("field pattern is valid")
});

#[allow(clippy::expect_used)]
static NUMBER_FIELD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t-]*(\w[\w-]*):[ \t]*([\d.]+)").expect("number field pattern is valid")
});

/// Return the text between the opening and closing `---` lines.
///
/// The opening marker must be the very first line of `content`, and the
/// closing marker must itself be followed by a newline. Returns `None` when
/// no such block exists; a missing block is not an error.
pub fn extract(content: &str) -> Option<&str> {
    BLOCK_RE
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Split `content` into the frontmatter block and the body that follows the
/// closing marker line.
pub fn split(content: &str) -> Option<(&str, &str)> {
    let caps = BLOCK_RE.captures(content)?;
    let block = caps.get(1)?.as_str();
    let end = caps.get(0)?.end();
    Some((block, &content[end..]))
}

/// Find the first `key: token` occurrence anywhere in a raw block.
///
/// Reaches values the two-level parser drops, such as fields nested under
/// list items. Only whole keys match, so neither `model_name:` nor
/// `provider-name:` satisfies a lookup for `name`.
pub fn find_field<'a>(block: &'a str, key: &str) -> Option<&'a str> {
    first_match(&FIELD_RE, block, key)
}

/// Like [`find_field`], but skips occurrences whose value does not start
/// with digits or `.`, returning the leading numeric run of the first one
/// that does.
pub fn find_number_field<'a>(block: &'a str, key: &str) -> Option<&'a str> {
    first_match(&NUMBER_FIELD_RE, block, key)
}

fn first_match<'a>(re: &Regex, block: &'a str, key: &str) -> Option<&'a str> {
    re.captures_iter(block)
        .find(|caps| caps.get(1).is_some_and(|k| k.as_str() == key))
        .and_then(|caps| caps.get(2))
        .map(|m| m.as_str())
}
