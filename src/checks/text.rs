//! Small text predicates shared by the checks.

/// Length in characters
pub fn char_len(content: &str) -> usize {
    content.chars().count()
}

pub fn contains_any(content: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| content.contains(n))
}

/// Case-insensitive containment
pub fn contains_ci(content: &str, needle: &str) -> bool {
    content.to_lowercase().contains(&needle.to_lowercase())
}

/// Terms from `terms` that `content` does not mention (case-insensitive)
pub fn missing_terms<'a>(content: &str, terms: &'a [String]) -> Vec<&'a str> {
    let lowered = content.to_lowercase();
    terms
        .iter()
        .filter(|t| !lowered.contains(&t.to_lowercase()))
        .map(String::as_str)
        .collect()
}
