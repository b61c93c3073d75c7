//! Write a [`Mapping`] back out in the notation [`parse`](super::parse) reads.

use super::{Mapping, Value};

/// Render a mapping as frontmatter block text (without `---` markers).
///
/// Parsing the result yields an equal mapping as long as scalars are
/// non-empty, lists are non-empty, and no value carries leading or trailing
/// whitespace or quote characters.
pub fn render(mapping: &Mapping) -> String {
    let mut lines = Vec::new();
    for (key, value) in mapping {
        match value {
            Value::Scalar(scalar) => lines.push(format!("{key}: {scalar}")),
            Value::Section(section) => {
                lines.push(format!("{key}:"));
                lines.extend(section.iter().map(|(k, v)| format!("  {k}: {v}")));
            }
            Value::List(items) => {
                lines.push(format!("{key}:"));
                lines.extend(items.iter().map(|item| format!("  - {item}")));
            }
        }
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontmatter::{extract, parse};

    #[test]
    fn render_all_shapes() {
        let mapping = parse("meta:\n  name: foo\n  description: bar\ntools:\n  - read\nversion: 1");
        assert_eq!(
            render(&mapping),
            "meta:\n  description: bar\n  name: foo\ntools:\n  - read\nversion: 1"
        );
    }

    #[test]
    fn reparse_of_rendering_is_equivalent() {
        let inputs = [
            "key: value",
            "key:\n  nested: v",
            "key:\n  - a\n  - b",
            "meta:\n  name: foo\ntools:\n  - read\n  - write",
            "providers:\n  - module: provider-anthropic\nmeta:\n  name: x\n  description: y\nz: 1",
        ];
        for input in inputs {
            let parsed = parse(input);
            assert_eq!(parse(&render(&parsed)), parsed, "input: {input:?}");
        }
    }

    #[test]
    fn rendered_block_round_trips_through_extract() {
        let mapping = parse("meta:\n  name: foo\ntools:\n  - read");
        let document = format!("---\n{}\n---\n# Body\n", render(&mapping));
        let block = extract(&document).unwrap();
        assert_eq!(parse(block), mapping);
    }

    #[test]
    fn render_empty_mapping() {
        assert_eq!(render(&Mapping::new()), "");
    }
}
