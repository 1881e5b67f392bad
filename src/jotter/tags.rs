//! Tag input parsing.
//!
//! The editor exposes tags as a single comma-separated text field. These helpers
//! convert between that text and the tag set stored on a note.

use std::collections::BTreeSet;

/// Parses a comma-separated tag field into a tag set.
///
/// Each segment is trimmed, empty segments are discarded and duplicates collapse.
/// Tags are case-sensitive: `Work` and `work` are distinct.
pub fn parse_tag_input(input: &str) -> BTreeSet<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

/// Renders a tag set back into the text shown in the tag field.
pub fn join_tags<'a, I>(tags: I) -> String
where
    I: IntoIterator<Item = &'a String>,
{
    tags.into_iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_trims_and_dedups() {
        let tags = parse_tag_input("a, a, b ,");
        assert_eq!(tags.into_iter().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn empty_input_has_no_tags() {
        assert!(parse_tag_input("").is_empty());
        assert!(parse_tag_input(" , ,, ").is_empty());
    }

    #[test]
    fn tags_are_case_sensitive() {
        let tags = parse_tag_input("Work, work");
        assert_eq!(tags.len(), 2);
    }

    #[test]
    fn inner_whitespace_is_kept() {
        let tags = parse_tag_input("  to read , later ");
        assert!(tags.contains("to read"));
        assert!(tags.contains("later"));
    }

    #[test]
    fn join_round_trips_through_parse() {
        let tags = parse_tag_input("work, urgent");
        let text = join_tags(&tags);
        assert_eq!(text, "urgent, work");
        assert_eq!(parse_tag_input(&text), tags);
    }
}
