//! Short plain-text summaries from store descriptions
//!
//! Store copy is HTML-laden and often several paragraphs long. The card view
//! only has room for a single leading sentence, so the text is cleaned up and
//! cut down to at most [`MAX_SUMMARY_CHARS`] characters plus an ellipsis.

use regex::Regex;
use std::sync::LazyLock;

/// Longest first sentence kept verbatim
pub const MAX_SUMMARY_CHARS: usize = 150;

/// A word break is only used for truncation when it sits past this index
pub const MIN_WORD_BREAK_INDEX: usize = 100;

pub const ELLIPSIS: &str = "...";

static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid tag regex"));

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

static SENTENCE_TERMINATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("valid terminator regex"));

/// Entities decoded after tag removal, applied in this order
const ENTITIES: [(&str, &str); 5] = [
    ("&amp;", "&"),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
    ("&#39;", "'"),
];

/// Reduce `text` to its first sentence as plain text
///
/// Tags become spaces, the five common named entities are decoded and
/// whitespace runs collapse to a single space. A first sentence longer than
/// [`MAX_SUMMARY_CHARS`] is cut (at a word break when one exists past
/// [`MIN_WORD_BREAK_INDEX`]) and suffixed with [`ELLIPSIS`]. A shorter one
/// gets its period back when more text followed it.
pub fn extract_short_summary(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let cleaned = clean_text(text);

    let mut candidates = SENTENCE_TERMINATOR.split(&cleaned);
    let first = candidates.next().unwrap_or_default().trim();
    let has_more = candidates.next().is_some();

    if first.chars().count() > MAX_SUMMARY_CHARS {
        return truncate_at_word(first);
    }

    if has_more {
        format!("{first}.")
    } else {
        first.to_string()
    }
}

/// Strip tags, decode entities and normalize whitespace
fn clean_text(text: &str) -> String {
    let without_tags = TAG.replace_all(text, " ");

    let decoded = ENTITIES
        .iter()
        .fold(without_tags.into_owned(), |acc, (entity, literal)| {
            acc.replace(entity, literal)
        });

    WHITESPACE.replace_all(&decoded, " ").trim().to_string()
}

fn truncate_at_word(sentence: &str) -> String {
    let head: Vec<char> = sentence.chars().take(MAX_SUMMARY_CHARS).collect();

    let cut = head
        .iter()
        .rposition(|&c| c == ' ')
        .filter(|&index| index > MIN_WORD_BREAK_INDEX)
        .unwrap_or(head.len());

    let mut summary: String = head[..cut].iter().collect();
    summary.push_str(ELLIPSIS);
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_empty_input_yields_empty_summary() {
        assert_eq!(extract_short_summary(""), "");
    }

    #[test]
    fn test_tags_and_entities_are_removed() {
        assert_eq!(
            extract_short_summary("<b>Hello</b> &amp; welcome."),
            "Hello & welcome."
        );
    }

    #[test]
    fn test_short_line_without_terminator_is_unchanged() {
        assert_eq!(
            extract_short_summary("A very short line"),
            "A very short line"
        );
    }

    #[rstest]
    #[case("First one. Second one.", "First one.")]
    #[case("Wow!!! Such app", "Wow.")]
    #[case("Really? Yes", "Really.")]
    #[case("Ends with ellipsis...", "Ends with ellipsis.")]
    #[case("   padded   text   ", "padded text")]
    fn test_first_sentence_is_selected(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(extract_short_summary(input), expected);
    }

    #[rstest]
    #[case("&lt;tag&gt;", "<tag>")]
    #[case("&quot;quoted&quot;", "\"quoted\"")]
    #[case("it&#39;s", "it's")]
    #[case("&amp;lt;", "<")]
    #[case("&nbsp;stays", "&nbsp;stays")]
    fn test_only_known_entities_are_decoded(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(extract_short_summary(input), expected);
    }

    #[test]
    fn test_tags_become_word_breaks() {
        assert_eq!(
            extract_short_summary("Line one<br>line two<br/>\n\tline three"),
            "Line one line two line three"
        );
    }

    #[test]
    fn test_long_sentence_is_cut_at_late_word_break() {
        let mut input = "a".repeat(120);
        input.push(' ');
        input.push_str(&"b".repeat(79));
        assert_eq!(input.chars().count(), 200);

        let summary = extract_short_summary(&input);

        assert_eq!(summary, format!("{}...", "a".repeat(120)));
    }

    #[test]
    fn test_long_sentence_without_late_word_break_is_cut_hard() {
        let mut input = "a".repeat(50);
        input.push(' ');
        input.push_str(&"b".repeat(149));

        let summary = extract_short_summary(&input);

        assert_eq!(summary.chars().count(), MAX_SUMMARY_CHARS + ELLIPSIS.len());
        assert!(summary.ends_with("b..."));
    }

    #[test]
    fn test_word_break_at_min_index_is_not_used() {
        let head = "a".repeat(MIN_WORD_BREAK_INDEX);
        let input = format!("{head} {}", "b".repeat(60));

        let summary = extract_short_summary(&input);

        assert_eq!(summary, format!("{head} {}...", "b".repeat(49)));
        assert_eq!(summary.chars().count(), MAX_SUMMARY_CHARS + ELLIPSIS.len());
    }

    #[test]
    fn test_word_break_just_past_min_index_is_used() {
        let head = "a".repeat(MIN_WORD_BREAK_INDEX + 1);
        let input = format!("{head} {}", "b".repeat(60));

        assert_eq!(extract_short_summary(&input), format!("{head}..."));
    }

    #[test]
    fn test_sentence_of_exactly_max_length_is_kept() {
        let input = "x".repeat(MAX_SUMMARY_CHARS);
        assert_eq!(extract_short_summary(&input), input);
    }

    #[test]
    fn test_multibyte_text_is_truncated_by_character() {
        let input = "é".repeat(MAX_SUMMARY_CHARS + 20);

        let summary = extract_short_summary(&input);

        assert_eq!(summary.chars().count(), MAX_SUMMARY_CHARS + ELLIPSIS.len());
    }

    #[test]
    fn test_markup_only_input_yields_empty_summary() {
        assert_eq!(extract_short_summary("<p></p><br/>"), "");
    }
}
