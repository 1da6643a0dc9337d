//! Property-based tests for text sanitization.

use proptest::prelude::*;

use super::sanitize::{sanitize_description, sanitize_text, DenylistSanitizer, TextSanitizer};

/// Ordinary user text: letters, digits, punctuation, inner spaces.
fn plain_text() -> impl Strategy<Value = String> {
    "[A-Za-z0-9][A-Za-z0-9 .,'-]{0,80}"
}

/// Text that mixes in markup and denylisted fragments.
fn hostile_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            plain_text(),
            Just("<".to_string()),
            Just(">".to_string()),
            Just("<script>".to_string()),
            Just("javascript:".to_string()),
            Just("onload=".to_string()),
            Just("IFRAME".to_string()),
        ],
        0..12,
    )
    .prop_map(|parts| parts.concat())
}

/// Short words wrapped in inline tags. The letters cannot spell a denylisted
/// keyword, so stripping never assembles a new one.
fn tagged_words() -> impl Strategy<Value = String> {
    prop::collection::vec(
        ("[a-h]{1,8}", prop::sample::select(vec!["b", "i", "u"]))
            .prop_map(|(word, tag)| format!("<{tag}>{word}</{tag}>")),
        1..6,
    )
    .prop_map(|parts| parts.join(" "))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Sanitizing ordinary text twice gives the same result as once.
    #[test]
    fn prop_sanitize_text_idempotent(input in plain_text()) {
        let once = sanitize_text(Some(&input));
        let twice = sanitize_text(Some(&once));
        prop_assert_eq!(once, twice);
    }

    /// Markup around ordinary words is stripped completely on the first pass.
    #[test]
    fn prop_sanitize_tagged_text_idempotent(input in tagged_words()) {
        let once = sanitize_text(Some(&input));
        let twice = sanitize_text(Some(&once));
        prop_assert_eq!(once, twice);
    }

    /// No angle bracket survives sanitization.
    #[test]
    fn prop_no_angle_brackets(input in hostile_text()) {
        let cleaned = sanitize_text(Some(&input));
        prop_assert!(!cleaned.contains('<'));
        prop_assert!(!cleaned.contains('>'));
    }

    /// Output never exceeds the configured character limit.
    #[test]
    fn prop_output_respects_limit(input in hostile_text(), limit in 0usize..50) {
        let cleaned = DenylistSanitizer::new(limit).clean(&input);
        prop_assert!(cleaned.chars().count() <= limit);
    }

    /// Descriptions are at most 30 characters.
    #[test]
    fn prop_description_limit(input in hostile_text()) {
        prop_assert!(sanitize_description(Some(&input)).chars().count() <= 30);
    }

    /// Text with nothing to strip is only trimmed.
    #[test]
    fn prop_plain_text_only_trimmed(input in "[a-z]{1,3}( [a-z]{1,3}){0,5}") {
        let padded = format!("  {input}\t");
        prop_assert_eq!(sanitize_text(Some(&padded)), input);
    }
}
