//! Plain-text sanitization.
//!
//! Output of these functions is rendered as plain text, never as markup. The
//! denylist below removes the fragments most often used to smuggle markup or
//! script into a page; it does not escape anything. Callers depend only on
//! [`TextSanitizer`], so a context-aware escaper can replace
//! [`DenylistSanitizer`] without touching them.

use once_cell::sync::Lazy;
use regex::Regex;

use super::limits::{MAX_DESCRIPTION_CHARS, MAX_TEXT_CHARS};

/// Turns untrusted text into text that is safe to store and display.
pub trait TextSanitizer {
    /// Returns the cleaned form of `input`.
    fn clean(&self, input: &str) -> String;
}

static ANGLE_BRACKETS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[<>]").expect("valid regex"));

static JS_PROTOCOL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)javascript:").expect("valid regex"));

static EVENT_HANDLER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)on[a-z0-9_]+=").expect("valid regex"));

static EMBED_KEYWORDS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)script|iframe|object|embed").expect("valid regex"));

/// Strips a fixed denylist of substrings after trimming and truncating.
///
/// Steps run in this order, each as a single pass:
/// 1. trim surrounding whitespace
/// 2. keep the first `max_chars` characters
/// 3. remove `<` and `>`
/// 4. remove `javascript:` (any case)
/// 5. remove `on…=` event-handler prefixes (any case)
/// 6. remove `script`, `iframe`, `object`, `embed` (any case)
///
/// Because angle brackets go first, `"<b>hi</b>"` becomes `"bhi/b"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DenylistSanitizer {
    max_chars: usize,
}

impl DenylistSanitizer {
    /// Sanitizer for general free text.
    pub const TEXT: Self = Self::new(MAX_TEXT_CHARS);

    /// Sanitizer for short transaction descriptions.
    pub const DESCRIPTION: Self = Self::new(MAX_DESCRIPTION_CHARS);

    /// Creates a sanitizer that truncates to `max_chars` characters.
    #[must_use]
    pub const fn new(max_chars: usize) -> Self {
        Self { max_chars }
    }

    /// Maximum output length in characters.
    #[must_use]
    pub const fn max_chars(&self) -> usize {
        self.max_chars
    }
}

impl TextSanitizer for DenylistSanitizer {
    fn clean(&self, input: &str) -> String {
        let truncated: String = input.trim().chars().take(self.max_chars).collect();

        let text = ANGLE_BRACKETS.replace_all(&truncated, "");
        let text = JS_PROTOCOL.replace_all(&text, "");
        let text = EVENT_HANDLER.replace_all(&text, "");
        let text = EMBED_KEYWORDS.replace_all(&text, "");
        text.into_owned()
    }
}

/// Sanitizes free text, truncating to 1000 characters.
///
/// `None` stands for a non-text input and yields an empty string.
#[must_use]
pub fn sanitize_text(input: Option<&str>) -> String {
    input.map_or_else(String::new, |text| DenylistSanitizer::TEXT.clean(text))
}

/// Sanitizes a transaction description, truncating to 30 characters.
#[must_use]
pub fn sanitize_description(input: Option<&str>) -> String {
    input.map_or_else(String::new, |text| DenylistSanitizer::DESCRIPTION.clean(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Hello world", "Hello world")]
    #[case("  padded  ", "padded")]
    #[case("Hello <b>world</b>", "Hello bworld/b")]
    #[case("<script>alert('x')</script>", "alert('x')/")]
    #[case("JavaScript:alert(1)", "alert(1)")]
    #[case("img onerror=steal()", "img steal()")]
    #[case("ONCLICK=go", "go")]
    #[case("postscript", "post")]
    #[case("<IFRAME src=x>", " src=x")]
    #[case("an object and an embed", "an  and an ")]
    #[case("Café ☕", "Café ☕")]
    fn test_sanitize_text(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(sanitize_text(Some(input)), expected);
    }

    #[test]
    fn test_non_text_becomes_empty() {
        assert_eq!(sanitize_text(None), "");
        assert_eq!(sanitize_description(None), "");
    }

    #[test]
    fn test_text_truncates_to_1000_chars() {
        let long = "a".repeat(1500);
        assert_eq!(sanitize_text(Some(&long)).chars().count(), 1000);
    }

    #[test]
    fn test_truncation_counts_characters_not_bytes() {
        let long = "é".repeat(40);
        assert_eq!(sanitize_description(Some(&long)), "é".repeat(30));
    }

    #[test]
    fn test_description_truncates_before_stripping() {
        // 28 letters then "<b>": truncation keeps "<b", stripping leaves "b".
        let input = format!("{}<b>tail", "x".repeat(28));
        assert_eq!(sanitize_description(Some(&input)), format!("{}b", "x".repeat(28)));
    }

    #[test]
    fn test_custom_limit() {
        let sanitizer = DenylistSanitizer::new(5);
        assert_eq!(sanitizer.max_chars(), 5);
        assert_eq!(sanitizer.clean("abcdefgh"), "abcde");
    }

    #[test]
    fn test_idempotent_on_markup() {
        let once = sanitize_text(Some("<b>x</b>"));
        assert_eq!(once, "bx/b");
        assert_eq!(sanitize_text(Some(&once)), once);
    }

    #[test]
    fn test_nested_keyword_survives_one_pass() {
        // Removing the inner "script" joins the outer letters into a new one,
        // so a second pass changes the text again.
        let once = sanitize_text(Some("scrscriptipt"));
        assert_eq!(once, "script");
        assert_eq!(sanitize_text(Some(&once)), "");
    }

    #[test]
    fn test_trait_object() {
        let sanitizer: &dyn TextSanitizer = &DenylistSanitizer::TEXT;
        assert_eq!(sanitizer.clean(" <i>ok</i> "), "iok/i");
    }
}
