//! Text normalization and HTML stripping utilities.
//!
//! Scraped statute pages arrive either as plain text or as government-portal
//! HTML. The validator operates on plain text, so HTML sources pass through
//! a small regex-based stripper first.

use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

/// Script and style blocks, removed with their content.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static SCRIPT_STYLE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<(script|style)\b[^>]*>.*?</(script|style)>").expect("valid regex")
});

/// Block-level closing tags that imply a line break.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static BLOCK_BREAK_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)</(p|div|tr|li|h[1-6]|blockquote)>|<br\s*/?>").expect("valid regex")
});

/// Any remaining tag.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static TAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<[^>]+>").expect("valid regex"));

/// Runs of spaces and tabs.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static SPACE_RUN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]+").expect("valid regex"));

/// Three or more consecutive newlines.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static BLANK_RUN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("valid regex"));

/// Any whitespace run, for single-line collapsing.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static WHITESPACE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// HTML entities seen on planalto.gov.br pages.
const ENTITIES: [(&str, &str); 8] = [
    ("&nbsp;", " "),
    ("&amp;", "&"),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
    ("&#39;", "'"),
    ("&ordm;", "º"),
    ("&sect;", "§"),
];

/// Normalize text to NFC form.
///
/// Accented markers ("PRESIDÊNCIA", "Nº") must compare equal regardless of
/// whether the source used precomposed or decomposed code points.
#[must_use]
pub fn normalize(text: &str) -> String {
    text.nfc().collect()
}

/// Collapse all whitespace runs into single spaces and trim.
///
/// # Examples
/// ```
/// use direito_estrutura::text::collapse_whitespace;
///
/// assert_eq!(collapse_whitespace("  a \n\t b  "), "a b");
/// ```
#[must_use]
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_PATTERN.replace_all(text.trim(), " ").to_string()
}

/// Strip HTML down to plain text.
///
/// Removes script/style blocks entirely, turns block boundaries into line
/// breaks, drops remaining tags, decodes common entities, and collapses
/// excess whitespace. This is deliberately regex-based glue, not an HTML
/// parser; it only needs to be good enough for government statute pages.
#[must_use]
pub fn strip_html(html: &str) -> String {
    let text = SCRIPT_STYLE_PATTERN.replace_all(html, "");
    let text = BLOCK_BREAK_PATTERN.replace_all(&text, "\n");
    let text = TAG_PATTERN.replace_all(&text, " ");

    let mut text = text.to_string();
    for (entity, replacement) in ENTITIES {
        text = text.replace(entity, replacement);
    }

    let text = SPACE_RUN_PATTERN.replace_all(&text, " ");
    // Trim each line, then collapse runs of blank lines
    let text = text
        .lines()
        .map(str::trim)
        .collect::<Vec<_>>()
        .join("\n");
    BLANK_RUN_PATTERN
        .replace_all(&text, "\n\n")
        .trim()
        .to_string()
}
