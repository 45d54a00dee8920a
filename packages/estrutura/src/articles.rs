//! Article extraction and sequence analysis for statute text.
//!
//! Brazilian statutes number their articles "Art. 1º", "Art. 10." and, for
//! articles inserted by later amendments, with letter suffixes such as
//! "Art. 5º-A". Extraction is a single pass over the text: each marker opens
//! an article whose body runs to the next marker (or the end of the
//! document).

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::sync::LazyLock;

use crate::text::{collapse_whitespace, normalize};

/// Article marker: "Art." followed by a number, an optional ordinal sign
/// (º, °, or a plain "o" as seen on older planalto pages), an optional
/// thousands separator ("Art. 1.048") and an optional amendment letter
/// suffix ("-A").
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static ARTICLE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Art\.\s*(\d{1,4}(?:\.\d{3})*[ºo°]?(?:-[A-Z]+)?)").expect("valid regex")
});

/// A single article extracted from statute text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Normalized article number (e.g., "5", "5-A", "1048").
    #[serde(rename = "numero")]
    pub number: String,

    /// Article body, whitespace-collapsed.
    #[serde(rename = "texto")]
    pub text: String,
}

impl Article {
    /// Create a new article.
    #[must_use]
    pub fn new(number: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            text: text.into(),
        }
    }

    /// Leading integer of the article number, for sequence analysis.
    ///
    /// "5-A" yields 5; "1.048" yields 1048.
    #[must_use]
    pub fn integer_prefix(&self) -> Option<u64> {
        integer_prefix(&self.number)
    }
}

/// Normalize a raw matched number: drop ordinal signs, drop thousands
/// separators, keep amendment suffixes.
///
/// "1º" -> "1", "5º-A" -> "5-A", "1.048" -> "1048".
fn normalize_number(raw: &str) -> String {
    let mut result = String::with_capacity(raw.len());
    let chars: Vec<char> = raw.chars().collect();
    for (i, c) in chars.iter().enumerate() {
        match c {
            'º' | '°' | '.' => {}
            'o' if i > 0 && chars[i - 1].is_ascii_digit() => {}
            _ => result.push(*c),
        }
    }
    result
}

/// Leading integer of an article number string.
#[must_use]
pub fn integer_prefix(number: &str) -> Option<u64> {
    let digits: String = number.chars().take_while(char::is_ascii_digit).collect();
    digits.parse().ok()
}

/// Extract all articles from statute text.
///
/// The text is NFC-normalized before matching. Each article body is the
/// text between its marker and the next one, with whitespace collapsed.
#[must_use]
pub fn extract_articles(text: &str) -> Vec<Article> {
    let text = normalize(text);
    let matches: Vec<_> = ARTICLE_PATTERN.captures_iter(&text).collect();

    let mut articles = Vec::with_capacity(matches.len());
    for (i, caps) in matches.iter().enumerate() {
        let Some(full) = caps.get(0) else { continue };
        let Some(number) = caps.get(1) else { continue };

        let body_start = full.end();
        let body_end = matches
            .get(i + 1)
            .and_then(|next| next.get(0))
            .map_or(text.len(), |m| m.start());

        articles.push(Article::new(
            normalize_number(number.as_str()),
            collapse_whitespace(&text[body_start..body_end]),
        ));
    }

    tracing::debug!(count = articles.len(), "articles extracted");
    articles
}

/// Find article numbers that appear more than once.
///
/// Duplicates are a common artifact of re-scraping or merge errors. The
/// returned list preserves first-seen order and lists each number once.
#[must_use]
pub fn find_duplicates(articles: &[Article]) -> Vec<String> {
    let mut seen: BTreeSet<&str> = BTreeSet::new();
    let mut reported: BTreeSet<&str> = BTreeSet::new();
    let mut duplicates = Vec::new();

    for article in articles {
        let number = article.number.as_str();
        if !seen.insert(number) && reported.insert(number) {
            duplicates.push(number.to_string());
        }
    }
    duplicates
}

/// Find integer gaps in the article sequence.
///
/// Parses the leading integer of each article number, sorts the unique
/// values, and reports every missing integer between consecutive values as
/// a suspected missing article.
#[must_use]
pub fn find_gaps(articles: &[Article]) -> Vec<u64> {
    let numbers: BTreeSet<u64> = articles.iter().filter_map(Article::integer_prefix).collect();

    let mut gaps = Vec::new();
    let mut previous: Option<u64> = None;
    for &n in &numbers {
        if let Some(p) = previous {
            for missing in (p + 1)..n {
                gaps.push(missing);
            }
        }
        previous = Some(n);
    }
    gaps
}
