//! Word tokenizer shared by the sentiment and theme stages.

use regex::Regex;
use std::sync::LazyLock;

static WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[a-zA-Z']+\b").expect("word pattern is valid"));

/// Splits text into lowercase words made of ASCII letters and apostrophes.
/// Everything else is dropped.
pub fn tokenize(text: &str) -> Vec<String> {
    WORD_RE
        .find_iter(text)
        .map(|m| m.as_str().to_ascii_lowercase())
        .collect()
}
