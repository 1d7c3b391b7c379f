//! Shared text helpers: token normalisation, sentence splitting, line splitting.
//!
//! Only ASCII letters and digits survive normalisation; everything else that is
//! not whitespace is dropped before tokenising.

use std::sync::OnceLock;

use regex::Regex;

fn non_token_chars() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^a-z0-9\s]").expect("static token regex is valid"))
}

fn sentence_breaks() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Terminators only count when followed by whitespace or end of text, so
    // "3.14" and "e.g" stay intact.
    RE.get_or_init(|| Regex::new(r"[.!?…]+(?:\s+|$)").expect("static sentence regex is valid"))
}

/// Lowercases `text`, strips everything except `a-z`, `0-9` and whitespace,
/// and splits on whitespace runs. Empty or symbol-only input yields no tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    non_token_chars()
        .replace_all(&lowered, "")
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Splits text into trimmed, non-empty sentence fragments with their
/// terminating punctuation removed.
pub fn split_sentences(text: &str) -> Vec<&str> {
    sentence_breaks()
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Splits on one or more newlines, trims each line and drops blank ones.
pub fn non_empty_lines(text: &str) -> Vec<&str> {
    text.split('\n')
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect()
}
