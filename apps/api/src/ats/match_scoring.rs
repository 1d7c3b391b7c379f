//! Match Scorer — lexical overlap between a CV and a job description.
//!
//! Default: `KeywordMatchScorer` (pure-Rust, deterministic, no I/O).
//! `AppState` holds an `Arc<dyn MatchScorer>`, swapped at startup.
//!
//! The score is a placeholder heuristic kept for compatibility with the demo
//! app, not a validated matching model: hits are scaled by 1.2 and capped at
//! 100. Keyword extraction filters on length only; there is no stop-word list.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::text::tokenize;

/// Multiplier applied to the hit ratio before capping, expressed in percent.
const SCORE_SCALE_PERCENT: f64 = 120.0;
const MAX_SCORE: u32 = 100;
/// Keywords must be strictly longer than this many characters.
const MIN_KEYWORD_LEN_EXCLUSIVE: usize = 3;
pub const MAX_KEYWORDS: usize = 12;

/// Output of one scoring call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub score: u32,            // 0 – 100
    pub keywords: Vec<String>, // most frequent JD words first, ≤ 12
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Implement this to swap the matching heuristic without touching handlers.
pub trait MatchScorer: Send + Sync {
    fn score(&self, cv_text: &str, jd_text: &str) -> MatchResult;

    /// Backend label surfaced for transparency.
    fn backend(&self) -> &'static str;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct KeywordMatchScorer;

impl MatchScorer for KeywordMatchScorer {
    fn score(&self, cv_text: &str, jd_text: &str) -> MatchResult {
        score_cv_against_jd(cv_text, jd_text)
    }

    fn backend(&self) -> &'static str {
        "keyword"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Core algorithm
// ────────────────────────────────────────────────────────────────────────────

/// Scores `cv_text` against `jd_text`.
///
/// 1. Tokenise both documents (lowercase, `a-z0-9` only, whitespace split).
/// 2. hits = CV tokens, duplicates included, that occur anywhere in the JD.
/// 3. score = min(100, round(hits / jd_token_count × 120)), or 0 for an empty JD.
/// 4. keywords = JD tokens longer than 3 chars, by descending frequency, ties in
///    first-occurrence order, at most 12.
///
/// Asymmetric: the CV is counted with repetition, the JD only as a set.
pub fn score_cv_against_jd(cv_text: &str, jd_text: &str) -> MatchResult {
    let cv_tokens = tokenize(cv_text);
    let jd_tokens = tokenize(jd_text);

    MatchResult {
        score: overlap_score(&cv_tokens, &jd_tokens),
        keywords: rank_keywords(&jd_tokens),
    }
}

fn overlap_score(cv_tokens: &[String], jd_tokens: &[String]) -> u32 {
    if jd_tokens.is_empty() {
        return 0;
    }

    let jd_set: HashSet<&str> = jd_tokens.iter().map(String::as_str).collect();
    let hits = cv_tokens
        .iter()
        .filter(|t| jd_set.contains(t.as_str()))
        .count();

    let scaled = (hits as f64 / jd_tokens.len() as f64) * SCORE_SCALE_PERCENT;
    (scaled.round() as u32).min(MAX_SCORE)
}

fn rank_keywords(jd_tokens: &[String]) -> Vec<String> {
    // (token, count) in first-occurrence order
    let mut counts: Vec<(&str, usize)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for token in jd_tokens {
        match index.get(token.as_str()).copied() {
            Some(i) => counts[i].1 += 1,
            None => {
                index.insert(token.as_str(), counts.len());
                counts.push((token.as_str(), 1));
            }
        }
    }

    counts.retain(|(token, _)| token.chars().count() > MIN_KEYWORD_LEN_EXCLUSIVE);
    // sort_by is stable: equal counts keep first-occurrence order
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    counts
        .into_iter()
        .take(MAX_KEYWORDS)
        .map(|(token, _)| token.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ANALYST_CV: &str = "Python SQL analyst reporting dashboards";
    const ANALYST_JD: &str =
        "We need a data analyst skilled in SQL and Python for reporting dashboards";

    #[test]
    fn test_analyst_example() {
        let result = score_cv_against_jd(ANALYST_CV, ANALYST_JD);
        // 5 hits over 13 JD tokens: round(5 / 13 * 120) = 46
        assert_eq!(result.score, 46);
        for kw in ["analyst", "reporting", "dashboards", "python"] {
            assert!(result.keywords.contains(&kw.to_string()), "missing {kw}");
        }
        // "sql" is only three characters long
        assert!(!result.keywords.contains(&"sql".to_string()));
        assert_eq!(
            result.keywords,
            vec!["need", "data", "analyst", "skilled", "python", "reporting", "dashboards"]
        );
    }

    #[test]
    fn test_empty_cv_against_single_word_jd() {
        let result = score_cv_against_jd("", "anything");
        assert_eq!(result.score, 0);
        assert_eq!(result.keywords, vec!["anything"]);
    }

    #[test]
    fn test_empty_jd_scores_zero() {
        for cv in ["", "anything at all", ANALYST_CV, "!!!"] {
            let result = score_cv_against_jd(cv, "");
            assert_eq!(result.score, 0);
            assert!(result.keywords.is_empty());
        }
    }

    #[test]
    fn test_symbol_only_jd_scores_zero() {
        let result = score_cv_against_jd("rust rust", "--- !!! ...");
        assert_eq!(result.score, 0);
        assert!(result.keywords.is_empty());
    }

    #[test]
    fn test_score_is_capped_at_100() {
        let result = score_cv_against_jd("rust rust rust rust", "rust engineer");
        assert_eq!(result.score, 100);
    }

    #[test]
    fn test_full_overlap_reaches_cap() {
        // 5 of 6 tokens: round(100.0) = 100
        let result = score_cv_against_jd("alpha beta gamma delta epsilon", "alpha beta gamma delta epsilon zeta");
        assert_eq!(result.score, 100);
    }

    #[test]
    fn test_partial_overlap_rounds() {
        // 1 of 8 tokens: 15.0
        let result = score_cv_against_jd(
            "kubernetes",
            "kubernetes terraform docker ansible linux bash python golang",
        );
        assert_eq!(result.score, 15);
        // 1 of 7 tokens: 17.14 -> 17
        let result = score_cv_against_jd("linux", "kubernetes terraform docker ansible linux bash python");
        assert_eq!(result.score, 17);
    }

    #[test]
    fn test_scoring_is_case_and_punctuation_insensitive() {
        let a = score_cv_against_jd("PYTHON, SQL!", "python sql excel");
        let b = score_cv_against_jd("python sql", "Python; SQL; Excel.");
        assert_eq!(a.score, b.score);
        assert_eq!(a.score, 80);
    }

    #[test]
    fn test_score_is_monotonic_in_cv_hits() {
        let jd = "senior rust engineer with tokio axum and postgres experience";
        let mut cv = String::from("gardening cooking");
        let mut previous = score_cv_against_jd(&cv, jd).score;
        for word in ["rust", "tokio", "rust", "axum", "postgres", "experience", "rust"] {
            cv.push(' ');
            cv.push_str(word);
            let current = score_cv_against_jd(&cv, jd).score;
            assert!(current >= previous, "{current} < {previous} after adding {word}");
            previous = current;
        }
    }

    #[test]
    fn test_scoring_is_asymmetric() {
        let forward = score_cv_against_jd("python python python", "python developer");
        let backward = score_cv_against_jd("python developer", "python python python");
        assert_eq!(forward.score, 100);
        assert_eq!(backward.score, 40);
        assert_ne!(forward, backward);
    }

    #[test]
    fn test_keywords_ranked_by_frequency_then_first_occurrence() {
        let jd = "serde async tokio rust tokio rust rust async";
        let result = score_cv_against_jd("", jd);
        assert_eq!(result.keywords, vec!["rust", "async", "tokio", "serde"]);
    }

    #[test]
    fn test_keywords_are_bounded_unique_and_long() {
        let jd = "alpha bravo charlie delta echo foxtrot golf hotel india juliet kilo lima \
                  mike november oscar papa quebec romeo sierra tango uniform victor whiskey \
                  alpha bravo the and for xray yankee zulu";
        let result = score_cv_against_jd("", jd);
        assert_eq!(result.keywords.len(), MAX_KEYWORDS);
        assert!(result.keywords.iter().all(|k| k.len() > 3));
        let unique: HashSet<&String> = result.keywords.iter().collect();
        assert_eq!(unique.len(), result.keywords.len());
        assert_eq!(result.keywords[0], "alpha");
        assert_eq!(result.keywords[1], "bravo");
        // "echo", "golf", "kilo", "lima", "mike", "papa" are exactly four chars and count
        assert!(result.keywords.contains(&"echo".to_string()));
    }

    #[test]
    fn test_short_words_never_become_keywords() {
        let result = score_cv_against_jd("", "a an the sql aws gcp and for");
        assert!(result.keywords.is_empty());
    }

    #[test]
    fn test_scoring_is_deterministic() {
        let a = score_cv_against_jd(ANALYST_CV, ANALYST_JD);
        let b = score_cv_against_jd(ANALYST_CV, ANALYST_JD);
        assert_eq!(a, b);
    }

    #[test]
    fn test_keyword_scorer_trait_delegates() {
        let scorer = KeywordMatchScorer;
        assert_eq!(
            scorer.score(ANALYST_CV, ANALYST_JD),
            score_cv_against_jd(ANALYST_CV, ANALYST_JD)
        );
        assert_eq!(scorer.backend(), "keyword");
    }
}
