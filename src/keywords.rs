//! # Keyword Extraction & Matching
//! Leaf primitives used by nearly every scorer: a normalizing keyword
//! extractor and the coverage score of JD keywords against resume text.
//!
//! Extraction is deliberately blunt — lowercase `[a-z]{4,}` tokens with set
//! semantics — because the interesting ranking work happens downstream in the
//! match analyzer; this layer only has to be deterministic and total.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

use crate::metrics::round2;

static KEYWORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-z]{4,}").expect("keyword regex"));

/// Lower-case the text and collect unique `[a-z]{4,}` tokens.
/// Pure, total: empty/non-matching input yields an empty set.
pub fn extract_keywords(text: &str) -> HashSet<String> {
    let lower = text.to_lowercase();
    KEYWORD_RE
        .find_iter(&lower)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Modulová tokenizace: alfanumerické tokeny, lower-case.
/// (Shared with the verb scorers, which need short tokens like "help".)
pub fn tokenize_words(s: &str) -> impl Iterator<Item = String> + '_ {
    s.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(|t| t.to_ascii_lowercase())
}

/// Fraction of JD keywords (already normalized by the caller) present in the
/// resume keyword set, scaled to 0–100 and rounded to 2 decimals.
///
/// An empty keyword list is a defined edge case (0.0), not an error.
pub fn keyword_match_score(resume_text: &str, jd_keywords: &[String]) -> f32 {
    if jd_keywords.is_empty() {
        return 0.0;
    }
    let resume_kw = extract_keywords(resume_text);
    let matched = jd_keywords
        .iter()
        .filter(|k| resume_kw.contains(k.as_str()))
        .count();
    round2(matched as f32 / jd_keywords.len() as f32 * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kws(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn extracts_lowercased_unique_tokens_of_four_plus_letters() {
        let set = extract_keywords("Rust, rust and Go; C++ APIs, apis!");
        assert!(set.contains("rust"));
        assert!(set.contains("apis"));
        // "go" and "c" are below the 4-letter floor
        assert!(!set.contains("go"));
        assert_eq!(set.iter().filter(|k| k.as_str() == "rust").count(), 1);
    }

    #[test]
    fn empty_input_yields_empty_set() {
        assert!(extract_keywords("").is_empty());
        assert!(extract_keywords("a b c 123 !!").is_empty());
    }

    #[test]
    fn full_match_scores_100() {
        let s = keyword_match_score("I led python projects", &kws(&["python", "projects"]));
        assert_eq!(s, 100.0);
    }

    #[test]
    fn empty_keyword_list_scores_zero() {
        assert_eq!(keyword_match_score("anything at all", &[]), 0.0);
    }

    #[test]
    fn partial_coverage_rounds_to_two_decimals() {
        let s = keyword_match_score(
            "experience with python",
            &kws(&["python", "kubernetes", "terraform"]),
        );
        assert_eq!(s, 33.33);
    }

    #[test]
    fn more_matches_never_decrease_the_score() {
        let jd = kws(&["python", "docker", "linux"]);
        let one = keyword_match_score("python only here", &jd);
        let two = keyword_match_score("python and docker here", &jd);
        let three = keyword_match_score("python docker linux here", &jd);
        assert!(one <= two && two <= three);
    }
}
