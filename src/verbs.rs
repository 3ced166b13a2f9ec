//! # Verb Strength
//! Fixed verb→strength lexicon (1–10) and the sentence-level verb scorer.
//!
//! Two neutral-handling policies live side by side on purpose:
//! * `verb_strength_score` ignores unrecognized words entirely — they are
//!   excluded from the average, not counted as weak.
//! * `first_verb_strength` (used by the bullet scorer) defaults unrecognized
//!   leading verbs to strength 5, a neutral midpoint.
//! Unifying them would silently shift scores, so both stay documented here.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::keywords::tokenize_words;
use crate::metrics::round2;

static LEXICON: Lazy<HashMap<String, u32>> = Lazy::new(|| {
    let raw = include_str!("../verb_strength.json");
    serde_json::from_str::<HashMap<String, u32>>(raw).expect("valid verb strength lexicon")
});

/// Neutral strength assigned to unrecognized bullet-leading verbs.
pub const NEUTRAL_VERB_STRENGTH: u32 = 5;

/// Maximum strength present in the lexicon; normalization denominator.
pub fn max_strength() -> u32 {
    static MAX: Lazy<u32> = Lazy::new(|| LEXICON.values().copied().max().unwrap_or(1));
    *MAX
}

/// Lexicon strength for a (lowercased) word, if it is a known verb.
#[inline]
pub fn strength_of(word: &str) -> Option<u32> {
    LEXICON.get(word).copied()
}

/// Average strength of recognized verbs, normalized by the lexicon max and
/// scaled to 0–100. Unrecognized words are ignored; no recognized verb → 0.0.
pub fn verb_strength_score(text: &str) -> f32 {
    let mut sum: u64 = 0;
    let mut n: u32 = 0;
    for tok in tokenize_words(text) {
        if let Some(s) = strength_of(&tok) {
            sum += u64::from(s);
            n += 1;
        }
    }
    if n == 0 {
        return 0.0;
    }
    let avg = sum as f32 / n as f32;
    round2(avg / max_strength() as f32 * 100.0)
}

/// Strength of a bullet's first word, cleaned to letters only and lowercased.
/// Unknown first verbs get `NEUTRAL_VERB_STRENGTH` rather than 0.
pub fn first_verb_strength(bullet: &str) -> u32 {
    let first = bullet.split_whitespace().next().unwrap_or("");
    let cleaned: String = first
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .collect::<String>()
        .to_ascii_lowercase();
    strength_of(&cleaned).unwrap_or(NEUTRAL_VERB_STRENGTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lexicon_agrees_with_documented_anchors() {
        assert_eq!(strength_of("lead"), Some(10));
        assert_eq!(strength_of("execute"), Some(9));
        assert_eq!(strength_of("support"), Some(5));
        assert_eq!(strength_of("help"), Some(4));
        assert_eq!(max_strength(), 10);
    }

    #[test]
    fn single_strong_verb_scores_100() {
        assert_eq!(verb_strength_score("I led python projects"), 100.0);
    }

    #[test]
    fn no_recognized_verb_scores_zero() {
        assert_eq!(verb_strength_score("lorem ipsum dolor"), 0.0);
        assert_eq!(verb_strength_score(""), 0.0);
    }

    #[test]
    fn average_over_recognized_verbs_only() {
        // led=10, helped=4 → avg 7 → 70.0; filler words contribute nothing.
        assert_eq!(verb_strength_score("led the rollout and helped onboarding"), 70.0);
    }

    #[test]
    fn first_verb_defaults_to_neutral() {
        assert_eq!(first_verb_strength("Led a team by 20%"), 10);
        assert_eq!(first_verb_strength("Zymurgy duties"), NEUTRAL_VERB_STRENGTH);
        assert_eq!(first_verb_strength(""), NEUTRAL_VERB_STRENGTH);
    }

    #[test]
    fn first_verb_strips_punctuation() {
        assert_eq!(first_verb_strength("Delivered: three releases"), 9);
    }
}
