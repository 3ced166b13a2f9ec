//! # Sentence Length
//! Gaussian readability score on the mean words-per-sentence of free text
//! (summaries, cover paragraphs). Shares the penalty curve with the bullet
//! conciseness sub-score.

use crate::metrics::{gaussian_length_score, mean, round2};

pub const DEFAULT_IDEAL_LEN: f32 = 20.0;
pub const DEFAULT_SIGMA: f32 = 10.0;

/// Sentence-length score with the default ideal length and sigma.
pub fn sentence_length_score(text: &str) -> f32 {
    sentence_length_score_with(text, DEFAULT_IDEAL_LEN, DEFAULT_SIGMA)
}

/// Split on `[.!?]+`, trim, drop empties; 0.0 when nothing remains.
/// Gaussian penalty on the mean word count, clamped to [0,100].
pub fn sentence_length_score_with(text: &str, ideal: f32, sigma: f32) -> f32 {
    let counts: Vec<f32> = text
        .split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.split_whitespace().count() as f32)
        .collect();
    if counts.is_empty() {
        return 0.0;
    }
    round2(gaussian_length_score(mean(&counts), ideal, sigma))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_scores_zero() {
        assert_eq!(sentence_length_score(""), 0.0);
        assert_eq!(sentence_length_score("...!!!??"), 0.0);
        assert_eq!(sentence_length_score("   "), 0.0);
    }

    #[test]
    fn ideal_average_scores_100() {
        let sentence = format!("{}.", "word ".repeat(20).trim());
        assert_eq!(sentence_length_score(&sentence), 100.0);
    }

    #[test]
    fn drifting_from_ideal_strictly_decreases() {
        let mk = |n: usize| format!("{}.", "word ".repeat(n).trim());
        let at_ideal = sentence_length_score(&mk(20));
        let near = sentence_length_score(&mk(25));
        let far = sentence_length_score(&mk(40));
        assert!(at_ideal > near && near > far);
    }

    #[test]
    fn consecutive_terminators_collapse() {
        // "Hi!? Ok." → two sentences of 1 word each, not four splits.
        let s = sentence_length_score_with("Hi!? Ok.", 1.0, 10.0);
        assert_eq!(s, 100.0);
    }
}
