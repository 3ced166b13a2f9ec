//! # Bullet Strength
//! Composite quality score for work-experience bullets: six equally weighted
//! sub-scores over the whole bullet array (verb impact, quantification,
//! conciseness, fluff, bloat, pattern bonus).

use once_cell::sync::Lazy;
use regex::Regex;

use crate::metrics::{gaussian_length_score, mean, round2};
use crate::verbs::{first_verb_strength, max_strength};

/// Default ideal bullet length in words (Gaussian center).
pub const DEFAULT_IDEAL_LEN: f32 = 20.0;
/// Default Gaussian sigma for the conciseness sub-score.
pub const DEFAULT_SIGMA: f32 = 10.0;
/// Bullets above this word count are considered bloated.
pub const DEFAULT_BLOAT_LIMIT: usize = 60;

/// Dead-weight openers; anchored at string start, case-insensitive.
static FLUFF_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(responsible for|worked with|assisted in)").expect("fluff regex")
});

/// "Verb → Action → Outcome" shape: capitalized lead word, "by", and a
/// quantified percentage somewhere after it.
static PATTERN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z][a-z]+.*\bby\b.*\d+%").expect("pattern bonus regex"));

/// Composite bullet score with the default ideal length and sigma.
pub fn bullet_strength_score(bullets: &[String]) -> f32 {
    bullet_strength_score_with(bullets, DEFAULT_IDEAL_LEN, DEFAULT_SIGMA)
}

/// Composite bullet score; 0.0 for an empty list. Mean of six sub-scores,
/// each weighted 1/6, rounded to 2 decimals.
pub fn bullet_strength_score_with(bullets: &[String], ideal_len: f32, sigma: f32) -> f32 {
    if bullets.is_empty() {
        return 0.0;
    }
    let subs = [
        verb_impact(bullets),
        quantification(bullets),
        conciseness(bullets, ideal_len, sigma),
        fluff(bullets),
        bloat(bullets, DEFAULT_BLOAT_LIMIT),
        pattern_bonus(bullets),
    ];
    round2(mean(&subs))
}

/// Mean first-verb strength, normalized against the lexicon max.
/// Unrecognized leading verbs count as neutral (5), not zero.
fn verb_impact(bullets: &[String]) -> f32 {
    let sum: u64 = bullets
        .iter()
        .map(|b| u64::from(first_verb_strength(b)))
        .sum();
    let avg = sum as f32 / bullets.len() as f32;
    avg / max_strength() as f32 * 100.0
}

/// Percentage of bullets containing at least one digit.
fn quantification(bullets: &[String]) -> f32 {
    ratio(bullets, |b| b.chars().any(|c| c.is_ascii_digit()))
}

/// Gaussian penalty on the *average* bullet word count (not per bullet).
fn conciseness(bullets: &[String], ideal_len: f32, sigma: f32) -> f32 {
    let avg_words = mean(
        &bullets
            .iter()
            .map(|b| b.split_whitespace().count() as f32)
            .collect::<Vec<_>>(),
    );
    gaussian_length_score(avg_words, ideal_len, sigma)
}

/// Percentage of bullets NOT opening with a dead-weight phrase.
fn fluff(bullets: &[String]) -> f32 {
    ratio(bullets, |b| !FLUFF_RE.is_match(b))
}

/// Percentage of bullets at or under the bloat word limit.
fn bloat(bullets: &[String], limit: usize) -> f32 {
    ratio(bullets, |b| b.split_whitespace().count() <= limit)
}

/// Percentage of bullets matching the quantified-outcome pattern.
fn pattern_bonus(bullets: &[String]) -> f32 {
    ratio(bullets, |b| PATTERN_RE.is_match(b))
}

fn ratio(bullets: &[String], pred: impl Fn(&str) -> bool) -> f32 {
    let hits = bullets.iter().filter(|b| pred(b.as_str())).count();
    hits as f32 / bullets.len() as f32 * 100.0
}
