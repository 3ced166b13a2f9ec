//! # Keyword Match Analyzer
//! Categorizes each externally extracted JD keyword against the resume text:
//! direct substring evidence, known variations (with a fuzzy tolerance for
//! spelling drift), token frequency, and optional AI-supplied contextual
//! relevance — consumed here strictly as data, never fetched.

use std::collections::HashSet;

use crate::keywords::extract_keywords;
use crate::metrics::round2;
use crate::types::{ExtractedKeywords, KeywordMatch, MatchCategory};

/// Jaro-Winkler floor above which a resume token counts as a variation hit
/// ("containerisation" vs "containerization").
const FUZZY_VARIATION_THRESHOLD: f64 = 0.93;

/// Analyze every extracted keyword against the resume text.
///
/// `ai_context` is the optional set of terms an external semantic service
/// judged contextually present even without a literal match.
pub fn analyze_keywords(
    resume_text: &str,
    extracted: &ExtractedKeywords,
    ai_context: Option<&HashSet<String>>,
) -> Vec<KeywordMatch> {
    let resume_lower = resume_text.to_lowercase();
    let resume_tokens = extract_keywords(resume_text);

    extracted
        .keywords
        .iter()
        .map(|kw| {
            let term_lower = kw.term.to_lowercase();
            let direct = count_occurrences(&resume_lower, &term_lower);

            let mut variation_hits = 0u32;
            for var in &kw.variations {
                let var_lower = var.to_lowercase();
                let exact = count_occurrences(&resume_lower, &var_lower);
                if exact > 0 {
                    variation_hits += exact;
                } else if fuzzy_token_hit(&var_lower, &resume_tokens) {
                    variation_hits += 1;
                }
            }

            let context_match = ai_context
                .map(|ctx| ctx.contains(&term_lower))
                .unwrap_or(false);

            KeywordMatch {
                term: kw.term.clone(),
                category: kw.category.clone(),
                found: direct > 0,
                frequency: direct + variation_hits,
                importance: kw.importance.clamp(1, 10),
                confidence: kw.confidence.clamp(0.0, 1.0),
                variations: kw.variations.clone(),
                context_match,
            }
        })
        .collect()
}

/// Importance-weighted coverage over analyzed keywords, 0–100: a full match
/// earns its importance, a partial earns half, a miss earns nothing.
pub fn keyword_coverage(matches: &[KeywordMatch]) -> f32 {
    let total: u32 = matches.iter().map(|m| u32::from(m.importance)).sum();
    if total == 0 {
        return 0.0;
    }
    let earned: f32 = matches
        .iter()
        .map(|m| {
            let imp = f32::from(m.importance);
            match m.category() {
                MatchCategory::Matched => imp,
                MatchCategory::Partial => imp * 0.5,
                MatchCategory::Missing => 0.0,
            }
        })
        .sum();
    round2(earned / total as f32 * 100.0)
}

/// Non-overlapping occurrence count of `needle` in `haystack` (both lowered).
fn count_occurrences(haystack: &str, needle: &str) -> u32 {
    if needle.is_empty() {
        return 0;
    }
    let mut count = 0u32;
    let mut rest = haystack;
    while let Some(pos) = rest.find(needle) {
        count += 1;
        rest = &rest[pos + needle.len()..];
    }
    count
}

fn fuzzy_token_hit(variation: &str, resume_tokens: &HashSet<String>) -> bool {
    resume_tokens
        .iter()
        .any(|tok| strsim::jaro_winkler(variation, tok) >= FUZZY_VARIATION_THRESHOLD)
}
