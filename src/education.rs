//! # Education & Certifications
//! Degree-ladder alignment against the JD plus certification relevance and
//! recency, combined as a fixed-weight composite (0.40/0.20/0.25/0.10).

use std::collections::HashSet;

use crate::dates::{current_year, extract_year};
use crate::keywords::extract_keywords;
use crate::metrics::{clamp100, round2};
use crate::types::ResumeData;

/// Degree keyword ladder, highest rung first. Lookup scans in order, so
/// "doctor of philosophy" resolves at the top rung.
pub const DEGREE_LADDER: &[(&str, u32)] = &[
    ("phd", 5),
    ("ph.d", 5),
    ("doctor", 5),
    ("master", 4),
    ("bachelor", 3),
    ("associate", 2),
    ("high school", 1),
];

/// Default level for a non-empty degree string with no ladder keyword.
const DEFAULT_DEGREE_LEVEL: u32 = 3;
/// Target level assumed when the JD names no degree at all.
const DEFAULT_TARGET_LEVEL: u32 = 3;
/// Certifications within this many years of "now" count as recent.
const RECENCY_WINDOW_YEARS: i32 = 5;

/// Ordinal degree level of a degree string; `DEFAULT_DEGREE_LEVEL` when the
/// string is non-empty but matches no rung.
pub fn degree_level(degree: &str) -> u32 {
    let lower = degree.to_lowercase();
    for (kw, level) in DEGREE_LADDER {
        if lower.contains(kw) {
            return *level;
        }
    }
    DEFAULT_DEGREE_LEVEL
}

/// Target level from the JD: first ladder keyword found scanning top-down.
pub fn target_degree_level(jd_text: &str) -> u32 {
    let lower = jd_text.to_lowercase();
    for (kw, level) in DEGREE_LADDER {
        if lower.contains(kw) {
            return *level;
        }
    }
    DEFAULT_TARGET_LEVEL
}

/// Weighted education/certification composite, clamped and 2-decimal rounded.
pub fn education_certifications_score(resume: &ResumeData, jd_text: &str) -> f32 {
    education_certifications_score_at(resume, jd_text, current_year())
}

/// Deterministic variant taking "now" as a year, for tests.
pub fn education_certifications_score_at(
    resume: &ResumeData,
    jd_text: &str,
    now_year: i32,
) -> f32 {
    let jd_keywords = extract_keywords(jd_text);
    let degree = degree_score(resume, jd_text);
    let field = field_match_score(resume, &jd_keywords);
    let cert = certification_relevance_score(resume, &jd_keywords);
    let recency = certification_recency_score(resume, now_year);
    round2(clamp100(
        0.4 * degree + 0.2 * field + 0.25 * cert + 0.1 * recency,
    ))
}

/// `min(100, candidate/target * 100)`; candidate is the max level across
/// entries (0 without education), and a zero target short-circuits to 0.
fn degree_score(resume: &ResumeData, jd_text: &str) -> f32 {
    let candidate = resume
        .education
        .iter()
        .map(|e| degree_level(&e.degree))
        .max()
        .unwrap_or(0);
    let target = target_degree_level(jd_text);
    if target == 0 {
        return 0.0;
    }
    (candidate as f32 / target as f32 * 100.0).min(100.0)
}

/// 100.0 when no entry carries a field (no penalty for omission); otherwise
/// the fraction of fields sharing at least one token with the JD keywords.
fn field_match_score(resume: &ResumeData, jd_keywords: &HashSet<String>) -> f32 {
    let fields: Vec<&str> = resume
        .education
        .iter()
        .filter_map(|e| e.field.as_deref())
        .filter(|f| !f.trim().is_empty())
        .collect();
    if fields.is_empty() {
        return 100.0;
    }
    let matched = fields
        .iter()
        .filter(|f| extract_keywords(f).iter().any(|k| jd_keywords.contains(k)))
        .count();
    matched as f32 / fields.len() as f32 * 100.0
}

/// Fraction of certification names containing a JD keyword as substring;
/// 0.0 without certifications.
fn certification_relevance_score(resume: &ResumeData, jd_keywords: &HashSet<String>) -> f32 {
    if resume.certifications.is_empty() {
        return 0.0;
    }
    let matched = resume
        .certifications
        .iter()
        .filter(|c| {
            let name = c.name.to_lowercase();
            jd_keywords.iter().any(|k| name.contains(k.as_str()))
        })
        .count();
    matched as f32 / resume.certifications.len() as f32 * 100.0
}

/// Fraction of certifications whose year (expiry first, then issue date,
/// defaulting to the current year when absent) lies within the recency window.
fn certification_recency_score(resume: &ResumeData, now_year: i32) -> f32 {
    if resume.certifications.is_empty() {
        return 100.0;
    }
    let recent = resume
        .certifications
        .iter()
        .filter(|c| {
            let year = c
                .expiry_date
                .as_deref()
                .and_then(extract_year)
                .or_else(|| c.date.as_deref().and_then(extract_year))
                .unwrap_or(now_year);
            (now_year - year).abs() <= RECENCY_WINDOW_YEARS
        })
        .count();
    recent as f32 / resume.certifications.len() as f32 * 100.0
}
