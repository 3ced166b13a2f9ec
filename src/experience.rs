//! # Experience Alignment
//! Seniority ladder over job titles with recency-weighted averaging: recent
//! roles dominate via harmonic decay, then the weighted level is compared to
//! the target title's level.

use chrono::NaiveDate;

use crate::dates::parse_flexible;
use crate::metrics::{clamp100, round2};
use crate::types::ResumeData;

/// Seniority keyword ladder, highest rung first; scan order matters so that
/// "Senior Director" resolves as director (6), not senior (4).
pub const SENIORITY_LADDER: &[(&str, u32)] = &[
    ("chief", 8),
    ("ceo", 8),
    ("cto", 8),
    ("coo", 8),
    ("cfo", 8),
    ("vice president", 7),
    ("vp", 7),
    ("director", 6),
    ("principal", 6),
    ("manager", 5),
    ("lead", 5),
    ("senior", 4),
    ("staff", 4),
    ("junior", 2),
    ("intern", 1),
    ("trainee", 1),
];

/// Level for titles with no ladder keyword (mid-level individual contributor).
const DEFAULT_TITLE_LEVEL: u32 = 3;

/// Ordinal seniority level of any title string.
///
/// Single-word rungs match whole tokens only, so "MVP" does not hit "vp" and
/// "International" does not hit "intern". Multi-word rungs match as phrases.
pub fn title_level(title: &str) -> u32 {
    let lower = title.to_lowercase();
    let tokens: Vec<&str> = lower
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .collect();
    for (kw, level) in SENIORITY_LADDER {
        let hit = if kw.contains(' ') {
            lower.contains(kw)
        } else {
            tokens.iter().any(|t| t == kw)
        };
        if hit {
            return *level;
        }
    }
    DEFAULT_TITLE_LEVEL
}

/// Recency-weighted seniority alignment against `target_title`.
/// 0.0 without work entries; otherwise `clamp(weighted_avg/target * 100)`.
pub fn experience_alignment_score(resume: &ResumeData, target_title: &str) -> f32 {
    if resume.work.is_empty() {
        return 0.0;
    }
    let target = title_level(target_title);
    if target == 0 {
        return 0.0;
    }

    // Sort by parsed start date, newest first. Missing/unparseable starts sort
    // as epoch, i.e. oldest, so they carry the smallest weights.
    let epoch = NaiveDate::from_ymd_opt(1970, 1, 1).expect("epoch date");
    let mut entries: Vec<(NaiveDate, u32)> = resume
        .work
        .iter()
        .map(|w| {
            let start = w
                .from
                .as_deref()
                .and_then(parse_flexible)
                .unwrap_or(epoch);
            (start, title_level(&w.title))
        })
        .collect();
    entries.sort_by(|a, b| b.0.cmp(&a.0));

    // Harmonic decay: rank 0 → 1.0, rank 1 → 0.5, rank 2 → 0.33 …
    let mut weighted_sum = 0.0f32;
    let mut weight_total = 0.0f32;
    for (rank, (_, level)) in entries.iter().enumerate() {
        let w = 1.0 / (rank as f32 + 1.0);
        weighted_sum += *level as f32 * w;
        weight_total += w;
    }
    let weighted_avg = weighted_sum / weight_total;
    round2(clamp100(weighted_avg / target as f32 * 100.0))
}
