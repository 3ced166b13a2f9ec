//! # Red Flags
//! Career-timeline warnings: employment gaps, suspiciously short tenures and
//! overlapping roles, plus the discrete score ladder derived from them.
//!
//! The warning list and the score share one canonical `SHORT_ROLE_DAYS`
//! threshold — a user reading "Short tenure at X" must see the same cutoff
//! the score ladder applied (rationale in DESIGN.md).

use chrono::NaiveDate;
use std::fmt;

use crate::dates::{parse_flexible, today};
use crate::types::{ResumeData, WorkEntry};

/// Gaps longer than this many days between consecutive roles are flagged.
pub const GAP_THRESHOLD_DAYS: i64 = 180;
/// Roles shorter than this many days are flagged. Canonical for both the
/// warning list and the score.
pub const SHORT_ROLE_DAYS: i64 = 180;

/// One detected warning; `Display` renders the human-readable message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RedFlag {
    Gap {
        days: i64,
        after: String,
        before: String,
    },
    ShortTenure {
        company: String,
        days: i64,
    },
    Overlap {
        first: String,
        second: String,
    },
}

impl fmt::Display for RedFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RedFlag::Gap { days, after, before } => write!(
                f,
                "Employment gap of {days} days between {after} and {before}"
            ),
            RedFlag::ShortTenure { company, days } => {
                write!(f, "Short tenure at {company} ({days} days)")
            }
            RedFlag::Overlap { first, second } => {
                write!(f, "Overlapping roles at {first} and {second}")
            }
        }
    }
}

/// Human-readable warnings for the timeline, using today's date for ongoing
/// roles.
pub fn extract_red_flags(resume: &ResumeData) -> Vec<String> {
    detect_red_flags_at(resume, today())
        .iter()
        .map(ToString::to_string)
        .collect()
}

/// Discrete score from the flag count: 0→100, 1→75, 2→50, 3→25, ≥4→0.
/// An empty work history is a perfect 100 (nothing to flag).
pub fn red_flags_score(resume: &ResumeData) -> f32 {
    red_flags_score_at(resume, today())
}

/// Deterministic variant taking "now", for tests.
pub fn red_flags_score_at(resume: &ResumeData, now: NaiveDate) -> f32 {
    if resume.work.is_empty() {
        return 100.0;
    }
    // Overlaps appear in the warning list but do not drive the score ladder.
    let flags = detect_red_flags_at(resume, now)
        .into_iter()
        .filter(|f| !matches!(f, RedFlag::Overlap { .. }))
        .count();
    match flags {
        0 => 100.0,
        1 => 75.0,
        2 => 50.0,
        3 => 25.0,
        _ => 0.0,
    }
}

/// Full structured detection with the canonical thresholds.
pub fn detect_red_flags_at(resume: &ResumeData, now: NaiveDate) -> Vec<RedFlag> {
    detect_red_flags_with(resume, now, GAP_THRESHOLD_DAYS, SHORT_ROLE_DAYS)
}

/// Full structured detection. Entries without a parseable `from` are excluded
/// from gap/overlap math; the remaining entries are still checked for short
/// duration with `to` defaulting to `now`. Thresholds are parameters so the
/// host config can recalibrate them.
pub fn detect_red_flags_with(
    resume: &ResumeData,
    now: NaiveDate,
    gap_threshold_days: i64,
    short_role_days: i64,
) -> Vec<RedFlag> {
    let mut spans: Vec<Span<'_>> = resume
        .work
        .iter()
        .filter_map(|w| Span::from_entry(w, now))
        .collect();
    spans.sort_by_key(|s| s.start);

    let mut flags = Vec::new();

    for span in &spans {
        let days = (span.end - span.start).num_days();
        if days < short_role_days {
            flags.push(RedFlag::ShortTenure {
                company: span.entry.company.clone(),
                days,
            });
        }
    }

    for pair in spans.windows(2) {
        let (prev, cur) = (&pair[0], &pair[1]);
        let gap = (cur.start - prev.end).num_days();
        if gap > gap_threshold_days {
            flags.push(RedFlag::Gap {
                days: gap,
                after: prev.entry.company.clone(),
                before: cur.entry.company.clone(),
            });
        } else if cur.start < prev.end {
            flags.push(RedFlag::Overlap {
                first: prev.entry.company.clone(),
                second: cur.entry.company.clone(),
            });
        }
    }

    flags
}

struct Span<'a> {
    entry: &'a WorkEntry,
    start: NaiveDate,
    end: NaiveDate,
}

impl<'a> Span<'a> {
    /// `None` when `from` is missing or unparseable. Absent/empty/unparseable
    /// `to` means the role is ongoing.
    fn from_entry(entry: &'a WorkEntry, now: NaiveDate) -> Option<Self> {
        let start = entry.from.as_deref().and_then(parse_flexible)?;
        let end = entry
            .to
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .and_then(parse_flexible)
            .unwrap_or(now);
        Some(Self { entry, start, end })
    }
}
