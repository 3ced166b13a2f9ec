//! # Date Normalization
//! Tolerant parsing of the date strings that arrive in parsed resumes.
//! Parsers upstream emit anything from full ISO dates to bare years or
//! "June 2021"; everything funnels through `parse_flexible` so the
//! date-dependent scorers share one notion of "parseable".
//!
//! Unparseable input degrades to `None` — callers decide between "exclude
//! from comparison" and "default to now/epoch" per their documented rules.

use chrono::{Datelike, NaiveDate, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

static YEAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(19|20)\d{2}\b").expect("year regex"));

const FULL_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d.%m.%Y"];
const MONTH_FORMATS: &[&str] = &["%Y-%m", "%m/%Y", "%B %Y", "%b %Y"];

/// Best-effort date parse. Month-only inputs resolve to the 1st; bare years
/// (anywhere in the string) resolve to Jan 1.
pub fn parse_flexible(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    for fmt in FULL_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }
    for fmt in MONTH_FORMATS {
        // NaiveDate insists on a day; append one.
        let padded = format!("{s} 1");
        let fmt_day = format!("{fmt} %d");
        if let Ok(d) = NaiveDate::parse_from_str(&padded, &fmt_day) {
            return Some(d);
        }
    }
    extract_year(s).and_then(|y| NaiveDate::from_ymd_opt(y, 1, 1))
}

/// First 4-digit year (1900–2099) found anywhere in the string.
pub fn extract_year(s: &str) -> Option<i32> {
    YEAR_RE.find(s).and_then(|m| m.as_str().parse().ok())
}

/// Today's date (UTC). Scorers expose deterministic `_at` variants that take
/// this as a parameter; production paths call through here.
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Current calendar year.
pub fn current_year() -> i32 {
    today().year()
}
