// src/lib.rs
// Public library surface for integration tests (and host applications).
//
// The crate is a deterministic resume-to-job-description scoring core: every
// scorer is a pure function of its inputs, outputs are clamped to [0,100],
// and anything AI-backed (keyword extraction, semantic relevance) enters as
// plain data from the host — never as a call made from here.

pub mod analyzer;
pub mod bullets;
pub mod cache;
pub mod config;
pub mod dates;
pub mod education;
pub mod experience;
pub mod formatting;
pub mod keywords;
pub mod matcher;
pub mod metrics;
pub mod red_flags;
pub mod scorecard;
pub mod sentences;
pub mod types;
pub mod verbs;

// ---- Re-exports for stable public API ----
pub use crate::analyzer::{AnalysisReport, ResumeAnalyzer};
pub use crate::config::ScoringConfig;
pub use crate::scorecard::{build_scorecard, weighted_average, WeightTable};
pub use crate::types::{
    CertificationEntry, EducationEntry, ExtractedKeyword, ExtractedKeywords, KeywordMatch,
    MatchCategory, ProjectEntry, ResumeData, Scorecard, ScoreMetric, WorkEntry,
};
