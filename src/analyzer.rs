//! # Resume Analyzer
//! Pure, testable orchestration that maps `(resume, job description)` to a
//! full `AnalysisReport`: every dimension score, the red-flag list, the
//! per-keyword match verdicts and the weighted overall number.
//!
//! No I/O happens here; AI-extracted keywords and contextual-relevance hints
//! arrive as plain data from the host. Results are memoized in an injected
//! cache keyed by input hashes, never by raw text.

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashSet;
use tracing::info;

use crate::bullets::bullet_strength_score_with;
use crate::cache::{anon_id, text_key, AnalysisCache};
use crate::config::ScoringConfig;
use crate::dates::{parse_flexible, today};
use crate::education::education_certifications_score_at;
use crate::experience::{experience_alignment_score, title_level};
use crate::formatting::{flattened_text, formatting_score};
use crate::keywords::{extract_keywords, keyword_match_score};
use crate::matcher::analyze_keywords;
use crate::metrics::clamp100;
use crate::red_flags::{detect_red_flags_with, red_flags_score_at};
use crate::scorecard::{weighted_average, WeightTable};
use crate::sentences::sentence_length_score_with;
use crate::types::{ExtractedKeywords, KeywordMatch, ResumeData, ScoreMetric};
use crate::verbs::verb_strength_score;

/// Everything the host needs to explain one scoring pass.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub overall_score: f32,
    pub metrics: Vec<ScoreMetric>,
    pub red_flags: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub keyword_matches: Vec<KeywordMatch>,
}

/// Façade owning the calibrated config, the weight table and the memo cache.
#[derive(Debug)]
pub struct ResumeAnalyzer {
    config: ScoringConfig,
    weights: WeightTable,
    cache: AnalysisCache<AnalysisReport>,
}

impl Default for ResumeAnalyzer {
    fn default() -> Self {
        Self::new(ScoringConfig::default(), WeightTable::default())
    }
}

impl ResumeAnalyzer {
    pub fn new(config: ScoringConfig, weights: WeightTable) -> Self {
        Self {
            config,
            weights,
            cache: AnalysisCache::new(),
        }
    }

    /// Full analysis against a job description. `extracted`/`ai_context` are
    /// optional external inputs (see module docs).
    pub fn analyze(
        &self,
        resume: &ResumeData,
        jd_text: &str,
        extracted: Option<&ExtractedKeywords>,
        ai_context: Option<&HashSet<String>>,
    ) -> AnalysisReport {
        self.analyze_at(resume, jd_text, extracted, ai_context, today())
    }

    /// Deterministic variant taking "now", for tests and offline evaluation.
    pub fn analyze_at(
        &self,
        resume: &ResumeData,
        jd_text: &str,
        extracted: Option<&ExtractedKeywords>,
        ai_context: Option<&HashSet<String>>,
        now: NaiveDate,
    ) -> AnalysisReport {
        let resume_text = flattened_text(resume);
        let extracted_fingerprint = extracted
            .map(|e| serde_json::to_string(e).unwrap_or_default())
            .unwrap_or_default();
        let key = text_key(&[
            &resume_text,
            jd_text,
            &extracted_fingerprint,
            &now.to_string(),
        ]);
        if let Some(hit) = self.cache.get(&key) {
            return hit;
        }

        let report = self.compute(resume, &resume_text, jd_text, extracted, ai_context, now);
        dev_log_analysis(&resume_text, &report);
        self.cache.insert(key, report.clone());
        report
    }

    fn compute(
        &self,
        resume: &ResumeData,
        resume_text: &str,
        jd_text: &str,
        extracted: Option<&ExtractedKeywords>,
        ai_context: Option<&HashSet<String>>,
        now: NaiveDate,
    ) -> AnalysisReport {
        let cfg = &self.config;
        let mut jd_keywords: Vec<String> = extract_keywords(jd_text).into_iter().collect();
        jd_keywords.sort();

        let bullets: Vec<String> = resume
            .work
            .iter()
            .flat_map(|w| w.bullets.iter().cloned())
            .collect();
        let summary = resume.summary.as_deref().unwrap_or("");

        // Each dimension is a pure function; the report lists them all, the
        // weight table decides which ones drive the overall number.
        let single = |name: &str, score: f32| ScoreMetric::new(name, score, score);
        let metrics = vec![
            single("Keyword Match", keyword_match_score(resume_text, &jd_keywords)),
            single(
                "Experience Alignment",
                experience_alignment_score(resume, jd_text),
            ),
            single(
                "Bullet Strength",
                bullet_strength_score_with(&bullets, cfg.ideal_bullet_len, cfg.bullet_sigma),
            ),
            single("Role Alignment", role_alignment_score(resume, jd_text)),
            single(
                "Skills Match",
                keyword_match_score(&resume.skills.join(" "), &jd_keywords),
            ),
            single(
                "Education & Certifications",
                education_certifications_score_at(resume, jd_text, chrono::Datelike::year(&now)),
            ),
            single("Formatting & Structure", formatting_score(resume)),
            single("Customization Level", keyword_match_score(summary, &jd_keywords)),
            // Informational dimensions: zero weight in the default table.
            single("Verb Strength", verb_strength_score(resume_text)),
            single(
                "Sentence Length",
                sentence_length_score_with(summary, cfg.ideal_sentence_len, cfg.sentence_sigma),
            ),
            single("Red Flags", red_flags_score_at(resume, now)),
        ];

        let red_flags = detect_red_flags_with(
            resume,
            now,
            cfg.gap_threshold_days,
            cfg.short_role_days,
        )
        .iter()
        .map(ToString::to_string)
        .collect();

        let keyword_matches = extracted
            .map(|e| analyze_keywords(resume_text, e, ai_context))
            .unwrap_or_default();

        AnalysisReport {
            overall_score: weighted_average(&metrics, &self.weights),
            metrics,
            red_flags,
            keyword_matches,
        }
    }
}

/// Most recent title's seniority versus the JD's target seniority.
/// 0.0 without work entries; clamped to [0,100].
pub fn role_alignment_score(resume: &ResumeData, jd_text: &str) -> f32 {
    let epoch = NaiveDate::from_ymd_opt(1970, 1, 1).expect("epoch date");
    let recent = resume
        .work
        .iter()
        .max_by_key(|w| {
            w.from
                .as_deref()
                .and_then(parse_flexible)
                .unwrap_or(epoch)
        })
        .map(|w| title_level(&w.title));
    let Some(level) = recent else {
        return 0.0;
    };
    let target = title_level(jd_text);
    if target == 0 {
        return 0.0;
    }
    clamp100(level as f32 / target as f32 * 100.0)
}

/// Dev gate copied from our other analyzers: explicit opt-in env var AND a
/// dev build (debug_assertions or the `debug` feature).
fn dev_logging_enabled() -> bool {
    let on = std::env::var("SCORE_DEV_LOG").ok().as_deref() == Some("1");
    if !on {
        return false;
    }
    cfg!(debug_assertions) || cfg!(feature = "debug")
}

/// Never log raw resume text. Only the hashed id plus aggregates.
fn dev_log_analysis(resume_text: &str, report: &AnalysisReport) {
    if !dev_logging_enabled() {
        return;
    }
    let id = anon_id(resume_text);
    info!(
        target: "analysis",
        %id,
        overall = report.overall_score,
        red_flags = report.red_flags.len(),
        metrics = report.metrics.len(),
        "analysis complete"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::WorkEntry;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_resume() -> ResumeData {
        ResumeData {
            summary: Some("Senior engineer who delivered python projects across cloud platforms.".into()),
            work: vec![WorkEntry {
                company: "Acme".into(),
                title: "Senior Software Engineer".into(),
                from: Some("2021-02-01".into()),
                to: None,
                bullets: vec![
                    "Led migration to python services by 30%".into(),
                    "Reduced deploy time from hours to minutes for 12 teams".into(),
                ],
            }],
            skills: vec![
                "python".into(),
                "docker".into(),
                "kubernetes".into(),
                "terraform".into(),
                "linux".into(),
            ],
            ..Default::default()
        }
    }

    #[test]
    fn report_contains_all_dimensions_in_bounds() {
        let analyzer = ResumeAnalyzer::default();
        let report = analyzer.analyze_at(
            &sample_resume(),
            "Senior python engineer with docker and kubernetes experience",
            None,
            None,
            day(2026, 1, 1),
        );
        assert_eq!(report.metrics.len(), 11);
        for m in &report.metrics {
            assert!(
                (0.0..=100.0).contains(&m.optimized_score),
                "{} out of bounds: {}",
                m.name,
                m.optimized_score
            );
        }
        assert!((0.0..=100.0).contains(&report.overall_score));
        assert!(report.red_flags.is_empty());
    }

    #[test]
    fn second_call_hits_the_cache() {
        let analyzer = ResumeAnalyzer::default();
        let resume = sample_resume();
        let jd = "Senior python engineer";
        let now = day(2026, 1, 1);
        let a = analyzer.analyze_at(&resume, jd, None, None, now);
        assert_eq!(analyzer.cache.len(), 1);
        let b = analyzer.analyze_at(&resume, jd, None, None, now);
        assert_eq!(analyzer.cache.len(), 1);
        assert_eq!(a.overall_score, b.overall_score);
    }

    #[test]
    fn role_alignment_uses_the_most_recent_title() {
        let mut resume = sample_resume();
        resume.work.push(WorkEntry {
            company: "Old Shop".into(),
            title: "Intern".into(),
            from: Some("2015-01-01".into()),
            to: Some("2015-12-01".into()),
            bullets: vec![],
        });
        // Most recent role is senior (4) against a senior JD (4) → 100.
        assert_eq!(
            role_alignment_score(&resume, "Senior engineer wanted"),
            100.0
        );
        assert_eq!(role_alignment_score(&ResumeData::default(), "any"), 0.0);
    }

    #[test]
    fn extracted_keywords_flow_into_the_report() {
        let analyzer = ResumeAnalyzer::default();
        let extracted = ExtractedKeywords {
            keywords: vec![crate::types::ExtractedKeyword {
                term: "python".into(),
                category: "technical".into(),
                importance: 9,
                frequency: 0,
                confidence: 0.9,
                variations: vec![],
            }],
            ..Default::default()
        };
        let report = analyzer.analyze_at(
            &sample_resume(),
            "python role",
            Some(&extracted),
            None,
            day(2026, 1, 1),
        );
        assert_eq!(report.keyword_matches.len(), 1);
        assert!(report.keyword_matches[0].found);
    }
}
