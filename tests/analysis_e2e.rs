//! End-to-end pass over a realistic resume: full report shape, JSON contract
//! of the output, and the original-vs-optimized scorecard.

use chrono::NaiveDate;
use std::collections::HashSet;

use resume_match_analyzer::{
    build_scorecard, CertificationEntry, EducationEntry, ExtractedKeyword, ExtractedKeywords,
    MatchCategory, ResumeAnalyzer, ResumeData, WorkEntry,
};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn realistic_resume() -> ResumeData {
    ResumeData {
        summary: Some(
            "Senior backend engineer focused on python platforms. Delivered reliable cloud services for eight years."
                .into(),
        ),
        work: vec![
            WorkEntry {
                company: "Northwind".into(),
                title: "Senior Software Engineer".into(),
                from: Some("2021-04-01".into()),
                to: None,
                bullets: vec![
                    "Led replatforming onto kubernetes by 40% cost reduction".into(),
                    "Reduced p99 latency from 900ms to 210ms across 14 services".into(),
                ],
            },
            WorkEntry {
                company: "Contoso".into(),
                title: "Software Engineer".into(),
                from: Some("2017-06-01".into()),
                to: Some("2021-03-01".into()),
                bullets: vec!["Built python data pipelines handling 2TB daily".into()],
            },
        ],
        skills: vec![
            "python".into(),
            "kubernetes".into(),
            "docker".into(),
            "postgresql".into(),
            "terraform".into(),
            "linux".into(),
        ],
        education: vec![EducationEntry {
            degree: "Bachelor of Science".into(),
            institution: "State University".into(),
            field: Some("Computer Science".into()),
        }],
        projects: vec![],
        certifications: vec![CertificationEntry {
            name: "AWS Solutions Architect".into(),
            date: None,
            expiry_date: Some("expires June 2027".into()),
        }],
    }
}

const JD: &str = "Senior python engineer to own kubernetes infrastructure. \
                  Bachelor degree in computer science preferred; aws certification a plus.";

fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn full_report_shape_and_bounds() {
    init_test_tracing();
    let analyzer = ResumeAnalyzer::default();
    let report = analyzer.analyze_at(&realistic_resume(), JD, None, None, day(2026, 2, 1));

    assert!(report.overall_score > 50.0, "strong candidate scored {}", report.overall_score);
    assert!(report.overall_score <= 100.0);
    assert!(report.red_flags.is_empty());

    let names: Vec<&str> = report.metrics.iter().map(|m| m.name.as_str()).collect();
    for required in [
        "Keyword Match",
        "Experience Alignment",
        "Bullet Strength",
        "Role Alignment",
        "Skills Match",
        "Education & Certifications",
        "Formatting & Structure",
        "Customization Level",
        "Red Flags",
    ] {
        assert!(names.contains(&required), "missing metric {required}");
    }
}

#[test]
fn report_serializes_with_camel_case_contract() {
    let analyzer = ResumeAnalyzer::default();
    let report = analyzer.analyze_at(&realistic_resume(), JD, None, None, day(2026, 2, 1));
    let v = serde_json::to_value(&report).unwrap();

    assert!(v["overallScore"].is_number());
    assert!(v["metrics"].is_array());
    let m = &v["metrics"][0];
    assert!(m["originalScore"].is_number());
    assert!(m["optimizedScore"].is_number());
    // No keyword matches were requested → the field is skipped entirely.
    assert!(v.get("keywordMatches").is_none());
}

#[test]
fn extracted_keywords_and_context_drive_match_categories() {
    let analyzer = ResumeAnalyzer::default();
    let extracted = ExtractedKeywords {
        keywords: vec![
            ExtractedKeyword {
                term: "python".into(),
                category: "technical".into(),
                importance: 9,
                frequency: 3,
                confidence: 0.95,
                variations: vec!["py".into()],
            },
            ExtractedKeyword {
                term: "graphql".into(),
                category: "technical".into(),
                importance: 6,
                frequency: 1,
                confidence: 0.7,
                variations: vec![],
            },
            ExtractedKeyword {
                term: "observability".into(),
                category: "practice".into(),
                importance: 7,
                frequency: 1,
                confidence: 0.8,
                variations: vec![],
            },
        ],
        requirements: vec!["8 years experience".into()],
        preferences: vec![],
    };
    let ctx: HashSet<String> = ["observability".to_string()].into();

    let report = analyzer.analyze_at(
        &realistic_resume(),
        JD,
        Some(&extracted),
        Some(&ctx),
        day(2026, 2, 1),
    );

    let by_term = |t: &str| {
        report
            .keyword_matches
            .iter()
            .find(|m| m.term == t)
            .unwrap_or_else(|| panic!("no match entry for {t}"))
    };
    assert_eq!(by_term("python").category(), MatchCategory::Matched);
    assert_eq!(by_term("graphql").category(), MatchCategory::Missing);
    // The external semantic service vouched for observability.
    assert_eq!(by_term("observability").category(), MatchCategory::Partial);
}

#[test]
fn scorecard_improves_with_the_optimized_text() {
    let original = "Responsible for stuff. Worked with things.";
    let optimized = "Led python platform work on kubernetes infrastructure. \
                     Delivered measurable reliability wins for the engineer group this year.";
    let card = build_scorecard(original, optimized, JD);

    assert_eq!(card.metrics.len(), 3);
    for m in &card.metrics {
        assert!(
            m.optimized_score >= m.original_score,
            "{} regressed: {} -> {}",
            m.name,
            m.original_score,
            m.optimized_score
        );
    }
    assert!(card.overall_score <= 100);

    let kw = card
        .metrics
        .iter()
        .find(|m| m.name == "Keyword Match")
        .unwrap();
    assert!(kw.optimized_score > kw.original_score);
}
