//! # Formatting & Structure
//! Section completeness, section ordering and the skills-list length
//! heuristic. Indentation and noise analysis are placeholders pinned at 100
//! until the document parser exposes enough layout signal to score them.

use crate::metrics::{mean, round2};
use crate::types::ResumeData;

/// Canonical section order a well-structured resume is expected to follow.
pub const CANONICAL_SECTIONS: &[&str] = &["summary", "experience", "education", "skills", "projects"];

/// Mean of five equally weighted sub-scores (presence, order, skills length,
/// indentation placeholder, noise placeholder).
pub fn formatting_score(resume: &ResumeData) -> f32 {
    let subs = [
        section_presence_score(resume),
        section_order_score(&flattened_text(resume)),
        skills_length_score(resume.skills.len()),
        100.0, // indentation: pending layout signal from the parser
        100.0, // noise: pending layout signal from the parser
    ];
    round2(mean(&subs))
}

/// Fraction of the five canonical sections present, ×100.
pub fn section_presence_score(resume: &ResumeData) -> f32 {
    let present = present_sections(resume).len();
    present as f32 / CANONICAL_SECTIONS.len() as f32 * 100.0
}

/// Compare first occurrences of section headers in a flattened text against
/// the canonical order: fraction of found-section pairs in the right relative
/// order, ×100. Fewer than two findable headers → 100 (nothing to misorder).
pub fn section_order_score(flattened: &str) -> f32 {
    let lower = flattened.to_lowercase();
    let positions: Vec<usize> = CANONICAL_SECTIONS
        .iter()
        .filter_map(|name| lower.find(name))
        .collect();
    if positions.len() < 2 {
        return 100.0;
    }
    let mut ordered = 0usize;
    let mut total = 0usize;
    for i in 0..positions.len() {
        for j in (i + 1)..positions.len() {
            total += 1;
            if positions[i] < positions[j] {
                ordered += 1;
            }
        }
    }
    ordered as f32 / total as f32 * 100.0
}

/// 100 for a 5–15 item skills list, linear ramp below five, inverse decay
/// above fifteen (75 at twenty, still falling past that).
pub fn skills_length_score(count: usize) -> f32 {
    match count {
        0..=4 => count as f32 / 5.0 * 100.0,
        5..=15 => 100.0,
        n => 1500.0 / n as f32,
    }
}

/// Canonical-order flattened representation of the structured resume, with
/// section headers. Shared with the top-level analyzer when the caller has no
/// raw text of its own.
pub fn flattened_text(resume: &ResumeData) -> String {
    let mut out = String::new();
    if let Some(summary) = resume.summary.as_deref().filter(|s| !s.trim().is_empty()) {
        out.push_str("Summary\n");
        out.push_str(summary);
        out.push('\n');
    }
    if !resume.work.is_empty() {
        out.push_str("Experience\n");
        for w in &resume.work {
            out.push_str(&format!("{} — {}\n", w.title, w.company));
            for b in &w.bullets {
                out.push_str(b);
                out.push('\n');
            }
        }
    }
    if !resume.education.is_empty() {
        out.push_str("Education\n");
        for e in &resume.education {
            out.push_str(&format!("{}, {}", e.degree, e.institution));
            if let Some(field) = &e.field {
                out.push_str(&format!(" ({field})"));
            }
            out.push('\n');
        }
    }
    if !resume.skills.is_empty() {
        out.push_str("Skills\n");
        out.push_str(&resume.skills.join(", "));
        out.push('\n');
    }
    if !resume.projects.is_empty() {
        out.push_str("Projects\n");
        for p in &resume.projects {
            out.push_str(&p.name);
            if let Some(d) = &p.description {
                out.push_str(&format!(": {d}"));
            }
            out.push('\n');
            for b in &p.bullets {
                out.push_str(b);
                out.push('\n');
            }
        }
    }
    out
}

fn present_sections(resume: &ResumeData) -> Vec<&'static str> {
    let mut present = Vec::new();
    if resume
        .summary
        .as_deref()
        .is_some_and(|s| !s.trim().is_empty())
    {
        present.push("summary");
    }
    if !resume.work.is_empty() {
        present.push("experience");
    }
    if !resume.education.is_empty() {
        present.push("education");
    }
    if !resume.skills.is_empty() {
        present.push("skills");
    }
    if !resume.projects.is_empty() {
        present.push("projects");
    }
    present
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary_and_skills() -> ResumeData {
        ResumeData {
            summary: Some("Pragmatic backend engineer.".to_string()),
            skills: vec!["rust".into(), "sql".into(), "docker".into()],
            ..Default::default()
        }
    }

    #[test]
    fn two_of_five_sections_present_scores_40() {
        assert_eq!(section_presence_score(&summary_and_skills()), 40.0);
    }

    #[test]
    fn composite_mixes_presence_with_placeholders() {
        // presence 40, order 100 (two sections in canonical order),
        // skills 3/5*100 = 60, placeholders 100 + 100 → mean 80.0.
        assert_eq!(formatting_score(&summary_and_skills()), 80.0);
    }

    #[test]
    fn skills_length_bands() {
        assert_eq!(skills_length_score(0), 0.0);
        assert_eq!(skills_length_score(2), 40.0);
        assert_eq!(skills_length_score(5), 100.0);
        assert_eq!(skills_length_score(15), 100.0);
        assert_eq!(skills_length_score(20), 75.0);
        assert!(skills_length_score(30) < skills_length_score(20));
    }

    #[test]
    fn canonical_order_scores_100() {
        assert_eq!(
            section_order_score("Summary ... Experience ... Education ... Skills ... Projects"),
            100.0
        );
    }

    #[test]
    fn reversed_pair_is_penalized() {
        // education before experience: one of three pairs out of order.
        let s = section_order_score("Summary then Education then Experience");
        assert!((s - 200.0 / 3.0).abs() < 1e-3, "got {s}");
    }

    #[test]
    fn single_section_order_is_neutral() {
        assert_eq!(section_order_score("Skills only"), 100.0);
        assert_eq!(section_order_score(""), 100.0);
    }
}
