//! types.rs — Struktury pro resume data, scorecard a keyword matching.
//! Jeden společný datový modul: host aplikace posílá `ResumeData` jako JSON
//! (camelCase kontrakt), scorery vrací `ScoreMetric`/`Scorecard` a analyzér
//! keywordů pracuje s `ExtractedKeywords` → `KeywordMatch`.
//!
//! Pozn.: AI-extrahovaná klíčová slova sem vstupují jako čistá data — tenhle
//! modul (ani zbytek crate) nikdy nevolá externí službu.

use serde::{Deserialize, Serialize};

use crate::metrics::{clamp100, round2};

/// Strukturovaný životopis tak, jak ho posílá host (parser / frontend).
/// Všechna pole jsou defaultovatelná; chybějící sekce znamená prázdnou sekci.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    pub work: Vec<WorkEntry>,
    pub skills: Vec<String>,
    pub education: Vec<EducationEntry>,
    pub projects: Vec<ProjectEntry>,
    pub certifications: Vec<CertificationEntry>,
}

/// Jedna pracovní pozice. Datumy zůstávají jako String — parsování je
/// tolerantní a řeší ho `dates::parse_flexible` až v místě použití.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkEntry {
    pub company: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    /// `None` nebo prázdný string = pozice stále trvá.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectEntry {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub bullets: Vec<String>,
}

/// Certifikace; `date` je datum vydání, `expiry_date` má při určování roku
/// přednost (viz `education::certification_recency_score`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CertificationEntry {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<String>,
}

/// Jedna dimenze skóre, před a po optimalizaci textu.
/// Konstruktor drží invariant: obě hodnoty v [0, 100], na 2 desetinná místa.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreMetric {
    pub name: String,
    pub original_score: f32,
    pub optimized_score: f32,
}

impl ScoreMetric {
    pub fn new(name: impl Into<String>, original: f32, optimized: f32) -> Self {
        Self {
            name: name.into(),
            original_score: round2(clamp100(original)),
            optimized_score: round2(clamp100(optimized)),
        }
    }
}

/// Original-vs-optimized srovnání na textové úrovni.
/// `overall_score` je zaokrouhlený průměr optimalizovaných hodnot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scorecard {
    pub overall_score: u32,
    pub metrics: Vec<ScoreMetric>,
}

/// Klíčová slova extrahovaná z inzerátu externí službou (vstupní kontrakt).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExtractedKeywords {
    pub keywords: Vec<ExtractedKeyword>,
    pub requirements: Vec<String>,
    pub preferences: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExtractedKeyword {
    pub term: String,
    /// Volná kategorie ze služby ("technical", "soft", "practice", ...).
    pub category: String,
    /// Důležitost 1–10; analyzér si ji při zpracování clampuje.
    pub importance: u8,
    /// Frekvence termu v inzerátu (informativní, skóre z ní nevychází).
    pub frequency: u32,
    /// Jistota extrakce v intervalu <0.0, 1.0>.
    pub confidence: f32,
    pub variations: Vec<String>,
}

/// Výsledek porovnání jednoho klíčového slova s textem životopisu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordMatch {
    pub term: String,
    pub category: String,
    /// Přímý výskyt termu v textu (ne jen variace nebo kontext).
    pub found: bool,
    /// Přímé výskyty + zásahy variací dohromady.
    pub frequency: u32,
    pub importance: u8,
    pub confidence: f32,
    pub variations: Vec<String>,
    /// Externí sémantická služba term potvrdila i bez literálního výskytu.
    pub context_match: bool,
}

impl KeywordMatch {
    /// Verdikt: přímý výskyt → `Matched`; jen variace nebo kontextové
    /// potvrzení → `Partial`; jinak `Missing`.
    pub fn category(&self) -> MatchCategory {
        if self.found {
            MatchCategory::Matched
        } else if self.frequency > 0 || self.context_match {
            MatchCategory::Partial
        } else {
            MatchCategory::Missing
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MatchCategory {
    Matched,
    Partial,
    Missing,
}
