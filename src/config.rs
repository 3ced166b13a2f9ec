//! # Scoring Configuration
//! Tunable parameters for the dimension scorers, loaded from TOML. Every
//! field has a calibrated default; a missing file is not an error for
//! library consumers (`load_or_default`), only for hosts that insist on an
//! explicit config (`from_toml`).

use serde::Deserialize;
use std::path::PathBuf;
use tracing::info;

pub const DEFAULT_SCORING_CONFIG_PATH: &str = "config/scoring.toml";
pub const ENV_SCORING_CONFIG_PATH: &str = "RESUME_SCORING_CONFIG_PATH";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Gaussian center for the sentence-length scorer (words per sentence).
    pub ideal_sentence_len: f32,
    pub sentence_sigma: f32,
    /// Gaussian center for the bullet conciseness sub-score (words per bullet).
    pub ideal_bullet_len: f32,
    pub bullet_sigma: f32,
    /// Employment gaps longer than this many days are flagged.
    pub gap_threshold_days: i64,
    /// Roles shorter than this many days are flagged (canonical threshold,
    /// shared by the warning list and the score — see DESIGN.md).
    pub short_role_days: i64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            ideal_sentence_len: 20.0,
            sentence_sigma: 10.0,
            ideal_bullet_len: 20.0,
            bullet_sigma: 10.0,
            gap_threshold_days: crate::red_flags::GAP_THRESHOLD_DAYS,
            short_role_days: crate::red_flags::SHORT_ROLE_DAYS,
        }
    }
}

impl ScoringConfig {
    /// Load from a TOML file. Uses RESUME_SCORING_CONFIG_PATH or defaults to
    /// "config/scoring.toml". Missing or unreadable file is an error here.
    pub fn from_toml() -> anyhow::Result<Self> {
        let path = std::env::var(ENV_SCORING_CONFIG_PATH)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_SCORING_CONFIG_PATH));
        let content = std::fs::read_to_string(&path).map_err(|e| {
            anyhow::anyhow!("Failed to read scoring config at {}: {}", path.display(), e)
        })?;
        Self::from_toml_str(&content)
    }

    /// Load from a TOML string, with hardening against degenerate values.
    pub fn from_toml_str(toml_str: &str) -> anyhow::Result<Self> {
        let mut cfg: ScoringConfig = toml::from_str(toml_str)?;
        cfg.harden();
        Ok(cfg)
    }

    /// Library-friendly entry: config file if present, defaults otherwise.
    pub fn load_or_default() -> Self {
        match Self::from_toml() {
            Ok(cfg) => cfg,
            Err(e) => {
                info!(target: "scoring_config", error = %e, "using default scoring config");
                Self::default()
            }
        }
    }

    /// Replace non-finite or non-positive parameters with their defaults so a
    /// hand-edited config cannot produce NaN scores.
    fn harden(&mut self) {
        let d = Self::default();
        if !self.ideal_sentence_len.is_finite() || self.ideal_sentence_len <= 0.0 {
            self.ideal_sentence_len = d.ideal_sentence_len;
        }
        if !self.sentence_sigma.is_finite() || self.sentence_sigma <= 0.0 {
            self.sentence_sigma = d.sentence_sigma;
        }
        if !self.ideal_bullet_len.is_finite() || self.ideal_bullet_len <= 0.0 {
            self.ideal_bullet_len = d.ideal_bullet_len;
        }
        if !self.bullet_sigma.is_finite() || self.bullet_sigma <= 0.0 {
            self.bullet_sigma = d.bullet_sigma;
        }
        if self.gap_threshold_days <= 0 {
            self.gap_threshold_days = d.gap_threshold_days;
        }
        if self.short_role_days <= 0 {
            self.short_role_days = d.short_role_days;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_scorer_constants() {
        let c = ScoringConfig::default();
        assert_eq!(c.ideal_sentence_len, 20.0);
        assert_eq!(c.gap_threshold_days, 180);
        assert_eq!(c.short_role_days, 180);
    }

    #[test]
    fn partial_toml_keeps_defaults_for_the_rest() {
        let c = ScoringConfig::from_toml_str("ideal_sentence_len = 18.0").unwrap();
        assert_eq!(c.ideal_sentence_len, 18.0);
        assert_eq!(c.sentence_sigma, 10.0);
    }

    #[test]
    fn degenerate_values_are_hardened() {
        let c = ScoringConfig::from_toml_str(
            "sentence_sigma = -3.0\nshort_role_days = 0",
        )
        .unwrap();
        assert_eq!(c.sentence_sigma, 10.0);
        assert_eq!(c.short_role_days, 180);
    }

    #[test]
    fn invalid_toml_is_an_error() {
        assert!(ScoringConfig::from_toml_str("ideal_sentence_len = [").is_err());
    }
}
