//! # Scorecard & Weighted Aggregation
//! Builds the original/optimized scorecard and collapses per-dimension
//! metrics into one overall number via a calibrated weight table.
//!
//! The default table ships in code; hosts may recalibrate at runtime through
//! `config/weights.json` (hot-reloaded on mtime change, same discipline as
//! the rest of our runtime-calibrated config).

use serde::Deserialize;
use std::{
    collections::HashMap,
    fs, io,
    path::{Path, PathBuf},
    sync::RwLock,
    time::SystemTime,
};

use crate::keywords::{extract_keywords, keyword_match_score};
use crate::metrics::{mean, round2};
use crate::sentences::sentence_length_score;
use crate::types::{ScoreMetric, Scorecard};
use crate::verbs::verb_strength_score;

/// Metric-name → weight map. Metrics absent from the table contribute zero
/// weight and are silently excluded.
#[derive(Clone, Debug, Deserialize)]
#[serde(transparent)]
pub struct WeightTable {
    pub weights: HashMap<String, f32>,
}

impl Default for WeightTable {
    fn default() -> Self {
        let weights = [
            ("Keyword Match", 30.0),
            ("Experience Alignment", 20.0),
            ("Bullet Strength", 15.0),
            ("Role Alignment", 10.0),
            ("Skills Match", 10.0),
            ("Education & Certifications", 5.0),
            ("Formatting & Structure", 5.0),
            ("Customization Level", 5.0),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();
        Self { weights }
    }
}

impl WeightTable {
    pub fn weight_of(&self, metric_name: &str) -> f32 {
        self.weights.get(metric_name).copied().unwrap_or(0.0)
    }
}

/// `Σ(optimized_score * weight) / Σ(weight)` over the table; 0.0 when the
/// total weight is 0 (denominator guard). All-equal inputs return that value.
pub fn weighted_average(metrics: &[ScoreMetric], table: &WeightTable) -> f32 {
    let mut num = 0.0f32;
    let mut denom = 0.0f32;
    for m in metrics {
        let w = table.weight_of(&m.name);
        num += m.optimized_score * w;
        denom += w;
    }
    if denom <= 0.0 {
        return 0.0;
    }
    round2(num / denom)
}

/// Compare original vs optimized text against the same JD keyword set on the
/// three text-level dimensions. `overall_score` is the rounded mean of the
/// optimized keyword/verb/sentence-length scores.
pub fn build_scorecard(original_text: &str, optimized_text: &str, jd_text: &str) -> Scorecard {
    let mut jd_keywords: Vec<String> = extract_keywords(jd_text).into_iter().collect();
    jd_keywords.sort(); // set semantics; sorted for deterministic iteration

    let metrics = vec![
        ScoreMetric::new(
            "Keyword Match",
            keyword_match_score(original_text, &jd_keywords),
            keyword_match_score(optimized_text, &jd_keywords),
        ),
        ScoreMetric::new(
            "Verb Strength",
            verb_strength_score(original_text),
            verb_strength_score(optimized_text),
        ),
        ScoreMetric::new(
            "Sentence Length",
            sentence_length_score(original_text),
            sentence_length_score(optimized_text),
        ),
    ];

    let optimized: Vec<f32> = metrics.iter().map(|m| m.optimized_score).collect();
    let overall_score = mean(&optimized).round() as u32;

    Scorecard {
        overall_score,
        metrics,
    }
}

/// Load a weight table directly (no caching). Public for tests/tools.
pub fn load_weight_table_file(path: &Path) -> io::Result<WeightTable> {
    let bytes = fs::read(path)?;
    let table: WeightTable = serde_json::from_slice(&bytes)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    Ok(table)
}

/// Hot-reload wrapper: reloads when the config file mtime changes.
#[derive(Debug)]
pub struct HotReloadWeightTable {
    path: PathBuf,
    inner: RwLock<State>,
}

#[derive(Debug)]
struct State {
    table: WeightTable,
    last_modified: Option<SystemTime>,
}

impl HotReloadWeightTable {
    /// Create with a path (defaults to "config/weights.json" if `None`).
    pub fn new(path: Option<&Path>) -> Self {
        let path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("config/weights.json"));
        Self {
            path,
            inner: RwLock::new(State {
                table: WeightTable::default(),
                last_modified: None,
            }),
        }
    }

    /// Get the latest table, reloading if the config file changed.
    pub fn current(&self) -> WeightTable {
        // Reads only compare the stored mtime; a missing file means the
        // in-memory table (defaults at first) stays authoritative.
        let stale = match fs::metadata(&self.path).and_then(|m| m.modified()) {
            Ok(mtime) => {
                let guard = self.inner.read().expect("weight table lock poisoned");
                guard.last_modified != Some(mtime)
            }
            Err(_) => false,
        };

        if !stale {
            return self.inner.read().expect("weight table lock poisoned").table.clone();
        }

        // Re-check the mtime under the write lock; another caller may have
        // already swapped the table in. A parse failure keeps the old table.
        let mut guard = self.inner.write().expect("weight table lock poisoned");
        if let Ok(mtime) = fs::metadata(&self.path).and_then(|m| m.modified()) {
            if guard.last_modified != Some(mtime) {
                if let Ok(t) = load_weight_table_file(&self.path) {
                    guard.table = t;
                    guard.last_modified = Some(mtime);
                }
            }
        }
        guard.table.clone()
    }
}
