//! # Memoization Cache
//! Explicit, injected cache for repeated analyses of identical inputs.
//! Keys are sha256 hashes of the input texts, so raw resume content never
//! doubles as a map key (and never leaks into logs).
//!
//! This is an optimization only — correctness never depends on a hit — and
//! it is deliberately NOT a module-level singleton: each host constructs and
//! owns its cache, so tests run isolated and concurrent callers share state
//! only when they choose to.

use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::sync::RwLock;

/// Stable cache key for one or more input texts.
pub fn text_key(parts: &[&str]) -> String {
    let mut hasher = Sha256::new();
    for p in parts {
        hasher.update(p.as_bytes());
        // Separator so ("ab","c") and ("a","bc") don't collide.
        hasher.update([0u8]);
    }
    let digest = hasher.finalize();
    let mut out = String::with_capacity(64);
    for b in digest.iter() {
        use std::fmt::Write as _;
        let _ = write!(&mut out, "{:02x}", b);
    }
    out
}

/// Short anonymized id for log lines (first 6 bytes of the digest).
pub fn anon_id(text: &str) -> String {
    let mut key = text_key(&[text]);
    key.truncate(12);
    key
}

/// Thread-safe memoization map: lock-free-ish reads, synchronized writes.
#[derive(Debug, Default)]
pub struct AnalysisCache<V: Clone> {
    inner: RwLock<HashMap<String, V>>,
}

impl<V: Clone> AnalysisCache<V> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
        }
    }

    pub fn get(&self, key: &str) -> Option<V> {
        self.inner
            .read()
            .expect("analysis cache lock poisoned")
            .get(key)
            .cloned()
    }

    /// Insert wins-last; concurrent writers computing the same key produce
    /// identical values anyway (the engine is deterministic).
    pub fn insert(&self, key: String, value: V) {
        self.inner
            .write()
            .expect("analysis cache lock poisoned")
            .insert(key, value);
    }

    pub fn len(&self) -> usize {
        self.inner.read().expect("analysis cache lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
