//! # Score Math
//! Shared numeric helpers for the dimension scorers: 2-decimal rounding,
//! [0,100] clamping, means, and the Gaussian length penalty.
//!
//! Every scorer in this crate is a pure, total function; these helpers keep
//! the clamping and rounding rules in one place so the invariants hold
//! uniformly across dimensions.

/// Round to 2 decimals (half away from zero, which is all we need for
/// non-negative scores).
#[inline]
pub fn round2(x: f32) -> f32 {
    (x * 100.0).round() / 100.0
}

/// Clamp a percentage-style score into [0, 100].
#[inline]
pub fn clamp100(x: f32) -> f32 {
    x.clamp(0.0, 100.0)
}

/// Arithmetic mean; 0.0 for an empty slice (denominator guard).
pub fn mean(values: &[f32]) -> f32 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f32>() / values.len() as f32
}

/// Gaussian penalty around an ideal length:
/// `exp(-((actual-ideal)^2) / (2*sigma^2)) * 100`, clamped to [0,100].
///
/// Peaks at exactly 100 when `actual == ideal` and strictly decreases as the
/// average moves away in either direction. `sigma <= 0` would divide by zero;
/// degrade to the all-or-nothing case instead.
pub fn gaussian_length_score(actual: f32, ideal: f32, sigma: f32) -> f32 {
    if sigma <= 0.0 {
        return if actual == ideal { 100.0 } else { 0.0 };
    }
    let d = actual - ideal;
    clamp100((-(d * d) / (2.0 * sigma * sigma)).exp() * 100.0)
}
