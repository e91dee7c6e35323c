//! Cosine similarity scoring.
//!
//! Scores are computed in `f64` and clamped to `[-1, 1]`. Degenerate input
//! (empty, mismatched, zero-magnitude, NaN or infinite components) is an
//! error, never a silent 0 or NaN.

use briefcheck_core::errors::SimilarityError;

/// Cosine similarity between two embedding vectors.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f64, SimilarityError> {
    if a.is_empty() || b.is_empty() {
        return Err(SimilarityError::Empty);
    }
    if a.len() != b.len() {
        return Err(SimilarityError::DimensionMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    if !a.iter().all(|x| x.is_finite()) {
        return Err(SimilarityError::NonFinite { side: "left" });
    }
    if !b.iter().all(|x| x.is_finite()) {
        return Err(SimilarityError::NonFinite { side: "right" });
    }
    let (mut dot, mut mag_a, mut mag_b) = (0.0f64, 0.0f64, 0.0f64);
    for (x, y) in a.iter().zip(b.iter()) {
        let (x, y) = (*x as f64, *y as f64);
        dot += x * y;
        mag_a += x * x;
        mag_b += y * y;
    }
    if !(mag_a > 0.0) {
        return Err(SimilarityError::ZeroMagnitude { side: "left" });
    }
    if !(mag_b > 0.0) {
        return Err(SimilarityError::ZeroMagnitude { side: "right" });
    }
    let score = dot / (mag_a.sqrt() * mag_b.sqrt());
    if !score.is_finite() {
        return Err(SimilarityError::NonFinite { side: "score" });
    }
    Ok(score.clamp(-1.0, 1.0))
}

/// Rescale a cosine score to a whole-number percentage (-100..=100).
pub fn to_percentage(score: f64) -> f64 {
    (score * 100.0).round()
}

/// Inclusive threshold check on the raw cosine value.
pub fn meets_threshold(score: f64, threshold: f64) -> bool {
    score >= threshold
}
