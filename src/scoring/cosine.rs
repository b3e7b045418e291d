// Cosine similarity over term-frequency vectors.
//
// The vocabulary is the union of both vectors' key sets; every key in
// either vector is visited exactly once while accumulating the dot product
// and both squared norms. A zero norm on either side (empty document)
// short-circuits to 0.0 instead of dividing by zero.

use std::collections::HashSet;

use tracing::debug;

use super::vector::FrequencyVector;

/// Compute the cosine similarity between two frequency vectors.
///
/// Returns a score from 0.0 (no shared terms) to 1.0 (identical relative
/// term distributions). Non-negative counts keep the mathematical result
/// inside [0, 1]; the clamp only absorbs float rounding at the top end.
pub fn cosine_similarity(vec_a: &FrequencyVector, vec_b: &FrequencyVector) -> f64 {
    let vocabulary: HashSet<&String> = vec_a.keys().chain(vec_b.keys()).collect();

    let mut dot = 0.0;
    let mut norm_a_sq = 0.0;
    let mut norm_b_sq = 0.0;

    for word in &vocabulary {
        let a = vec_a.get(*word).copied().unwrap_or(0) as f64;
        let b = vec_b.get(*word).copied().unwrap_or(0) as f64;
        dot += a * b;
        norm_a_sq += a * a;
        norm_b_sq += b * b;
    }

    debug!(vocabulary = vocabulary.len(), "Scored vector pair");

    if norm_a_sq == 0.0 || norm_b_sq == 0.0 {
        return 0.0;
    }

    (dot / (norm_a_sq.sqrt() * norm_b_sq.sqrt())).clamp(0.0, 1.0)
}
