// The scoring pipeline: normalize → tokenize → vectorize → score.
//
// Every stage is a pure function over already-loaded text; nothing here
// blocks or holds state across invocations. Degenerate input (empty or
// punctuation-only documents) flows through to a defined 0.0 score rather
// than an error.

use tracing::debug;

use crate::scoring::{cosine_similarity, vectorize, FrequencyVector};
use crate::text::{normalize, tokenize};

/// Score two raw document texts against each other.
///
/// Returns the cosine similarity of their term-frequency vectors, in
/// [0.0, 1.0]. Symmetric in its arguments.
pub fn similarity(original: &str, copy: &str) -> f64 {
    let vec_a = frequency_vector(original);
    let vec_b = frequency_vector(copy);
    cosine_similarity(&vec_a, &vec_b)
}

/// Run one document through normalization, tokenization, and counting.
fn frequency_vector(text: &str) -> FrequencyVector {
    let normalized = normalize(text);
    let tokens = tokenize(&normalized);
    debug!(tokens = tokens.len(), "Tokenized document");
    vectorize(&tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_and_punctuation_invariance() {
        let sim = similarity("Hello, World!", "hello world");
        assert!((sim - 1.0).abs() < 1e-9, "Expected 1.0, got {sim}");
    }

    #[test]
    fn test_cjk_character_wise_equivalence() {
        let sim = similarity("我爱中国", "我 爱 中 国");
        assert!((sim - 1.0).abs() < 1e-9, "Expected 1.0, got {sim}");
    }

    #[test]
    fn test_empty_inputs_score_zero() {
        assert_eq!(similarity("", "anything"), 0.0);
        assert_eq!(similarity("anything", ""), 0.0);
        assert_eq!(similarity("", ""), 0.0);
    }

    #[test]
    fn test_cjk_partial_overlap_literal() {
        // 4 shared single-character tokens out of 6 each: 4 / (√6 · √6)
        let sim = similarity("我爱中国北京", "我爱中国上海");
        assert!((sim - 4.0 / 6.0).abs() < 1e-9, "Expected 0.6667, got {sim}");
    }

    #[test]
    fn test_disjoint_cjk_vocabulary() {
        assert_eq!(similarity("苹果香蕉橘子", "汽车火车飞机"), 0.0);
    }
}
