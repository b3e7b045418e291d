// Term-frequency vector construction.

use std::collections::HashMap;

/// Token → occurrence count for one document. Counts sum to the number of
/// non-empty tokens the vector was built from.
pub type FrequencyVector = HashMap<String, u32>;

/// Count token occurrences. Order-insensitive.
///
/// Empty tokens should never reach this point — the tokenizer drops them —
/// but they are skipped here regardless so a stray empty string can't
/// become a shared vocabulary entry.
pub fn vectorize(tokens: &[String]) -> FrequencyVector {
    let mut counts = FrequencyVector::new();
    for token in tokens {
        if token.is_empty() {
            continue;
        }
        *counts.entry(token.clone()).or_insert(0) += 1;
    }
    counts
}
