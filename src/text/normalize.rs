// Text normalization: lowercase + punctuation/whitespace collapsing.
//
// Every maximal run of Unicode punctuation and/or whitespace becomes a
// single space. The pattern uses the full \p{P} property rather than an
// ASCII class so CJK punctuation like 。 and ， is stripped the same way
// as '.' and ','.

use std::sync::LazyLock;

use regex::Regex;

/// Matches one or more punctuation or whitespace characters.
/// Shared with the tokenizer, which applies it to single characters.
pub(crate) static PUNCT_OR_SPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\p{P}\s]+").expect("punctuation pattern is valid"));

/// Lowercase the text and collapse punctuation/whitespace runs to single
/// spaces, trimming the ends. Pure; empty input yields an empty string.
pub fn normalize(text: &str) -> String {
    let lower = text.to_lowercase();
    let collapsed = PUNCT_OR_SPACE.replace_all(&lower, " ");
    collapsed.trim().to_string()
}
