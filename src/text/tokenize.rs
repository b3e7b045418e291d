// Script-aware tokenization.
//
// Two fixed strategies, selected by content: any character in the CJK
// Unified Ideographs range flips the whole text to character-wise mode.
// Character-wise mode is a deliberate simplification, not a word
// segmenter — multi-character CJK words become independent single-
// character tokens, and Latin substrings inside mixed text are split per
// character as well. Scores for CJK text depend on this exact behavior.

use super::normalize::PUNCT_OR_SPACE;

/// Inclusive bounds of the CJK Unified Ideographs block this tool
/// recognizes. Extension blocks, kana, and hangul sit outside the range
/// on purpose — they fall through to whitespace segmentation.
const CJK_START: char = '\u{4e00}';
const CJK_END: char = '\u{9fa5}';

/// How normalized text gets split into tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentStrategy {
    /// Every non-whitespace, non-punctuation character is its own token.
    CjkChars,
    /// Split on whitespace runs; empty tokens are discarded.
    Whitespace,
}

impl SegmentStrategy {
    /// Pick the strategy for a piece of text: character-wise if any CJK
    /// ideograph is present, whitespace otherwise.
    pub fn select(text: &str) -> Self {
        if text.chars().any(is_cjk) {
            SegmentStrategy::CjkChars
        } else {
            SegmentStrategy::Whitespace
        }
    }
}

fn is_cjk(c: char) -> bool {
    (CJK_START..=CJK_END).contains(&c)
}

/// Single-character check against the shared punctuation pattern. The
/// normalizer already strips punctuation, but text handed straight to the
/// tokenizer still gets filtered correctly.
fn is_punct_or_space(c: char) -> bool {
    let mut buf = [0u8; 4];
    PUNCT_OR_SPACE.is_match(c.encode_utf8(&mut buf))
}

/// Split text into tokens using the strategy its content calls for.
/// Returns a possibly-empty sequence; never fails.
pub fn tokenize(text: &str) -> Vec<String> {
    match SegmentStrategy::select(text) {
        SegmentStrategy::CjkChars => text
            .chars()
            .filter(|&c| !c.is_whitespace() && !is_punct_or_space(c))
            .map(String::from)
            .collect(),
        SegmentStrategy::Whitespace => text.split_whitespace().map(String::from).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_split() {
        assert_eq!(tokenize("hello world again"), ["hello", "world", "again"]);
    }

    #[test]
    fn test_whitespace_runs_produce_no_empties() {
        assert_eq!(tokenize("a   b\t\nc"), ["a", "b", "c"]);
    }

    #[test]
    fn test_cjk_splits_per_character() {
        assert_eq!(tokenize("我爱中国"), ["我", "爱", "中", "国"]);
    }

    #[test]
    fn test_cjk_ignores_whitespace() {
        // Pre-segmented CJK tokenizes the same as the unsegmented string
        assert_eq!(tokenize("我 爱 中 国"), tokenize("我爱中国"));
    }

    #[test]
    fn test_mixed_text_goes_character_wise() {
        // One CJK character switches the whole text to per-character mode,
        // splitting the Latin word too. Intentional, not a bug.
        assert_eq!(tokenize("我ab"), ["我", "a", "b"]);
    }

    #[test]
    fn test_cjk_mode_filters_punctuation() {
        assert_eq!(tokenize("我，爱。"), ["我", "爱"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   ").is_empty());
    }

    #[test]
    fn test_strategy_selection() {
        assert_eq!(SegmentStrategy::select("hello"), SegmentStrategy::Whitespace);
        assert_eq!(SegmentStrategy::select("hello 中"), SegmentStrategy::CjkChars);
        assert_eq!(SegmentStrategy::select(""), SegmentStrategy::Whitespace);
    }

    #[test]
    fn test_range_boundaries() {
        // U+4E00 and U+9FA5 are in range; U+9FA6 and kana are not
        assert_eq!(SegmentStrategy::select("\u{4e00}"), SegmentStrategy::CjkChars);
        assert_eq!(SegmentStrategy::select("\u{9fa5}"), SegmentStrategy::CjkChars);
        assert_eq!(SegmentStrategy::select("\u{9fa6}"), SegmentStrategy::Whitespace);
        assert_eq!(SegmentStrategy::select("ひらがな"), SegmentStrategy::Whitespace);
    }
}
