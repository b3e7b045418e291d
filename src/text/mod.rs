// Text preparation — normalization and script-aware tokenization.

pub mod normalize;
pub mod tokenize;

pub use normalize::normalize;
pub use tokenize::{tokenize, SegmentStrategy};
