// Scoring — frequency vectors and cosine similarity.

pub mod cosine;
pub mod vector;

pub use cosine::cosine_similarity;
pub use vector::{vectorize, FrequencyVector};
