// Copycheck: cosine-similarity plagiarism detection for text documents.
//
// This is the library root. Each module corresponds to one stage of the
// scoring pipeline: load → normalize → tokenize → vectorize → score → format.

pub mod document;
pub mod pipeline;
pub mod report;
pub mod scoring;
pub mod text;
