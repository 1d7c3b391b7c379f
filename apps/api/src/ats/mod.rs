// ATS tailoring: lexical CV-vs-JD scoring and keyword-annotated CV previews.
// Pure functions only; handlers.rs is the HTTP wrapper.

pub mod annotator;
pub mod handlers;
pub mod match_scoring;
