// Keyword-match engine: tokenization, ATS scoring, role-based keyword
// suggestions, and optional score enhancement with a deterministic fallback.

pub mod enhance;
pub mod handlers;
pub mod scorer;
pub mod suggest;
pub mod tokenizer;
