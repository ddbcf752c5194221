//! Word tokenizer shared by both scoring modes.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\w+\b").expect("valid word pattern"));

/// Tokenizes free text into the set of normalized word tokens.
///
/// The input is lower-cased first, then split on word boundaries. Tokens are
/// runs of word characters; punctuation never survives. No stemming and no
/// stop-word removal, so the output is deterministic and locale-independent.
/// Empty or whitespace-only input yields an empty set.
pub fn tokenize(text: &str) -> HashSet<String> {
    let lowered = text.to_lowercase();
    WORD_RE
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}
