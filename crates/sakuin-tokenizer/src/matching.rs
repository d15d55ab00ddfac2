//! Scoring, prefix expansion and highlight positions

use crate::normalize::normalize;
use crate::tokenizer::TokenSet;
use serde::{Deserialize, Serialize};

pub const DEFAULT_MIN_PREFIX_LENGTH: usize = 2;

/// Fraction of query tokens present in the document, in `[0, 1]`
pub fn calculate_match_score(query_tokens: &TokenSet, doc_tokens: &TokenSet) -> f64 {
    if query_tokens.is_empty() {
        return 0.0;
    }
    let matched = query_tokens
        .iter()
        .filter(|t| doc_tokens.contains(*t))
        .count();
    matched as f64 / query_tokens.len() as f64
}

/// Increasing-length prefixes of the normalized text
///
/// ```
/// use sakuin_tokenizer::generate_prefix_tokens;
///
/// assert_eq!(generate_prefix_tokens("Rust", 2), vec!["ru", "rus", "rust"]);
/// ```
pub fn generate_prefix_tokens(text: &str, min_prefix_length: usize) -> Vec<String> {
    let normalized = normalize(text);
    let min = min_prefix_length.max(1);

    normalized
        .char_indices()
        .map(|(i, c)| i + c.len_utf8())
        .enumerate()
        .filter(|(n, _)| n + 1 >= min)
        .map(|(_, end)| normalized[..end].to_string())
        .collect()
}

/// A token occurrence inside normalized text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchPosition {
    /// Byte offset of the first character
    pub start: usize,
    /// Byte offset one past the last character
    pub end: usize,
    pub token: String,
}

/// Every occurrence of every token in the normalized text, sorted by start
///
/// Overlapping occurrences are all reported. Offsets index the normalized
/// string, not the raw input.
pub fn find_match_positions<I, S>(text: &str, tokens: I) -> Vec<MatchPosition>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let normalized = normalize(text);
    let mut positions = Vec::new();

    for token in tokens {
        let token = token.as_ref();
        if token.is_empty() {
            continue;
        }
        let mut from = 0;
        while let Some(offset) = normalized[from..].find(token) {
            let start = from + offset;
            positions.push(MatchPosition {
                start,
                end: start + token.len(),
                token: token.to_string(),
            });
            // Step one character so overlapping matches are found
            let step = normalized[start..]
                .chars()
                .next()
                .map_or(1, char::len_utf8);
            from = start + step;
        }
    }

    positions.sort_by(|a, b| a.start.cmp(&b.start).then(a.end.cmp(&b.end)));
    positions
}
