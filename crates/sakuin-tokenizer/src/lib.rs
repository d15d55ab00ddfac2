//! Script-aware tokenizer with CJK bigram decomposition

pub mod charclass;
mod document;
mod matching;
mod normalize;
pub mod stopwords;
mod tokenizer;

pub use document::Document;
pub use matching::{
    DEFAULT_MIN_PREFIX_LENGTH, MatchPosition, calculate_match_score, find_match_positions,
    generate_prefix_tokens,
};
pub use normalize::normalize;
pub use tokenizer::{TokenSet, TokenizeOptions, extract_tokens, tokenize};
