//! Word splitting and token extraction

use crate::charclass::{contains_cjk, is_ascii_word, is_cjk, is_delimiter};
use crate::document::Document;
use crate::normalize::normalize;
use crate::stopwords::{is_english_stopword, is_japanese_stopword};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Deduplicated, ordered set of tokens
pub type TokenSet = BTreeSet<String>;

/// Tokenizer behaviour
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TokenizeOptions {
    /// Shortest whole word kept, in characters
    pub min_length: usize,
    /// Longest whole word kept, in characters
    pub max_length: usize,
    /// Emit 2-character windows over CJK words
    pub use_bigram: bool,
    pub remove_stopwords: bool,
    /// Keep words made only of digits
    pub keep_numbers: bool,
}

impl TokenizeOptions {
    pub fn new() -> Self {
        Self {
            min_length: 2,
            max_length: 50,
            use_bigram: true,
            remove_stopwords: true,
            keep_numbers: true,
        }
    }

    fn within_bounds(&self, len: usize) -> bool {
        (self.min_length..=self.max_length).contains(&len)
    }
}

impl Default for TokenizeOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Split normalized text into raw words
fn split_words(normalized: &str) -> impl Iterator<Item = &str> {
    normalized.split(is_delimiter).filter(|w| !w.is_empty())
}

/// Tokenize text into a set of searchable tokens
pub fn tokenize(text: &str, options: &TokenizeOptions) -> TokenSet {
    let mut tokens = TokenSet::new();
    tokenize_into(text, options, &mut tokens);
    tokens
}

fn tokenize_into(text: &str, options: &TokenizeOptions, tokens: &mut TokenSet) {
    let normalized = normalize(text);

    for word in split_words(&normalized) {
        if is_ascii_word(word) {
            push_ascii_word(word, options, tokens);
        } else if contains_cjk(word) {
            push_cjk_word(word, options, tokens);
        }
    }
}

fn push_ascii_word(word: &str, options: &TokenizeOptions, tokens: &mut TokenSet) {
    // ASCII words: byte length equals char length
    if !options.within_bounds(word.len()) {
        return;
    }
    if options.remove_stopwords && is_english_stopword(word) {
        return;
    }
    if !options.keep_numbers && word.bytes().all(|b| b.is_ascii_digit()) {
        return;
    }
    tokens.insert(word.to_string());
}

fn push_cjk_word(word: &str, options: &TokenizeOptions, tokens: &mut TokenSet) {
    if options.remove_stopwords && is_japanese_stopword(word) {
        return;
    }

    let chars: Vec<char> = word.chars().collect();
    if options.within_bounds(chars.len()) {
        tokens.insert(word.to_string());
    }

    if options.use_bigram {
        for pair in chars.windows(2) {
            // Mixed-script pairs like "c言" are noise
            if is_cjk(pair[0]) && is_cjk(pair[1]) {
                tokens.insert(pair.iter().collect());
            }
        }
    }
}

/// Union of the tokens of every value of every named field
pub fn extract_tokens<D, S>(document: &D, fields: &[S], options: &TokenizeOptions) -> TokenSet
where
    D: Document + ?Sized,
    S: AsRef<str>,
{
    let mut tokens = TokenSet::new();
    for field in fields {
        for value in document.field_values(field.as_ref()) {
            tokenize_into(value, options, &mut tokens);
        }
    }
    tokens
}
