//! Configuration for the search manager

use sakuin_index::{PrefixOptions, SearchOptions};
use sakuin_tokenizer::TokenizeOptions;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Search manager configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ManagerConfig {
    /// Document fields that are tokenized
    pub fields: Vec<String>,

    /// Tokenizer settings shared by indexing and queries
    pub tokenize: TokenizeOptions,

    /// Defaults for AND / OR search
    pub search: SearchOptions,

    /// Defaults for prefix search
    pub prefix: PrefixOptions,

    /// Maintain the inverted index (false = always scan)
    pub use_index: bool,

    /// Stores this small are scanned even when the index is fresh
    pub linear_scan_threshold: usize,
}

impl ManagerConfig {
    pub fn new() -> Self {
        Self {
            fields: vec![
                "title".to_string(),
                "content".to_string(),
                "tags".to_string(),
            ],
            tokenize: TokenizeOptions::new(),
            search: SearchOptions::new(),
            prefix: PrefixOptions::new(),
            use_index: true,
            linear_scan_threshold: 0,
        }
    }

    /// Load from a JSON file; missing keys take their defaults
    pub fn load(path: &Path) -> crate::Result<Self> {
        crate::io::read_json(path)
    }
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self::new()
    }
}
