//! Derived index statistics

use sakuin_tokenizer::TokenSet;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Per-posting overhead assumed by the size estimate
const POSTING_OVERHEAD_BYTES: usize = 8;

/// Operational summary of an index
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IndexStats {
    pub total_documents: usize,
    /// Distinct tokens in the vocabulary
    pub total_tokens: usize,
    pub average_tokens_per_document: f64,
    /// Rough memory estimate, not an exact byte count
    pub index_size_bytes: usize,
}

impl IndexStats {
    pub(crate) fn compute(
        postings: &BTreeMap<String, BTreeSet<String>>,
        document_tokens: &HashMap<String, TokenSet>,
    ) -> Self {
        let total_documents = document_tokens.len();
        let token_refs: usize = document_tokens.values().map(BTreeSet::len).sum();

        let average_tokens_per_document = if total_documents == 0 {
            0.0
        } else {
            token_refs as f64 / total_documents as f64
        };

        let index_size_bytes = postings
            .iter()
            .map(|(token, ids)| {
                token.len() * 2
                    + ids
                        .iter()
                        .map(|id| id.len() * 2 + POSTING_OVERHEAD_BYTES)
                        .sum::<usize>()
            })
            .sum();

        Self {
            total_documents,
            total_tokens: postings.len(),
            average_tokens_per_document,
            index_size_bytes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_stats() {
        let stats = IndexStats::compute(&BTreeMap::new(), &HashMap::new());
        assert_eq!(stats, IndexStats::default());
    }

    #[test]
    fn test_stats_compute() {
        let mut postings = BTreeMap::new();
        postings.insert(
            "rust".to_string(),
            ["a".to_string(), "b".to_string()].into_iter().collect(),
        );
        postings.insert("go".to_string(), ["a".to_string()].into_iter().collect());

        let mut document_tokens = HashMap::new();
        document_tokens.insert(
            "a".to_string(),
            ["rust".to_string(), "go".to_string()].into_iter().collect(),
        );
        document_tokens.insert("b".to_string(), ["rust".to_string()].into_iter().collect());

        let stats = IndexStats::compute(&postings, &document_tokens);
        assert_eq!(stats.total_documents, 2);
        assert_eq!(stats.total_tokens, 2);
        assert!((stats.average_tokens_per_document - 1.5).abs() < 1e-9);
        // rust: 8 + 2 * (2 + 8), go: 4 + (2 + 8)
        assert_eq!(stats.index_size_bytes, 28 + 14);
    }

    #[test]
    fn test_stats_json_shape() {
        let json = serde_json::to_value(IndexStats::default()).unwrap();
        assert!(json.get("totalDocuments").is_some());
        assert!(json.get("averageTokensPerDocument").is_some());
        assert!(json.get("indexSizeBytes").is_some());
    }
}
