//! Export and import of the full index state

use crate::error::ImportError;
use crate::index::{InvertedIndex, verify_links};
use crate::stats::IndexStats;
use chrono::{DateTime, Utc};
use sakuin_tokenizer::TokenSet;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenEntry {
    pub token: String,
    pub doc_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentEntry<D> {
    pub id: String,
    pub document: D,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentTokensEntry {
    pub id: String,
    pub tokens: Vec<String>,
}

/// Flattened, JSON-compatible form of an index
///
/// Unknown fields are ignored when reading, so newer writers stay readable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SerializedIndex<D> {
    pub index: Vec<TokenEntry>,
    pub documents: Vec<DocumentEntry<D>>,
    pub document_tokens: Vec<DocumentTokensEntry>,
    #[serde(default)]
    pub stats: IndexStats,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exported_at: Option<DateTime<Utc>>,
}

impl<D: Clone> InvertedIndex<D> {
    /// Flatten the index into plain records, sorted by token and id
    pub fn export(&self) -> SerializedIndex<D> {
        let index = self
            .postings
            .iter()
            .map(|(token, ids)| TokenEntry {
                token: token.clone(),
                doc_ids: ids.iter().cloned().collect(),
            })
            .collect();

        let mut documents: Vec<DocumentEntry<D>> = self
            .documents
            .iter()
            .map(|(id, document)| DocumentEntry {
                id: id.clone(),
                document: document.clone(),
            })
            .collect();
        documents.sort_by(|a, b| a.id.cmp(&b.id));

        let mut document_tokens: Vec<DocumentTokensEntry> = self
            .document_tokens
            .iter()
            .map(|(id, tokens)| DocumentTokensEntry {
                id: id.clone(),
                tokens: tokens.iter().cloned().collect(),
            })
            .collect();
        document_tokens.sort_by(|a, b| a.id.cmp(&b.id));

        tracing::info!(
            documents = self.documents.len(),
            tokens = self.postings.len(),
            "exported index"
        );

        SerializedIndex {
            index,
            documents,
            document_tokens,
            stats: self.stats.clone(),
            exported_at: Some(Utc::now()),
        }
    }
}

impl<D> InvertedIndex<D> {
    /// Replace the index contents with a serialized index
    ///
    /// Documents are taken verbatim, nothing is re-tokenized. The data is
    /// validated in full first; on error the current contents are kept.
    /// Stats are recomputed rather than read from `data.stats`.
    pub fn import(&mut self, data: SerializedIndex<D>) -> Result<(), ImportError> {
        let mut postings: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for entry in data.index {
            if postings.contains_key(&entry.token) {
                return Err(ImportError::DuplicateToken { token: entry.token });
            }
            let ids: BTreeSet<String> = entry.doc_ids.into_iter().collect();
            postings.insert(entry.token, ids);
        }

        let mut documents: HashMap<String, D> = HashMap::with_capacity(data.documents.len());
        for entry in data.documents {
            if documents.contains_key(&entry.id) {
                return Err(ImportError::DuplicateDocument { id: entry.id });
            }
            documents.insert(entry.id, entry.document);
        }

        let mut document_tokens: HashMap<String, TokenSet> =
            HashMap::with_capacity(data.document_tokens.len());
        for entry in data.document_tokens {
            if document_tokens.contains_key(&entry.id) {
                return Err(ImportError::DuplicateTokenSet { id: entry.id });
            }
            document_tokens.insert(entry.id, entry.tokens.into_iter().collect());
        }

        verify_links(&postings, &documents, &document_tokens)?;

        self.postings = postings;
        self.documents = documents;
        self.document_tokens = document_tokens;
        self.refresh_stats();

        if self.stats != data.stats {
            tracing::debug!("imported stats differ from recomputed stats");
        }
        tracing::info!(
            documents = self.documents.len(),
            tokens = self.postings.len(),
            "imported index"
        );
        Ok(())
    }
}
