//! InvertedIndex with incremental add/update/remove

use crate::error::ImportError;
use crate::stats::IndexStats;
use sakuin_tokenizer::{Document, TokenSet, TokenizeOptions, extract_tokens};
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Outcome of a batch insert
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BulkAddReport {
    pub indexed: usize,
    /// Positions in the input of documents skipped for lacking an id
    pub skipped: Vec<usize>,
}

impl BulkAddReport {
    pub fn has_warnings(&self) -> bool {
        !self.skipped.is_empty()
    }
}

/// In-memory inverted index
///
/// Keeps three maps in lockstep: token -> document ids, id -> document and
/// id -> token set. A document id is in a token's postings exactly when the
/// token is in that document's token set.
#[derive(Debug, Clone)]
pub struct InvertedIndex<D = Value> {
    pub(crate) postings: BTreeMap<String, BTreeSet<String>>,
    pub(crate) documents: HashMap<String, D>,
    pub(crate) document_tokens: HashMap<String, TokenSet>,
    pub(crate) stats: IndexStats,
    pub(crate) options: TokenizeOptions,
}

impl<D> InvertedIndex<D> {
    pub fn new() -> Self {
        Self::with_options(TokenizeOptions::new())
    }

    /// Create an index that tokenizes documents and queries with `options`
    pub fn with_options(options: TokenizeOptions) -> Self {
        Self {
            postings: BTreeMap::new(),
            documents: HashMap::new(),
            document_tokens: HashMap::new(),
            stats: IndexStats::default(),
            options,
        }
    }

    pub fn options(&self) -> &TokenizeOptions {
        &self.options
    }

    pub fn stats(&self) -> &IndexStats {
        &self.stats
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.documents.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<&D> {
        self.documents.get(id)
    }

    pub fn document_tokens(&self, id: &str) -> Option<&TokenSet> {
        self.document_tokens.get(id)
    }

    pub fn postings(&self, token: &str) -> Option<&BTreeSet<String>> {
        self.postings.get(token)
    }

    /// Indexed tokens in sorted order
    pub fn vocabulary(&self) -> impl Iterator<Item = &str> {
        self.postings.keys().map(String::as_str)
    }

    /// Remove a document and all of its postings
    ///
    /// Returns `false` when the id is unknown.
    pub fn remove_document(&mut self, id: &str) -> bool {
        let removed = self.remove_entry(id);
        if removed {
            self.refresh_stats();
            tracing::debug!(id, "removed document from index");
        }
        removed
    }

    pub fn clear(&mut self) {
        self.postings.clear();
        self.documents.clear();
        self.document_tokens.clear();
        self.refresh_stats();
    }

    /// True when postings and token sets agree in both directions
    pub fn check_consistency(&self) -> bool {
        verify_links(&self.postings, &self.documents, &self.document_tokens).is_ok()
    }

    fn remove_entry(&mut self, id: &str) -> bool {
        let Some(tokens) = self.document_tokens.remove(id) else {
            return false;
        };
        for token in &tokens {
            if let Some(ids) = self.postings.get_mut(token) {
                ids.remove(id);
                if ids.is_empty() {
                    self.postings.remove(token);
                }
            }
        }
        self.documents.remove(id);
        true
    }

    pub(crate) fn refresh_stats(&mut self) {
        self.stats = IndexStats::compute(&self.postings, &self.document_tokens);
    }
}

impl<D: Document> InvertedIndex<D> {
    /// Index a document under `id`, replacing any previous version
    pub fn add_document<S: AsRef<str>>(
        &mut self,
        id: impl Into<String>,
        document: D,
        fields: &[S],
    ) {
        let id = id.into();
        let token_count = self.insert_entry(id.clone(), document, fields);
        self.refresh_stats();
        tracing::debug!(id = %id, tokens = token_count, "indexed document");
    }

    /// Re-index a document; an unknown id is a fresh add
    pub fn update_document<S: AsRef<str>>(
        &mut self,
        id: impl Into<String>,
        document: D,
        fields: &[S],
    ) {
        self.add_document(id, document, fields);
    }

    /// Index many documents, keyed by their own ids
    ///
    /// Documents without an id are skipped and reported, the rest of the
    /// batch still goes in. Stats are refreshed once at the end.
    pub fn bulk_add<I, S>(&mut self, documents: I, fields: &[S]) -> BulkAddReport
    where
        I: IntoIterator<Item = D>,
        S: AsRef<str>,
    {
        let mut report = BulkAddReport::default();

        for (position, document) in documents.into_iter().enumerate() {
            match document.id() {
                Some(id) => {
                    self.insert_entry(id, document, fields);
                    report.indexed += 1;
                }
                None => {
                    tracing::warn!(position, "skipping document without id");
                    report.skipped.push(position);
                }
            }
        }

        self.refresh_stats();
        tracing::info!(
            indexed = report.indexed,
            skipped = report.skipped.len(),
            "bulk add finished"
        );
        report
    }

    fn insert_entry<S: AsRef<str>>(&mut self, id: String, document: D, fields: &[S]) -> usize {
        self.remove_entry(&id);

        let tokens = extract_tokens(&document, fields, &self.options);
        for token in &tokens {
            self.postings
                .entry(token.clone())
                .or_default()
                .insert(id.clone());
        }

        let count = tokens.len();
        self.documents.insert(id.clone(), document);
        self.document_tokens.insert(id, tokens);
        count
    }
}

impl<D> Default for InvertedIndex<D> {
    fn default() -> Self {
        Self::new()
    }
}

/// Check the bidirectional posting invariant over a set of maps
pub(crate) fn verify_links<D>(
    postings: &BTreeMap<String, BTreeSet<String>>,
    documents: &HashMap<String, D>,
    document_tokens: &HashMap<String, TokenSet>,
) -> Result<(), ImportError> {
    for id in documents.keys() {
        if !document_tokens.contains_key(id) {
            return Err(ImportError::MissingTokenSet { id: id.clone() });
        }
    }

    for (id, tokens) in document_tokens {
        if !documents.contains_key(id) {
            return Err(ImportError::UnknownTokenSetDocument { id: id.clone() });
        }
        for token in tokens {
            let listed = postings.get(token).is_some_and(|ids| ids.contains(id));
            if !listed {
                return Err(ImportError::MissingPosting {
                    id: id.clone(),
                    token: token.clone(),
                });
            }
        }
    }

    for (token, ids) in postings {
        if ids.is_empty() {
            return Err(ImportError::EmptyPostings {
                token: token.clone(),
            });
        }
        for id in ids {
            if !documents.contains_key(id) {
                return Err(ImportError::UnknownPostingDocument {
                    token: token.clone(),
                    id: id.clone(),
                });
            }
            let listed = document_tokens
                .get(id)
                .is_some_and(|tokens| tokens.contains(token));
            if !listed {
                return Err(ImportError::OrphanPosting {
                    token: token.clone(),
                    id: id.clone(),
                });
            }
        }
    }

    Ok(())
}
