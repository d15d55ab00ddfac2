//! Document store boundary and an in-memory implementation

use crate::error::{Result, StoreError};
use sakuin_index::DocumentEntry;
use sakuin_tokenizer::Document;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;

/// Source of truth for documents
///
/// The index never calls into a store; the search manager keeps the two in
/// sync after every mutation.
pub trait DocumentStore<D> {
    /// Every stored document
    fn get_all(&self) -> Vec<&D>;

    fn get(&self, id: &str) -> Option<&D>;

    /// Insert or replace a document, returning its id
    fn put(&mut self, document: D) -> Result<String>;

    /// Returns `false` when the id was not stored
    fn delete(&mut self, id: &str) -> bool;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Documents held in a map keyed by id, iterated in id order
#[derive(Debug, Clone)]
pub struct MemoryStore<D = Value> {
    documents: BTreeMap<String, D>,
}

impl<D: Document> MemoryStore<D> {
    pub fn new() -> Self {
        Self {
            documents: BTreeMap::new(),
        }
    }

    /// Build from documents, returning the positions of those without an id
    pub fn from_documents(documents: impl IntoIterator<Item = D>) -> (Self, Vec<usize>) {
        let mut store = Self::new();
        let mut skipped = Vec::new();

        for (position, document) in documents.into_iter().enumerate() {
            match document.id() {
                Some(id) => {
                    store.documents.insert(id, document);
                }
                None => {
                    tracing::warn!(position, "skipping stored document without id");
                    skipped.push(position);
                }
            }
        }

        (store, skipped)
    }

    /// Build from the document records of a serialized index
    pub fn from_entries(entries: impl IntoIterator<Item = DocumentEntry<D>>) -> Self {
        Self {
            documents: entries
                .into_iter()
                .map(|entry| (entry.id, entry.document))
                .collect(),
        }
    }
}

impl<D: Document + DeserializeOwned> MemoryStore<D> {
    /// Load a JSON array file, or a JSONL file when the extension is `.jsonl`
    pub fn load_json(path: &Path) -> Result<(Self, Vec<usize>)> {
        let documents: Vec<D> = if path.extension().and_then(|e| e.to_str()) == Some("jsonl") {
            crate::io::read_jsonl(path)?
        } else {
            crate::io::read_json(path)?
        };
        tracing::info!(path = %path.display(), count = documents.len(), "loaded documents");
        Ok(Self::from_documents(documents))
    }
}

impl<D: Document> DocumentStore<D> for MemoryStore<D> {
    fn get_all(&self) -> Vec<&D> {
        self.documents.values().collect()
    }

    fn get(&self, id: &str) -> Option<&D> {
        self.documents.get(id)
    }

    fn put(&mut self, document: D) -> Result<String> {
        let id = document.id().ok_or(StoreError::MissingId)?;
        self.documents.insert(id.clone(), document);
        Ok(id)
    }

    fn delete(&mut self, id: &str) -> bool {
        self.documents.remove(id).is_some()
    }

    fn len(&self) -> usize {
        self.documents.len()
    }
}

impl<D: Document> Default for MemoryStore<D> {
    fn default() -> Self {
        Self::new()
    }
}
