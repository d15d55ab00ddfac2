//! SearchManager: keeps a document store and its index in sync

use crate::config::ManagerConfig;
use crate::error::{Result, StoreError};
use crate::store::{DocumentStore, MemoryStore};
use sakuin_index::{
    BulkAddReport, IndexStats, InvertedIndex, MatchMode, PrefixOptions, SearchHit, SearchOptions,
    SerializedIndex, normalize_prefix, rank_hits,
};
use sakuin_tokenizer::{Document, extract_tokens, tokenize};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::BTreeSet;
use std::path::Path;

/// How a query is answered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SearchStrategy {
    /// Postings lookup in the inverted index
    Index,
    /// Tokenize every stored document per query
    LinearScan,
}

/// Facade over a document store and an inverted index
pub struct SearchManager<S, D = Value> {
    store: S,
    index: InvertedIndex<D>,
    config: ManagerConfig,
    index_fresh: bool,
}

impl<S, D> SearchManager<S, D>
where
    S: DocumentStore<D>,
    D: Document + Clone,
{
    /// Wrap a store, building the index from its contents when enabled
    pub fn new(store: S, config: ManagerConfig) -> Self {
        let mut manager = Self {
            store,
            index: InvertedIndex::with_options(config.tokenize.clone()),
            config,
            index_fresh: false,
        };
        if manager.config.use_index {
            manager.rebuild_index();
        }
        manager
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn index(&self) -> &InvertedIndex<D> {
        &self.index
    }

    pub fn config(&self) -> &ManagerConfig {
        &self.config
    }

    pub fn stats(&self) -> &IndexStats {
        self.index.stats()
    }

    pub fn is_index_fresh(&self) -> bool {
        self.index_fresh
    }

    /// Pick index lookup or linear scan for the next query
    pub fn strategy(&self) -> SearchStrategy {
        if self.config.use_index
            && self.index_fresh
            && self.store.len() > self.config.linear_scan_threshold
        {
            SearchStrategy::Index
        } else {
            SearchStrategy::LinearScan
        }
    }

    /// Store a new document and index it
    pub fn create(&mut self, document: D) -> Result<String> {
        let id = self.store.put(document.clone())?;
        if self.config.use_index {
            self.index.add_document(id.clone(), document, &self.config.fields);
        }
        Ok(id)
    }

    /// Replace a stored document and re-index it
    pub fn update(&mut self, document: D) -> Result<String> {
        let id = self.store.put(document.clone())?;
        if self.config.use_index {
            self.index
                .update_document(id.clone(), document, &self.config.fields);
        }
        Ok(id)
    }

    /// Delete from the store and the index
    pub fn delete(&mut self, id: &str) -> bool {
        let removed = self.store.delete(id);
        self.index.remove_document(id);
        removed
    }

    /// Flag the index as untrustworthy until the next rebuild
    pub fn mark_stale(&mut self) {
        self.index_fresh = false;
    }

    /// Rebuild the index from every stored document
    pub fn rebuild_index(&mut self) -> BulkAddReport {
        self.index.clear();
        let documents: Vec<D> = self.store.get_all().into_iter().cloned().collect();
        let report = self.index.bulk_add(documents, &self.config.fields);
        self.index_fresh = true;
        tracing::info!(documents = report.indexed, "rebuilt search index");
        report
    }

    /// AND search with the configured strategy
    pub fn search(&self, query: &str, options: &SearchOptions) -> Vec<SearchHit<'_, D>> {
        match self.strategy() {
            SearchStrategy::Index => self.index.search(query, options),
            SearchStrategy::LinearScan => self.scan(query, MatchMode::All, options),
        }
    }

    /// OR search with the configured strategy
    pub fn search_or(&self, query: &str, options: &SearchOptions) -> Vec<SearchHit<'_, D>> {
        match self.strategy() {
            SearchStrategy::Index => self.index.search_or(query, options),
            SearchStrategy::LinearScan => self.scan(query, MatchMode::Any, options),
        }
    }

    /// Prefix search with the configured strategy
    pub fn search_prefix(&self, prefix: &str, options: &PrefixOptions) -> Vec<SearchHit<'_, D>> {
        match self.strategy() {
            SearchStrategy::Index => self.index.search_prefix(prefix, options),
            SearchStrategy::LinearScan => self.scan_prefix(prefix, options),
        }
    }

    fn scan(&self, query: &str, mode: MatchMode, options: &SearchOptions) -> Vec<SearchHit<'_, D>> {
        let query_tokens = tokenize(query, &self.config.tokenize);
        if query_tokens.is_empty() {
            return Vec::new();
        }

        let hits = self
            .store
            .get_all()
            .into_iter()
            .filter_map(|document| {
                let id = document.id()?;
                let doc_tokens =
                    extract_tokens(document, &self.config.fields, &self.config.tokenize);
                mode.accepts(&query_tokens, &doc_tokens)
                    .then(|| SearchHit::scored(id, document, &query_tokens, &doc_tokens))
            })
            .collect();

        rank_hits(hits, options)
    }

    fn scan_prefix(&self, prefix: &str, options: &PrefixOptions) -> Vec<SearchHit<'_, D>> {
        let Some(prefix) = normalize_prefix(prefix, options) else {
            return Vec::new();
        };

        self.store
            .get_all()
            .into_iter()
            .filter_map(|document| {
                let id = document.id()?;
                let matched: Vec<String> =
                    extract_tokens(document, &self.config.fields, &self.config.tokenize)
                        .into_iter()
                        .filter(|token| token.starts_with(prefix.as_str()))
                        .collect();
                (!matched.is_empty()).then_some(SearchHit {
                    id,
                    document,
                    score: None,
                    matched_tokens: matched,
                })
            })
            .take(options.limit)
            .collect()
    }
}

impl<S, D> SearchManager<S, D>
where
    S: DocumentStore<D>,
    D: Document + Clone + Serialize,
{
    /// Write the index to `path` as JSON
    pub fn save_index(&self, path: &Path) -> Result<()> {
        crate::io::write_json_atomic(path, &self.index.export())?;
        tracing::info!(path = %path.display(), "saved index cache");
        Ok(())
    }
}

impl<S, D> SearchManager<S, D>
where
    S: DocumentStore<D>,
    D: Document + Clone + DeserializeOwned,
{
    /// Replace the index with a cached one; the current index survives errors
    ///
    /// The cache must describe the documents currently in the store.
    pub fn load_index(&mut self, path: &Path) -> Result<()> {
        let data: SerializedIndex<D> = crate::io::read_json(path)?;

        let cached: BTreeSet<&str> = data.documents.iter().map(|e| e.id.as_str()).collect();
        let stored: BTreeSet<String> = self
            .store
            .get_all()
            .into_iter()
            .filter_map(|document| document.id())
            .collect();
        let missing = stored.iter().filter(|id| !cached.contains(id.as_str())).count();
        let extra = cached.iter().filter(|id| !stored.contains(**id)).count();
        if missing > 0 || extra > 0 {
            tracing::warn!(
                path = %path.display(),
                missing,
                extra,
                "index cache does not match store"
            );
            return Err(StoreError::CacheMismatch { missing, extra });
        }

        self.index.import(data)?;
        self.index_fresh = true;
        tracing::info!(path = %path.display(), "loaded index cache");
        Ok(())
    }
}

impl<D> SearchManager<MemoryStore<D>, D>
where
    D: Document + Clone,
{
    /// Restore a manager from a serialized index alone
    ///
    /// The store is rebuilt from the snapshot's documents and the postings
    /// are imported verbatim.
    pub fn from_snapshot(data: SerializedIndex<D>, config: ManagerConfig) -> Result<Self> {
        let store = MemoryStore::from_entries(data.documents.clone());
        let mut index = InvertedIndex::with_options(config.tokenize.clone());
        index.import(data)?;

        Ok(Self {
            store,
            index,
            index_fresh: config.use_index,
            config,
        })
    }
}

/// Ids of a hit list, in order
pub fn hit_ids<D>(hits: &[SearchHit<'_, D>]) -> Vec<String> {
    hits.iter().map(|hit| hit.id.clone()).collect()
}

/// Ids of a hit list as a set, for order-insensitive comparison
pub fn hit_id_set<D>(hits: &[SearchHit<'_, D>]) -> BTreeSet<String> {
    hits.iter().map(|hit| hit.id.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn notes() -> MemoryStore {
        let (store, _) = MemoryStore::from_documents(vec![
            json!({"id": "1", "title": "プロジェクト管理", "tags": ["work"]}),
            json!({"id": "2", "title": "リスク管理", "content": "risk register"}),
            json!({"id": "3", "title": "Weekly report", "content": "project status"}),
        ]);
        store
    }

    fn scan_config() -> ManagerConfig {
        ManagerConfig {
            use_index: false,
            ..ManagerConfig::new()
        }
    }

    #[test]
    fn test_new_builds_index() {
        let manager = SearchManager::new(notes(), ManagerConfig::new());
        assert_eq!(manager.stats().total_documents, 3);
        assert!(manager.is_index_fresh());
        assert_eq!(manager.strategy(), SearchStrategy::Index);
    }

    #[test]
    fn test_strategy_selection() {
        let manager = SearchManager::new(notes(), scan_config());
        assert_eq!(manager.strategy(), SearchStrategy::LinearScan);
        assert_eq!(manager.stats().total_documents, 0);

        let small = ManagerConfig {
            linear_scan_threshold: 10,
            ..ManagerConfig::new()
        };
        let manager = SearchManager::new(notes(), small);
        assert_eq!(manager.strategy(), SearchStrategy::LinearScan);

        let mut manager = SearchManager::new(notes(), ManagerConfig::new());
        manager.mark_stale();
        assert_eq!(manager.strategy(), SearchStrategy::LinearScan);
        manager.rebuild_index();
        assert_eq!(manager.strategy(), SearchStrategy::Index);
    }

    #[test]
    fn test_crud_keeps_index_in_sync() {
        let mut manager = SearchManager::new(notes(), ManagerConfig::new());
        let options = SearchOptions::new();

        manager
            .create(json!({"id": "4", "title": "検索エンジン"}))
            .unwrap();
        assert_eq!(hit_ids(&manager.search("検索", &options)), vec!["4"]);

        manager
            .update(json!({"id": "4", "title": "索引"}))
            .unwrap();
        assert!(manager.search("検索", &options).is_empty());
        assert_eq!(hit_ids(&manager.search("索引", &options)), vec!["4"]);

        assert!(manager.delete("4"));
        assert!(manager.search("索引", &options).is_empty());
        assert!(!manager.delete("4"));
        assert!(manager.index().check_consistency());
    }

    #[test]
    fn test_create_without_id_is_rejected() {
        let mut manager = SearchManager::new(notes(), ManagerConfig::new());
        assert!(manager.create(json!({"title": "orphan"})).is_err());
        assert_eq!(manager.stats().total_documents, 3);
    }

    #[test]
    fn test_scan_matches_index() {
        let indexed = SearchManager::new(notes(), ManagerConfig::new());
        let scanned = SearchManager::new(notes(), scan_config());
        let options = SearchOptions::new();

        for query in ["管理", "プロジェクト リスク", "project", "risk register", "nothing"] {
            let a: Vec<(String, Option<f64>)> = indexed
                .search_or(query, &options)
                .into_iter()
                .map(|h| (h.id, h.score))
                .collect();
            let b: Vec<(String, Option<f64>)> = scanned
                .search_or(query, &options)
                .into_iter()
                .map(|h| (h.id, h.score))
                .collect();
            assert_eq!(a, b, "query {query}");
            assert_eq!(
                hit_ids(&indexed.search(query, &options)),
                hit_ids(&scanned.search(query, &options))
            );
        }

        let prefix = PrefixOptions::new();
        assert_eq!(
            hit_id_set(&indexed.search_prefix("プロ", &prefix)),
            hit_id_set(&scanned.search_prefix("プロ", &prefix))
        );
    }

    #[test]
    fn test_scan_prefix_limit() {
        let scanned = SearchManager::new(notes(), scan_config());
        let options = PrefixOptions {
            limit: 1,
            ..PrefixOptions::new()
        };
        assert_eq!(scanned.search_prefix("管", &options).len(), 1);
        assert!(scanned.search_prefix("", &options).is_empty());
    }

    #[test]
    fn test_save_and_load_index() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("index.json");

        let manager = SearchManager::new(notes(), ManagerConfig::new());
        manager.save_index(&path).unwrap();

        let mut restored = SearchManager::new(notes(), scan_config());
        restored.load_index(&path).unwrap();
        assert_eq!(restored.stats(), manager.stats());
        assert!(restored.is_index_fresh());
    }

    #[test]
    fn test_load_index_failure_keeps_current() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("index.json");
        std::fs::write(
            &path,
            r#"{
                "index": [{"token": "x", "docIds": ["ghost"]}],
                "documents": [],
                "documentTokens": []
            }"#,
        )
        .unwrap();

        let mut manager = SearchManager::new(notes(), ManagerConfig::new());
        let before = manager.stats().clone();
        assert!(manager.load_index(&path).is_err());
        assert_eq!(manager.stats(), &before);
    }

    #[test]
    fn test_load_index_rejects_cache_from_other_store() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("index.json");

        let (other, _) =
            MemoryStore::from_documents(vec![json!({"id": "ghost", "title": "幽霊 document"})]);
        let other = SearchManager::new(other, ManagerConfig::new());
        other.save_index(&path).unwrap();

        let (store, _) =
            MemoryStore::from_documents(vec![json!({"id": "1", "title": "幽霊 real"})]);
        let mut manager = SearchManager::new(store, ManagerConfig::new());
        let err = manager.load_index(&path).unwrap_err();
        assert!(matches!(err, StoreError::CacheMismatch { missing: 1, extra: 1 }));

        // The index built from the store is kept
        assert_eq!(manager.stats().total_documents, 1);
        assert_eq!(manager.strategy(), SearchStrategy::Index);
        let hits = manager.search("幽霊", &SearchOptions::new());
        assert_eq!(hit_ids(&hits), vec!["1"]);
    }

    #[test]
    fn test_from_snapshot() {
        let manager = SearchManager::new(notes(), ManagerConfig::new());
        let restored =
            SearchManager::from_snapshot(manager.index().export(), ManagerConfig::new()).unwrap();

        assert_eq!(restored.store().len(), 3);
        assert_eq!(restored.strategy(), SearchStrategy::Index);
        assert_eq!(
            hit_ids(&restored.search("管理", &SearchOptions::new())),
            vec!["1", "2"]
        );
    }
}
