//! AND / OR / prefix query evaluation

use crate::index::InvertedIndex;
use sakuin_tokenizer::{Document, TokenSet, calculate_match_score, normalize, tokenize};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use std::ops::Bound;

/// Result ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    /// Highest score first
    Score,
    /// Candidate order (ascending id for index lookups)
    None,
}

/// Options for AND and OR search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchOptions {
    pub limit: usize,
    /// Hits scoring below this are dropped
    pub min_score: f64,
    pub sort_by: SortBy,
    /// When false, hits carry no score or matched tokens
    pub include_score: bool,
}

impl SearchOptions {
    pub fn new() -> Self {
        Self {
            limit: 100,
            min_score: 0.1,
            sort_by: SortBy::Score,
            include_score: true,
        }
    }
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Options for prefix search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PrefixOptions {
    pub limit: usize,
    /// Normalized prefixes shorter than this (in characters) return nothing
    pub min_length: usize,
}

impl PrefixOptions {
    pub fn new() -> Self {
        Self {
            limit: 100,
            min_length: 1,
        }
    }
}

impl Default for PrefixOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Which query tokens a document must contain to be a candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Every query token
    All,
    /// At least one query token
    Any,
}

impl MatchMode {
    pub fn accepts(self, query_tokens: &TokenSet, doc_tokens: &TokenSet) -> bool {
        match self {
            MatchMode::All => query_tokens.iter().all(|t| doc_tokens.contains(t)),
            MatchMode::Any => query_tokens.iter().any(|t| doc_tokens.contains(t)),
        }
    }
}

/// A document returned by a query
#[derive(Debug, Clone)]
pub struct SearchHit<'a, D> {
    pub id: String,
    pub document: &'a D,
    /// Overlap score in `[0, 1]`; `None` for prefix hits and unscored results
    pub score: Option<f64>,
    /// Query tokens (or vocabulary tokens, for prefix hits) the document contains
    pub matched_tokens: Vec<String>,
}

impl<'a, D> SearchHit<'a, D> {
    /// Score a candidate against the query tokens
    pub fn scored(
        id: impl Into<String>,
        document: &'a D,
        query_tokens: &TokenSet,
        doc_tokens: &TokenSet,
    ) -> Self {
        Self {
            id: id.into(),
            document,
            score: Some(calculate_match_score(query_tokens, doc_tokens)),
            matched_tokens: query_tokens
                .iter()
                .filter(|t| doc_tokens.contains(*t))
                .cloned()
                .collect(),
        }
    }
}

/// Apply min score, ordering and limit to scored hits
pub fn rank_hits<'a, D>(
    mut hits: Vec<SearchHit<'a, D>>,
    options: &SearchOptions,
) -> Vec<SearchHit<'a, D>> {
    hits.retain(|hit| hit.score.unwrap_or(0.0) >= options.min_score);

    if options.sort_by == SortBy::Score {
        // Stable: ties keep candidate order
        hits.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
    }
    hits.truncate(options.limit);

    if !options.include_score {
        for hit in &mut hits {
            hit.score = None;
            hit.matched_tokens.clear();
        }
    }
    hits
}

/// Normalize a prefix query, `None` when it is too short to search
pub fn normalize_prefix(prefix: &str, options: &PrefixOptions) -> Option<String> {
    let prefix = normalize(prefix);
    let prefix = prefix.trim();
    if prefix.is_empty() || prefix.chars().count() < options.min_length {
        return None;
    }
    Some(prefix.to_string())
}

impl<D: Document> InvertedIndex<D> {
    /// AND search: documents containing every query token
    pub fn search(&self, query: &str, options: &SearchOptions) -> Vec<SearchHit<'_, D>> {
        self.run_query(query, MatchMode::All, options)
    }

    /// OR search: documents containing at least one query token
    pub fn search_or(&self, query: &str, options: &SearchOptions) -> Vec<SearchHit<'_, D>> {
        self.run_query(query, MatchMode::Any, options)
    }

    /// Documents holding any indexed token that starts with `prefix`
    pub fn search_prefix(&self, prefix: &str, options: &PrefixOptions) -> Vec<SearchHit<'_, D>> {
        let Some(prefix) = normalize_prefix(prefix, options) else {
            return Vec::new();
        };

        let mut hits: Vec<SearchHit<'_, D>> = Vec::new();
        let mut seen: HashSet<&str> = HashSet::new();

        let matching = self
            .postings
            .range::<str, _>((Bound::Included(prefix.as_str()), Bound::Unbounded))
            .take_while(|(token, _)| token.starts_with(prefix.as_str()));

        for (token, ids) in matching {
            for id in ids {
                if seen.insert(id.as_str()) {
                    if hits.len() >= options.limit {
                        continue;
                    }
                    if let Some(document) = self.documents.get(id) {
                        hits.push(SearchHit {
                            id: id.clone(),
                            document,
                            score: None,
                            matched_tokens: vec![token.clone()],
                        });
                    }
                } else if let Some(hit) = hits.iter_mut().find(|h| h.id == *id) {
                    hit.matched_tokens.push(token.clone());
                }
            }
        }

        hits
    }

    fn run_query(
        &self,
        query: &str,
        mode: MatchMode,
        options: &SearchOptions,
    ) -> Vec<SearchHit<'_, D>> {
        let query_tokens = tokenize(query, &self.options);
        if query_tokens.is_empty() {
            return Vec::new();
        }

        let candidates = match mode {
            MatchMode::All => self.intersect(&query_tokens),
            MatchMode::Any => self.union(&query_tokens),
        };

        let hits = candidates
            .into_iter()
            .filter_map(|id| {
                let document = self.documents.get(id)?;
                let doc_tokens = self.document_tokens.get(id)?;
                Some(SearchHit::scored(id, document, &query_tokens, doc_tokens))
            })
            .collect();

        rank_hits(hits, options)
    }

    /// Ids present in every query token's postings, ascending
    fn intersect(&self, query_tokens: &TokenSet) -> Vec<&str> {
        let mut lists: Vec<&BTreeSet<String>> = Vec::with_capacity(query_tokens.len());
        for token in query_tokens {
            match self.postings.get(token) {
                Some(ids) => lists.push(ids),
                // An unindexed token means no document has all of them
                None => return Vec::new(),
            }
        }
        lists.sort_by_key(|ids| ids.len());

        let Some((smallest, rest)) = lists.split_first() else {
            return Vec::new();
        };
        smallest
            .iter()
            .filter(|id| rest.iter().all(|ids| ids.contains(*id)))
            .map(String::as_str)
            .collect()
    }

    /// Ids present in any query token's postings, ascending
    fn union(&self, query_tokens: &TokenSet) -> Vec<&str> {
        let mut ids: BTreeSet<&str> = BTreeSet::new();
        for token in query_tokens {
            if let Some(postings) = self.postings.get(token) {
                ids.extend(postings.iter().map(String::as_str));
            }
        }
        ids.into_iter().collect()
    }
}
