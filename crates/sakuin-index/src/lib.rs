//! In-memory inverted index with AND/OR/prefix search

mod error;
mod index;
mod query;
mod snapshot;
mod stats;

pub use error::ImportError;
pub use index::{BulkAddReport, InvertedIndex};
pub use query::{
    MatchMode, PrefixOptions, SearchHit, SearchOptions, SortBy, normalize_prefix, rank_hits,
};
pub use snapshot::{DocumentEntry, DocumentTokensEntry, SerializedIndex, TokenEntry};
pub use stats::IndexStats;
