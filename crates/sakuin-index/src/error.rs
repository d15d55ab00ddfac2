//! Error types for index import

use thiserror::Error;

/// Reasons a serialized index is rejected
///
/// Import validates everything before touching the live index, so any of
/// these leaves the previous state intact.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ImportError {
    #[error("duplicate document id: {id}")]
    DuplicateDocument { id: String },

    #[error("duplicate token entry: {token}")]
    DuplicateToken { token: String },

    #[error("duplicate token set for document: {id}")]
    DuplicateTokenSet { id: String },

    #[error("token '{token}' has an empty posting list")]
    EmptyPostings { token: String },

    #[error("token '{token}' references unknown document '{id}'")]
    UnknownPostingDocument { token: String, id: String },

    #[error("token set references unknown document '{id}'")]
    UnknownTokenSetDocument { id: String },

    #[error("document '{id}' has no token set")]
    MissingTokenSet { id: String },

    #[error("document '{id}' lists token '{token}' but its posting list does not contain it")]
    MissingPosting { id: String, token: String },

    #[error("posting for token '{token}' lists document '{id}' but its token set does not")]
    OrphanPosting { token: String, id: String },
}
