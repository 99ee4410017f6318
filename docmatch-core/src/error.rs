//! Error types and result types for document store operations.
//!
//! Storing, looking up and searching documents never fail. Errors only come
//! from the edges around them: JSON conversion, pagination parameters and
//! backend construction. Use [`DocumentStoreResult<T>`] as the return type for
//! those fallible operations.

use serde_json::Error as SerdeJsonError;
use thiserror::Error;

/// Represents all possible errors raised around a document store.
#[derive(Error, Debug)]
pub enum DocumentStoreError {
    /// Serialization/deserialization error when converting records to or from JSON.
    #[error("Serialization error: {0}")]
    Serialization(String),
    /// Error during backend initialization.
    #[error("Initialization error: {0}")]
    Initialization(String),
    /// Pagination parameters that cannot address a page (zero page or page size).
    #[error("Invalid pagination: {0}")]
    InvalidPagination(String),
}

/// A specialized `Result` type for document store operations.
///
/// This type alias is used throughout the crate to indicate operations that may fail
/// with a [`DocumentStoreError`].
pub type DocumentStoreResult<T> = Result<T, DocumentStoreError>;

impl From<SerdeJsonError> for DocumentStoreError {
    fn from(err: SerdeJsonError) -> Self {
        DocumentStoreError::Serialization(err.to_string())
    }
}
