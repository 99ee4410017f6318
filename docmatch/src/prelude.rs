//! Convenient re-exports of commonly used types from docmatch.
//!
//! ```ignore
//! use docmatch::prelude::*;
//! ```
//!
//! This provides access to:
//! - Records and JSON conversion
//! - The store facade, backends and builders
//! - Search requests, criteria and hits
//! - Pagination, identifier generation and error types

pub use docmatch_core::{
    store::DocumentStore,
    document::{Author, Document, JsonRecord},
    backend::{StoreBackend, StoreBackendBuilder},
    query::{Criterion, CriterionVisitor, SearchHit, SearchRequest},
    page::{Page, PaginationParams},
    id::{IdGenerator, UuidGenerator},
    error::{DocumentStoreError, DocumentStoreResult},
};
