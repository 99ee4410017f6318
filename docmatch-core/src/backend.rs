//! Storage backend abstraction for the document store.
//!
//! This module defines the traits that separate the [`DocumentStore`] facade from
//! the container that actually holds documents and evaluates searches against them.
//!
//! # Overview
//!
//! The [`StoreBackend`] trait is a synchronous interface. Backends receive documents
//! whose identifier has already been resolved; identifier assignment is the facade's
//! job. Implementations must be `Send + Sync`; how they achieve that (locks,
//! lock-free maps) is up to them.
//!
//! # Traits
//!
//! - [`StoreBackend`]: The core trait for storage backends
//! - [`StoreBackendBuilder`]: Factory trait for creating backend instances
//!
//! [`DocumentStore`]: crate::store::DocumentStore

use std::fmt::Debug;

use crate::{
    document::Document,
    error::DocumentStoreResult,
    query::{SearchHit, SearchRequest},
};

/// Abstract interface for document storage backends.
///
/// None of these operations can fail. Absence is reported with `Option`, and a
/// search that matches nothing returns an empty vector.
pub trait StoreBackend: Send + Sync + Debug {
    /// Stores `document` under `id`, replacing any document already stored there.
    ///
    /// The document is stored as given, with no field-level merge.
    fn put_document(&self, id: String, document: Document);

    /// Returns a copy of the document stored under `id`, if any.
    fn get_document(&self, id: &str) -> Option<Document>;

    /// Returns the number of stored documents.
    fn document_count(&self) -> usize;

    /// Evaluates `request` against every stored document.
    ///
    /// Each document contributes one [`SearchHit`] per matching criterion term. Hits
    /// for one document are contiguous and ordered title prefixes, content
    /// substrings, author ids, date range; documents follow the backend's
    /// iteration order.
    fn search_hits(&self, request: &SearchRequest) -> Vec<SearchHit>;
}

impl<B> StoreBackend for &B
where
    B: StoreBackend + ?Sized,
{
    fn put_document(&self, id: String, document: Document) {
        (**self).put_document(id, document)
    }

    fn get_document(&self, id: &str) -> Option<Document> {
        (**self).get_document(id)
    }

    fn document_count(&self) -> usize {
        (**self).document_count()
    }

    fn search_hits(&self, request: &SearchRequest) -> Vec<SearchHit> {
        (**self).search_hits(request)
    }
}

impl<B> StoreBackend for Box<B>
where
    B: StoreBackend + ?Sized,
{
    fn put_document(&self, id: String, document: Document) {
        (**self).put_document(id, document)
    }

    fn get_document(&self, id: &str) -> Option<Document> {
        (**self).get_document(id)
    }

    fn document_count(&self) -> usize {
        (**self).document_count()
    }

    fn search_hits(&self, request: &SearchRequest) -> Vec<SearchHit> {
        (**self).search_hits(request)
    }
}

/// Factory for backend instances.
pub trait StoreBackendBuilder {
    type Backend: StoreBackend;

    /// Builds the backend.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentStoreError::Initialization`](crate::error::DocumentStoreError::Initialization)
    /// if the backend cannot be set up.
    fn build(self) -> DocumentStoreResult<Self::Backend>;
}
