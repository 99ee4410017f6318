//! Main document store interface.
//!
//! [`DocumentStore`] wraps a [`StoreBackend`] and exposes the repository
//! operations: upsert, lookup by identifier and criteria search. It assigns
//! identifiers to documents saved without one.
//!
//! # Example
//!
//! ```ignore
//! use docmatch::{prelude::*, memory::InMemoryStore};
//!
//! let store = DocumentStore::new(InMemoryStore::new());
//! let saved = store.save(Document {
//!     title: Some("hello world".to_string()),
//!     ..Default::default()
//! });
//!
//! assert_eq!(store.find_by_id(saved.id().unwrap()), Some(saved));
//! ```

use std::fmt;

use tracing::debug;

use crate::{
    backend::StoreBackend,
    document::Document,
    id::{IdGenerator, UuidGenerator},
    page::{Page, PaginationParams},
    query::{SearchHit, SearchRequest},
};

/// A document repository bound to a specific backend implementation.
///
/// # Type Parameters
///
/// * `B` - The backend implementation type
pub struct DocumentStore<B: StoreBackend> {
    backend: B,
    id_generator: Box<dyn IdGenerator>,
}

impl<B: StoreBackend> DocumentStore<B> {
    /// Creates a store over `backend` that assigns UUID v4 identifiers.
    pub fn new(backend: B) -> Self {
        Self::with_id_generator(backend, UuidGenerator)
    }

    /// Creates a store over `backend` that assigns identifiers from `id_generator`.
    pub fn with_id_generator(backend: B, id_generator: impl IdGenerator + 'static) -> Self {
        Self {
            backend,
            id_generator: Box::new(id_generator),
        }
    }

    /// Returns the underlying backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Upserts a document and returns it as stored.
    ///
    /// A document with a non-empty `id` replaces whatever is stored under that id.
    /// Otherwise a fresh identifier is generated and assigned; every other field,
    /// `created` included, is stored untouched.
    pub fn save(&self, document: Document) -> Document {
        let (id, document) = match document.id().map(str::to_owned) {
            Some(id) => {
                debug!(id = %id, "saving document under explicit id");
                (id, document)
            }
            None => {
                let id = self.id_generator.generate();
                debug!(id = %id, "saving document under generated id");
                (id.clone(), document.with_id(id))
            }
        };

        self.backend.put_document(id, document.clone());

        document
    }

    /// Looks up a document by identifier. An unknown id yields `None`.
    pub fn find_by_id(&self, id: &str) -> Option<Document> {
        self.backend.get_document(id)
    }

    /// Returns the number of stored documents.
    pub fn document_count(&self) -> usize {
        self.backend.document_count()
    }

    /// Returns every (criterion, document) match for `request`.
    ///
    /// See [`SearchRequest`] for how criteria combine. A request with no active
    /// criterion matches nothing.
    pub fn search_hits(&self, request: &SearchRequest) -> Vec<SearchHit> {
        if request.is_empty() {
            debug!("search request has no active criteria");
            return Vec::new();
        }

        let hits = self.backend.search_hits(request);

        debug!(
            criteria = request.active_criteria(),
            hits = hits.len(),
            "evaluated search request"
        );

        hits
    }

    /// Returns the documents matching `request`, one entry per match.
    ///
    /// A document appears once for every criterion term it satisfies, so the
    /// result may contain the same document several times.
    pub fn search(&self, request: &SearchRequest) -> Vec<Document> {
        self.search_hits(request)
            .into_iter()
            .map(SearchHit::into_document)
            .collect()
    }

    /// Returns one page of [`search`](Self::search) results, duplicates included.
    pub fn search_page(
        &self,
        request: &SearchRequest,
        pagination: &PaginationParams,
    ) -> Page<Document> {
        pagination.paginate(self.search(request))
    }
}

impl<B: StoreBackend> fmt::Debug for DocumentStore<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocumentStore")
            .field("backend", &self.backend)
            .finish_non_exhaustive()
    }
}
