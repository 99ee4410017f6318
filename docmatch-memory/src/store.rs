//! In-memory storage implementation for document stores.
//!
//! Documents are kept in a `HashMap` keyed by identifier, behind a read-write
//! lock.

use std::{collections::HashMap, sync::Arc};
use parking_lot::RwLock;
use tracing::debug;

use docmatch_core::{
    backend::{StoreBackend, StoreBackendBuilder},
    document::Document,
    error::DocumentStoreResult,
    query::{SearchHit, SearchRequest},
};

use crate::evaluator::DocumentEvaluator;

type DocumentMap = HashMap<String, Document>;


/// Thread-safe in-memory document storage backend.
///
/// # Thread Safety
///
/// `InMemoryStore` is cloneable and uses an `Arc`-wrapped internal state, so
/// clones share the same documents. Writers take the lock exclusively; searches
/// and lookups share it, so a search always sees a consistent snapshot.
///
/// # Performance
///
/// Searches scan every stored document; there is no indexing.
///
/// # Example
///
/// ```ignore
/// use docmatch::{backend::StoreBackend, document::Document, memory::InMemoryStore};
///
/// let store = InMemoryStore::new();
/// store.put_document("d1".to_string(), Document::default().with_id("d1"));
///
/// assert_eq!(store.document_count(), 1);
/// ```
#[derive(Default, Clone, Debug)]
pub struct InMemoryStore {
    /// document id -> document
    documents: Arc<RwLock<DocumentMap>>,
}

impl InMemoryStore {
    /// Creates a new empty in-memory document store.
    pub fn new() -> Self {
        Self {
            documents: Arc::new(RwLock::new(DocumentMap::new())),
        }
    }

    /// Creates a builder for constructing an `InMemoryStore` with custom options.
    ///
    /// # Example
    ///
    /// ```ignore
    /// use docmatch::{backend::StoreBackendBuilder, memory::InMemoryStore};
    ///
    /// let store = InMemoryStore::builder().with_capacity(1_000).build()?;
    /// ```
    pub fn builder() -> InMemoryStoreBuilder {
        InMemoryStoreBuilder::default()
    }

    fn with_capacity(capacity: usize) -> Self {
        Self {
            documents: Arc::new(RwLock::new(DocumentMap::with_capacity(capacity))),
        }
    }
}


impl StoreBackend for InMemoryStore {
    fn put_document(&self, id: String, document: Document) {
        self.documents
            .write()
            .insert(id, document);
    }

    fn get_document(&self, id: &str) -> Option<Document> {
        self.documents
            .read()
            .get(id)
            .cloned()
    }

    fn document_count(&self) -> usize {
        self.documents.read().len()
    }

    fn search_hits(&self, request: &SearchRequest) -> Vec<SearchHit> {
        let documents = self.documents.read();

        DocumentEvaluator::search_documents(documents.values(), request)
    }
}


/// Builder for constructing [`InMemoryStore`] instances.
#[derive(Default)]
pub struct InMemoryStoreBuilder {
    capacity: Option<usize>,
}

impl InMemoryStoreBuilder {
    /// Pre-sizes the document map for `capacity` documents.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = Some(capacity);
        self
    }
}

impl StoreBackendBuilder for InMemoryStoreBuilder {
    type Backend = InMemoryStore;

    /// Builds and returns a new [`InMemoryStore`] instance.
    ///
    /// This always succeeds.
    fn build(self) -> DocumentStoreResult<Self::Backend> {
        debug!(capacity = ?self.capacity, "building in-memory document store");

        Ok(match self.capacity {
            Some(capacity) => InMemoryStore::with_capacity(capacity),
            None => InMemoryStore::new(),
        })
    }
}
