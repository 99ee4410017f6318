//! Main docmatch crate: an in-memory document repository with criteria search.
//!
//! This crate is the primary entry point. It re-exports the core types and the
//! in-memory backend, and offers [`in_memory`] as the shortest way to get a
//! working store.
//!
//! # Features
//!
//! - **Upsert by identifier** - Saving without an id assigns one; saving with an id replaces
//! - **Lookup by identifier** - Unknown ids are `None`, never errors
//! - **Criteria search** - Title prefixes, content substrings, author ids and a creation window
//! - **Match reporting** - Every hit names the criterion term that produced it
//!
//! # Quick Start
//!
//! ```ignore
//! use docmatch::prelude::*;
//!
//! let store = docmatch::in_memory();
//!
//! let saved = store.save(Document {
//!     title: Some("hello world".to_string()),
//!     content: Some("the quick fox".to_string()),
//!     author: Some(Author::new("a1", "Ada")),
//!     ..Default::default()
//! });
//!
//! let request = SearchRequest {
//!     title_prefixes: Some(vec!["he".to_string()]),
//!     contains_contents: Some(vec!["quick".to_string()]),
//!     ..Default::default()
//! };
//!
//! // The document satisfies two criteria, so it is listed twice.
//! assert_eq!(store.search(&request), vec![saved.clone(), saved]);
//! ```
//!
//! # Match semantics
//!
//! Criteria are not intersected and results are not deduplicated. A document is
//! listed once for each criterion term it satisfies; use
//! [`DocumentStore::search_hits`](store::DocumentStore::search_hits) to see which
//! term produced each entry.
//!
//! # Backends
//!
//! - [`memory`] - In-memory storage

pub mod prelude;

pub use docmatch_core::{backend, document, error, id, page, query, store};

// Re-export chrono for timestamp construction
pub use chrono;

/// In-memory storage backend implementations.
pub mod memory {
    pub use docmatch_memory::{InMemoryStore, InMemoryStoreBuilder};
}

/// Creates a document store over a fresh in-memory backend with UUID identifiers.
pub fn in_memory() -> store::DocumentStore<memory::InMemoryStore> {
    store::DocumentStore::new(memory::InMemoryStore::new())
}
