//! In-memory document storage backend for docmatch.
//!
//! This crate provides a thread-safe, in-memory implementation of the `StoreBackend`
//! trait together with the criterion evaluator that answers searches.
//!
//! # Features
//!
//! - **Thread-safe access** - Concurrent readers, exclusive writers
//! - **Upsert storage** - Documents are replaced wholesale by identifier
//! - **Criteria search** - Title prefix, content substring, author id and date range checks
//!
//! # Quick Start
//!
//! ```ignore
//! use docmatch::{prelude::*, memory::InMemoryStore};
//!
//! let backend = InMemoryStore::builder().build()?;
//! let store = DocumentStore::new(backend);
//!
//! let saved = store.save(Document {
//!     content: Some("the quick fox".to_string()),
//!     ..Default::default()
//! });
//!
//! let found = store.search(&SearchRequest {
//!     contains_contents: Some(vec!["quick".to_string(), "dog".to_string()]),
//!     ..Default::default()
//! });
//!
//! assert_eq!(found, vec![saved]);
//! ```

#[allow(unused_extern_crates)]
extern crate self as docmatch_memory;

pub mod store;
pub mod evaluator;

pub use store::{InMemoryStore, InMemoryStoreBuilder};
