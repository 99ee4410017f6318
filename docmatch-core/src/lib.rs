//! Core types for an in-memory document repository with criteria search.
//!
//! This crate is the core of the docmatch project and provides:
//!
//! - **Records** ([`document`]) - `Document` and `Author`, plus JSON conversion
//! - **Search criteria** ([`query`]) - `SearchRequest`, match reporting and the criterion visitor
//! - **Store backend abstraction** ([`backend`]) - Traits for implementing storage backends
//! - **Document store** ([`store`]) - The repository facade: save, find by id, search
//! - **Identifier generation** ([`id`]) - Pluggable ids for documents saved without one
//! - **Pagination** ([`page`]) - Pages over search results
//! - **Error handling** ([`error`]) - Error types and result types
//!
//! # Example
//!
//! ```ignore
//! use docmatch::{prelude::*, memory::InMemoryStore};
//!
//! let store = DocumentStore::new(InMemoryStore::new());
//! store.save(Document {
//!     title: Some("hello world".to_string()),
//!     ..Default::default()
//! });
//!
//! let matches = store.search(&SearchRequest {
//!     title_prefixes: Some(vec!["he".to_string(), "hel".to_string()]),
//!     ..Default::default()
//! });
//!
//! // One entry per matching prefix.
//! assert_eq!(matches.len(), 2);
//! ```

#[allow(unused_extern_crates)]
extern crate self as docmatch_core;

pub mod backend;
pub mod document;
pub mod error;
pub mod id;
pub mod page;
pub mod query;
pub mod store;
