//! Core record types for documents and their authors.
//!
//! Every field is optional on input. Absent fields are omitted from JSON output
//! and default to absent when reading JSON back in.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::{Value, from_value, to_value};

use crate::error::DocumentStoreResult;

/// Identity reference embedded in a [`Document`].
///
/// Authors have no lifecycle of their own. Two authors are equal when their
/// fields are equal, regardless of where they were constructed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Author {
    /// Opaque author identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Author {
    /// Creates an author with both an identifier and a name.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            name: Some(name.into()),
        }
    }
}

/// The primary stored record.
///
/// A document's `id` is optional until it is saved; the store assigns one when it
/// is missing or empty. After that the identifier never changes, and saving another
/// document under the same identifier replaces this one entirely.
///
/// # Example
///
/// ```ignore
/// use docmatch::prelude::*;
///
/// let doc = Document {
///     title: Some("hello world".to_string()),
///     author: Some(Author::new("a1", "Ada")),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Document {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<Author>,
    /// Creation timestamp. The store passes it through untouched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
}

impl Document {
    /// Returns the identifier if one is set and non-empty.
    pub fn id(&self) -> Option<&str> {
        self.id
            .as_deref()
            .filter(|id| !id.is_empty())
    }

    /// Returns the identifier of the embedded author, if both are present.
    pub fn author_id(&self) -> Option<&str> {
        self.author
            .as_ref()
            .and_then(|author| author.id.as_deref())
    }

    /// Returns this document with its identifier replaced.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

/// JSON conversion for the serializable records of this crate.
///
/// Implemented for [`Document`], [`Author`] and
/// [`SearchRequest`](crate::query::SearchRequest).
pub trait JsonRecord: Serialize + DeserializeOwned + Sized {
    /// Converts this record to a JSON value.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn to_json(&self) -> DocumentStoreResult<Value> {
        Ok(to_value(self)?)
    }

    /// Creates a record from a JSON value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not have the record's shape.
    fn from_json(value: Value) -> DocumentStoreResult<Self> {
        Ok(from_value(value)?)
    }
}

impl JsonRecord for Author {}

impl JsonRecord for Document {}
