//! Search requests, match criteria and the visitor used to evaluate them.
//!
//! A [`SearchRequest`] combines up to four independent criteria. Each field is
//! optional and an absent field switches its criterion off; it never widens the
//! match. The date criterion is only active when both bounds are present.
//!
//! Matches are reported per criterion term: a document contributes one
//! [`SearchHit`] for every term that matches it, across every active criterion.
//! Results are neither intersected nor deduplicated.
//!
//! # Example
//!
//! ```ignore
//! use docmatch::prelude::*;
//!
//! let request = SearchRequest {
//!     title_prefixes: Some(vec!["he".to_string(), "hel".to_string()]),
//!     author_ids: Some(vec!["a1".to_string()]),
//!     ..Default::default()
//! };
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::document::{Document, JsonRecord};

/// Filter criteria for a search. Every field is independently optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchRequest {
    /// Matches documents whose title starts with any of these prefixes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_prefixes: Option<Vec<String>>,
    /// Matches documents whose content contains any of these substrings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contains_contents: Option<Vec<String>>,
    /// Matches documents whose author has one of these identifiers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_ids: Option<Vec<String>>,
    /// Exclusive lower bound on the creation timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_from: Option<DateTime<Utc>>,
    /// Exclusive upper bound on the creation timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_to: Option<DateTime<Utc>>,
}

impl SearchRequest {
    /// Returns the date bounds if both are present.
    pub fn created_bounds(&self) -> Option<(&DateTime<Utc>, &DateTime<Utc>)> {
        self.created_from
            .as_ref()
            .zip(self.created_to.as_ref())
    }

    /// Number of criteria this request switches on.
    pub fn active_criteria(&self) -> usize {
        [
            self.title_prefixes.is_some(),
            self.contains_contents.is_some(),
            self.author_ids.is_some(),
            self.created_bounds().is_some(),
        ]
        .into_iter()
        .filter(|active| *active)
        .count()
    }

    /// Returns `true` if no criterion is active, in which case nothing can match.
    pub fn is_empty(&self) -> bool {
        self.active_criteria() == 0
    }
}

impl JsonRecord for SearchRequest {}

/// The criterion term that produced a match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Criterion {
    /// The title starts with this prefix.
    TitlePrefix(String),
    /// The content contains this substring.
    ContentContains(String),
    /// The author has this identifier.
    AuthorId(String),
    /// The creation timestamp lies strictly between these bounds.
    CreatedBetween {
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    },
}

/// A single (criterion, document) match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub criterion: Criterion,
    pub document: Document,
}

impl SearchHit {
    pub fn new(criterion: Criterion, document: Document) -> Self {
        Self { criterion, document }
    }

    pub fn into_document(self) -> Document {
        self.document
    }
}

/// Visits the active criteria of a [`SearchRequest`].
///
/// Implementors decide what a criterion means for their target; the in-memory
/// backend evaluates each one against a single document. [`visit_request`]
/// dispatches to the criterion methods in a fixed order (title prefixes, content
/// substrings, author ids, date range) and skips criteria the request leaves out.
///
/// [`visit_request`]: CriterionVisitor::visit_request
pub trait CriterionVisitor {
    type Output;

    fn visit_title_prefixes(&mut self, prefixes: &[String]) -> Self::Output;
    fn visit_contains_contents(&mut self, needles: &[String]) -> Self::Output;
    fn visit_author_ids(&mut self, author_ids: &[String]) -> Self::Output;
    fn visit_created_between(
        &mut self,
        from: &DateTime<Utc>,
        to: &DateTime<Utc>,
    ) -> Self::Output;

    fn visit_request(&mut self, request: &SearchRequest) -> Vec<Self::Output> {
        let mut outputs = Vec::with_capacity(request.active_criteria());

        if let Some(prefixes) = &request.title_prefixes {
            outputs.push(self.visit_title_prefixes(prefixes));
        }
        if let Some(needles) = &request.contains_contents {
            outputs.push(self.visit_contains_contents(needles));
        }
        if let Some(author_ids) = &request.author_ids {
            outputs.push(self.visit_author_ids(author_ids));
        }
        if let Some((from, to)) = request.created_bounds() {
            outputs.push(self.visit_created_between(from, to));
        }

        outputs
    }
}
