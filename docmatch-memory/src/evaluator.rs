//! Criterion evaluation for in-memory document search.
//!
//! [`DocumentEvaluator`] checks one document against the active criteria of a
//! [`SearchRequest`] and reports every criterion term that matched. A criterion
//! only applies when the document has the field it inspects; otherwise it
//! contributes nothing.

use chrono::{DateTime, Utc};
use tracing::trace;

use docmatch_core::{
    document::Document,
    query::{Criterion, CriterionVisitor, SearchHit, SearchRequest},
};

pub(crate) struct DocumentEvaluator<'a> {
    document: &'a Document,
}

impl<'a> DocumentEvaluator<'a> {
    pub fn new(document: &'a Document) -> Self {
        Self { document }
    }

    /// Returns the matched criterion terms, in criterion order.
    pub fn evaluate(&mut self, request: &SearchRequest) -> Vec<Criterion> {
        let matched = self
            .visit_request(request)
            .into_iter()
            .flatten()
            .collect::<Vec<_>>();

        trace!(
            id = self.document.id().unwrap_or_default(),
            matches = matched.len(),
            "evaluated document"
        );

        matched
    }

    /// Evaluates `request` against each document, keeping iteration order.
    pub fn search_documents(
        documents: impl IntoIterator<Item = &'a Document>,
        request: &SearchRequest,
    ) -> Vec<SearchHit> {
        documents
            .into_iter()
            .flat_map(|document| {
                DocumentEvaluator::new(document)
                    .evaluate(request)
                    .into_iter()
                    .map(move |criterion| SearchHit::new(criterion, document.clone()))
            })
            .collect()
    }
}

impl<'a> CriterionVisitor for DocumentEvaluator<'a> {
    type Output = Vec<Criterion>;

    fn visit_title_prefixes(&mut self, prefixes: &[String]) -> Self::Output {
        let Some(title) = self.document.title.as_deref() else {
            return Vec::new();
        };

        prefixes
            .iter()
            .filter(|prefix| title.starts_with(prefix.as_str()))
            .map(|prefix| Criterion::TitlePrefix(prefix.clone()))
            .collect()
    }

    fn visit_contains_contents(&mut self, needles: &[String]) -> Self::Output {
        let Some(content) = self.document.content.as_deref() else {
            return Vec::new();
        };

        needles
            .iter()
            .filter(|needle| content.contains(needle.as_str()))
            .map(|needle| Criterion::ContentContains(needle.clone()))
            .collect()
    }

    fn visit_author_ids(&mut self, author_ids: &[String]) -> Self::Output {
        let Some(document_author) = self.document.author_id() else {
            return Vec::new();
        };

        author_ids
            .iter()
            .filter(|author_id| author_id.as_str() == document_author)
            .map(|author_id| Criterion::AuthorId(author_id.clone()))
            .collect()
    }

    fn visit_created_between(
        &mut self,
        from: &DateTime<Utc>,
        to: &DateTime<Utc>,
    ) -> Self::Output {
        match &self.document.created {
            // Both bounds are exclusive.
            Some(created) if from < created && created < to => vec![Criterion::CreatedBetween {
                from: *from,
                to: *to,
            }],
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use docmatch_core::document::Author;
    use proptest::prelude::*;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 10, 8, 0, 0).unwrap()
    }

    fn strings(values: &[&str]) -> Option<Vec<String>> {
        Some(values.iter().map(|value| value.to_string()).collect())
    }

    fn evaluate(document: &Document, request: &SearchRequest) -> Vec<Criterion> {
        DocumentEvaluator::new(document).evaluate(request)
    }

    #[test]
    fn every_matching_prefix_counts() {
        let doc = Document {
            title: Some("hello world".to_string()),
            ..Default::default()
        };
        let request = SearchRequest {
            title_prefixes: strings(&["he", "hel", "world"]),
            ..Default::default()
        };

        assert_eq!(
            evaluate(&doc, &request),
            vec![
                Criterion::TitlePrefix("he".to_string()),
                Criterion::TitlePrefix("hel".to_string()),
            ]
        );
    }

    #[test]
    fn prefixes_are_case_sensitive() {
        let doc = Document {
            title: Some("Hello".to_string()),
            ..Default::default()
        };
        let request = SearchRequest {
            title_prefixes: strings(&["he"]),
            ..Default::default()
        };

        assert!(evaluate(&doc, &request).is_empty());
    }

    #[test]
    fn only_contained_substrings_count() {
        let doc = Document {
            content: Some("the quick fox".to_string()),
            ..Default::default()
        };
        let request = SearchRequest {
            contains_contents: strings(&["quick", "dog"]),
            ..Default::default()
        };

        assert_eq!(
            evaluate(&doc, &request),
            vec![Criterion::ContentContains("quick".to_string())]
        );
    }

    #[test]
    fn missing_fields_disable_their_criteria() {
        let doc = Document::default();
        let request = SearchRequest {
            title_prefixes: strings(&[""]),
            contains_contents: strings(&[""]),
            author_ids: strings(&["a1"]),
            created_from: Some(t0() - Duration::days(1)),
            created_to: Some(t0() + Duration::days(1)),
        };

        assert!(evaluate(&doc, &request).is_empty());
    }

    #[test]
    fn authors_without_ids_never_match() {
        let doc = Document {
            author: Some(Author {
                id: None,
                name: Some("Anonymous".to_string()),
            }),
            ..Default::default()
        };
        let request = SearchRequest {
            author_ids: strings(&["a1"]),
            ..Default::default()
        };

        assert!(evaluate(&doc, &request).is_empty());
    }

    #[test]
    fn author_ids_compare_by_value() {
        let request = SearchRequest {
            author_ids: strings(&["a1"]),
            ..Default::default()
        };
        let first = Document {
            author: Some(Author::new(String::from("a1"), "Ada")),
            ..Default::default()
        };
        let second = Document {
            author: Some(Author::new(format!("a{}", 1), "Another Ada")),
            ..Default::default()
        };

        assert_eq!(evaluate(&first, &request), vec![Criterion::AuthorId("a1".to_string())]);
        assert_eq!(evaluate(&second, &request), vec![Criterion::AuthorId("a1".to_string())]);
    }

    #[test]
    fn repeated_author_ids_repeat_the_match() {
        let doc = Document {
            author: Some(Author::new("a1", "Ada")),
            ..Default::default()
        };
        let request = SearchRequest {
            author_ids: strings(&["a1", "a2", "a1"]),
            ..Default::default()
        };

        assert_eq!(evaluate(&doc, &request).len(), 2);
    }

    #[test]
    fn date_bounds_are_exclusive() {
        let request = SearchRequest {
            created_from: Some(t0()),
            created_to: Some(t0() + Duration::seconds(1)),
            ..Default::default()
        };
        let at_lower = Document {
            created: Some(t0()),
            ..Default::default()
        };
        let at_upper = Document {
            created: Some(t0() + Duration::seconds(1)),
            ..Default::default()
        };
        let between = Document {
            created: Some(t0() + Duration::milliseconds(500)),
            ..Default::default()
        };

        assert!(evaluate(&at_lower, &request).is_empty());
        assert!(evaluate(&at_upper, &request).is_empty());
        assert_eq!(
            evaluate(&between, &request),
            vec![Criterion::CreatedBetween {
                from: t0(),
                to: t0() + Duration::seconds(1),
            }]
        );
    }

    #[test]
    fn inverted_bounds_match_nothing() {
        let doc = Document {
            created: Some(t0()),
            ..Default::default()
        };
        let request = SearchRequest {
            created_from: Some(t0() + Duration::days(1)),
            created_to: Some(t0() - Duration::days(1)),
            ..Default::default()
        };

        assert!(evaluate(&doc, &request).is_empty());
    }

    #[test]
    fn half_open_date_range_is_inactive() {
        let doc = Document {
            created: Some(t0()),
            ..Default::default()
        };
        let request = SearchRequest {
            created_from: Some(t0() - Duration::days(1)),
            ..Default::default()
        };

        assert!(evaluate(&doc, &request).is_empty());
    }

    #[test]
    fn criteria_accumulate_in_fixed_order() {
        let doc = Document {
            title: Some("release notes".to_string()),
            content: Some("bug fixes".to_string()),
            author: Some(Author::new("a1", "Ada")),
            created: Some(t0()),
            ..Default::default()
        };
        let request = SearchRequest {
            title_prefixes: strings(&["rel"]),
            contains_contents: strings(&["fix"]),
            author_ids: strings(&["a1"]),
            created_from: Some(t0() - Duration::hours(1)),
            created_to: Some(t0() + Duration::hours(1)),
        };

        let matched = evaluate(&doc, &request);

        assert_eq!(matched.len(), 4);
        assert!(matches!(matched[0], Criterion::TitlePrefix(_)));
        assert!(matches!(matched[1], Criterion::ContentContains(_)));
        assert!(matches!(matched[2], Criterion::AuthorId(_)));
        assert!(matches!(matched[3], Criterion::CreatedBetween { .. }));
    }

    #[test]
    fn search_documents_keeps_document_order() {
        let docs = vec![
            Document {
                id: Some("1".to_string()),
                title: Some("alpha".to_string()),
                ..Default::default()
            },
            Document {
                id: Some("2".to_string()),
                title: Some("beta".to_string()),
                ..Default::default()
            },
            Document {
                id: Some("3".to_string()),
                title: Some("alphabet".to_string()),
                ..Default::default()
            },
        ];
        let request = SearchRequest {
            title_prefixes: strings(&["al", "alpha"]),
            ..Default::default()
        };

        let ids = DocumentEvaluator::search_documents(&docs, &request)
            .into_iter()
            .map(|hit| hit.document.id.unwrap())
            .collect::<Vec<_>>();

        assert_eq!(ids, vec!["1", "1", "3", "3"]);
    }

    proptest! {
        #[test]
        fn prefix_matches_equal_matching_prefix_count(
            title in "[a-c]{0,8}",
            prefixes in proptest::collection::vec("[a-c]{0,3}", 0..6),
        ) {
            let doc = Document {
                title: Some(title.clone()),
                ..Default::default()
            };
            let request = SearchRequest {
                title_prefixes: Some(prefixes.clone()),
                ..Default::default()
            };

            let expected = prefixes
                .iter()
                .filter(|prefix| title.starts_with(prefix.as_str()))
                .count();

            prop_assert_eq!(evaluate(&doc, &request).len(), expected);
        }

        #[test]
        fn union_is_sum_of_criteria(
            content in "[xyz ]{0,12}",
            title in "[xyz]{0,6}",
            needles in proptest::collection::vec("[xyz]{1,2}", 0..4),
            prefixes in proptest::collection::vec("[xyz]{1,2}", 0..4),
        ) {
            let doc = Document {
                title: Some(title),
                content: Some(content),
                ..Default::default()
            };
            let by_title = SearchRequest {
                title_prefixes: Some(prefixes.clone()),
                ..Default::default()
            };
            let by_content = SearchRequest {
                contains_contents: Some(needles.clone()),
                ..Default::default()
            };
            let combined = SearchRequest {
                title_prefixes: Some(prefixes),
                contains_contents: Some(needles),
                ..Default::default()
            };

            prop_assert_eq!(
                evaluate(&doc, &combined).len(),
                evaluate(&doc, &by_title).len() + evaluate(&doc, &by_content).len()
            );
        }
    }
}
