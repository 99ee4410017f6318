//! Pagination over search results.
//!
//! This module provides the [`Page`] struct for result pages and
//! [`PaginationParams`] for addressing them. Pages are 1-indexed.

use serde::{Deserialize, Serialize};

use crate::error::{DocumentStoreError, DocumentStoreResult};

const DEFAULT_PAGE: usize = 1;
const DEFAULT_PER_PAGE: usize = 10;

/// A single page of results.
///
/// # Type Parameters
///
/// * `T` - The type of items contained in this page
///
/// # Example
///
/// ```ignore
/// use docmatch::page::Page;
///
/// let page: Page<String> = Page::builder(vec!["item1".to_string()])
///     .with_count(100)
///     .with_next_page(Some(2))
///     .build();
///
/// assert_eq!(page.items.len(), 1);
/// assert_eq!(page.count, 100);
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// The items contained in this page.
    pub items: Vec<T>,
    /// Total count of items across all pages.
    pub count: usize,
    /// The next page number (if more pages exist).
    pub next_page: Option<usize>,
    /// The previous page number (if this is not the first page).
    pub previous_page: Option<usize>,
}

impl<T> Page<T> {
    /// Creates a new builder for constructing a page.
    pub fn builder(items: Vec<T>) -> PageBuilder<T> {
        PageBuilder::new(items)
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            count: 0,
            next_page: None,
            previous_page: None,
        }
    }
}

/// Builder for [`Page`] instances.
pub struct PageBuilder<T> {
    items: Vec<T>,
    count: usize,
    next_page: Option<usize>,
    previous_page: Option<usize>,
}

impl<T> PageBuilder<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            count: 0,
            next_page: None,
            previous_page: None,
        }
    }

    /// Sets the total count of items across all pages.
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    pub fn with_next_page(mut self, next_page: Option<usize>) -> Self {
        self.next_page = next_page;
        self
    }

    pub fn with_previous_page(mut self, previous_page: Option<usize>) -> Self {
        self.previous_page = previous_page;
        self
    }

    pub fn build(self) -> Page<T> {
        Page {
            items: self.items,
            count: self.count,
            next_page: self.next_page,
            previous_page: self.previous_page,
        }
    }
}

/// Parameters addressing one page of a result sequence.
///
/// Both `page` and `per_page` are at least 1; use [`PaginationParams::new`] or the
/// builder to get that checked.
///
/// # Example
///
/// ```ignore
/// use docmatch::page::PaginationParams;
///
/// let params = PaginationParams::new(2, 50)?;
/// assert_eq!(params.offset(), 50);
/// ```
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PaginationParams {
    page: usize,
    per_page: usize,
}

impl PaginationParams {
    /// Creates new pagination parameters.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentStoreError::InvalidPagination`] if `page` or `per_page` is zero.
    pub fn new(page: usize, per_page: usize) -> DocumentStoreResult<Self> {
        if page == 0 {
            return Err(DocumentStoreError::InvalidPagination(
                "page numbers start at 1".to_string(),
            ));
        }

        if per_page == 0 {
            return Err(DocumentStoreError::InvalidPagination(
                "per_page must be at least 1".to_string(),
            ));
        }

        Ok(Self { page, per_page })
    }

    pub fn builder() -> PaginationParamsBuilder {
        PaginationParamsBuilder::new()
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn per_page(&self) -> usize {
        self.per_page
    }

    /// Number of items to skip before this page.
    pub fn offset(&self) -> usize {
        (self.page - 1).saturating_mul(self.per_page)
    }

    /// Extracts this page from `items`, with navigation metadata.
    ///
    /// Returns an empty default page when `items` is empty or the offset lies
    /// beyond its end.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let items: Vec<i32> = (1..=100).collect();
    /// let page = PaginationParams::new(2, 10)?.paginate(items);
    ///
    /// assert_eq!(page.items, vec![11, 12, 13, 14, 15, 16, 17, 18, 19, 20]);
    /// assert_eq!(page.next_page, Some(3));
    /// assert_eq!(page.previous_page, Some(1));
    /// ```
    pub fn paginate<T>(&self, items: Vec<T>) -> Page<T> {
        let count = items.len();
        let offset = self.offset();

        if offset >= count {
            return Page::default();
        }

        let end = offset.saturating_add(self.per_page).min(count);

        Page::builder(
            items
                .into_iter()
                .skip(offset)
                .take(end - offset)
                .collect(),
        )
        .with_count(count)
        .with_next_page((end < count).then(|| self.page + 1))
        .with_previous_page((self.page > 1).then(|| self.page - 1))
        .build()
    }
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

/// Builder for [`PaginationParams`], defaulting to page 1 with 10 items per page.
#[derive(Default)]
pub struct PaginationParamsBuilder {
    page: Option<usize>,
    per_page: Option<usize>,
}

impl PaginationParamsBuilder {
    pub fn new() -> Self {
        Self { page: None, per_page: None }
    }

    pub fn with_page(mut self, page: usize) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_per_page(mut self, per_page: usize) -> Self {
        self.per_page = Some(per_page);
        self
    }

    /// # Errors
    ///
    /// Returns [`DocumentStoreError::InvalidPagination`] if either value was set to zero.
    pub fn build(self) -> DocumentStoreResult<PaginationParams> {
        PaginationParams::new(
            self.page.unwrap_or(DEFAULT_PAGE),
            self.per_page.unwrap_or(DEFAULT_PER_PAGE),
        )
    }
}
