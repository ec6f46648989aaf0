//! Query engine: which posts, in what order, on which page.
//!
//! A query runs in three fixed steps over the full collection:
//!
//! 1. **filter** on the plain text of each post's content
//! 2. **sort** with the comparator of the chosen [`SortMode`]
//! 3. **paginate** into a [`PageWindow`]
//!
//! Everything here is a pure function of the posts and the query; the
//! store is only consulted for the initial read.

mod pagination;
mod sort;

pub use pagination::{
    page_strip, total_pages, PageMarker, PageRequest, PageWindow, Pager, DEFAULT_PAGE_SIZE,
    MAX_VISIBLE_PAGES, PAGE_SIZE_OPTIONS,
};
pub use sort::{sort_posts, SortMode};

use crate::storage::{KeyValueStore, Post, PostStore};
use crate::text::{contains_ignore_case, plain_text};

/// Search term, ordering and page for a listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostQuery {
    /// Case-insensitive substring of the plain text; empty matches all
    pub search: String,

    pub sort: SortMode,

    pub page: PageRequest,
}

impl PostQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = term.into();
        self
    }

    pub fn sort(mut self, mode: SortMode) -> Self {
        self.sort = mode;
        self
    }

    pub fn page(mut self, request: PageRequest) -> Self {
        self.page = request;
        self
    }
}

/// One page of query results plus the counts needed to render paging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryPage {
    /// Posts on this page, in display order
    pub posts: Vec<Post>,

    pub window: PageWindow,
}

impl QueryPage {
    /// Matching posts across all pages.
    pub fn total(&self) -> usize {
        self.window.total
    }

    pub fn total_pages(&self) -> usize {
        self.window.total_pages
    }

    /// Page-number strip for this page.
    pub fn strip(&self) -> Vec<PageMarker> {
        page_strip(self.window.page, self.window.total_pages)
    }
}

/// Posts whose plain text contains `term`, case-insensitively.
///
/// Membership only; order is preserved.
pub fn filter_posts(posts: Vec<Post>, term: &str) -> Vec<Post> {
    if term.is_empty() {
        return posts;
    }
    posts
        .into_iter()
        .filter(|post| contains_ignore_case(&plain_text(&post.content), term))
        .collect()
}

/// Filter, sort and paginate `posts`.
pub fn run_query(posts: Vec<Post>, query: &PostQuery) -> QueryPage {
    let matching = filter_posts(posts, &query.search);
    let sorted = sort_posts(matching, query.sort);

    let window = PageWindow::compute(sorted.len(), query.page);
    let posts = sorted
        .into_iter()
        .skip(window.start)
        .take(window.end - window.start)
        .collect();

    QueryPage { posts, window }
}

impl<S: KeyValueStore> PostStore<S> {
    /// Run `query` against the current contents of the store.
    pub fn query(&self, query: &PostQuery) -> QueryPage {
        let page = run_query(self.list(), query);
        tracing::debug!(
            search = %query.search,
            sort = %query.sort,
            page = page.window.page,
            total = page.window.total,
            "ran post query"
        );
        page
    }
}
