use std::collections::HashSet;

use crate::view_model::{ArticleRowView, ListingView};
use crate::{Article, ArticlePage, Cursor, Epoch, LoadFailure};

/// Aggregate state of one article listing instance.
///
/// Single writer: only [`crate::update_list`] mutates this, and the rendering
/// layer sees replacement values, never in-place mutation. `articles` is
/// append-only in source order; `is_fetching` is true only while exactly one
/// page fetch is outstanding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingState {
    epoch: Epoch,
    articles: Vec<Article>,
    cursor: Option<Cursor>,
    is_fetching: bool,
    last_failure: Option<LoadFailure>,
}

impl ListingState {
    /// Consume the build-time seed page as the initial state.
    ///
    /// Called exactly once per list view lifecycle; navigating away and back
    /// creates a new state under a fresh epoch, which is what invalidates any
    /// fetch still in flight for the old instance.
    pub fn initialize(epoch: Epoch, seed: ArticlePage) -> Self {
        Self {
            epoch,
            articles: seed.items,
            cursor: seed.next_cursor,
            is_fetching: false,
            last_failure: None,
        }
    }

    pub fn epoch(&self) -> Epoch {
        self.epoch
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn cursor(&self) -> Option<&Cursor> {
        self.cursor.as_ref()
    }

    /// True while the terminal cursor has not been reached.
    pub fn has_more(&self) -> bool {
        self.cursor.is_some()
    }

    pub fn is_fetching(&self) -> bool {
        self.is_fetching
    }

    /// The failure of the most recent load attempt, if it has not been
    /// retried since. Cleared when the next load begins.
    pub fn last_failure(&self) -> Option<&LoadFailure> {
        self.last_failure.as_ref()
    }

    pub fn view(&self) -> ListingView {
        ListingView {
            rows: self.articles.iter().map(ArticleRowView::from).collect(),
            has_more: self.has_more(),
            is_fetching: self.is_fetching,
            last_failure: self.last_failure.clone(),
        }
    }

    pub(crate) fn begin_fetch(&mut self) {
        self.is_fetching = true;
        self.last_failure = None;
    }

    /// Merge a fetched page: drop ids already present (source-side overlap or
    /// a retried request may resend them), append the rest in source order,
    /// and advance the cursor.
    pub(crate) fn merge_page(&mut self, page: ArticlePage) {
        let mut seen: HashSet<String> = self
            .articles
            .iter()
            .map(|article| article.id.clone())
            .collect();
        for item in page.items {
            if seen.insert(item.id.clone()) {
                self.articles.push(item);
            }
        }
        self.cursor = page.next_cursor;
        self.is_fetching = false;
    }

    /// A failed fetch leaves articles and cursor untouched so the same
    /// cursor can be retried.
    pub(crate) fn fail_fetch(&mut self, failure: LoadFailure) {
        self.is_fetching = false;
        self.last_failure = Some(failure);
    }
}
