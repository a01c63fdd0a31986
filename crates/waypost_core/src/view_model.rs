use chrono::{DateTime, Utc};

use crate::{Article, LoadFailure};

/// Listing projection of one article: what the list page renders per row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleRowView {
    pub id: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub author: String,
    pub first_publication_date: DateTime<Utc>,
}

impl From<&Article> for ArticleRowView {
    fn from(article: &Article) -> Self {
        Self {
            id: article.id.clone(),
            title: article.title.clone(),
            subtitle: article.subtitle.clone(),
            author: article.author.clone(),
            first_publication_date: article.first_publication_date,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingView {
    pub rows: Vec<ArticleRowView>,
    pub has_more: bool,
    pub is_fetching: bool,
    pub last_failure: Option<LoadFailure>,
}
