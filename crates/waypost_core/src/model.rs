use chrono::{DateTime, Utc};

/// Tag identifying one listing instance.
///
/// Every fetch effect is stamped with the epoch of the state that issued it,
/// and completion messages carrying a superseded epoch are discarded. A new
/// epoch is allocated whenever a list view is (re)initialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Epoch(pub u64);

/// Opaque continuation token for the next listing page.
///
/// The content source returns a fully-qualified fetchable URL; this crate
/// never constructs or inspects it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cursor(String);

impl Cursor {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One paragraph of rich-text body content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph {
    pub text: String,
}

/// One heading-plus-body section of an article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentBlock {
    pub heading: String,
    pub body: Vec<Paragraph>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BannerImage {
    pub url: String,
    pub alt: Option<String>,
}

/// One normalized content entry.
///
/// Listing responses carry a partial projection: `content` is empty and
/// `banner` absent at listing granularity. `subtitle` is optional everywhere;
/// the source omits it at some call sites.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub id: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub author: String,
    /// Parsed exactly once by the source adapter; never re-parsed downstream.
    pub first_publication_date: DateTime<Utc>,
    pub content: Vec<ContentBlock>,
    pub banner: Option<BannerImage>,
}

/// One page of a paginated listing result.
///
/// Created once per fetch (the build-time seed counts as page zero) and
/// immediately consumed into [`crate::ListingState`]; not retained after the
/// merge. `next_cursor == None` means the end of the list was reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticlePage {
    pub items: Vec<Article>,
    pub next_cursor: Option<Cursor>,
}
