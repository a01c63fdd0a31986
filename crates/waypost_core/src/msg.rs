use thiserror::Error;

use crate::{ArticlePage, Epoch};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListMsg {
    /// User asked for the next page of articles.
    LoadMoreRequested,
    /// A page fetch issued by listing instance `epoch` completed.
    PageLoaded { epoch: Epoch, page: ArticlePage },
    /// A page fetch issued by listing instance `epoch` failed.
    LoadFailed { epoch: Epoch, failure: LoadFailure },
}

/// Transport-level failure during a page load.
///
/// Plain data so the core stays free of HTTP client types. Always retryable:
/// the cursor is left in place and the next `LoadMoreRequested` re-issues it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadFailure {
    #[error("request timed out")]
    Timeout,
    #[error("http status {status}")]
    Http { status: u16 },
    #[error("network error: {message}")]
    Network { message: String },
    #[error("malformed response: {message}")]
    MalformedResponse { message: String },
}
