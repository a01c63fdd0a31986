use waypost_core::ArticlePage;
use waypost_logging::wp_info;

use crate::adapter;
use crate::source::ContentSource;
use crate::types::SourceError;

/// Fetch the build-time seed page (page zero) that initializes listing state.
pub async fn fetch_seed_page(source: &dyn ContentSource) -> Result<ArticlePage, SourceError> {
    let raw = source.query_by_type().await?;
    let page = adapter::normalize_page(raw);
    wp_info!(
        "Seed page fetched: {} articles, has_more={}",
        page.items.len(),
        page.next_cursor.is_some()
    );
    Ok(page)
}

/// Synchronous wrapper for callers without a runtime of their own, such as a
/// build step or the app's startup path.
pub fn fetch_seed_page_blocking(source: &dyn ContentSource) -> Result<ArticlePage, SourceError> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("tokio runtime");
    runtime.block_on(fetch_seed_page(source))
}
