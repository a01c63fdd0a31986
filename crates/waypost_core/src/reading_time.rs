use crate::Article;

/// Assumed reading speed for the estimate.
pub const WORDS_PER_MINUTE: u32 = 200;

/// Derived on demand from an article's content blocks; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadingEstimate {
    /// Always at least 1; reading time is never reported as zero.
    pub minutes: u32,
}

/// Estimate minutes-to-read from the whitespace-delimited tokens of every
/// block heading and paragraph body, in block order.
///
/// Pure and deterministic: `ceil(tokens / 200)`, floored at 1 even for an
/// article with no content.
pub fn estimate(article: &Article) -> ReadingEstimate {
    let tokens = article
        .content
        .iter()
        .map(|block| {
            block.heading.split_whitespace().count()
                + block
                    .body
                    .iter()
                    .map(|paragraph| paragraph.text.split_whitespace().count())
                    .sum::<usize>()
        })
        .sum::<usize>() as u32;

    ReadingEstimate {
        minutes: tokens.div_ceil(WORDS_PER_MINUTE).max(1),
    }
}
