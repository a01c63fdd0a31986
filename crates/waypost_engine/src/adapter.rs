use chrono::{DateTime, Utc};
use waypost_core::{Article, ArticlePage, BannerImage, ContentBlock, Cursor, Paragraph};
use waypost_logging::wp_warn;

use crate::types::{RawEntity, RawQueryResponse, SourceError};

/// Normalize one raw entity into an [`Article`].
///
/// `id`, `title` and the publication date are required; their absence (or an
/// unparseable date) is `MalformedEntity`. Optional fields get defined
/// defaults instead of failing: subtitle and banner stay `None`, content
/// stays empty, a banner without a url is treated as absent. The raw date is
/// parsed here and only here; downstream code never re-parses it.
pub fn normalize_entity(raw: RawEntity) -> Result<Article, SourceError> {
    let id = raw.id.ok_or(SourceError::MalformedEntity {
        id: None,
        field: "id",
    })?;
    let title = raw.data.title.ok_or_else(|| SourceError::MalformedEntity {
        id: Some(id.clone()),
        field: "title",
    })?;
    let first_publication_date = parse_publication_date(&id, raw.first_publication_date)?;

    let banner = raw.data.banner.and_then(|banner| {
        banner.url.map(|url| BannerImage {
            url,
            alt: banner.alt,
        })
    });
    let content = raw
        .data
        .content
        .into_iter()
        .map(|block| ContentBlock {
            heading: block.heading,
            body: block
                .body
                .into_iter()
                .map(|paragraph| Paragraph {
                    text: paragraph.text,
                })
                .collect(),
        })
        .collect();

    Ok(Article {
        id,
        title,
        subtitle: raw.data.subtitle,
        author: raw.data.author.unwrap_or_default(),
        first_publication_date,
        content,
        banner,
    })
}

/// Normalize a query response into an [`ArticlePage`].
///
/// Malformed entities are excluded from the page with a warning; one bad
/// record must not sink the whole merge.
pub fn normalize_page(raw: RawQueryResponse) -> ArticlePage {
    let mut items = Vec::with_capacity(raw.results.len());
    for entity in raw.results {
        match normalize_entity(entity) {
            Ok(article) => items.push(article),
            Err(err) => {
                wp_warn!("Skipping malformed entity in listing page: {}", err);
            }
        }
    }
    ArticlePage {
        items,
        next_cursor: raw.next_page.map(Cursor::new),
    }
}

fn parse_publication_date(
    id: &str,
    raw_date: Option<String>,
) -> Result<DateTime<Utc>, SourceError> {
    let raw_date = raw_date.ok_or_else(|| SourceError::MalformedEntity {
        id: Some(id.to_string()),
        field: "first_publication_date",
    })?;
    DateTime::parse_from_rfc3339(&raw_date)
        .map(|date| date.with_timezone(&Utc))
        .map_err(|_| SourceError::MalformedEntity {
            id: Some(id.to_string()),
            field: "first_publication_date",
        })
}
