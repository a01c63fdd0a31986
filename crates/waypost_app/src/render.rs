use chrono::{DateTime, Utc};
use waypost_core::{estimate, Article, DetailState, ListingView};

pub fn render_listing(view: &ListingView) -> String {
    let mut out = String::new();
    for row in &view.rows {
        out.push_str(&format!("  {}  {}\n", row.id, row.title));
        if let Some(subtitle) = &row.subtitle {
            out.push_str(&format!("      {subtitle}\n"));
        }
        out.push_str(&format!(
            "      {} | {}\n",
            format_date(row.first_publication_date),
            row.author
        ));
    }
    if view.is_fetching {
        out.push_str("  Loading more articles...\n");
    } else if let Some(failure) = &view.last_failure {
        out.push_str(&format!("  Load failed ({failure}); type `more` to retry.\n"));
    } else if view.has_more {
        out.push_str("  Type `more` to load more articles.\n");
    } else {
        out.push_str("  End of list.\n");
    }
    out
}

pub fn render_detail(state: &DetailState) -> String {
    match state {
        DetailState::Resolving => "  Loading article...\n".to_string(),
        DetailState::NotFound => "  Article not found.\n".to_string(),
        DetailState::Resolved(article) => render_article(article),
    }
}

fn render_article(article: &Article) -> String {
    let mut out = String::new();
    out.push_str(&format!("  {}\n", article.title));
    if let Some(subtitle) = &article.subtitle {
        out.push_str(&format!("  {subtitle}\n"));
    }
    out.push_str(&format!(
        "  {} | {} | {} min read\n",
        format_date(article.first_publication_date),
        article.author,
        estimate(article).minutes
    ));
    if let Some(banner) = &article.banner {
        out.push_str(&format!(
            "  [banner: {} ({})]\n",
            banner.url,
            banner.alt.as_deref().unwrap_or("no description")
        ));
    }
    for block in &article.content {
        out.push_str(&format!("\n  # {}\n", block.heading));
        for paragraph in &block.body {
            out.push_str(&format!("  {}\n", paragraph.text));
        }
    }
    out
}

fn format_date(date: DateTime<Utc>) -> String {
    date.format("%d %b %Y").to_string()
}
