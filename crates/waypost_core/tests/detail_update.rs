use chrono::{TimeZone, Utc};
use waypost_core::{update_detail, Article, DetailEffect, DetailMsg, DetailState};

fn article(id: &str) -> Article {
    Article {
        id: id.to_string(),
        title: format!("Article {id}"),
        subtitle: None,
        author: "Ana".to_string(),
        first_publication_date: Utc.with_ymd_and_hms(2021, 3, 15, 10, 0, 0).unwrap(),
        content: Vec::new(),
        banner: None,
    }
}

#[test]
fn prebuilt_id_starts_resolved() {
    let state = DetailState::prebuilt(article("a"));
    assert_eq!(state, DetailState::Resolved(article("a")));
}

#[test]
fn unknown_id_starts_resolving_and_requests_fetch() {
    let (state, effects) = DetailState::resolving("late-post");

    assert_eq!(state, DetailState::Resolving);
    assert_eq!(
        effects,
        vec![DetailEffect::FetchArticle {
            id: "late-post".to_string(),
        }]
    );
}

#[test]
fn resolving_transitions_to_resolved_on_success() {
    let (state, _effects) = DetailState::resolving("a");
    let state = update_detail(state, DetailMsg::ArticleResolved(article("a")));
    assert_eq!(state, DetailState::Resolved(article("a")));
}

#[test]
fn resolving_transitions_to_not_found_when_source_reports_missing() {
    let (state, _effects) = DetailState::resolving("ghost");
    let state = update_detail(state, DetailMsg::ArticleMissing);
    assert_eq!(state, DetailState::NotFound);
}

#[test]
fn terminal_states_ignore_late_messages() {
    let resolved = update_detail(
        DetailState::Resolved(article("a")),
        DetailMsg::ArticleMissing,
    );
    assert_eq!(resolved, DetailState::Resolved(article("a")));

    let not_found = update_detail(
        DetailState::NotFound,
        DetailMsg::ArticleResolved(article("b")),
    );
    assert_eq!(not_found, DetailState::NotFound);
}
