use std::sync::Arc;
use std::time::Duration;

use pretty_assertions::assert_eq;
use serde_json::json;
use waypost_core::{Cursor, Epoch};
use waypost_engine::{
    fetch_seed_page, ContentSource, EngineHandle, ReqwestContentSource, SourceError, SourceEvent,
    SourceSettings,
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn settings_for(server: &MockServer) -> SourceSettings {
    SourceSettings {
        base_url: server.uri(),
        content_type: "posts".to_string(),
        page_size: 2,
        ..SourceSettings::default()
    }
}

fn listing_body(ids: &[&str], next_page: Option<&str>) -> serde_json::Value {
    json!({
        "results": ids.iter().map(|id| json!({
            "id": id,
            "first_publication_date": "2021-03-15T10:00:00Z",
            "data": { "title": format!("Article {id}"), "author": "Ana" }
        })).collect::<Vec<_>>(),
        "next_page": next_page,
    })
}

#[tokio::test]
async fn query_by_type_requests_the_configured_type_and_page_size() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/documents"))
        .and(query_param("type", "posts"))
        .and(query_param("page_size", "2"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(listing_body(&["a", "b"], Some("next"))),
        )
        .mount(&server)
        .await;

    let source = ReqwestContentSource::new(settings_for(&server)).expect("source");
    let response = source.query_by_type().await.expect("query ok");

    assert_eq!(response.results.len(), 2);
    assert_eq!(response.next_page.as_deref(), Some("next"));
}

#[tokio::test]
async fn query_by_cursor_fetches_the_continuation_url_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/continuation"))
        .and(query_param("after", "b"))
        .respond_with(ResponseTemplate::new(200).set_body_json(listing_body(&["c"], None)))
        .mount(&server)
        .await;

    let source = ReqwestContentSource::new(settings_for(&server)).expect("source");
    let cursor = Cursor::new(format!("{}/continuation?after=b", server.uri()));
    let response = source.query_by_cursor(&cursor).await.expect("query ok");

    assert_eq!(response.results.len(), 1);
    assert_eq!(response.next_page, None);
}

#[tokio::test]
async fn query_by_id_maps_404_to_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/documents/ghost"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let source = ReqwestContentSource::new(settings_for(&server)).expect("source");
    let err = source.query_by_id("ghost").await.unwrap_err();
    assert_eq!(err, SourceError::NotFound);
}

#[tokio::test]
async fn server_errors_surface_the_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/documents"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let source = ReqwestContentSource::new(settings_for(&server)).expect("source");
    let err = source.query_by_type().await.unwrap_err();
    assert_eq!(err, SourceError::Http { status: 500 });
}

#[tokio::test]
async fn slow_responses_time_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/documents"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(listing_body(&[], None)),
        )
        .mount(&server)
        .await;

    let settings = SourceSettings {
        request_timeout: Duration::from_millis(50),
        ..settings_for(&server)
    };
    let source = ReqwestContentSource::new(settings).expect("source");
    let err = source.query_by_type().await.unwrap_err();
    assert_eq!(err, SourceError::Timeout);
}

#[tokio::test]
async fn seed_page_is_fetched_and_normalized() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/documents"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(listing_body(&["a", "b"], Some("next"))),
        )
        .mount(&server)
        .await;

    let source = ReqwestContentSource::new(settings_for(&server)).expect("source");
    let seed = fetch_seed_page(&source).await.expect("seed");

    assert_eq!(seed.items.len(), 2);
    assert_eq!(seed.items[0].id, "a");
    assert_eq!(seed.items[0].title, "Article a");
    assert!(seed.next_cursor.is_some());
}

#[test]
fn engine_handle_delivers_normalized_page_events() {
    let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
    let server = runtime.block_on(async {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/page2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(listing_body(&["c"], None)))
            .mount(&server)
            .await;
        server
    });

    let source = Arc::new(ReqwestContentSource::new(settings_for(&server)).expect("source"));
    let engine = EngineHandle::new(source);
    engine.fetch_page(Epoch(1), Cursor::new(format!("{}/page2", server.uri())));

    let event = engine
        .recv_timeout(Duration::from_secs(5))
        .expect("event within deadline");
    match event {
        SourceEvent::PageFetched { epoch, result } => {
            assert_eq!(epoch, Epoch(1));
            let page = result.expect("page ok");
            assert_eq!(page.items.len(), 1);
            assert_eq!(page.items[0].id, "c");
            assert_eq!(page.next_cursor, None);
        }
        other => panic!("unexpected event: {other:?}"),
    }
}

#[test]
fn engine_handle_reports_missing_articles() {
    let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
    let server = runtime.block_on(async {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/documents/ghost"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;
        server
    });

    let source = Arc::new(ReqwestContentSource::new(settings_for(&server)).expect("source"));
    let engine = EngineHandle::new(source);
    engine.fetch_article("ghost");

    let event = engine
        .recv_timeout(Duration::from_secs(5))
        .expect("event within deadline");
    match event {
        SourceEvent::ArticleFetched { id, result } => {
            assert_eq!(id, "ghost");
            assert_eq!(result.unwrap_err(), SourceError::NotFound);
        }
        other => panic!("unexpected event: {other:?}"),
    }
}
