//! Tests for the HTTP article source against a mock endpoint.

mod common;

use async_content::config::RemoteConfig;
use async_content::demo::{Article, RemoteArticleSource};
use async_content::error::PageError;
use async_content::source::LoadSource;
use async_content::ui::content::LoadState;
use common::mock_server::{MockResponse, MockServer};
use std::time::Duration;
use tokio::runtime::Handle;

fn remote(url: &str) -> RemoteArticleSource {
    RemoteArticleSource::new(url, &RemoteConfig::default(), Handle::current())
        .expect("client should build")
}

/// Wait until the source leaves `Loading`.
async fn settled(source: &RemoteArticleSource) -> LoadState<Article> {
    let mut changes = source.subscribe();
    tokio::time::timeout(Duration::from_secs(5), async {
        loop {
            let state = changes.borrow_and_update().clone();
            if !state.is_loading() {
                return state;
            }
            changes.changed().await.expect("source alive");
        }
    })
    .await
    .expect("load should settle")
}

#[tokio::test]
async fn ok_response_becomes_success() {
    let server = MockServer::start().await;
    server
        .enqueue(MockResponse::json(r#"{"title": "Remote", "body": "Fetched body"}"#))
        .await;

    let source = remote(&server.article_url());
    source.load();
    assert_eq!(source.state(), LoadState::Loading);

    let state = settled(&source).await;
    assert_eq!(state, LoadState::Success(Article::new("Remote", "Fetched body")));
    assert_eq!(server.hits(), 1);
}

#[tokio::test]
async fn error_status_becomes_api_error() {
    let server = MockServer::start().await;
    server.enqueue(MockResponse::error(500)).await;

    let source = remote(&server.article_url());
    source.load();

    let state = settled(&source).await;
    assert_eq!(state, LoadState::Failed(PageError::api("HTTP 500")));
}

#[tokio::test]
async fn undecodable_body_becomes_generic_error() {
    let server = MockServer::start().await;
    server.enqueue(MockResponse::json("not json at all")).await;

    let source = remote(&server.article_url());
    source.load();

    let state = settled(&source).await;
    assert_eq!(state, LoadState::Failed(PageError::Generic));
}

#[tokio::test]
async fn unreachable_host_becomes_api_error() {
    // Bind and drop to get a port nothing listens on.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let source = remote(&format!("http://{}/article", addr));
    source.load();

    match settled(&source).await {
        LoadState::Failed(PageError::ApiError { reason }) => assert!(!reason.is_empty()),
        other => panic!("expected ApiError, got {:?}", other),
    }
}

#[tokio::test]
async fn retry_after_failure_recovers() {
    let server = MockServer::start().await;
    server.enqueue(MockResponse::error(502)).await;
    server
        .enqueue(MockResponse::json(r#"{"title": "Second", "body": "try"}"#))
        .await;

    let source = remote(&server.article_url());
    source.load();
    assert!(settled(&source).await.is_failed());

    source.load();
    assert_eq!(
        settled(&source).await,
        LoadState::Success(Article::new("Second", "try"))
    );
    assert_eq!(server.hits(), 2);
}

#[tokio::test]
async fn newest_load_wins_over_slow_older_one() {
    let server = MockServer::start().await;
    server
        .enqueue(MockResponse::json(r#"{"title": "Slow", "body": "old"}"#).with_delay(300))
        .await;
    server
        .enqueue(MockResponse::json(r#"{"title": "Fast", "body": "new"}"#))
        .await;

    let source = remote(&server.article_url());
    source.load();
    // Let the first request reach the server before starting the second.
    tokio::time::sleep(Duration::from_millis(50)).await;
    source.load();

    let state = settled(&source).await;
    assert_eq!(state, LoadState::Success(Article::new("Fast", "new")));

    // The slow response arrives later and must be discarded.
    tokio::time::sleep(Duration::from_millis(500)).await;
    assert_eq!(
        source.state(),
        LoadState::Success(Article::new("Fast", "new"))
    );
}
