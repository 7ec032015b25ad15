//! HTTP-level tests for the board API client, against a mock server.

use std::time::Duration;

use serde_json::json;
use url::Url;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use corkboard::api::{ApiError, BoardApi, HttpBoardApi};
use corkboard::board::{self, Board, LoadState};
use corkboard::domain::{NewComment, NewFeed};

fn client(server: &MockServer) -> HttpBoardApi {
    HttpBoardApi::new(
        Url::parse(&server.uri()).unwrap(),
        Duration::from_secs(5),
    )
}

fn feed_json(id: i64, name: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "content": format!("content of {}", name),
        "created_at": "2026-08-01T09:30:00Z",
    })
}

#[tokio::test]
async fn test_list_feeds_decodes_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/feeds"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([feed_json(1, "first"), feed_json(2, "second")])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let feeds = client(&server).list_feeds().await.unwrap();
    assert_eq!(feeds.len(), 2);
    assert_eq!(feeds[0].id, 1);
    assert_eq!(feeds[1].name, "second");
}

#[tokio::test]
async fn test_list_comments_scoped_to_feed_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/feeds/7/comments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 31, "feedId": 7, "content": "hi", "order": 1},
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let comments = client(&server).list_comments(7).await.unwrap();
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].feed_id, 7);
    assert_eq!(comments[0].order, 1);
}

#[tokio::test]
async fn test_create_feed_posts_trimmed_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/feeds"))
        .and(body_json(json!({"name": "Alice", "content": "hi"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(feed_json(9, "Alice")))
        .expect(1)
        .mount(&server)
        .await;

    let created = client(&server)
        .create_feed(&NewFeed::new("  Alice  ", " hi "))
        .await
        .unwrap();
    assert_eq!(created.id, 9);
}

#[tokio::test]
async fn test_create_feed_prefers_server_error_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/feeds"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"message": "name already taken"})),
        )
        .mount(&server)
        .await;

    let err = client(&server)
        .create_feed(&NewFeed::new("Alice", "hi"))
        .await
        .unwrap_err();

    match err {
        ApiError::Server { status, message } => {
            assert_eq!(status.as_u16(), 400);
            assert_eq!(message, "name already taken");
        }
        other => panic!("expected server error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_create_feed_falls_back_to_status_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/feeds"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = client(&server)
        .create_feed(&NewFeed::new("Alice", "hi"))
        .await
        .unwrap_err();

    match err {
        ApiError::Server { message, .. } => assert!(message.contains("500")),
        other => panic!("expected server error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_create_comment_posts_to_feed_path() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/feeds/3/comments"))
        .and(body_json(json!({"content": "nice post"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!(
            {"id": 50, "feedId": 3, "content": "nice post", "order": 4}
        )))
        .expect(1)
        .mount(&server)
        .await;

    let created = client(&server)
        .create_comment(3, &NewComment::new(" nice post "))
        .await
        .unwrap();
    assert_eq!(created.order, 4);
    assert_eq!(created.feed_id, 3);
}

#[tokio::test]
async fn test_board_refresh_fetches_comments_per_feed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/feeds"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([feed_json(1, "first"), feed_json(2, "second")])),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/feeds/1/comments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 10, "feedId": 1, "content": "on first", "order": 1},
        ])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/feeds/2/comments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 20, "feedId": 2, "content": "on second", "order": 1},
            {"id": 21, "feedId": 2, "content": "again", "order": 2},
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let api = client(&server);
    let mut board = Board::new();
    board::refresh(&mut board, &api).await;

    assert_eq!(board.load, LoadState::Ready);
    assert_eq!(board.feeds.len(), 2);
    // Each feed's section holds only comments from its own fetch.
    assert_eq!(board.comments_for(1).len(), 1);
    assert_eq!(board.comments_for(1)[0].content, "on first");
    assert_eq!(board.comments_for(2).len(), 2);
}

#[tokio::test]
async fn test_board_refresh_failure_is_retryable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/feeds"))
        .respond_with(ResponseTemplate::new(502))
        .up_to_n_times(1)
        .mount(&server)
        .await;

    let api = client(&server);
    let mut board = Board::new();
    board::refresh(&mut board, &api).await;

    assert!(matches!(board.load, LoadState::Failed(_)));
    assert!(board.feeds.is_empty());

    Mock::given(method("GET"))
        .and(path("/feeds"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([feed_json(1, "first")])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/feeds/1/comments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    board::refresh(&mut board, &api).await;
    assert_eq!(board.load, LoadState::Ready);
    assert_eq!(board.feeds.len(), 1);
}
