pub mod http;

use async_trait::async_trait;
use reqwest::StatusCode;
use thiserror::Error;

use crate::domain::{Comment, Feed, NewComment, NewFeed};

pub use http::HttpBoardApi;

/// Errors from the board API.
///
/// `Server` carries the message decoded from the response body when the
/// server supplied one; callers show it in preference to generic text.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("{message}")]
    Server { status: StatusCode, message: String },
}

/// The four operations the board server exposes. Each call is one HTTP
/// request with no retry; retry policy belongs to the caller.
#[async_trait]
pub trait BoardApi {
    async fn list_feeds(&self) -> Result<Vec<Feed>, ApiError>;

    async fn list_comments(&self, feed_id: i64) -> Result<Vec<Comment>, ApiError>;

    async fn create_feed(&self, req: &NewFeed) -> Result<Feed, ApiError>;

    async fn create_comment(&self, feed_id: i64, req: &NewComment)
        -> Result<Comment, ApiError>;
}
