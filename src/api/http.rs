use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::Deserialize;
use url::Url;

use crate::api::{ApiError, BoardApi};
use crate::domain::{Comment, Feed, NewComment, NewFeed};

const USER_AGENT: &str = concat!("corkboard/", env!("CARGO_PKG_VERSION"));

/// Optional error payload the server attaches to failed requests.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

pub struct HttpBoardApi {
    client: Client,
    base_url: String,
}

impl HttpBoardApi {
    pub fn new(base_url: Url, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .gzip(true)
            .brotli(true)
            .user_agent(USER_AGENT)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: base_url.as_str().trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Pass successful responses through; turn everything else into
    /// `ApiError::Server`, preferring the message from the body when the
    /// server sent one.
    async fn check(response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response
            .bytes()
            .await
            .ok()
            .and_then(|body| serde_json::from_slice::<ErrorBody>(&body).ok())
            .and_then(|body| body.message)
            .unwrap_or_else(|| format!("server returned {}", status));

        Err(ApiError::Server { status, message })
    }
}

#[async_trait]
impl BoardApi for HttpBoardApi {
    async fn list_feeds(&self) -> Result<Vec<Feed>, ApiError> {
        let response = self.client.get(self.endpoint("/feeds")).send().await?;
        let feeds = Self::check(response).await?.json().await?;
        Ok(feeds)
    }

    async fn list_comments(&self, feed_id: i64) -> Result<Vec<Comment>, ApiError> {
        let response = self
            .client
            .get(self.endpoint(&format!("/feeds/{}/comments", feed_id)))
            .send()
            .await?;
        let comments = Self::check(response).await?.json().await?;
        Ok(comments)
    }

    async fn create_feed(&self, req: &NewFeed) -> Result<Feed, ApiError> {
        let response = self
            .client
            .post(self.endpoint("/feeds"))
            .json(req)
            .send()
            .await?;
        let feed = Self::check(response).await?.json().await?;
        Ok(feed)
    }

    async fn create_comment(
        &self,
        feed_id: i64,
        req: &NewComment,
    ) -> Result<Comment, ApiError> {
        let response = self
            .client
            .post(self.endpoint(&format!("/feeds/{}/comments", feed_id)))
            .json(req)
            .send()
            .await?;
        let comment = Self::check(response).await?.json().await?;
        Ok(comment)
    }
}
