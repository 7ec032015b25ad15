//! Local state machine for the create-post form.

use crate::api::{ApiError, BoardApi};
use crate::domain::{FeedErrors, NewFeed, CONTENT_MAX};

pub const GENERIC_CREATE_ERROR: &str = "Failed to create the post. Please try again.";

/// Which input the compose tab is focused on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Content,
}

#[derive(Debug, Default)]
pub struct ComposeForm {
    pub name: String,
    pub content: String,
    pub submitting: bool,
    pub error: Option<String>,
    pub field_errors: FeedErrors,
}

impl ComposeForm {
    /// Live character count for the content field (untrimmed, what the user
    /// sees as they type).
    pub fn content_len(&self) -> usize {
        self.content.chars().count()
    }

    pub fn over_limit(&self) -> bool {
        self.content_len() > CONTENT_MAX
    }

    /// Run client-side validation and record per-field messages. Returns
    /// true when the form may be submitted.
    pub fn validate(&mut self) -> bool {
        self.field_errors = NewFeed::validate(&self.name, &self.content);
        self.field_errors.is_empty()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Validate, then create the feed with trimmed values. Returns true on
    /// success, after which the form is empty and the caller switches back
    /// to the board. On failure the fields keep their values so the user
    /// can retry without re-typing.
    pub async fn submit(&mut self, api: &dyn BoardApi) -> bool {
        if !self.validate() {
            return false;
        }

        self.submitting = true;
        self.error = None;
        let result = api
            .create_feed(&NewFeed::new(&self.name, &self.content))
            .await;
        self.submitting = false;

        match result {
            Ok(feed) => {
                tracing::debug!("Created post {}", feed.id);
                self.reset();
                true
            }
            Err(ApiError::Server { message, .. }) => {
                tracing::error!("Failed to create post: {}", message);
                self.error = Some(message);
                false
            }
            Err(e) => {
                tracing::error!("Failed to create post: {}", e);
                self.error = Some(GENERIC_CREATE_ERROR.to_string());
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use chrono::Utc;
    use reqwest::StatusCode;

    use super::*;
    use crate::domain::{Comment, Feed, NewComment};

    /// Records create_feed calls; optionally fails them with a server
    /// message.
    #[derive(Default)]
    struct RecordingApi {
        created: Mutex<Vec<NewFeed>>,
        reject_with: Option<String>,
    }

    #[async_trait]
    impl BoardApi for RecordingApi {
        async fn list_feeds(&self) -> Result<Vec<Feed>, ApiError> {
            Ok(Vec::new())
        }

        async fn list_comments(&self, _feed_id: i64) -> Result<Vec<Comment>, ApiError> {
            Ok(Vec::new())
        }

        async fn create_feed(&self, req: &NewFeed) -> Result<Feed, ApiError> {
            self.created.lock().unwrap().push(req.clone());
            if let Some(message) = &self.reject_with {
                return Err(ApiError::Server {
                    status: StatusCode::BAD_REQUEST,
                    message: message.clone(),
                });
            }
            Ok(Feed {
                id: 1,
                name: req.name.clone(),
                content: req.content.clone(),
                created_at: Utc::now(),
            })
        }

        async fn create_comment(
            &self,
            _feed_id: i64,
            _req: &NewComment,
        ) -> Result<Comment, ApiError> {
            unreachable!("compose never creates comments")
        }
    }

    #[tokio::test]
    async fn test_invalid_form_makes_no_network_call() {
        let api = RecordingApi::default();
        let mut form = ComposeForm::default();
        form.name = "   ".to_string();
        form.content = "x".repeat(CONTENT_MAX + 1);

        assert!(!form.submit(&api).await);
        assert!(form.field_errors.name.is_some());
        assert!(form.field_errors.content.is_some());
        assert!(api.created.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_successful_submit_sends_trimmed_values_and_resets() {
        let api = RecordingApi::default();
        let mut form = ComposeForm::default();
        form.name = "  Alice  ".to_string();
        form.content = "hi".to_string();

        assert!(form.submit(&api).await);

        let created = api.created.lock().unwrap();
        assert_eq!(created.len(), 1);
        assert_eq!(created[0].name, "Alice");
        assert_eq!(created[0].content, "hi");

        assert!(form.name.is_empty());
        assert!(form.content.is_empty());
        assert!(form.error.is_none());
        assert!(form.field_errors.is_empty());
        assert!(!form.submitting);
    }

    #[tokio::test]
    async fn test_server_message_preferred_and_fields_preserved() {
        let api = RecordingApi {
            reject_with: Some("name already taken".to_string()),
            ..RecordingApi::default()
        };
        let mut form = ComposeForm::default();
        form.name = "Alice".to_string();
        form.content = "hello".to_string();

        assert!(!form.submit(&api).await);
        assert_eq!(form.error.as_deref(), Some("name already taken"));
        assert_eq!(form.name, "Alice");
        assert_eq!(form.content, "hello");
        assert!(!form.submitting);
    }

    #[test]
    fn test_over_limit_tracks_live_length() {
        let mut form = ComposeForm::default();
        form.content = "x".repeat(CONTENT_MAX);
        assert!(!form.over_limit());

        form.content.push('x');
        assert!(form.over_limit());
    }
}
