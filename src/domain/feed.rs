use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

/// Maximum length of a feed name, in characters after trimming.
pub const NAME_MAX: usize = 50;

/// Maximum length of feed content, in characters after trimming.
pub const CONTENT_MAX: usize = 1000;

pub const NAME_REQUIRED_MSG: &str = "Please enter a name.";
pub const NAME_TOO_LONG_MSG: &str = "Name cannot exceed 50 characters.";
pub const CONTENT_REQUIRED_MSG: &str = "Please enter some content.";
pub const CONTENT_TOO_LONG_MSG: &str = "Content cannot exceed 1000 characters.";

/// A single post on the board. Created server-side, never mutated by this
/// client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feed {
    pub id: i64,
    pub name: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Feed {
    /// Creation timestamp formatted for display in the local timezone.
    pub fn created_local(&self) -> String {
        self.created_at
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M")
            .to_string()
    }
}

/// Request payload for creating a feed. Values are trimmed at construction
/// so the server always sees the canonical form.
#[derive(Debug, Clone, Serialize)]
pub struct NewFeed {
    pub name: String,
    pub content: String,
}

impl NewFeed {
    pub fn new(name: &str, content: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            content: content.trim().to_string(),
        }
    }

    /// Validate raw form input against the client-side rules. Runs on the
    /// trimmed values; the server re-validates authoritatively.
    pub fn validate(name: &str, content: &str) -> FeedErrors {
        let mut errors = FeedErrors::default();

        let name = name.trim();
        if name.is_empty() {
            errors.name = Some(NAME_REQUIRED_MSG.to_string());
        } else if name.chars().count() > NAME_MAX {
            errors.name = Some(NAME_TOO_LONG_MSG.to_string());
        }

        let content = content.trim();
        if content.is_empty() {
            errors.content = Some(CONTENT_REQUIRED_MSG.to_string());
        } else if content.chars().count() > CONTENT_MAX {
            errors.content = Some(CONTENT_TOO_LONG_MSG.to_string());
        }

        errors
    }
}

/// Per-field validation messages for the create-feed form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedErrors {
    pub name: Option<String>,
    pub content: Option<String>,
}

impl FeedErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.content.is_none()
    }
}
