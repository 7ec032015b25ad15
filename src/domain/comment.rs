use serde::{Deserialize, Serialize};

/// An ordered reply attached to exactly one feed. `order` is assigned by the
/// server and is monotonic within a feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: i64,
    #[serde(rename = "feedId")]
    pub feed_id: i64,
    pub content: String,
    pub order: i64,
}

/// Request payload for creating a comment.
#[derive(Debug, Clone, Serialize)]
pub struct NewComment {
    pub content: String,
}

impl NewComment {
    pub fn new(content: &str) -> Self {
        Self {
            content: content.trim().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_comment_trims_content() {
        assert_eq!(NewComment::new("  nice post \n").content, "nice post");
    }

    #[test]
    fn test_comment_feed_id_uses_wire_name() {
        let json = r#"{"id": 7, "feedId": 3, "content": "hello", "order": 1}"#;
        let comment: Comment = serde_json::from_str(json).unwrap();
        assert_eq!(comment.feed_id, 3);
        assert_eq!(comment.order, 1);
    }
}
