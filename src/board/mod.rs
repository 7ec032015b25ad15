//! Client-side state for the board and the flows that keep it in sync with
//! the server.
//!
//! The [`Board`] is owned by whichever view tree is running (TUI or a CLI
//! command) and lives only as long as it does. All mutation happens through
//! the flow functions in this module, which take the API client as a trait
//! object so tests can drive them with a scripted double.

use std::collections::HashMap;

use futures::stream::{self, StreamExt};

use crate::api::BoardApi;
use crate::domain::{Comment, Feed, NewComment};

/// Concurrent comment fetches after a feed-list reload.
const COMMENT_FETCH_WORKERS: usize = 8;

/// Whole-view state of the feed-list fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Failed(String),
    Ready,
}

/// Transient per-feed UI state, keyed by feed id in a flat map so its
/// lifetime is independent of any particular `Feed` value.
#[derive(Debug, Clone, Default)]
pub struct CommentBox {
    pub draft: String,
    pub submitting: bool,
    pub error: Option<String>,
}

pub struct Board {
    pub feeds: Vec<Feed>,
    pub comments: HashMap<i64, Vec<Comment>>,
    pub entries: HashMap<i64, CommentBox>,
    pub load: LoadState,
}

impl Board {
    pub fn new() -> Self {
        Self {
            feeds: Vec::new(),
            comments: HashMap::new(),
            entries: HashMap::new(),
            load: LoadState::Loading,
        }
    }

    pub fn entry(&mut self, feed_id: i64) -> &mut CommentBox {
        self.entries.entry(feed_id).or_default()
    }

    pub fn draft(&self, feed_id: i64) -> &str {
        self.entries
            .get(&feed_id)
            .map(|e| e.draft.as_str())
            .unwrap_or("")
    }

    pub fn is_submitting(&self, feed_id: i64) -> bool {
        self.entries
            .get(&feed_id)
            .map(|e| e.submitting)
            .unwrap_or(false)
    }

    pub fn submit_error(&self, feed_id: i64) -> Option<&str> {
        self.entries
            .get(&feed_id)
            .and_then(|e| e.error.as_deref())
    }

    /// Whether the submit control for this feed is enabled: a non-blank
    /// draft and no submission already in flight.
    pub fn can_submit(&self, feed_id: i64) -> bool {
        !self.draft(feed_id).trim().is_empty() && !self.is_submitting(feed_id)
    }

    pub fn comments_for(&self, feed_id: i64) -> &[Comment] {
        self.comments
            .get(&feed_id)
            .map(|c| c.as_slice())
            .unwrap_or(&[])
    }

    fn apply_comments(&mut self, feed_id: i64, mut comments: Vec<Comment>) {
        comments.sort_by_key(|c| c.order);
        self.comments.insert(feed_id, comments);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Reload the feed list, then the comments of every listed feed.
///
/// On success the feed list is replaced wholesale. On failure the previous
/// list is kept and `load` records the message for the retry view; invoking
/// this function again is the retry.
pub async fn refresh(board: &mut Board, api: &dyn BoardApi) {
    board.load = LoadState::Loading;

    match api.list_feeds().await {
        Ok(feeds) => {
            board.feeds = feeds;
            board.load = LoadState::Ready;
            refresh_all_comments(board, api).await;
        }
        Err(e) => {
            tracing::error!("Failed to fetch feeds: {}", e);
            board.load = LoadState::Failed(e.to_string());
        }
    }
}

/// Fetch comments for every feed currently in the list, one independent
/// request per feed. A failed fetch is logged and leaves that feed's
/// previous comment list in place; it never blocks the other feeds.
async fn refresh_all_comments(board: &mut Board, api: &dyn BoardApi) {
    let ids: Vec<i64> = board.feeds.iter().map(|f| f.id).collect();

    let mut fetches = stream::iter(ids)
        .map(|id| async move { (id, api.list_comments(id).await) })
        .buffer_unordered(COMMENT_FETCH_WORKERS);

    while let Some((feed_id, result)) = fetches.next().await {
        match result {
            Ok(comments) => board.apply_comments(feed_id, comments),
            Err(e) => {
                tracing::warn!("Failed to fetch comments for feed {}: {}", feed_id, e);
            }
        }
    }
}

/// Refresh one feed's comment list. Failures are logged only.
pub async fn refresh_comments(board: &mut Board, api: &dyn BoardApi, feed_id: i64) {
    match api.list_comments(feed_id).await {
        Ok(comments) => board.apply_comments(feed_id, comments),
        Err(e) => {
            tracing::warn!("Failed to fetch comments for feed {}: {}", feed_id, e);
        }
    }
}

/// Submit the draft comment for one feed.
///
/// A blank draft is a no-op. The submitting flag is cleared on both the
/// success and the failure path. Success clears the draft and re-fetches
/// that feed's comments so the server-assigned id and order are
/// authoritative; there is no optimistic local append.
pub async fn submit_comment(board: &mut Board, api: &dyn BoardApi, feed_id: i64) {
    let content = board.draft(feed_id).trim().to_string();
    if content.is_empty() {
        return;
    }

    board.entry(feed_id).submitting = true;
    let result = api.create_comment(feed_id, &NewComment::new(&content)).await;
    let slot = board.entry(feed_id);
    slot.submitting = false;

    match result {
        Ok(comment) => {
            slot.draft.clear();
            slot.error = None;
            tracing::debug!("Created comment {} on feed {}", comment.id, feed_id);
            refresh_comments(board, api, feed_id).await;
        }
        Err(e) => {
            tracing::error!("Failed to create comment on feed {}: {}", feed_id, e);
            slot.error = Some(e.to_string());
        }
    }
}
