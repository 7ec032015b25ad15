//! # Corkboard
//!
//! A terminal client for a minimal message-board HTTP API: posts ("feeds")
//! with ordered comments, readable and writable from a CLI or an
//! interactive TUI.
//!
//! ## Architecture
//!
//! ```text
//! API Client → Board State → UI (TUI / CLI)
//! ```
//!
//! - [`api`]: JSON-over-HTTP client for the four board operations
//! - [`board`]: client-side state and the flows that sync it with the server
//! - [`tui`]: two-tab terminal interface built with ratatui
//! - [`cli`]: scriptable commands over the same API
//!
//! ## Quick Start
//!
//! ```bash
//! # List posts and comments
//! corkboard list
//!
//! # Write a post
//! corkboard post --name "Alice" --content "hello board"
//!
//! # Comment on post 3
//! corkboard comment 3 "nice post"
//!
//! # Launch the TUI
//! corkboard tui
//! ```

/// Application context and error handling.
///
/// [`AppContext`](app::AppContext) wires configuration to the HTTP client.
pub mod app;

/// JSON-over-HTTP client for the board server.
///
/// - [`BoardApi`](api::BoardApi): async trait over the four operations
/// - [`HttpBoardApi`](api::HttpBoardApi): reqwest-based implementation
pub mod api;

/// Client-side board state and sync flows.
///
/// - [`Board`](board::Board): feed list, per-feed comments, per-feed UI state
/// - [`refresh`](board::refresh) / [`submit_comment`](board::submit_comment):
///   the fetch and write paths
pub mod board;

/// Command-line interface using clap.
///
/// - `list` - Print all posts and their comments
/// - `post` - Create a post
/// - `comment` - Comment on a post
/// - `tui` - Launch the TUI
pub mod cli;

/// Configuration management.
///
/// Loads from `~/.config/corkboard/config.toml`: the API base URL, the
/// request timeout, and TUI colors (named or hex).
pub mod config;

/// Core domain models.
///
/// - [`Feed`](domain::Feed): a post with name, content, creation time
/// - [`Comment`](domain::Comment): an ordered reply to one feed
pub mod domain;

/// Terminal user interface.
///
/// Two tabs: the board (post list, comments, per-post comment drafts) and a
/// compose form with client-side validation.
pub mod tui;
