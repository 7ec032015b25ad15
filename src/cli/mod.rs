pub mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "corkboard")]
#[command(about = "A terminal client for the corkboard message board", long_about = None)]
pub struct Cli {
    /// Base URL of the board server (overrides the config file)
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all posts and their comments
    List,
    /// Create a new post
    Post {
        /// Post name/title (at most 50 characters)
        #[arg(short, long)]
        name: String,

        /// Post body (at most 1000 characters)
        #[arg(short, long)]
        content: String,
    },
    /// Add a comment to a post
    Comment {
        /// Id of the post to comment on
        feed_id: i64,

        /// Comment text
        content: String,
    },
    /// Launch the TUI
    Tui,
}
