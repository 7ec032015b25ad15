use crate::board::Board;
use crate::config::ColorConfig;
use crate::domain::Feed;
use crate::tui::compose::{ComposeForm, Field};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Board,
    Compose,
}

impl Tab {
    pub fn next(self) -> Self {
        match self {
            Tab::Board => Tab::Compose,
            Tab::Compose => Tab::Board,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Tab::Board => 0,
            Tab::Compose => 1,
        }
    }
}

pub struct TuiApp {
    pub active_tab: Tab,
    pub board: Board,
    pub compose: ComposeForm,
    pub compose_focus: Field,
    /// Keys go to the selected feed's comment draft while set.
    pub writing_comment: bool,
    pub feed_index: usize,
    pub detail_scroll: u16,
    pub should_quit: bool,
    pub status_message: Option<String>,
    pub colors: ColorConfig,
}

impl TuiApp {
    pub fn new(colors: ColorConfig) -> Self {
        Self {
            active_tab: Tab::Board,
            board: Board::new(),
            compose: ComposeForm::default(),
            compose_focus: Field::Name,
            writing_comment: false,
            feed_index: 0,
            detail_scroll: 0,
            should_quit: false,
            status_message: None,
            colors,
        }
    }

    pub fn selected_feed(&self) -> Option<&Feed> {
        self.board.feeds.get(self.feed_index)
    }

    pub fn selected_feed_id(&self) -> Option<i64> {
        self.selected_feed().map(|f| f.id)
    }

    pub fn move_up(&mut self) {
        if self.feed_index > 0 {
            self.feed_index -= 1;
            self.detail_scroll = 0;
        }
    }

    pub fn move_down(&mut self) {
        if !self.board.feeds.is_empty() && self.feed_index < self.board.feeds.len() - 1 {
            self.feed_index += 1;
            self.detail_scroll = 0;
        }
    }

    pub fn scroll_up(&mut self) {
        self.detail_scroll = self.detail_scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        self.detail_scroll = self.detail_scroll.saturating_add(1);
    }

    /// Keep the selection valid after the feed list was replaced.
    pub fn clamp_selection(&mut self) {
        if self.board.feeds.is_empty() {
            self.feed_index = 0;
        } else if self.feed_index >= self.board.feeds.len() {
            self.feed_index = self.board.feeds.len() - 1;
        }
    }

    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn app_with_feeds(count: i64) -> TuiApp {
        let mut app = TuiApp::new(ColorConfig::default());
        app.board.feeds = (1..=count)
            .map(|id| Feed {
                id,
                name: format!("post {}", id),
                content: "body".to_string(),
                created_at: Utc::now(),
            })
            .collect();
        app
    }

    #[test]
    fn test_selection_moves_within_bounds() {
        let mut app = app_with_feeds(2);
        assert_eq!(app.selected_feed_id(), Some(1));

        app.move_up();
        assert_eq!(app.selected_feed_id(), Some(1));

        app.move_down();
        assert_eq!(app.selected_feed_id(), Some(2));

        app.move_down();
        assert_eq!(app.selected_feed_id(), Some(2));
    }

    #[test]
    fn test_clamp_selection_after_shorter_reload() {
        let mut app = app_with_feeds(3);
        app.feed_index = 2;

        app.board.feeds.truncate(1);
        app.clamp_selection();
        assert_eq!(app.feed_index, 0);

        app.board.feeds.clear();
        app.clamp_selection();
        assert_eq!(app.feed_index, 0);
        assert!(app.selected_feed().is_none());
    }
}
