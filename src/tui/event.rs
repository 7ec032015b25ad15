use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use std::time::Duration;

use crate::app::Result;

pub enum AppEvent {
    Key(KeyEvent),
    Tick,
}

pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        Self { tick_rate }
    }

    pub fn next(&self) -> Result<AppEvent> {
        if event::poll(self.tick_rate)? {
            if let Event::Key(key) = event::read()? {
                return Ok(AppEvent::Key(key));
            }
        }
        Ok(AppEvent::Tick)
    }
}

/// Keys while browsing the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    MoveUp,
    MoveDown,
    ScrollUp,
    ScrollDown,
    NextTab,
    Refresh,
    Compose,
    BeginComment,
    None,
}

impl From<KeyEvent> for Action {
    fn from(key: KeyEvent) -> Self {
        match key.code {
            KeyCode::Char('q') => Action::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
            KeyCode::Char('j') | KeyCode::Down => Action::MoveDown,
            KeyCode::Char('k') | KeyCode::Up => Action::MoveUp,
            KeyCode::Char('n') | KeyCode::PageDown => Action::ScrollDown,
            KeyCode::Char('p') | KeyCode::PageUp => Action::ScrollUp,
            KeyCode::Tab | KeyCode::BackTab => Action::NextTab,
            KeyCode::Char('r') | KeyCode::Char('R') => Action::Refresh,
            KeyCode::Char('w') => Action::Compose,
            KeyCode::Char('c') | KeyCode::Enter => Action::BeginComment,
            _ => Action::None,
        }
    }
}

/// Keys while text input has focus (comment draft or compose fields).
/// `Confirm` is Enter; what it means depends on the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditAction {
    Insert(char),
    Backspace,
    Confirm,
    NextField,
    Submit,
    Cancel,
    None,
}

impl From<KeyEvent> for EditAction {
    fn from(key: KeyEvent) -> Self {
        match key.code {
            KeyCode::Esc => EditAction::Cancel,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                EditAction::Cancel
            }
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                EditAction::Submit
            }
            KeyCode::Enter => EditAction::Confirm,
            KeyCode::Tab | KeyCode::BackTab => EditAction::NextField,
            KeyCode::Backspace => EditAction::Backspace,
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                EditAction::Insert(c)
            }
            _ => EditAction::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    #[test]
    fn test_browse_keys() {
        assert_eq!(Action::from(key(KeyCode::Char('q'))), Action::Quit);
        assert_eq!(Action::from(key(KeyCode::Char('j'))), Action::MoveDown);
        assert_eq!(Action::from(key(KeyCode::Char('c'))), Action::BeginComment);
        assert_eq!(Action::from(key(KeyCode::Char('w'))), Action::Compose);
        assert_eq!(Action::from(key(KeyCode::Char('x'))), Action::None);
    }

    #[test]
    fn test_ctrl_c_quits_browse_but_cancels_editing() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(Action::from(ctrl_c), Action::Quit);
        assert_eq!(EditAction::from(ctrl_c), EditAction::Cancel);
    }

    #[test]
    fn test_edit_keys() {
        assert_eq!(
            EditAction::from(key(KeyCode::Char('a'))),
            EditAction::Insert('a')
        );
        assert_eq!(EditAction::from(key(KeyCode::Enter)), EditAction::Confirm);
        let ctrl_s = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL);
        assert_eq!(EditAction::from(ctrl_s), EditAction::Submit);
    }
}
