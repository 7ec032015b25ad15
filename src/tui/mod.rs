pub mod app;
pub mod compose;
pub mod event;
pub mod layout;

use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::app::{AppContext, Result};
use crate::board::{self, LoadState};
use crate::tui::compose::Field;

use self::app::{Tab, TuiApp};
use self::event::{Action, AppEvent, EditAction, EventHandler};

type Tui = Terminal<CrosstermBackend<Stdout>>;

pub async fn run(ctx: Arc<AppContext>) -> Result<()> {
    let mut terminal = setup_terminal()?;
    let result = run_app(&mut terminal, ctx).await;
    restore_terminal(&mut terminal)?;
    result
}

fn setup_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

async fn run_app(terminal: &mut Tui, ctx: Arc<AppContext>) -> Result<()> {
    let mut app = TuiApp::new(ctx.config.colors.clone());
    let event_handler = EventHandler::new(Duration::from_millis(100));

    // Show the loading state, then fetch the board.
    terminal.draw(|frame| layout::render(frame, &app))?;
    board::refresh(&mut app.board, ctx.api.as_ref()).await;
    app.clamp_selection();

    loop {
        terminal.draw(|frame| layout::render(frame, &app))?;

        match event_handler.next()? {
            AppEvent::Key(key) => {
                app.clear_status();
                if app.active_tab == Tab::Compose {
                    handle_compose_key(terminal, &mut app, &ctx, key.into()).await?;
                } else if app.writing_comment {
                    handle_draft_key(terminal, &mut app, &ctx, key.into()).await?;
                } else {
                    handle_browse_key(terminal, &mut app, &ctx, key.into()).await?;
                }
            }
            AppEvent::Tick => {}
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

async fn handle_browse_key(
    terminal: &mut Tui,
    app: &mut TuiApp,
    ctx: &AppContext,
    action: Action,
) -> Result<()> {
    match action {
        Action::Quit => {
            app.should_quit = true;
        }
        Action::MoveUp => app.move_up(),
        Action::MoveDown => app.move_down(),
        Action::ScrollUp => app.scroll_up(),
        Action::ScrollDown => app.scroll_down(),
        Action::NextTab => {
            app.active_tab = app.active_tab.next();
        }
        Action::Compose => {
            app.active_tab = Tab::Compose;
        }
        Action::Refresh => {
            refresh_board(terminal, app, ctx).await?;
            if app.board.load == LoadState::Ready {
                app.set_status("Board refreshed".to_string());
            }
        }
        Action::BeginComment => {
            if app.selected_feed().is_some() {
                app.writing_comment = true;
            }
        }
        Action::None => {}
    }
    Ok(())
}

async fn handle_draft_key(
    terminal: &mut Tui,
    app: &mut TuiApp,
    ctx: &AppContext,
    action: EditAction,
) -> Result<()> {
    let Some(feed_id) = app.selected_feed_id() else {
        app.writing_comment = false;
        return Ok(());
    };

    match action {
        EditAction::Cancel => {
            app.writing_comment = false;
        }
        EditAction::Insert(c) => {
            if !app.board.is_submitting(feed_id) {
                app.board.entry(feed_id).draft.push(c);
            }
        }
        EditAction::Backspace => {
            if !app.board.is_submitting(feed_id) {
                app.board.entry(feed_id).draft.pop();
            }
        }
        EditAction::Confirm | EditAction::Submit => {
            // Blank drafts stay put; the submit control is disabled.
            if app.board.can_submit(feed_id) {
                app.board.entry(feed_id).submitting = true;
                terminal.draw(|frame| layout::render(frame, app))?;
                board::submit_comment(&mut app.board, ctx.api.as_ref(), feed_id).await;
            }
        }
        EditAction::NextField | EditAction::None => {}
    }
    Ok(())
}

async fn handle_compose_key(
    terminal: &mut Tui,
    app: &mut TuiApp,
    ctx: &AppContext,
    action: EditAction,
) -> Result<()> {
    if app.compose.submitting {
        return Ok(());
    }

    match action {
        EditAction::Cancel => {
            app.active_tab = Tab::Board;
        }
        EditAction::NextField => {
            app.compose_focus = match app.compose_focus {
                Field::Name => Field::Content,
                Field::Content => Field::Name,
            };
        }
        EditAction::Insert(c) => match app.compose_focus {
            Field::Name => app.compose.name.push(c),
            Field::Content => app.compose.content.push(c),
        },
        EditAction::Backspace => {
            match app.compose_focus {
                Field::Name => app.compose.name.pop(),
                Field::Content => app.compose.content.pop(),
            };
        }
        EditAction::Confirm => match app.compose_focus {
            // Enter moves on from the single-line name field and breaks
            // lines in the body.
            Field::Name => app.compose_focus = Field::Content,
            Field::Content => app.compose.content.push('\n'),
        },
        EditAction::Submit => {
            if app.compose.validate() {
                app.compose.submitting = true;
                terminal.draw(|frame| layout::render(frame, app))?;

                if app.compose.submit(ctx.api.as_ref()).await {
                    // Completion: back to the board, which re-fetches.
                    app.active_tab = Tab::Board;
                    app.compose_focus = Field::Name;
                    refresh_board(terminal, app, ctx).await?;
                    app.set_status("Post published".to_string());
                }
            }
        }
        EditAction::None => {}
    }
    Ok(())
}

async fn refresh_board(terminal: &mut Tui, app: &mut TuiApp, ctx: &AppContext) -> Result<()> {
    app.board.load = LoadState::Loading;
    terminal.draw(|frame| layout::render(frame, app))?;

    board::refresh(&mut app.board, ctx.api.as_ref()).await;
    app.clamp_selection();
    Ok(())
}
