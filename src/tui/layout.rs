use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, Paragraph, Tabs, Wrap},
    Frame,
};

use crate::board::LoadState;
use crate::domain::CONTENT_MAX;
use crate::tui::app::{Tab, TuiApp};
use crate::tui::compose::Field;

pub fn render(frame: &mut Frame, app: &TuiApp) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Tab bar
            Constraint::Min(5),    // Body
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_tab_bar(frame, app, chunks[0]);
    match app.active_tab {
        Tab::Board => render_board(frame, app, chunks[1]),
        Tab::Compose => render_compose(frame, app, chunks[1]),
    }
    render_status_bar(frame, app, chunks[2]);
}

fn render_tab_bar(frame: &mut Frame, app: &TuiApp, area: Rect) {
    let tabs = Tabs::new(vec![" Board ", " Compose "])
        .select(app.active_tab.index())
        .style(Style::default().fg(app.colors.inactive_border))
        .highlight_style(
            Style::default()
                .fg(app.colors.active_border)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::BOTTOM));

    frame.render_widget(tabs, area);
}

fn render_board(frame: &mut Frame, app: &TuiApp, area: Rect) {
    match &app.board.load {
        LoadState::Loading => {
            let text = Text::from(vec![
                Line::from(""),
                Line::from("Loading posts..."),
            ]);
            let paragraph = Paragraph::new(text).alignment(Alignment::Center);
            frame.render_widget(paragraph, area);
        }
        LoadState::Failed(message) => {
            let text = Text::from(vec![
                Line::from(""),
                Line::from(Span::styled(
                    message.clone(),
                    Style::default().fg(app.colors.error),
                )),
                Line::from(""),
                Line::from("Press r to retry"),
            ]);
            let paragraph = Paragraph::new(text).alignment(Alignment::Center);
            frame.render_widget(paragraph, area);
        }
        LoadState::Ready if app.board.feeds.is_empty() => {
            let text = Text::from(vec![
                Line::from(""),
                Line::from("No posts yet."),
                Line::from("Press w to write the first one!"),
            ]);
            let paragraph = Paragraph::new(text).alignment(Alignment::Center);
            frame.render_widget(paragraph, area);
        }
        LoadState::Ready => {
            let panes = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
                .split(area);

            render_feed_list(frame, app, panes[0]);
            render_feed_detail(frame, app, panes[1]);
        }
    }
}

fn render_feed_list(frame: &mut Frame, app: &TuiApp, area: Rect) {
    let is_active = !app.writing_comment;
    let border_style = if is_active {
        Style::default().fg(app.colors.active_border)
    } else {
        Style::default().fg(app.colors.inactive_border)
    };

    let items: Vec<ListItem> = app
        .board
        .feeds
        .iter()
        .enumerate()
        .map(|(i, feed)| {
            let comment_count = app.board.comments_for(feed.id).len();
            let label = if comment_count > 0 {
                format!("{} ({})", feed.name, comment_count)
            } else {
                feed.name.clone()
            };

            let style = if i == app.feed_index {
                Style::default()
                    .bg(app.colors.selection_bg)
                    .fg(app.colors.selection_fg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            ListItem::new(Line::from(vec![
                Span::raw(label),
                Span::styled(
                    format!("  {}", feed.created_local()),
                    Style::default().fg(app.colors.date),
                ),
            ]))
            .style(style)
        })
        .collect();

    let title = format!(" Posts ({}) ", app.board.feeds.len());
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(List::new(items).block(block), area);
}

fn render_feed_detail(frame: &mut Frame, app: &TuiApp, area: Rect) {
    let border_style = if app.writing_comment {
        Style::default().fg(app.colors.active_border)
    } else {
        Style::default().fg(app.colors.inactive_border)
    };

    let (title, content) = if let Some(feed) = app.selected_feed() {
        let mut lines = Vec::new();

        lines.push(Line::from(Span::styled(
            feed.name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            feed.created_local(),
            Style::default().fg(app.colors.date),
        )));
        lines.push(Line::from(""));

        // Body with line breaks preserved.
        for line in feed.content.lines() {
            lines.push(Line::from(line.to_string()));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(
            "─".repeat(area.width.saturating_sub(2) as usize),
        ));

        let comments = app.board.comments_for(feed.id);
        lines.push(Line::from(format!("Comments ({})", comments.len())));
        lines.push(Line::from(""));

        if comments.is_empty() {
            lines.push(Line::from(Span::styled(
                "(no comments yet)",
                Style::default().fg(app.colors.inactive_border),
            )));
        }
        for comment in comments {
            push_comment_lines(&mut lines, app, &comment.content, comment.order);
        }

        lines.push(Line::from(""));
        push_comment_box_lines(&mut lines, app, feed.id);

        (format!(" Post #{} ", feed.id), Text::from(lines))
    } else {
        (" Post ".to_string(), Text::from("No post selected"))
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);

    let paragraph = Paragraph::new(content)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((app.detail_scroll, 0));

    frame.render_widget(paragraph, area);
}

fn push_comment_lines(lines: &mut Vec<Line>, app: &TuiApp, content: &str, order: i64) {
    let label = Span::styled(
        format!("#{}", order),
        Style::default().fg(app.colors.comment_order),
    );

    let mut body = content.lines();
    let first = body.next().unwrap_or("");
    lines.push(Line::from(vec![
        label,
        Span::raw(" "),
        Span::raw(first.to_string()),
    ]));
    for rest in body {
        lines.push(Line::from(format!("   {}", rest)));
    }
}

fn push_comment_box_lines(lines: &mut Vec<Line>, app: &TuiApp, feed_id: i64) {
    let draft = app.board.draft(feed_id);
    let submitting = app.board.is_submitting(feed_id);

    let mut input = vec![Span::raw("> "), Span::raw(draft.to_string())];
    if app.writing_comment && !submitting {
        input.push(Span::styled(
            "▌",
            Style::default().fg(app.colors.active_border),
        ));
    }
    lines.push(Line::from(input));

    let hint = if submitting {
        Span::styled(
            "Posting...",
            Style::default().fg(app.colors.date),
        )
    } else if app.writing_comment {
        if app.board.can_submit(feed_id) {
            Span::raw("Enter to post, Esc to cancel")
        } else {
            Span::styled(
                "Type a comment, Esc to cancel",
                Style::default().fg(app.colors.inactive_border),
            )
        }
    } else {
        Span::styled(
            "Press c to write a comment",
            Style::default().fg(app.colors.inactive_border),
        )
    };
    lines.push(Line::from(hint));

    if let Some(error) = app.board.submit_error(feed_id) {
        lines.push(Line::from(Span::styled(
            error.to_string(),
            Style::default().fg(app.colors.error),
        )));
    }
}

fn render_compose(frame: &mut Frame, app: &TuiApp, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Name input
            Constraint::Length(1), // Name error
            Constraint::Min(6),    // Content input
            Constraint::Length(1), // Content error + counter
            Constraint::Length(2), // Form error + hint
        ])
        .split(area);

    render_compose_name(frame, app, chunks[0]);

    if let Some(error) = &app.compose.field_errors.name {
        let paragraph =
            Paragraph::new(error.clone()).style(Style::default().fg(app.colors.error));
        frame.render_widget(paragraph, chunks[1]);
    }

    render_compose_content(frame, app, chunks[2]);
    render_compose_meta(frame, app, chunks[3]);
    render_compose_footer(frame, app, chunks[4]);
}

fn field_border(app: &TuiApp, field: Field) -> Style {
    if app.compose_focus == field {
        Style::default().fg(app.colors.active_border)
    } else {
        Style::default().fg(app.colors.inactive_border)
    }
}

fn render_compose_name(frame: &mut Frame, app: &TuiApp, area: Rect) {
    let mut spans = vec![Span::raw(app.compose.name.clone())];
    if app.compose_focus == Field::Name && !app.compose.submitting {
        spans.push(Span::styled(
            "▌",
            Style::default().fg(app.colors.active_border),
        ));
    }

    let block = Block::default()
        .title(" Name ")
        .borders(Borders::ALL)
        .border_style(field_border(app, Field::Name));

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn render_compose_content(frame: &mut Frame, app: &TuiApp, area: Rect) {
    let mut lines: Vec<Line> = app
        .compose
        .content
        .lines()
        .map(|l| Line::from(l.to_string()))
        .collect();
    if app.compose.content.is_empty() || app.compose.content.ends_with('\n') {
        lines.push(Line::from(""));
    }
    if app.compose_focus == Field::Content && !app.compose.submitting {
        if let Some(last) = lines.last_mut() {
            last.spans.push(Span::styled(
                "▌",
                Style::default().fg(app.colors.active_border),
            ));
        }
    }

    let block = Block::default()
        .title(" Content ")
        .borders(Borders::ALL)
        .border_style(field_border(app, Field::Content));

    let paragraph = Paragraph::new(Text::from(lines))
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn render_compose_meta(frame: &mut Frame, app: &TuiApp, area: Rect) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(12)])
        .split(area);

    if let Some(error) = &app.compose.field_errors.content {
        let paragraph =
            Paragraph::new(error.clone()).style(Style::default().fg(app.colors.error));
        frame.render_widget(paragraph, halves[0]);
    }

    // Live character counter, flagged once the content exceeds the cap.
    let counter_style = if app.compose.over_limit() {
        Style::default().fg(app.colors.error)
    } else {
        Style::default().fg(app.colors.inactive_border)
    };
    let counter = Paragraph::new(format!("{}/{}", app.compose.content_len(), CONTENT_MAX))
        .style(counter_style)
        .alignment(Alignment::Right);
    frame.render_widget(counter, halves[1]);
}

fn render_compose_footer(frame: &mut Frame, app: &TuiApp, area: Rect) {
    let mut lines = Vec::new();

    if let Some(error) = &app.compose.error {
        lines.push(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(app.colors.error),
        )));
    }

    let hint = if app.compose.submitting {
        Span::styled("Publishing...", Style::default().fg(app.colors.date))
    } else {
        Span::styled(
            "Ctrl+S: publish  Tab: switch field  Esc: back to board",
            Style::default().fg(app.colors.inactive_border),
        )
    };
    lines.push(Line::from(hint));

    frame.render_widget(Paragraph::new(Text::from(lines)), area);
}

fn render_status_bar(frame: &mut Frame, app: &TuiApp, area: Rect) {
    let status = if let Some(ref msg) = app.status_message {
        msg.clone()
    } else if app.active_tab == Tab::Compose {
        "Ctrl+S:Publish  Tab:Field  Esc:Board".to_string()
    } else if app.writing_comment {
        "Enter:Post  Esc:Cancel".to_string()
    } else {
        "j/k:Select  c:Comment  w:Write  r:Refresh  Tab:Switch  q:Quit".to_string()
    };

    let paragraph = Paragraph::new(status)
        .style(Style::default().fg(app.colors.status_fg).bg(app.colors.status_bg));

    frame.render_widget(paragraph, area);
}
