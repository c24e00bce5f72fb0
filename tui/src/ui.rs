//! Rendering.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::TodoApp;

/// Placeholder shown while the input is empty.
const PLACEHOLDER: &str = "Add a new todo";
/// Shown in place of the list while it has no items.
const EMPTY_LIST: &str = "No todos yet. Add your first todo above!";

/// Draw the whole screen.
pub fn draw<S>(frame: &mut Frame, app: &TodoApp<S>) {
    // The banner row only takes space while there is an error to show.
    let banner_height = if app.error.is_some() { 3 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),             // title
            Constraint::Length(banner_height), // error banner
            Constraint::Length(3),             // input
            Constraint::Min(1),                // todo list
        ])
        .split(frame.area());

    draw_title(frame, chunks[0]);
    draw_error(frame, app, chunks[1]);
    draw_input(frame, app, chunks[2]);
    draw_todos(frame, app, chunks[3]);
}

fn draw_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(Line::from(Span::styled(
        "Todo App",
        Style::default().add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(title, area);
}

fn draw_error<S>(frame: &mut Frame, app: &TodoApp<S>, area: Rect) {
    let Some(error) = &app.error else {
        return;
    };
    let banner = Paragraph::new(Line::from(Span::styled(
        error.as_str(),
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Red)),
    );
    frame.render_widget(banner, area);
}

fn draw_input<S>(frame: &mut Frame, app: &TodoApp<S>, area: Rect) {
    let content = if app.input.is_empty() {
        Line::from(Span::styled(
            PLACEHOLDER,
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(app.input.as_str())
    };

    let hints = vec![
        Span::styled("Enter", Style::default().fg(Color::Yellow)),
        Span::raw(" add  "),
        Span::styled("Esc", Style::default().fg(Color::Yellow)),
        Span::raw(" quit "),
    ];

    let input = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title_bottom(Line::from(hints).alignment(Alignment::Right)),
    );
    frame.render_widget(input, area);

    // Cursor sits after the typed text, inside the border.
    let cursor_x = area.x + 1 + app.input.width() as u16;
    let cursor_y = area.y + 1;
    frame.set_cursor_position((cursor_x, cursor_y));
}

fn draw_todos<S>(frame: &mut Frame, app: &TodoApp<S>, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(" Todos ")
        .padding(Padding::horizontal(1));

    if app.todos.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            EMPTY_LIST,
            Style::default().fg(Color::DarkGray),
        )))
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let lines: Vec<Line> = app
        .todos
        .iter()
        .map(|todo| {
            Line::from(vec![
                Span::styled("• ", Style::default().fg(Color::Green)),
                Span::raw(todo.text.as_str()),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
