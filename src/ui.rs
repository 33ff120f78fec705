use ratatui::{
    layout::{Constraint, Direction, Layout, Position as CursorPosition, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, STATUS_LINE_HEIGHT};

/// Render the text area and the status line
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),                     // Text
            Constraint::Length(STATUS_LINE_HEIGHT), // Status line
        ])
        .split(frame.area());

    render_text(frame, app, chunks[0]);
    render_status_line(frame, app, chunks[1]);
}

fn render_text(frame: &mut Frame, app: &App, area: Rect) {
    let document = app.document();
    let lines: Vec<Line> = document.visible_lines().map(Line::from).collect();
    frame.render_widget(Paragraph::new(lines), area);

    let scroll_view = document.view().scroll_view();
    if let Some(cursor) = scroll_view.position_in_view(document.caret()) {
        frame.set_cursor_position(CursorPosition::new(
            area.x + cursor.column as u16,
            area.y + cursor.line as u16,
        ));
    }
}

fn render_status_line(frame: &mut Frame, app: &App, area: Rect) {
    let document = app.document();
    let caret = document.caret();
    let name = app
        .path()
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| "[No Name]".to_string());

    let mut status = format!(
        "{}  View {} Ln {} Col {}",
        name,
        document.view().scroll_view(),
        caret.line + 1,
        caret.column + 1
    );
    if let Some(message) = app.message() {
        status.push_str("  ");
        status.push_str(message);
    }

    let paragraph =
        Paragraph::new(status).style(Style::default().add_modifier(Modifier::REVERSED));
    frame.render_widget(paragraph, area);
}
