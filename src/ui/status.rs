use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::{Model, ToastLevel};

use super::style::status_style;

pub fn render_status_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let editor = &model.editor;
    let size = editor.size();
    let (row, col) = (model.cursor / size, model.cursor % size);
    let drag_indicator = if editor.is_dragging() { " [drag]" } else { "" };
    let under_cursor = editor
        .grid()
        .pixel_at(row, col)
        .map(|pixel| pixel.color.to_string())
        .unwrap_or_default();
    let offscreen = if model.cursor_visible() {
        ""
    } else {
        " (off-screen)"
    };

    let status = format!(
        " {size}x{size}  {}  {}  cursor {row},{col} {under_cursor}{offscreen}{drag_indicator}  ?:help",
        editor.paint_mode().label(),
        editor.selected_color(),
    );
    frame.render_widget(Paragraph::new(status).style(status_style()), area);
}

/// Draw the active toast over the status bar. Returns false if there is none.
pub fn render_toast_bar(model: &Model, frame: &mut Frame, area: Rect) -> bool {
    let Some((message, level)) = model.active_toast() else {
        return false;
    };
    let (prefix, style) = match level {
        ToastLevel::Info => ("[info]", status_style()),
        ToastLevel::Warning => (
            "[warn]",
            Style::default().bg(Color::Yellow).fg(Color::Black),
        ),
    };
    let toast = Paragraph::new(format!(" {prefix} {message}")).style(style);
    frame.render_widget(toast, area);
    true
}
