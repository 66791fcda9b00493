use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::Model;

use super::layout::{
    CLEAR_LABEL, GROW_LABEL, SHRINK_LABEL, ScreenLayout, mode_label, screen_layout,
};
use super::style::{button_style, selection_marker_style, swatch_style};
use super::widgets::CanvasWidget;
use super::{overlays, status};

/// Render the complete UI.
pub fn render(model: &Model, frame: &mut Frame) {
    let area = frame.area();
    let layout = screen_layout(area, model.editor.palette().len(), model.editor.size());

    render_mode_bar(model, frame, &layout);
    render_palette(model, frame, &layout);
    render_canvas(model, frame, &layout);
    render_controls(frame, &layout);
    if !status::render_toast_bar(model, frame, layout.status) {
        status::render_status_bar(model, frame, layout.status);
    }

    if model.editor.confirm_pending() {
        overlays::render_confirm_dialog(frame, area);
    } else if model.help_visible {
        overlays::render_help_overlay(model, frame, area);
    }
}

fn render_mode_bar(model: &Model, frame: &mut Frame, layout: &ScreenLayout) {
    for (mode, rect) in &layout.modes {
        let active = *mode == model.editor.paint_mode();
        frame.render_widget(
            Paragraph::new(mode_label(*mode)).style(button_style(active)),
            *rect,
        );
    }
}

fn render_palette(model: &Model, frame: &mut Frame, layout: &ScreenLayout) {
    let selected = model.editor.selected_color();
    for (color, rect) in model.editor.palette().iter().zip(&layout.swatches) {
        let (open, close) = if color == selected {
            ("[", "]")
        } else {
            (" ", " ")
        };
        let line = Line::from(vec![
            Span::styled(open, selection_marker_style()),
            Span::styled("    ", swatch_style(color)),
            Span::styled(close, selection_marker_style()),
        ]);
        frame.render_widget(Paragraph::new(line), *rect);
    }
}

fn render_canvas(model: &Model, frame: &mut Frame, layout: &ScreenLayout) {
    let widget = CanvasWidget::new(model.editor.grid(), layout.canvas)
        .cursor(model.show_cursor.then_some(model.cursor));
    frame.render_widget(widget, layout.canvas.area);
}

fn render_controls(frame: &mut Frame, layout: &ScreenLayout) {
    let style = button_style(false);
    frame.render_widget(Paragraph::new(SHRINK_LABEL).style(style), layout.shrink);
    frame.render_widget(Paragraph::new(CLEAR_LABEL).style(style), layout.clear);
    frame.render_widget(Paragraph::new(GROW_LABEL).style(style), layout.grow);
}
