use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph};

use crate::app::Model;

use super::style::{button_style, dialog_style, dim_style};

pub const CONFIRM_PROMPT: &str = "Are you sure you want to erase your hard work?";
pub const CANCEL_LABEL: &str = "[ cancel ]";
pub const CONFIRM_LABEL: &str = "[ confirm ]";

/// Where the clear-confirmation dialog and its two buttons sit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfirmDialogLayout {
    pub popup: Rect,
    pub cancel: Rect,
    pub confirm: Rect,
}

pub fn confirm_dialog_layout(area: Rect) -> ConfirmDialogLayout {
    #[allow(clippy::cast_possible_truncation)]
    let prompt_width = CONFIRM_PROMPT.len() as u16;
    // border(1) + padding(1) on each side
    let popup = centered_popup_rect(prompt_width + 4, 7, area);
    let content_x = popup.x + 2;
    // prompt, blank line, buttons
    let button_row = popup.y + 4;
    #[allow(clippy::cast_possible_truncation)]
    let cancel = Rect::new(content_x, button_row, CANCEL_LABEL.len() as u16, 1);
    #[allow(clippy::cast_possible_truncation)]
    let confirm = Rect::new(
        cancel.right() + 3,
        button_row,
        CONFIRM_LABEL.len() as u16,
        1,
    );
    ConfirmDialogLayout {
        popup,
        cancel: cancel.intersection(popup),
        confirm: confirm.intersection(popup),
    }
}

pub fn render_confirm_dialog(frame: &mut Frame, area: Rect) {
    let layout = confirm_dialog_layout(area);
    let block = Block::default()
        .title("Clear canvas")
        .borders(Borders::ALL)
        .padding(Padding::uniform(1))
        .style(dialog_style());
    let prompt = Paragraph::new(Line::styled(
        CONFIRM_PROMPT,
        Style::default().add_modifier(Modifier::BOLD),
    ))
    .block(block);

    frame.render_widget(Clear, layout.popup);
    frame.render_widget(prompt, layout.popup);
    frame.render_widget(
        Paragraph::new(CANCEL_LABEL).style(button_style(false)),
        layout.cancel,
    );
    frame.render_widget(
        Paragraph::new(CONFIRM_LABEL).style(button_style(true)),
        layout.confirm,
    );
}

pub fn render_help_overlay(model: &Model, frame: &mut Frame, area: Rect) {
    let popup_width = area.width.saturating_sub(12).max(48);
    let popup_height = area.height.saturating_sub(4).max(12);
    let popup = centered_popup_rect(popup_width, popup_height, area);

    let section_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::styled("Paint", section_style));
    lines.push(Line::raw("  Click               Paint pixel"));
    lines.push(Line::raw("  Click + drag        Paint while moving"));
    lines.push(Line::raw("  Arrows / hjkl       Move cursor"));
    lines.push(Line::raw("  Space / Enter       Paint at cursor"));
    lines.push(Line::raw(""));

    lines.push(Line::styled("Colors & mode", section_style));
    lines.push(Line::raw(format!(
        "  1-{}                 Select swatch",
        model.editor.palette().len().min(9)
    )));
    lines.push(Line::raw("  [ / ]               Previous / next color"));
    lines.push(Line::raw("  s / f               Single / flood mode"));
    lines.push(Line::raw("  m                   Toggle mode"));
    lines.push(Line::raw(""));

    lines.push(Line::styled("Canvas", section_style));
    lines.push(Line::raw("  + / =               Grow by one"));
    lines.push(Line::raw("  -                   Shrink by one"));
    lines.push(Line::raw("  c                   Clear (asks first)"));
    lines.push(Line::raw(""));

    lines.push(Line::styled("Other", section_style));
    lines.push(Line::raw("  ? / F1              Toggle help"));
    lines.push(Line::raw("  q / Ctrl-c          Quit"));

    let block = Block::default()
        .title("Help")
        .borders(Borders::ALL)
        .padding(Padding::uniform(1))
        .style(dialog_style());

    frame.render_widget(Clear, popup);
    frame.render_widget(block, popup);

    // Inner area: border(1) + padding(1) on each side = 4
    let inner = Rect::new(
        popup.x + 2,
        popup.y + 2,
        popup.width.saturating_sub(4),
        popup.height.saturating_sub(4),
    );
    let content_height = inner.height.saturating_sub(1);
    let content_area = Rect::new(inner.x, inner.y, inner.width, content_height);
    frame.render_widget(Paragraph::new(lines), content_area);

    let footer_area = Rect::new(inner.x, inner.y + content_height, inner.width, 1);
    let footer = Line::styled("any key closes", dim_style());
    frame.render_widget(Paragraph::new(footer), footer_area);
}

fn centered_popup_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w) / 2);
    let y = area.y + (area.height.saturating_sub(h) / 2);
    Rect::new(x, y, w, h)
}
