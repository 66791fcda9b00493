//! Colors and styles for the editor chrome.
//!
//! Pixel and swatch colors are drawn as true-color backgrounds; the
//! chrome sticks to ANSI colors so it follows the terminal theme.

use ratatui::style::{Color, Modifier, Style};

use crate::editor::ColorValue;

pub const fn to_terminal_color(color: ColorValue) -> Color {
    Color::Rgb(color.r, color.g, color.b)
}

/// Foreground that stays readable on top of `color`.
pub fn contrast_fg(color: ColorValue) -> Color {
    if color.is_light() {
        Color::Black
    } else {
        Color::White
    }
}

pub fn swatch_style(color: ColorValue) -> Style {
    Style::default().bg(to_terminal_color(color))
}

pub fn button_style(active: bool) -> Style {
    if active {
        Style::default()
            .bg(Color::Blue)
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    }
}

pub fn selection_marker_style() -> Style {
    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
}

pub fn status_style() -> Style {
    Style::default().bg(Color::DarkGray).fg(Color::White)
}

pub fn dialog_style() -> Style {
    Style::default().bg(Color::Black).fg(Color::White)
}

pub fn dim_style() -> Style {
    Style::default().fg(Color::Indexed(245))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_color_is_true_color() {
        assert_eq!(
            to_terminal_color(ColorValue::rgb(1, 2, 3)),
            Color::Rgb(1, 2, 3)
        );
    }

    #[test]
    fn test_contrast_fg() {
        assert_eq!(contrast_fg(ColorValue::WHITE), Color::Black);
        assert_eq!(contrast_fg(ColorValue::BLACK), Color::White);
    }

    #[test]
    fn test_active_button_is_highlighted() {
        assert_eq!(button_style(true).bg, Some(Color::Blue));
        assert_eq!(button_style(false).bg, None);
    }
}
