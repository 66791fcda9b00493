use std::time::{Duration, Instant};

use ratatui::layout::Rect;

use crate::editor::EditorState;
use crate::ui::{ConfirmDialogLayout, ScreenLayout, confirm_dialog_layout, screen_layout};

const TOAST_DURATION: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Warning,
}

#[derive(Debug, Clone)]
struct Toast {
    level: ToastLevel,
    message: String,
    expires_at: Instant,
}

/// Direction for keyboard cursor movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// The complete application state.
///
/// All state lives here - no global or scattered state. The drawing itself
/// is the [`EditorState`]; the other fields only serve the terminal.
#[derive(Debug, Clone)]
pub struct Model {
    /// The grid editor model
    pub editor: EditorState,
    /// Keyboard cursor, as a pixel id
    pub cursor: usize,
    /// Whether the cursor glyph is drawn (after keyboard use)
    pub show_cursor: bool,
    /// Whether help overlay is visible
    pub help_visible: bool,
    /// Whether mouse input is translated into messages
    pub mouse_enabled: bool,
    /// Whether the app should quit
    pub should_quit: bool,
    /// Terminal width and height
    pub terminal_size: (u16, u16),
    /// Pixel under the last left-button press, for click detection
    pub(super) pressed: Option<usize>,
    /// Pixel the pointer is currently over while dragging
    pub(super) hovered: Option<usize>,
    toast: Option<Toast>,
}

impl Model {
    pub const fn new(editor: EditorState, terminal_size: (u16, u16)) -> Self {
        Self {
            editor,
            cursor: 0,
            show_cursor: false,
            help_visible: false,
            mouse_enabled: true,
            should_quit: false,
            terminal_size,
            pressed: None,
            hovered: None,
            toast: None,
        }
    }

    #[must_use]
    pub const fn with_mouse(mut self, enabled: bool) -> Self {
        self.mouse_enabled = enabled;
        self
    }

    pub const fn area(&self) -> Rect {
        Rect::new(0, 0, self.terminal_size.0, self.terminal_size.1)
    }

    /// Screen layout for the current terminal size and canvas.
    pub fn layout(&self) -> ScreenLayout {
        screen_layout(
            self.area(),
            self.editor.palette().len(),
            self.editor.size(),
        )
    }

    pub fn confirm_dialog_layout(&self) -> ConfirmDialogLayout {
        confirm_dialog_layout(self.area())
    }

    /// Whether the cursor pixel is drawn on screen (not clipped away).
    pub fn cursor_visible(&self) -> bool {
        self.layout().canvas.pixel_rect(self.cursor).is_some()
    }

    /// Move the cursor one pixel, staying on the visible part of the canvas.
    pub(super) fn move_cursor(&mut self, direction: Direction) {
        let size = self.editor.size();
        let (mut row, mut col) = (self.cursor / size, self.cursor % size);
        match direction {
            Direction::Up => row = row.saturating_sub(1),
            Direction::Down => row = (row + 1).min(size - 1),
            Direction::Left => col = col.saturating_sub(1),
            Direction::Right => col = (col + 1).min(size - 1),
        }
        let target = row * size + col;
        if self.layout().canvas.pixel_rect(target).is_some() {
            self.cursor = target;
        }
        self.show_cursor = true;
    }

    /// Keep the cursor on the canvas after it shrinks, and on screen after
    /// the terminal does.
    pub(super) fn clamp_cursor(&mut self) {
        let last = self.editor.grid().len() - 1;
        self.cursor = self.cursor.min(last);
        if !self.cursor_visible() {
            self.cursor = 0;
        }
    }

    pub(super) fn show_toast(&mut self, level: ToastLevel, message: impl Into<String>) {
        self.toast = Some(Toast {
            level,
            message: message.into(),
            expires_at: Instant::now() + TOAST_DURATION,
        });
    }

    pub(super) fn expire_toast(&mut self, now: Instant) -> bool {
        if self
            .toast
            .as_ref()
            .is_some_and(|toast| toast.expires_at <= now)
        {
            self.toast = None;
            return true;
        }
        false
    }

    pub fn active_toast(&self) -> Option<(&str, ToastLevel)> {
        self.toast
            .as_ref()
            .map(|toast| (toast.message.as_str(), toast.level))
    }
}

// Implement Default for Model to allow std::mem::take
impl Default for Model {
    fn default() -> Self {
        Self::new(EditorState::default(), (80, 24))
    }
}
