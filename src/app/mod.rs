//! Application state and main event loop.
//!
//! This module implements The Elm Architecture (TEA):
//! - [`Model`]: The complete application state
//! - [`Message`]: All possible events and actions
//! - [`update`]: Pure function for state transitions
//! - [`App::run`]: Main event loop with rendering

mod event_loop;
mod input;
mod model;
mod update;

pub use model::{Direction, Model, ToastLevel};
pub use update::{Message, update};

use crate::editor::{EditorOptions, PaintMode};

/// Main application struct that owns the terminal and runs the event loop.
pub struct App {
    options: EditorOptions,
    paint_mode: PaintMode,
    mouse_enabled: bool,
}

impl App {
    /// Create a new application with the given canvas options.
    pub const fn new(options: EditorOptions) -> Self {
        Self {
            options,
            paint_mode: PaintMode::Single,
            mouse_enabled: true,
        }
    }

    /// Start in a specific paint mode.
    #[must_use]
    pub const fn with_paint_mode(mut self, mode: PaintMode) -> Self {
        self.paint_mode = mode;
        self
    }

    /// Enable or disable mouse painting.
    #[must_use]
    pub const fn with_mouse(mut self, enabled: bool) -> Self {
        self.mouse_enabled = enabled;
        self
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(EditorOptions::default())
    }
}
