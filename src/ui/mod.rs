//! Terminal UI components.
//!
//! This module contains all UI-related code including:
//! - [`layout`]: Screen geometry shared with mouse hit testing
//! - [`widgets`]: Ratatui widgets for rendering
//! - [`style`]: Colors and styles

pub mod layout;
pub mod style;
pub mod widgets;

mod overlays;
mod render;
mod status;

pub use layout::{CanvasLayout, Hit, ScreenLayout, screen_layout};
pub use overlays::{ConfirmDialogLayout, confirm_dialog_layout};
pub use render::render;
