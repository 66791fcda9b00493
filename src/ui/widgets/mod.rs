//! Custom ratatui widgets.

mod canvas;

pub use canvas::CanvasWidget;
