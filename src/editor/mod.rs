//! The grid editor model.
//!
//! Owns the pixel grid, selected color, paint mode, drag state and the
//! pending-clear flag. Nothing here knows about terminals or events:
//! every operation is a pure transition `EditorState -> EditorState`,
//! driven from [`crate::app::update`].

mod color;
mod grid;
mod state;

pub use color::{ColorValue, DEFAULT_COLORS, Palette, PaletteError};
pub use grid::{Grid, Pixel};
pub use state::{
    DEFAULT_INITIAL_SIZE, EditorOptions, EditorState, MAX_INITIAL_SIZE, OptionsError, PaintMode,
};
