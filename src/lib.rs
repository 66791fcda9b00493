// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. editor::EditorState)
    clippy::module_name_repetitions
)]

//! # Pixelpad
//!
//! A terminal pixel-art editor.
//!
//! Pixelpad paints a square grid of pixels from a fixed palette with:
//! - Single-pixel and flood (recolor-by-equality) painting
//! - Click and drag painting with the mouse, or a keyboard cursor
//! - Growing and shrinking the canvas one step at a time
//! - Clearing back to the startup canvas after confirmation
//!
//! ## Architecture
//!
//! Pixelpad uses The Elm Architecture (TEA) pattern:
//! - **Model**: Application state, built around [`editor::EditorState`]
//! - **Message**: Events and actions
//! - **Update**: Pure state transitions
//! - **View**: Render to terminal
//!
//! ## Modules
//!
//! - [`editor`]: The grid editor model (pure, no terminal types)
//! - [`app`]: Main application loop, input translation and state
//! - [`ui`]: Terminal UI components
//! - [`config`]: Saved command-line defaults
//! - [`perf`]: Timing scopes and the debug event log

pub mod app;
pub mod config;
pub mod editor;
pub mod perf;
pub mod ui;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::app::{App, Message, Model, update};
    pub use crate::editor::{ColorValue, EditorOptions, EditorState, PaintMode, Palette};
}
