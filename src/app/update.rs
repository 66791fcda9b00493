use crate::app::model::Direction;
use crate::app::{Model, ToastLevel};
use crate::editor::{ColorValue, PaintMode};

/// All possible events and actions in the application.
///
/// The first groups are the editor operations the canvas understands; the
/// pointer variants translate mouse gestures into those operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // Palette
    /// Select a palette color
    SelectColor(ColorValue),
    /// Select the palette color at an index
    SelectSwatch(usize),
    /// Select the next palette color, wrapping around
    NextColor,
    /// Select the previous palette color, wrapping around
    PrevColor,

    // Paint mode
    /// Switch between single and flood painting
    SetPaintMode(PaintMode),
    /// Flip the current paint mode
    TogglePaintMode,

    // Painting
    /// Paint a pixel with the selected color in the current mode
    PaintPixel(usize),
    /// Paint a pixel the pointer entered, if dragging
    DragPaint(usize),
    /// Set the drag (button held) state
    SetDragging(bool),
    /// Left button pressed over a pixel
    PointerDown(usize),
    /// Pointer moved onto a pixel with the button held
    PointerEnter(usize),
    /// Left button released, over a pixel or elsewhere
    PointerUp(Option<usize>),
    /// Pointer left the canvas
    PointerLeave,
    /// Move the keyboard cursor
    MoveCursor(Direction),
    /// Paint the pixel under the keyboard cursor
    PaintAtCursor,

    // Canvas size
    /// Grow the canvas by one row and column's worth of pixels
    IncreaseSize,
    /// Shrink the canvas by one
    DecreaseSize,

    // Clear
    /// Ask for confirmation before clearing
    RequestClear,
    /// Dismiss the clear confirmation
    CancelClear,
    /// Clear the canvas back to its startup state
    ConfirmClear,

    // Overlays
    /// Toggle help overlay
    ToggleHelp,
    /// Hide help overlay
    HideHelp,

    // Window
    /// Terminal resized
    Resize(u16, u16),
    /// Redraw screen
    Redraw,

    // Application
    /// Quit the application
    Quit,
}

impl Message {
    /// Whether the message may act while the clear confirmation is shown.
    const fn allowed_while_confirming(&self) -> bool {
        matches!(
            self,
            Self::CancelClear
                | Self::ConfirmClear
                | Self::SetDragging(_)
                | Self::PointerUp(_)
                | Self::PointerLeave
                | Self::Resize(_, _)
                | Self::Redraw
                | Self::Quit
        )
    }
}

/// Pure function that updates the model based on a message.
///
/// This is the core of TEA - all state transitions happen here.
/// No side effects should occur in this function.
pub fn update(mut model: Model, msg: Message) -> Model {
    if model.editor.confirm_pending() && !msg.allowed_while_confirming() {
        tracing::debug!(?msg, "ignored while clear confirmation is pending");
        return model;
    }

    match msg {
        // Palette
        Message::SelectColor(color) => {
            model.editor = model.editor.select_color(color);
        }
        Message::SelectSwatch(idx) => {
            if let Some(color) = model.editor.palette().get(idx) {
                model.editor = model.editor.select_color(color);
            }
        }
        Message::NextColor | Message::PrevColor => {
            let palette = model.editor.palette();
            let len = palette.len();
            let current = palette
                .index_of(model.editor.selected_color())
                .unwrap_or(0);
            let next = if msg == Message::NextColor {
                (current + 1) % len
            } else {
                (current + len - 1) % len
            };
            if let Some(color) = palette.get(next) {
                model.editor = model.editor.select_color(color);
            }
        }

        // Paint mode
        Message::SetPaintMode(mode) => {
            model.editor = model.editor.set_paint_mode(mode);
        }
        Message::TogglePaintMode => {
            let mode = model.editor.paint_mode().toggled();
            model.editor = model.editor.set_paint_mode(mode);
        }

        // Painting
        Message::PaintPixel(id) => {
            model.editor = model.editor.paint_pixel(id);
        }
        Message::DragPaint(id) => {
            model.editor = model.editor.drag_paint(id);
        }
        Message::SetDragging(value) => {
            model.editor = model.editor.set_dragging(value);
        }
        Message::PointerDown(id) => {
            model.pressed = Some(id);
            model.hovered = Some(id);
            model.cursor = id;
            model.show_cursor = false;
            model.editor = model.editor.set_dragging(true);
        }
        Message::PointerEnter(id) => {
            // Repeated motion reports inside the same pixel are not an enter.
            if model.hovered != Some(id) {
                model.hovered = Some(id);
                model.editor = model.editor.drag_paint(id);
            }
        }
        Message::PointerUp(over) => {
            model.editor = model.editor.set_dragging(false);
            // A press and release on the same pixel is a click.
            if let Some(id) = over
                && model.pressed == Some(id)
            {
                model.editor = model.editor.paint_pixel(id);
            }
            model.pressed = None;
            model.hovered = None;
        }
        Message::PointerLeave => {
            model.editor = model.editor.set_dragging(false);
            model.hovered = None;
        }
        Message::MoveCursor(direction) => {
            model.move_cursor(direction);
        }
        Message::PaintAtCursor => {
            model.show_cursor = true;
            if model.cursor_visible() {
                model.editor = model.editor.paint_pixel(model.cursor);
            } else {
                tracing::debug!(cursor = model.cursor, "paint at cursor ignored: off-screen");
            }
        }

        // Canvas size
        Message::IncreaseSize => {
            model.editor = model.editor.increase_size();
        }
        Message::DecreaseSize => {
            if model.editor.size() <= 1 {
                model.show_toast(ToastLevel::Warning, "Canvas is already 1x1");
            }
            model.editor = model.editor.decrease_size();
            model.clamp_cursor();
        }

        // Clear
        Message::RequestClear => {
            model.help_visible = false;
            model.editor = model.editor.request_clear();
        }
        Message::CancelClear => {
            model.editor = model.editor.cancel_clear();
        }
        Message::ConfirmClear => {
            let was_pending = model.editor.confirm_pending();
            model.editor = model.editor.confirm_clear();
            model.clamp_cursor();
            if was_pending {
                let size = model.editor.options().initial_size();
                model.show_toast(ToastLevel::Info, format!("Canvas cleared to {size}x{size}"));
            }
        }

        // Overlays
        Message::ToggleHelp => {
            model.help_visible = !model.help_visible;
        }
        Message::HideHelp => {
            model.help_visible = false;
        }

        // Window
        Message::Resize(width, height) => {
            model.terminal_size = (width, height);
            model.clamp_cursor();
        }
        // Redraw: no state change needed
        Message::Redraw => {}

        // Application
        Message::Quit => {
            model.should_quit = true;
        }
    }
    model
}
