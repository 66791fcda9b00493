use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::app::model::Direction;
use crate::app::{App, Message, Model};
use crate::editor::PaintMode;
use crate::ui::Hit;
use crate::ui::layout::point_in_rect;

impl App {
    pub(super) fn handle_event(event: &Event, model: &Model) -> Option<Message> {
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => Self::handle_key(*key, model),
            Event::Mouse(mouse) if model.mouse_enabled => Self::handle_mouse(*mouse, model),
            Event::Resize(w, h) => {
                if crate::perf::is_event_log_enabled() {
                    crate::perf::log_event("event.resize", format!("width={w} height={h}"));
                }
                Some(Message::Resize(*w, *h))
            }
            _ => None,
        }
    }

    pub(super) fn handle_key(key: KeyEvent, model: &Model) -> Option<Message> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(Message::Quit);
        }

        if model.editor.confirm_pending() {
            return match key.code {
                KeyCode::Char('y' | 'Y') | KeyCode::Enter => Some(Message::ConfirmClear),
                KeyCode::Char('n' | 'N') | KeyCode::Esc => Some(Message::CancelClear),
                _ => None,
            };
        }

        if model.help_visible {
            return Some(Message::HideHelp);
        }

        match key.code {
            // Palette
            KeyCode::Char(c @ '1'..='9') => {
                let idx = (c as usize) - ('1' as usize);
                (idx < model.editor.palette().len()).then_some(Message::SelectSwatch(idx))
            }
            KeyCode::Char(']') | KeyCode::Tab => Some(Message::NextColor),
            KeyCode::Char('[') | KeyCode::BackTab => Some(Message::PrevColor),

            // Paint mode
            KeyCode::Char('s') => Some(Message::SetPaintMode(PaintMode::Single)),
            KeyCode::Char('f') => Some(Message::SetPaintMode(PaintMode::Flood)),
            KeyCode::Char('m') => Some(Message::TogglePaintMode),

            // Cursor and painting
            KeyCode::Char('k') | KeyCode::Up => Some(Message::MoveCursor(Direction::Up)),
            KeyCode::Char('j') | KeyCode::Down => Some(Message::MoveCursor(Direction::Down)),
            KeyCode::Char('h') | KeyCode::Left => Some(Message::MoveCursor(Direction::Left)),
            KeyCode::Char('l') | KeyCode::Right => Some(Message::MoveCursor(Direction::Right)),
            KeyCode::Char(' ') | KeyCode::Enter => Some(Message::PaintAtCursor),

            // Canvas
            KeyCode::Char('+' | '=') => Some(Message::IncreaseSize),
            KeyCode::Char('-' | '_') => Some(Message::DecreaseSize),
            KeyCode::Char('c') => Some(Message::RequestClear),

            // Other
            KeyCode::Char('?') | KeyCode::F(1) => Some(Message::ToggleHelp),
            KeyCode::Char('q') => Some(Message::Quit),
            _ => None,
        }
    }

    pub(super) fn handle_mouse(mouse: MouseEvent, model: &Model) -> Option<Message> {
        let button_held = model.editor.is_dragging() || model.pressed.is_some();

        if model.editor.confirm_pending() {
            if matches!(mouse.kind, MouseEventKind::Up(MouseButton::Left)) {
                let dialog = model.confirm_dialog_layout();
                if point_in_rect(mouse.column, mouse.row, dialog.cancel) {
                    return Some(Message::CancelClear);
                }
                if point_in_rect(mouse.column, mouse.row, dialog.confirm) {
                    return Some(Message::ConfirmClear);
                }
                if button_held {
                    return Some(Message::PointerUp(None));
                }
            }
            return None;
        }

        if model.help_visible {
            return matches!(mouse.kind, MouseEventKind::Down(_)).then_some(Message::HideHelp);
        }

        let hit = model.layout().hit(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => match hit? {
                Hit::Pixel(id) => Some(Message::PointerDown(id)),
                Hit::Swatch(idx) => Some(Message::SelectSwatch(idx)),
                Hit::Mode(mode) => Some(Message::SetPaintMode(mode)),
                Hit::Shrink => Some(Message::DecreaseSize),
                Hit::Clear => Some(Message::RequestClear),
                Hit::Grow => Some(Message::IncreaseSize),
            },
            MouseEventKind::Drag(MouseButton::Left) => match hit {
                Some(Hit::Pixel(id)) => Some(Message::PointerEnter(id)),
                _ if model.editor.is_dragging() => Some(Message::PointerLeave),
                _ => None,
            },
            MouseEventKind::Up(MouseButton::Left) => {
                if !button_held {
                    return None;
                }
                match hit {
                    Some(Hit::Pixel(id)) => Some(Message::PointerUp(Some(id))),
                    _ => Some(Message::PointerUp(None)),
                }
            }
            // Plain motion while "dragging" means the release happened
            // somewhere we could not see it, e.g. outside the terminal.
            MouseEventKind::Moved if model.editor.is_dragging() => {
                if matches!(hit, Some(Hit::Pixel(_))) {
                    Some(Message::SetDragging(false))
                } else {
                    Some(Message::PointerLeave)
                }
            }
            _ => None,
        }
    }
}
