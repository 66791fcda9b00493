use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;

use crate::editor::Grid;
use crate::ui::layout::CanvasLayout;
use crate::ui::style::{contrast_fg, to_terminal_color};

const CURSOR_GLYPH: &str = "◆";

/// Draws the pixel grid, one filled block of cells per pixel.
///
/// Ignores the `area` passed to `render`; placement comes from the
/// [`CanvasLayout`] so drawing and hit testing agree.
pub struct CanvasWidget<'a> {
    grid: &'a Grid,
    layout: CanvasLayout,
    cursor: Option<usize>,
}

impl<'a> CanvasWidget<'a> {
    pub const fn new(grid: &'a Grid, layout: CanvasLayout) -> Self {
        Self {
            grid,
            layout,
            cursor: None,
        }
    }

    #[must_use]
    pub const fn cursor(mut self, cursor: Option<usize>) -> Self {
        self.cursor = cursor;
        self
    }
}

impl Widget for CanvasWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let bounds = self.layout.area.intersection(area);
        for pixel in self.grid.pixels() {
            let Some(rect) = self.layout.pixel_rect(pixel.id) else {
                continue;
            };
            let rect = rect.intersection(bounds);
            if rect.is_empty() {
                continue;
            }
            let bg = to_terminal_color(pixel.color);
            for y in rect.top()..rect.bottom() {
                for x in rect.left()..rect.right() {
                    if let Some(cell) = buf.cell_mut((x, y)) {
                        cell.set_symbol(" ").set_bg(bg);
                    }
                }
            }
            if self.cursor == Some(pixel.id) {
                let x = rect.x + rect.width.saturating_sub(1) / 2;
                let y = rect.y + rect.height.saturating_sub(1) / 2;
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_symbol(CURSOR_GLYPH)
                        .set_fg(contrast_fg(pixel.color));
                }
            }
        }
    }
}
