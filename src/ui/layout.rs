//! Screen geometry shared by rendering and mouse hit testing.
//!
//! Everything that needs to know where a control sits on screen asks
//! [`screen_layout`], so a click always lands on what was drawn.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::editor::PaintMode;

/// Columns taken by one palette swatch, including its selection brackets.
pub const SWATCH_WIDTH: u16 = 6;
/// Terminal cells are roughly twice as tall as they are wide.
const CELL_ASPECT: u16 = 2;

pub const GROW_LABEL: &str = "[ + ]";
pub const SHRINK_LABEL: &str = "[ - ]";
pub const CLEAR_LABEL: &str = "[ Clear ]";

pub fn mode_label(mode: PaintMode) -> String {
    format!("[ {} ]", mode.label())
}

/// Something on screen a click can land on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Mode(PaintMode),
    Swatch(usize),
    Pixel(usize),
    Shrink,
    Clear,
    Grow,
}

/// Placement of the pixel canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasLayout {
    /// Visible part of the canvas (clipped to the screen).
    pub area: Rect,
    pub cell_width: u16,
    pub cell_height: u16,
    pub size: usize,
}

impl CanvasLayout {
    /// Fit a `size` x `size` canvas into `available`.
    ///
    /// A pixel is `available / size` cells in its smaller dimension, never
    /// less than one row by two columns. Canvases that do not fit are
    /// clipped on the right and bottom.
    pub fn fit(available: Rect, size: usize) -> Self {
        let size = size.max(1);
        let side = u16::try_from(size).unwrap_or(u16::MAX);
        let rows_per_pixel = available.height / side;
        let cols_per_pixel = available.width / side / CELL_ASPECT;
        let cell_height = rows_per_pixel.min(cols_per_pixel).max(1);
        let cell_width = cell_height * CELL_ASPECT;

        let pixels = u32::try_from(size).unwrap_or(u32::MAX);
        let full_width = u32::from(cell_width).saturating_mul(pixels);
        let full_height = u32::from(cell_height).saturating_mul(pixels);
        let width = u16::try_from(full_width.min(u32::from(available.width))).unwrap_or(0);
        let height = u16::try_from(full_height.min(u32::from(available.height))).unwrap_or(0);
        let x = available.x + (available.width - width) / 2;

        Self {
            area: Rect::new(x, available.y, width, height),
            cell_width,
            cell_height,
            size,
        }
    }

    /// The pixel id under a screen position, if any.
    pub fn pixel_at(&self, column: u16, row: u16) -> Option<usize> {
        if !point_in_rect(column, row, self.area) {
            return None;
        }
        let col = usize::from((column - self.area.x) / self.cell_width);
        let row = usize::from((row - self.area.y) / self.cell_height);
        (col < self.size && row < self.size).then_some(row * self.size + col)
    }

    /// Screen rectangle of a pixel, clipped to the visible canvas.
    pub fn pixel_rect(&self, id: usize) -> Option<Rect> {
        if id >= self.size * self.size {
            return None;
        }
        let col = u32::try_from(id % self.size).ok()?;
        let row = u32::try_from(id / self.size).ok()?;
        let x = u32::from(self.area.x)
            .saturating_add(col.saturating_mul(u32::from(self.cell_width)));
        let y = u32::from(self.area.y)
            .saturating_add(row.saturating_mul(u32::from(self.cell_height)));
        let cell = Rect::new(
            u16::try_from(x).ok()?,
            u16::try_from(y).ok()?,
            self.cell_width,
            self.cell_height,
        );
        let visible = cell.intersection(self.area);
        (!visible.is_empty()).then_some(visible)
    }
}

/// Placement of every control on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenLayout {
    pub modes: Vec<(PaintMode, Rect)>,
    pub swatches: Vec<Rect>,
    pub canvas: CanvasLayout,
    pub shrink: Rect,
    pub clear: Rect,
    pub grow: Rect,
    pub status: Rect,
}

impl ScreenLayout {
    pub fn hit(&self, column: u16, row: u16) -> Option<Hit> {
        if let Some(id) = self.canvas.pixel_at(column, row) {
            return Some(Hit::Pixel(id));
        }
        if let Some((mode, _)) = self
            .modes
            .iter()
            .find(|(_, rect)| point_in_rect(column, row, *rect))
        {
            return Some(Hit::Mode(*mode));
        }
        if let Some(idx) = self
            .swatches
            .iter()
            .position(|rect| point_in_rect(column, row, *rect))
        {
            return Some(Hit::Swatch(idx));
        }
        if point_in_rect(column, row, self.shrink) {
            return Some(Hit::Shrink);
        }
        if point_in_rect(column, row, self.clear) {
            return Some(Hit::Clear);
        }
        if point_in_rect(column, row, self.grow) {
            return Some(Hit::Grow);
        }
        None
    }
}

/// Split the screen into mode bar, palette, canvas, controls and status bar.
pub fn screen_layout(area: Rect, palette_len: usize, size: usize) -> ScreenLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);
    let (mode_row, palette_row, canvas_row, control_row, status_row) =
        (rows[0], rows[1], rows[2], rows[3], rows[4]);

    let mut modes = Vec::with_capacity(PaintMode::ALL.len());
    let mut x = mode_row.x + 1;
    for mode in PaintMode::ALL {
        let width = label_width(&mode_label(mode));
        modes.push((mode, clip(Rect::new(x, mode_row.y, width, 1), mode_row)));
        x = x.saturating_add(width + 1);
    }

    let swatches = (0..palette_len)
        .map(|i| {
            let offset = u16::try_from(i).unwrap_or(u16::MAX).saturating_mul(SWATCH_WIDTH);
            let x = (palette_row.x + 1).saturating_add(offset);
            clip(Rect::new(x, palette_row.y, SWATCH_WIDTH, 1), palette_row)
        })
        .collect();

    let shrink_width = label_width(SHRINK_LABEL);
    let clear_width = label_width(CLEAR_LABEL);
    let grow_width = label_width(GROW_LABEL);
    let shrink = clip(
        Rect::new(control_row.x + 1, control_row.y, shrink_width, 1),
        control_row,
    );
    let clear = clip(
        Rect::new(
            control_row.x + control_row.width.saturating_sub(clear_width) / 2,
            control_row.y,
            clear_width,
            1,
        ),
        control_row,
    );
    let grow = clip(
        Rect::new(
            control_row.x + control_row.width.saturating_sub(grow_width + 1),
            control_row.y,
            grow_width,
            1,
        ),
        control_row,
    );

    ScreenLayout {
        modes,
        swatches,
        canvas: CanvasLayout::fit(canvas_row, size),
        shrink,
        clear,
        grow,
        status: status_row,
    }
}

pub const fn point_in_rect(column: u16, row: u16, rect: Rect) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

fn label_width(label: &str) -> u16 {
    u16::try_from(label.chars().count()).unwrap_or(u16::MAX)
}

fn clip(rect: Rect, bounds: Rect) -> Rect {
    let clipped = rect.intersection(bounds);
    if clipped.is_empty() {
        Rect::new(bounds.x, bounds.y, 0, 0)
    } else {
        clipped
    }
}
