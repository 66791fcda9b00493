use super::color::{ColorValue, Palette};
use super::grid::Grid;

/// Side length of a fresh canvas when nothing else is configured.
pub const DEFAULT_INITIAL_SIZE: usize = 10;
/// Largest side length accepted for the startup canvas.
pub const MAX_INITIAL_SIZE: usize = 1024;

/// How a click recolors the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaintMode {
    /// Recolor only the clicked pixel.
    #[default]
    Single,
    /// Recolor every pixel sharing the clicked pixel's color.
    Flood,
}

impl PaintMode {
    pub const ALL: [Self; 2] = [Self::Single, Self::Flood];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Flood => "flood",
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Single => Self::Flood,
            Self::Flood => Self::Single,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OptionsError {
    #[error("initial canvas size must be at least 1")]
    ZeroSize,
    #[error("initial canvas size {0} exceeds the maximum of {MAX_INITIAL_SIZE}")]
    TooLarge(usize),
}

/// Startup configuration. Also the target of a confirmed clear.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorOptions {
    initial_size: usize,
    palette: Palette,
}

impl EditorOptions {
    /// # Errors
    /// Returns [`OptionsError::ZeroSize`] if `initial_size` is zero and
    /// [`OptionsError::TooLarge`] if it exceeds [`MAX_INITIAL_SIZE`].
    pub fn new(initial_size: usize, palette: Palette) -> Result<Self, OptionsError> {
        if initial_size == 0 {
            return Err(OptionsError::ZeroSize);
        }
        if initial_size > MAX_INITIAL_SIZE {
            return Err(OptionsError::TooLarge(initial_size));
        }
        Ok(Self {
            initial_size,
            palette,
        })
    }

    pub const fn initial_size(&self) -> usize {
        self.initial_size
    }

    pub const fn palette(&self) -> &Palette {
        &self.palette
    }

    fn blank_grid(&self) -> Grid {
        Grid::filled(self.initial_size, self.palette.background())
    }
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            initial_size: DEFAULT_INITIAL_SIZE,
            palette: Palette::default(),
        }
    }
}

/// The complete state of the grid editor.
///
/// Every operation takes the state by value and returns the next one, so
/// callers only ever observe whole states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorState {
    options: EditorOptions,
    grid: Grid,
    selected_color: ColorValue,
    paint_mode: PaintMode,
    dragging: bool,
    confirm_pending: bool,
}

impl EditorState {
    pub fn new(options: EditorOptions) -> Self {
        let grid = options.blank_grid();
        let selected_color = options.palette.background();
        Self {
            options,
            grid,
            selected_color,
            paint_mode: PaintMode::default(),
            dragging: false,
            confirm_pending: false,
        }
    }

    // --- Snapshot accessors ---

    pub const fn options(&self) -> &EditorOptions {
        &self.options
    }

    pub const fn palette(&self) -> &Palette {
        &self.options.palette
    }

    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    pub const fn size(&self) -> usize {
        self.grid.size()
    }

    pub const fn selected_color(&self) -> ColorValue {
        self.selected_color
    }

    pub const fn paint_mode(&self) -> PaintMode {
        self.paint_mode
    }

    pub const fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub const fn confirm_pending(&self) -> bool {
        self.confirm_pending
    }

    // --- Operations ---

    /// Select a palette color. Colors outside the palette are ignored.
    #[must_use]
    pub fn select_color(mut self, color: ColorValue) -> Self {
        if !self.palette().contains(color) {
            tracing::debug!(%color, "select_color ignored: not in palette");
            return self;
        }
        self.selected_color = color;
        self
    }

    #[must_use]
    pub const fn set_paint_mode(mut self, mode: PaintMode) -> Self {
        self.paint_mode = mode;
        self
    }

    /// Apply the current paint mode at `pixel_id` with the selected color.
    #[must_use]
    pub fn paint_pixel(mut self, pixel_id: usize) -> Self {
        let Some(target) = self.grid.get(pixel_id).map(|p| p.color) else {
            tracing::debug!(pixel_id, size = self.size(), "paint ignored: id out of range");
            return self;
        };
        let color = self.selected_color;
        self.grid = match self.paint_mode {
            PaintMode::Single => self.grid.with_pixel(pixel_id, color),
            PaintMode::Flood => {
                tracing::debug!(pixel_id, %target, %color, "flood recolor");
                self.grid.with_recolored(target, color)
            }
        };
        self
    }

    /// Paint as the pointer enters a pixel; only acts while dragging.
    #[must_use]
    pub fn drag_paint(self, pixel_id: usize) -> Self {
        if !self.dragging {
            return self;
        }
        self.paint_pixel(pixel_id)
    }

    #[must_use]
    pub const fn set_dragging(mut self, value: bool) -> Self {
        self.dragging = value;
        self
    }

    #[must_use]
    pub fn increase_size(mut self) -> Self {
        let fill = self.palette().background();
        self.grid = self.grid.grown(fill);
        tracing::debug!(size = self.size(), "canvas grown");
        self
    }

    /// Shrink by one. A 1x1 canvas stays as it is.
    #[must_use]
    pub fn decrease_size(mut self) -> Self {
        if self.size() <= 1 {
            tracing::debug!("decrease_size ignored: already at minimum");
            return self;
        }
        self.grid = self.grid.shrunk();
        tracing::debug!(size = self.size(), "canvas shrunk");
        self
    }

    #[must_use]
    pub const fn request_clear(mut self) -> Self {
        self.confirm_pending = true;
        self
    }

    #[must_use]
    pub const fn cancel_clear(mut self) -> Self {
        self.confirm_pending = false;
        self
    }

    /// Requires a prior [`request_clear`](Self::request_clear); otherwise a no-op.
    ///
    /// Reverts to the startup canvas: initial size, all background color.
    /// Selected color, paint mode and drag state are kept.
    #[must_use]
    pub fn confirm_clear(mut self) -> Self {
        if !self.confirm_pending {
            tracing::debug!("confirm_clear ignored: no clear requested");
            return self;
        }
        self.grid = self.options.blank_grid();
        self.confirm_pending = false;
        tracing::debug!(size = self.size(), "canvas cleared");
        self
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new(EditorOptions::default())
    }
}
