use super::Position;

/// The playable area is always this many blocks wide; the block pixel size
/// and the grid height follow from the screen dimensions.
pub const GRID_COLUMNS: i32 = 40;

/// Grid holds the fixed cell dimensions of the playable area.
/// Immutable after construction; callers must guarantee positive dimensions
/// (a width or height below 3 leaves no interior for food to spawn in).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Grid {
    width: i32,
    height: i32,
}

impl Grid {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Derive the grid from a screen size in pixels: width is fixed at
    /// GRID_COLUMNS blocks, the block size is whatever makes that fit, and
    /// the height is however many blocks of that size fit vertically.
    /// Returns the grid together with the block size for the renderer.
    pub fn fit_to_screen(screen_width: f32, screen_height: f32) -> (Self, f32) {
        let block_size = screen_width / GRID_COLUMNS as f32;
        let height = (screen_height / block_size) as i32;
        (Self::new(GRID_COLUMNS, height), block_size)
    }

    pub const fn width(&self) -> i32 {
        self.width
    }

    pub const fn height(&self) -> i32 {
        self.height
    }

    /// True if the position lies inside [0, width) x [0, height).
    pub const fn contains(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.width && pos.y >= 0 && pos.y < self.height
    }

    /// The cell the snake starts on after every reset.
    pub const fn center(&self) -> Position {
        Position::new(self.width / 2, self.height / 2)
    }
}
