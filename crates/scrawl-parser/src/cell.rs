//! Cell size and the fixed sub-cell offsets used to place primitives.

use scrawl_core::geometry::{Point, Size};

/// Gap between a bracket box and its cell edges (half on each side horizontally).
pub const BOX_PADDING: f32 = 2.0;

/// Distance strokes keep from the cell edges so neighbours do not merge.
pub const STROKE_INSET: f32 = 1.0;

/// Diameter of the dot drawn for `+` and `*`.
pub const DOT_DIAMETER: f32 = 3.0;

/// Offset of a text glyph's anchor from its cell's top-left corner.
pub const TEXT_OFFSET: (f32, f32) = (2.0, 2.0);

/// Width and height of one character cell in drawing units.
///
/// The default is 12 × 22, which suits a 20px proportional font.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellSize {
    width: f32,
    height: f32,
}

impl CellSize {
    /// Creates a cell size. Both dimensions should be positive.
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the cell width
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the cell height
    pub fn height(self) -> f32 {
        self.height
    }

    /// Returns the cell dimensions as a [`Size`].
    pub fn to_size(self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Top-left corner of cell `(row, col)`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use scrawl_parser::CellSize;
    /// # use scrawl_core::geometry::Point;
    /// let cell = CellSize::new(14.0, 24.0);
    /// assert_eq!(cell.origin(1, 2), Point::new(28.0, 24.0));
    /// ```
    pub fn origin(self, row: usize, col: usize) -> Point {
        Point::new(col as f32 * self.width, row as f32 * self.height)
    }

    /// Center of cell `(row, col)`.
    pub fn center(self, row: usize, col: usize) -> Point {
        self.origin(row, col)
            .add_point(Point::new(self.width / 2.0, self.height / 2.0))
    }
}

impl Default for CellSize {
    fn default() -> Self {
        Self::new(12.0, 22.0)
    }
}
