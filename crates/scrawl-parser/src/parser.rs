//! The two-pass grid parser.
//!
//! Pass one finds bracket boxes row by row; pass two classifies every
//! character. Boxes are emitted first so they paint beneath everything else.

use log::{debug, trace};

use scrawl_core::{
    geometry::{Point, Size},
    primitive::Primitive,
};

use crate::{
    cell::{BOX_PADDING, CellSize, DOT_DIAMETER, STROKE_INSET, TEXT_OFFSET},
    glyph::Glyph,
    grid::Grid,
};

/// Parser for ASCII art laid out on a grid of [`CellSize`] cells.
///
/// Holds no state between calls; re-parse the whole text on every change.
///
/// # Examples
///
/// ```
/// # use scrawl_parser::{CellSize, GridParser};
/// # use scrawl_core::primitive::Primitive;
/// let parser = GridParser::new(CellSize::new(14.0, 24.0));
/// let primitives = parser.parse("[ab]");
///
/// assert_eq!(
///     primitives[0],
///     Primitive::Rectangle { x: 1.0, y: 2.0, width: 54.0, height: 20.0 }
/// );
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct GridParser {
    cell: CellSize,
}

impl GridParser {
    /// Creates a parser for the given cell size.
    pub fn new(cell: CellSize) -> Self {
        Self { cell }
    }

    /// Returns the cell size in use.
    pub fn cell(&self) -> CellSize {
        self.cell
    }

    /// Parses `text` into primitives: all bracket boxes, then one primitive
    /// per drawable character in row-major order.
    pub fn parse(&self, text: &str) -> Vec<Primitive> {
        let grid = Grid::new(text);
        let mut primitives = Vec::new();

        self.collect_boxes(&grid, &mut primitives);
        let boxes = primitives.len();

        primitives.extend(
            grid.cells()
                .filter_map(|(row, col, character)| self.glyph(row, col, character)),
        );

        debug!(
            rows = grid.row_count(),
            columns = grid.column_count(),
            boxes,
            primitives = primitives.len();
            "Parsed ASCII grid"
        );

        primitives
    }

    /// Pairs each `]` with the most recent unmatched `[` on the same row.
    ///
    /// A later `[` replaces a pending one, a `]` with nothing pending is
    /// skipped, and a `[` still pending at the end of the row is dropped.
    fn collect_boxes(&self, grid: &Grid, primitives: &mut Vec<Primitive>) {
        for (row, characters) in grid.rows() {
            let mut open = None;

            for (col, &character) in characters.iter().enumerate() {
                match character {
                    '[' => open = Some(col),
                    ']' => {
                        if let Some(start) = open.take() {
                            primitives.push(self.bracket_box(row, start, col));
                        }
                    }
                    _ => {}
                }
            }
        }
    }

    fn bracket_box(&self, row: usize, open: usize, close: usize) -> Primitive {
        trace!(row, open, close; "Matched bracket box");

        let span = (close - open + 1) as f32;
        let top_left = self
            .cell
            .origin(row, open)
            .add_point(Point::new(BOX_PADDING / 2.0, BOX_PADDING));
        let size = Size::new(
            span * self.cell.width() - BOX_PADDING,
            self.cell.height() - 2.0 * BOX_PADDING,
        );

        Primitive::rectangle(top_left, size)
    }

    fn glyph(&self, row: usize, col: usize, character: char) -> Option<Primitive> {
        let origin = self.cell.origin(row, col);
        let at = |dx: f32, dy: f32| origin.add_point(Point::new(dx, dy));

        let width = self.cell.width();
        let height = self.cell.height();
        let inset = STROKE_INSET;

        let primitive = match Glyph::classify(character) {
            Glyph::Dot => Primitive::circle(self.cell.center(row, col), DOT_DIAMETER),
            Glyph::Horizontal => Primitive::line(
                at(inset, height / 2.0),
                at(width - inset, height / 2.0),
            ),
            Glyph::Vertical => {
                Primitive::line(at(width / 2.0, inset), at(width / 2.0, height - inset))
            }
            Glyph::Rising => {
                Primitive::line(at(inset, height - inset), at(width - inset, inset))
            }
            Glyph::Falling => {
                Primitive::line(at(inset, inset), at(width - inset, height - inset))
            }
            Glyph::Label(label) => Primitive::text(at(TEXT_OFFSET.0, TEXT_OFFSET.1), label),
            Glyph::Blank => return None,
        };

        Some(primitive)
    }
}
