//! # Scrawl Parser
//!
//! Converts a grid of ASCII-art characters into drawing
//! [`Primitive`]s. Every character sits in a fixed-size cell; cell
//! `(row, col)` has its top-left corner at `(col * width, row * height)`.
//!
//! Parsing makes two passes over the grid:
//!
//! 1. **Boxes** - a `[` ... `]` pair on one row becomes a [`Primitive::Rectangle`]
//!    spanning both brackets. Only the most recent unmatched `[` on a row is
//!    remembered, so in `[a[b]` the box starts at the second bracket.
//! 2. **Glyphs** - every character is classified on its own:
//!
//! | Character(s) | Primitive |
//! |---|---|
//! | `+` `*` | dot ([`Primitive::Circle`]) centered in the cell |
//! | `-` `_` `=` | horizontal [`Primitive::Line`] |
//! | `\|` | vertical line |
//! | `/` | rising diagonal |
//! | `\` | falling diagonal |
//! | space, `[`, `]`, `\r` | nothing |
//! | anything else | one [`Primitive::Text`] glyph |
//!
//! Parsing never fails: stray brackets are ignored and unknown characters
//! become text.
//!
//! ## Usage
//!
//! ```
//! # use scrawl_parser::{parse, CellSize};
//! # use scrawl_core::primitive::PrimitiveKind;
//! let primitives = parse("[ A ]\n  |  ", CellSize::new(14.0, 24.0));
//!
//! let kinds: Vec<_> = primitives.iter().map(|p| p.kind()).collect();
//! assert_eq!(
//!     kinds,
//!     [PrimitiveKind::Rectangle, PrimitiveKind::Text, PrimitiveKind::Line]
//! );
//! ```

mod cell;
mod glyph;
mod grid;
mod parser;

pub use cell::{BOX_PADDING, CellSize, DOT_DIAMETER, STROKE_INSET, TEXT_OFFSET};
pub use glyph::Glyph;
pub use parser::GridParser;

use scrawl_core::primitive::Primitive;

/// Parse ASCII art into drawing primitives.
///
/// Rectangles come first (in row order), followed by the per-character
/// primitives in row-major order. The result depends only on `text` and
/// `cell`.
///
/// `cell` dimensions are expected to be positive; they are not validated.
///
/// # Example
///
/// ```
/// # use scrawl_parser::{parse, CellSize};
/// assert!(parse("", CellSize::default()).is_empty());
/// assert_eq!(parse("+--+", CellSize::default()).len(), 4);
/// ```
pub fn parse(text: &str, cell: CellSize) -> Vec<Primitive> {
    GridParser::new(cell).parse(text)
}
