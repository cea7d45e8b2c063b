//! Drawing primitives produced from an ASCII grid.
//!
//! A [`Primitive`] is one atomic drawing instruction. The parser emits a flat,
//! insertion-ordered `Vec<Primitive>`; nothing owns anything else and a
//! primitive is never mutated after creation.
//!
//! Each primitive also reports the [`RenderLayer`] it paints on, so renderers
//! can keep boxes beneath strokes and text without relying on emission order.
//!
//! # Example
//!
//! ```
//! # use scrawl_core::primitive::{Primitive, PrimitiveKind};
//! # use scrawl_core::geometry::Point;
//! # use scrawl_core::draw::RenderLayer;
//! let dot = Primitive::circle(Point::new(6.0, 11.0), 3.0);
//! assert_eq!(dot.kind(), PrimitiveKind::Circle);
//! assert_eq!(dot.layer(), RenderLayer::Stroke);
//! ```

use std::fmt;

use serde::Serialize;

use crate::{
    draw::RenderLayer,
    geometry::{Bounds, Point, Size},
};

/// One drawing instruction positioned in drawing space.
///
/// Serializes with a lowercase `type` tag, matching the shape consumed by
/// canvas-style renderers (`{"type": "line", "x": .., "y": .., "x2": .., "y2": ..}`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Primitive {
    /// A straight segment from `(x, y)` to `(x2, y2)`.
    Line { x: f32, y: f32, x2: f32, y2: f32 },
    /// An axis-aligned box anchored at its top-left corner.
    Rectangle {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
    /// A small dot centered on `(x, y)`.
    Circle { x: f32, y: f32, diameter: f32 },
    /// A single glyph whose box has its top-left corner at `(x, y)`.
    Text {
        x: f32,
        y: f32,
        #[serde(rename = "text")]
        character: char,
    },
}

/// The kind of a [`Primitive`], without its geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PrimitiveKind {
    Line,
    Rectangle,
    Circle,
    Text,
}

impl PrimitiveKind {
    /// Returns a human-readable name for this kind.
    pub fn name(self) -> &'static str {
        match self {
            Self::Line => "line",
            Self::Rectangle => "rectangle",
            Self::Circle => "circle",
            Self::Text => "text",
        }
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Primitive {
    /// Creates a line between two points.
    pub fn line(from: Point, to: Point) -> Self {
        Self::Line {
            x: from.x(),
            y: from.y(),
            x2: to.x(),
            y2: to.y(),
        }
    }

    /// Creates a rectangle from its top-left corner and size.
    pub fn rectangle(top_left: Point, size: Size) -> Self {
        Self::Rectangle {
            x: top_left.x(),
            y: top_left.y(),
            width: size.width(),
            height: size.height(),
        }
    }

    /// Creates a dot centered on `center`.
    pub fn circle(center: Point, diameter: f32) -> Self {
        Self::Circle {
            x: center.x(),
            y: center.y(),
            diameter,
        }
    }

    /// Creates a single-glyph text primitive anchored at `anchor`.
    pub fn text(anchor: Point, character: char) -> Self {
        Self::Text {
            x: anchor.x(),
            y: anchor.y(),
            character,
        }
    }

    /// Returns the kind of this primitive.
    pub fn kind(&self) -> PrimitiveKind {
        match self {
            Self::Line { .. } => PrimitiveKind::Line,
            Self::Rectangle { .. } => PrimitiveKind::Rectangle,
            Self::Circle { .. } => PrimitiveKind::Circle,
            Self::Text { .. } => PrimitiveKind::Text,
        }
    }

    /// Returns the layer this primitive paints on.
    ///
    /// Rectangles paint beneath lines and dots, which paint beneath text.
    pub fn layer(&self) -> RenderLayer {
        match self {
            Self::Rectangle { .. } => RenderLayer::Box,
            Self::Line { .. } | Self::Circle { .. } => RenderLayer::Stroke,
            Self::Text { .. } => RenderLayer::Text,
        }
    }

    /// Returns the anchor point: line start, rectangle top-left, circle
    /// center or glyph top-left.
    pub fn origin(&self) -> Point {
        match *self {
            Self::Line { x, y, .. }
            | Self::Rectangle { x, y, .. }
            | Self::Circle { x, y, .. }
            | Self::Text { x, y, .. } => Point::new(x, y),
        }
    }

    /// Returns the geometric extent of this primitive.
    ///
    /// A text primitive has no intrinsic size; its bounds collapse to the
    /// anchor point and renderers add the glyph box themselves.
    pub fn bounds(&self) -> Bounds {
        match *self {
            Self::Line { x, y, x2, y2 } => {
                Bounds::new_from_corners(Point::new(x, y), Point::new(x2, y2))
            }
            Self::Rectangle {
                x,
                y,
                width,
                height,
            } => Bounds::new_from_top_left(Point::new(x, y), Size::new(width, height)),
            Self::Circle { x, y, diameter } => {
                let radius = diameter / 2.0;
                Bounds::new_from_corners(
                    Point::new(x - radius, y - radius),
                    Point::new(x + radius, y + radius),
                )
            }
            Self::Text { x, y, .. } => Bounds::new_from_corners(Point::new(x, y), Point::new(x, y)),
        }
    }
}
