//! Sketch-style rendering of drawing primitives.
//!
//! This module turns [`Primitive`](crate::primitive::Primitive)s into SVG
//! nodes that look hand drawn. All drawables implement the [`Drawable`] trait,
//! which renders into a [`LayeredOutput`] using a [`Sketcher`] that carries the
//! visual style and the seeded [`RoughGenerator`].
//!
//! # Layer-Based Rendering
//!
//! Drawables render to one or more [`RenderLayer`]s, which are ordered during
//! final SVG generation: boxes first, then strokes and dots, then text.
//!
//! # Example
//!
//! ```
//! # use scrawl_core::draw::{Drawable, SketchStyle, Sketcher};
//! # use scrawl_core::geometry::Point;
//! # use scrawl_core::primitive::Primitive;
//! let style = SketchStyle::default();
//! let mut sketcher = Sketcher::new(&style, 42);
//!
//! let line = Primitive::line(Point::new(1.0, 11.0), Point::new(11.0, 11.0));
//! let output = line.render_to_layers(&mut sketcher);
//! assert!(!output.is_empty());
//! ```

mod layer;
mod primitive;
mod rough;
mod sketcher;
mod stroke;
mod style;
mod text;

pub use layer::{LayeredOutput, RenderLayer, SvgNode};
pub use rough::{RoughGenerator, hachure_segments};
pub use sketcher::Sketcher;
pub use stroke::{StrokeCap, StrokeDefinition, StrokeJoin};
pub use style::{FillDefinition, FillStyle, SketchStyle};
pub use text::TextDefinition;

/// Trait for elements that can be rendered to sketch-style SVG layers.
pub trait Drawable: std::fmt::Debug {
    /// Renders this drawable to one or more layers.
    ///
    /// Implementations draw with the style and random generator held by
    /// `sketcher`, so rendering the same drawables in the same order with the
    /// same seed yields identical output.
    fn render_to_layers(&self, sketcher: &mut Sketcher<'_>) -> LayeredOutput;
}
