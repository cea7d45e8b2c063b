//! Sketch-style SVG export.
//!
//! [`Svg`] draws every primitive through a fresh [`Sketcher`] seeded from the
//! configured seed, collects the nodes by [`RenderLayer`], and wraps them in
//! a document sized either to the configured canvas or to the content plus
//! a margin.

use std::io::Write;

use log::{debug, error, info, trace};
use svg::{Document, node::element as svg_element};

use scrawl_core::{
    color::Color,
    draw::{Drawable, LayeredOutput, RenderLayer, SketchStyle, Sketcher},
    geometry::{Bounds, Point, Size},
    primitive::Primitive,
};

use crate::{config::CanvasConfig, export};

/// Approximate advance of one glyph as a fraction of the font size.
const GLYPH_WIDTH_RATIO: f32 = 0.6;

/// Builder for [`Svg`] exporters.
///
/// # Examples
///
/// ```
/// # use scrawl::export::svg::SvgBuilder;
/// # use scrawl_core::draw::SketchStyle;
/// let svg = SvgBuilder::new(SketchStyle::default())
///     .with_seed(7)
///     .build();
/// assert_eq!(svg.seed(), 7);
/// ```
#[derive(Debug)]
pub struct SvgBuilder {
    style: SketchStyle,
    seed: u64,
    background: Option<Color>,
    canvas: CanvasConfig,
}

impl SvgBuilder {
    /// Starts a builder drawing with `style`.
    pub fn new(style: SketchStyle) -> Self {
        Self {
            style,
            seed: 0,
            background: None,
            canvas: CanvasConfig::default(),
        }
    }

    /// Sets the seed for the rough stroke generator.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Fills the canvas with `color` beneath everything else.
    pub fn with_background(mut self, color: Option<Color>) -> Self {
        self.background = color;
        self
    }

    /// Sets the canvas size and margin.
    pub fn with_canvas(mut self, canvas: &CanvasConfig) -> Self {
        self.canvas = canvas.clone();
        self
    }

    pub fn build(self) -> Svg {
        Svg {
            style: self.style,
            seed: self.seed,
            background: self.background,
            canvas: self.canvas,
        }
    }
}

/// SVG exporter for parsed primitives.
#[derive(Debug)]
pub struct Svg {
    style: SketchStyle,
    seed: u64,
    background: Option<Color>,
    canvas: CanvasConfig,
}

impl Svg {
    /// Returns the generator seed.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Renders `primitives` into a complete SVG document.
    pub fn render_document(&self, primitives: &[Primitive]) -> Document {
        let content_bounds = self.calculate_content_bounds(primitives);
        let (svg_size, offset) = self.calculate_svg_dimensions(content_bounds);

        let doc = Document::new()
            .set(
                "viewBox",
                format!("0 0 {} {}", svg_size.width(), svg_size.height()),
            )
            .set("width", svg_size.width())
            .set("height", svg_size.height());

        let mut output = LayeredOutput::new();
        if let Some(color) = &self.background {
            let background = svg_element::Rectangle::new()
                .set("x", 0)
                .set("y", 0)
                .set("width", svg_size.width())
                .set("height", svg_size.height())
                .set("fill", color.to_opaque_string())
                .set("fill-opacity", color.alpha());
            output.add_to_layer(RenderLayer::Background, Box::new(background));
        }

        let mut content = LayeredOutput::new();
        let mut sketcher = Sketcher::new(&self.style, self.seed);
        for primitive in primitives {
            trace!(primitive:?; "Rendering primitive");
            content.merge(primitive.render_to_layers(&mut sketcher));
        }
        debug!(nodes = content.len(); "Primitives rendered");

        let mut main_group = svg_element::Group::new();
        if offset != Point::default() {
            main_group = main_group.set(
                "transform",
                format!("translate({}, {})", offset.x(), offset.y()),
            );
        }
        let main_group = content
            .render()
            .into_iter()
            .fold(main_group, |group, layer| group.add(layer));

        output
            .render()
            .into_iter()
            .fold(doc, |doc, layer| doc.add(layer))
            .add(main_group)
    }

    /// Bounds of everything drawn, with text glyphs given an approximate box
    /// below and to the right of their anchor.
    fn calculate_content_bounds(&self, primitives: &[Primitive]) -> Bounds {
        let font_size = f32::from(self.style.text().font_size());
        let glyph = Size::new(font_size * GLYPH_WIDTH_RATIO, font_size);

        primitives
            .iter()
            .map(|primitive| match primitive {
                Primitive::Text { .. } => Bounds::new_from_top_left(primitive.origin(), glyph),
                _ => primitive.bounds(),
            })
            .reduce(|acc, bounds| acc.merge(&bounds))
            .unwrap_or_default()
    }

    /// Returns the document size and the translation applied to content.
    ///
    /// A configured canvas dimension is used as is and keeps the grid's own
    /// coordinates on that axis. Otherwise the dimension fits the content plus
    /// the margin on both sides.
    fn calculate_svg_dimensions(&self, content: Bounds) -> (Size, Point) {
        let margin = self.canvas.margin();

        let (width, offset_x) = match self.canvas.width() {
            Some(width) => (width, 0.0),
            None => (
                margin.mul_add(2.0, content.width()),
                margin - content.min_x(),
            ),
        };
        let (height, offset_y) = match self.canvas.height() {
            Some(height) => (height, 0.0),
            None => (
                margin.mul_add(2.0, content.height()),
                margin - content.min_y(),
            ),
        };

        debug!(width, height; "Final SVG dimensions");

        (Size::new(width, height), Point::new(offset_x, offset_y))
    }

    /// Writes an SVG document to `writer`.
    pub fn write_document(&self, doc: &Document, writer: &mut dyn Write) -> Result<(), export::Error> {
        if let Err(err) = writeln!(writer, "{doc}") {
            error!(err:err; "Failed to write SVG content");
            return Err(export::Error::Io(err));
        }

        info!("SVG document written");
        Ok(())
    }
}

impl export::Exporter for Svg {
    fn export_primitives(
        &mut self,
        primitives: &[Primitive],
        writer: &mut dyn Write,
    ) -> Result<(), export::Error> {
        let doc = self.render_document(primitives);
        debug!("SVG document rendered");

        self.write_document(&doc, writer)
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;
    use crate::export::Exporter;

    fn sample() -> Vec<Primitive> {
        vec![
            Primitive::rectangle(Point::new(1.0, 2.0), Size::new(46.0, 18.0)),
            Primitive::line(Point::new(49.0, 11.0), Point::new(59.0, 11.0)),
            Primitive::circle(Point::new(66.0, 11.0), 3.0),
            Primitive::text(Point::new(14.0, 2.0), 'a'),
        ]
    }

    fn export_to_string(svg: &mut Svg, primitives: &[Primitive]) -> String {
        let mut buffer = Vec::new();
        svg.export_primitives(primitives, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_fit_content_dimensions() {
        let svg = SvgBuilder::new(SketchStyle::default()).build();
        let bounds = svg.calculate_content_bounds(&sample());

        assert_approx_eq!(f32, bounds.min_x(), 1.0);
        assert_approx_eq!(f32, bounds.min_y(), 2.0);
        assert_approx_eq!(f32, bounds.max_x(), 67.5);
        assert_approx_eq!(f32, bounds.max_y(), 22.0);

        let (size, offset) = svg.calculate_svg_dimensions(bounds);
        assert_approx_eq!(f32, size.width(), 66.5 + 40.0);
        assert_approx_eq!(f32, size.height(), 20.0 + 40.0);
        assert_approx_eq!(f32, offset.x(), 19.0);
        assert_approx_eq!(f32, offset.y(), 18.0);
    }

    #[test]
    fn test_text_extends_bounds() {
        let svg = SvgBuilder::new(SketchStyle::default()).build();
        let bounds = svg.calculate_content_bounds(&[Primitive::text(Point::new(2.0, 2.0), 'x')]);

        assert_approx_eq!(f32, bounds.width(), 12.0);
        assert_approx_eq!(f32, bounds.height(), 20.0);
    }

    #[test]
    fn test_fixed_canvas() {
        let canvas = CanvasConfig::new(Some(800.0), Some(600.0), 20.0);
        let svg = SvgBuilder::new(SketchStyle::default())
            .with_canvas(&canvas)
            .build();

        let (size, offset) = svg.calculate_svg_dimensions(Bounds::default());
        assert_eq!(size, Size::new(800.0, 600.0));
        assert_eq!(offset, Point::default());

        let doc = svg.render_document(&sample()).to_string();
        assert!(doc.contains(r#"viewBox="0 0 800 600""#));
        assert!(!doc.contains("translate"));
    }

    #[test]
    fn test_empty_document() {
        let mut svg = SvgBuilder::new(SketchStyle::default()).build();
        let output = export_to_string(&mut svg, &[]);

        assert!(output.contains("<svg"));
        assert!(output.contains(r#"viewBox="0 0 40 40""#));
        assert!(!output.contains("data-layer"));
    }

    #[test]
    fn test_layers_in_paint_order() {
        let mut svg = SvgBuilder::new(SketchStyle::default())
            .with_background(Some(Color::new("white").unwrap()))
            .build();
        let output = export_to_string(&mut svg, &sample());

        let position = |layer: &str| {
            output
                .find(&format!(r#"data-layer="{layer}""#))
                .unwrap_or_else(|| panic!("missing layer {layer}"))
        };
        assert!(position("background") < position("box"));
        assert!(position("box") < position("stroke"));
        assert!(position("stroke") < position("text"));
    }

    #[test]
    fn test_same_seed_same_output() {
        let mut first = SvgBuilder::new(SketchStyle::default()).with_seed(42).build();
        let mut second = SvgBuilder::new(SketchStyle::default()).with_seed(42).build();

        let a = export_to_string(&mut first, &sample());
        let b = export_to_string(&mut second, &sample());
        assert_eq!(a, b);
        assert_eq!(a, export_to_string(&mut first, &sample()));
    }

    #[test]
    fn test_different_seed_different_strokes() {
        let mut first = SvgBuilder::new(SketchStyle::default()).with_seed(1).build();
        let mut second = SvgBuilder::new(SketchStyle::default()).with_seed(2).build();

        assert_ne!(
            export_to_string(&mut first, &sample()),
            export_to_string(&mut second, &sample())
        );
    }
}
