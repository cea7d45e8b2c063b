//! The pen used by drawables: a style plus a seeded rough generator.

use svg::node::element as svg_element;

use crate::{
    apply_stroke,
    draw::{RoughGenerator, SketchStyle, StrokeDefinition, SvgNode},
    geometry::{Bounds, Point},
};

/// Holds the [`SketchStyle`] and the [`RoughGenerator`] for one render.
///
/// Create a fresh `Sketcher` for every render so the generator starts from
/// the seed each time.
#[derive(Debug)]
pub struct Sketcher<'a> {
    style: &'a SketchStyle,
    rough: RoughGenerator,
}

impl<'a> Sketcher<'a> {
    /// Creates a sketcher drawing with `style`, seeding its generator with `seed`.
    pub fn new(style: &'a SketchStyle, seed: u64) -> Self {
        Self {
            style,
            rough: RoughGenerator::new(seed, style.roughness()),
        }
    }

    /// Returns the style in use.
    pub fn style(&self) -> &'a SketchStyle {
        self.style
    }

    /// A rough line stroked with the outline pen.
    pub fn line(&mut self, from: Point, to: Point) -> SvgNode {
        let data = self.rough.line(from, to);
        stroked_path(data, self.style.stroke())
    }

    /// A rough box outline stroked with the outline pen.
    pub fn rectangle_outline(&mut self, bounds: Bounds) -> SvgNode {
        let data = self.rough.rectangle(bounds);
        stroked_path(data, self.style.stroke())
    }

    /// Hachure strokes filling `bounds`, drawn with the fill color at half
    /// the outline weight.
    pub fn hachure(&mut self, bounds: Bounds) -> SvgNode {
        let fill = self.style.fill();
        let data = self.rough.hachure(bounds, fill.hachure_gap());
        let pen = self
            .style
            .stroke()
            .with_color_and_width(fill.color(), self.style.stroke().width() / 2.0);
        stroked_path(data, &pen)
    }

    /// A rough circle outline stroked with the outline pen.
    pub fn circle_outline(&mut self, center: Point, diameter: f32) -> SvgNode {
        let data = self.rough.ellipse(center, diameter, diameter);
        stroked_path(data, self.style.stroke())
    }
}

fn stroked_path(data: String, stroke: &StrokeDefinition) -> SvgNode {
    let path = svg_element::Path::new().set("d", data).set("fill", "none");
    Box::new(apply_stroke!(path, stroke))
}
