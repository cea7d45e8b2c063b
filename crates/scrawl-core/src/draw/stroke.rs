//! Stroke definitions for sketch outlines.
//!
//! # Overview
//!
//! - [`StrokeDefinition`]: color, width, cap and join of a pen stroke
//! - [`StrokeCap`]: how line endpoints are rendered (butt, round, square)
//! - [`StrokeJoin`]: how line corners are rendered (miter, round, bevel)
//! - [`apply_stroke!`](crate::apply_stroke!): Macro for applying stroke attributes to SVG elements
//!
//! # SVG Attribute Mapping
//!
//! | Rust Property | SVG Attribute | Example Values |
//! |--------------|---------------|----------------|
//! | `color` | `stroke`, `stroke-opacity` | `"#1e1e1e"`, `0.5` |
//! | `width` | `stroke-width` | `2.0` |
//! | `cap` | `stroke-linecap` | `"butt"`, `"round"`, `"square"` |
//! | `join` | `stroke-linejoin` | `"miter"`, `"round"`, `"bevel"` |

use std::str::FromStr;

use crate::color::Color;

/// Defines how line endpoints are rendered.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum StrokeCap {
    /// Flat cap at the exact endpoint (SVG default)
    Butt,
    /// Rounded cap extending beyond the endpoint by half the stroke width
    #[default]
    Round,
    /// Square cap extending beyond the endpoint by half the stroke width
    Square,
}

impl StrokeCap {
    /// Returns the SVG stroke-linecap value
    pub fn to_svg_value(&self) -> &'static str {
        match self {
            Self::Butt => "butt",
            Self::Round => "round",
            Self::Square => "square",
        }
    }
}

impl FromStr for StrokeCap {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "butt" => Ok(Self::Butt),
            "round" => Ok(Self::Round),
            "square" => Ok(Self::Square),
            _ => Err(format!(
                "invalid stroke cap `{s}`, valid values: butt, round, square"
            )),
        }
    }
}

/// Defines how line corners (joins) are rendered.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum StrokeJoin {
    /// Sharp corner with mitered point (SVG default)
    Miter,
    /// Rounded corner
    #[default]
    Round,
    /// Beveled (cut-off) corner
    Bevel,
}

impl StrokeJoin {
    /// Returns the SVG stroke-linejoin value
    pub fn to_svg_value(&self) -> &'static str {
        match self {
            Self::Miter => "miter",
            Self::Round => "round",
            Self::Bevel => "bevel",
        }
    }
}

impl FromStr for StrokeJoin {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "miter" => Ok(Self::Miter),
            "round" => Ok(Self::Round),
            "bevel" => Ok(Self::Bevel),
            _ => Err(format!(
                "invalid stroke join `{s}`, valid values: miter, round, bevel"
            )),
        }
    }
}

/// A pen stroke: color, width, cap and join.
///
/// Hand-drawn strokes default to round caps and joins so the overlapping
/// passes of a rough line blend together.
///
/// # Examples
///
/// ```
/// use scrawl_core::draw::{StrokeDefinition, StrokeCap};
/// use scrawl_core::color::Color;
///
/// let mut stroke = StrokeDefinition::new(Color::new("#1e1e1e").unwrap(), 2.0);
/// assert_eq!(stroke.cap(), StrokeCap::Round);
///
/// stroke.set_cap(StrokeCap::Butt);
/// assert_eq!(stroke.cap(), StrokeCap::Butt);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeDefinition {
    color: Color,
    width: f32,
    cap: StrokeCap,
    join: StrokeJoin,
}

impl StrokeDefinition {
    /// Creates a new stroke with the given color and width, round cap and join.
    pub fn new(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            cap: StrokeCap::default(),
            join: StrokeJoin::default(),
        }
    }

    /// Returns a copy of this stroke with a different color and width.
    ///
    /// Used for hachure fills, which are drawn with the fill color at a
    /// thinner weight than the outline.
    pub fn with_color_and_width(&self, color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            ..self.clone()
        }
    }

    /// Returns the stroke color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns the stroke width.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Returns the stroke cap style.
    pub fn cap(&self) -> StrokeCap {
        self.cap
    }

    /// Returns the stroke join style.
    pub fn join(&self) -> StrokeJoin {
        self.join
    }

    /// Sets the stroke cap style.
    pub fn set_cap(&mut self, cap: StrokeCap) {
        self.cap = cap;
    }

    /// Sets the stroke join style.
    pub fn set_join(&mut self, join: StrokeJoin) {
        self.join = join;
    }
}

impl Default for StrokeDefinition {
    fn default() -> Self {
        Self::new(Color::default(), 2.0)
    }
}

/// Apply all stroke attributes to an SVG element.
///
/// # Examples
///
/// ```
/// use scrawl_core::draw::StrokeDefinition;
/// use svg::node::element as svg_element;
///
/// let stroke = StrokeDefinition::default();
/// let path = svg_element::Path::new().set("d", "M 0 0 L 10 10");
///
/// let path = scrawl_core::apply_stroke!(path, &stroke);
/// assert!(path.to_string().contains("stroke-linecap=\"round\""));
/// ```
#[macro_export]
macro_rules! apply_stroke {
    ($element:expr, $stroke:expr) => {{
        $element
            .set("stroke", $stroke.color().to_opaque_string())
            .set("stroke-opacity", $stroke.color().alpha())
            .set("stroke-width", $stroke.width())
            .set("stroke-linecap", $stroke.cap().to_svg_value())
            .set("stroke-linejoin", $stroke.join().to_svg_value())
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stroke_default() {
        let stroke = StrokeDefinition::default();
        assert_eq!(stroke.width(), 2.0);
        assert_eq!(stroke.cap(), StrokeCap::Round);
        assert_eq!(stroke.join(), StrokeJoin::Round);
    }

    #[test]
    fn test_cap_and_join_from_str() {
        assert_eq!("butt".parse::<StrokeCap>(), Ok(StrokeCap::Butt));
        assert_eq!("square".parse::<StrokeCap>(), Ok(StrokeCap::Square));
        assert_eq!("miter".parse::<StrokeJoin>(), Ok(StrokeJoin::Miter));
        assert_eq!("bevel".parse::<StrokeJoin>(), Ok(StrokeJoin::Bevel));
        assert!("flat".parse::<StrokeCap>().is_err());
        assert!("sharp".parse::<StrokeJoin>().is_err());
    }

    #[test]
    fn test_with_color_and_width_keeps_cap() {
        let mut stroke = StrokeDefinition::default();
        stroke.set_cap(StrokeCap::Butt);

        let fill_stroke = stroke.with_color_and_width(Color::new("blue").unwrap(), 1.0);
        assert_eq!(fill_stroke.width(), 1.0);
        assert_eq!(fill_stroke.cap(), StrokeCap::Butt);
    }

    #[test]
    fn test_svg_values() {
        assert_eq!(StrokeCap::Butt.to_svg_value(), "butt");
        assert_eq!(StrokeCap::Round.to_svg_value(), "round");
        assert_eq!(StrokeCap::Square.to_svg_value(), "square");
        assert_eq!(StrokeJoin::Miter.to_svg_value(), "miter");
        assert_eq!(StrokeJoin::Round.to_svg_value(), "round");
        assert_eq!(StrokeJoin::Bevel.to_svg_value(), "bevel");
    }

    #[test]
    fn test_apply_stroke_sets_attributes() {
        let stroke = StrokeDefinition::new(Color::new("red").unwrap(), 2.5);
        let path = apply_stroke!(svg::node::element::Path::new(), &stroke);
        let rendered = path.to_string();

        assert!(rendered.contains("stroke-width=\"2.5\""));
        assert!(rendered.contains("stroke-linejoin=\"round\""));
    }

    #[test]
    fn test_apply_stroke_uses_cap_and_join() {
        let mut stroke = StrokeDefinition::default();
        stroke.set_cap(StrokeCap::Square);
        stroke.set_join(StrokeJoin::Bevel);
        let rendered = apply_stroke!(svg::node::element::Path::new(), &stroke).to_string();

        assert!(rendered.contains("stroke-linecap=\"square\""));
        assert!(rendered.contains("stroke-linejoin=\"bevel\""));
    }
}
