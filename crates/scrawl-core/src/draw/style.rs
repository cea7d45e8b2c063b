//! Visual style for sketch rendering.
//!
//! [`SketchStyle`] bundles everything a renderer needs to draw primitives:
//! the outline [`StrokeDefinition`], the box [`FillDefinition`], the dot fill,
//! the [`TextDefinition`] and the roughness of hand-drawn strokes.

use std::str::FromStr;

use crate::{
    color::Color,
    draw::{StrokeDefinition, TextDefinition},
};

/// How the inside of a box is painted.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum FillStyle {
    /// Parallel diagonal rough strokes clipped to the box (default)
    #[default]
    Hachure,
    /// A plain filled rectangle
    Solid,
    /// No fill
    None,
}

impl FromStr for FillStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hachure" => Ok(Self::Hachure),
            "solid" => Ok(Self::Solid),
            "none" => Ok(Self::None),
            _ => Err(format!(
                "invalid fill style `{s}`, valid values: hachure, solid, none"
            )),
        }
    }
}

/// Fill color and pattern for boxes.
#[derive(Debug, Clone, PartialEq)]
pub struct FillDefinition {
    color: Color,
    style: FillStyle,
    hachure_gap: f32,
}

impl FillDefinition {
    /// Creates a fill with the given color and style.
    ///
    /// The hachure gap defaults to 4 units.
    pub fn new(color: Color, style: FillStyle) -> Self {
        Self {
            color,
            style,
            hachure_gap: 4.0,
        }
    }

    /// Returns the fill color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns the fill pattern.
    pub fn style(&self) -> FillStyle {
        self.style
    }

    /// Returns the distance between hachure strokes.
    pub fn hachure_gap(&self) -> f32 {
        self.hachure_gap
    }

    /// Sets the distance between hachure strokes.
    pub fn set_hachure_gap(&mut self, gap: f32) {
        self.hachure_gap = gap;
    }
}

impl Default for FillDefinition {
    fn default() -> Self {
        Self::new(
            Color::new("rgba(99, 102, 241, 0.05)").unwrap_or_default(),
            FillStyle::Hachure,
        )
    }
}

/// Complete style for rendering a sketch.
///
/// # Examples
///
/// ```
/// # use scrawl_core::draw::{FillStyle, SketchStyle};
/// let mut style = SketchStyle::default();
/// assert_eq!(style.roughness(), 1.5);
/// assert_eq!(style.fill().style(), FillStyle::Hachure);
///
/// style.set_roughness(0.0);
/// assert_eq!(style.roughness(), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SketchStyle {
    stroke: StrokeDefinition,
    fill: FillDefinition,
    dot_fill: Color,
    text: TextDefinition,
    roughness: f32,
}

impl SketchStyle {
    /// Creates a style from its parts.
    pub fn new(
        stroke: StrokeDefinition,
        fill: FillDefinition,
        dot_fill: Color,
        text: TextDefinition,
        roughness: f32,
    ) -> Self {
        Self {
            stroke,
            fill,
            dot_fill,
            text,
            roughness,
        }
    }

    /// Returns the outline stroke.
    pub fn stroke(&self) -> &StrokeDefinition {
        &self.stroke
    }

    /// Returns the box fill.
    pub fn fill(&self) -> &FillDefinition {
        &self.fill
    }

    /// Returns the fill color of dots.
    pub fn dot_fill(&self) -> Color {
        self.dot_fill
    }

    /// Returns the text style.
    pub fn text(&self) -> &TextDefinition {
        &self.text
    }

    /// Returns how far hand-drawn strokes stray from the ideal geometry.
    pub fn roughness(&self) -> f32 {
        self.roughness
    }

    /// Sets the roughness; `0.0` draws straight strokes.
    pub fn set_roughness(&mut self, roughness: f32) {
        self.roughness = roughness;
    }
}

impl Default for SketchStyle {
    fn default() -> Self {
        let ink = Color::new("#1e1e1e").unwrap_or_default();
        Self {
            stroke: StrokeDefinition::new(ink, 2.0),
            fill: FillDefinition::default(),
            dot_fill: Color::new("rgba(0, 0, 0, 0.05)").unwrap_or_default(),
            text: TextDefinition::default(),
            roughness: 1.5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_style_from_str() {
        assert_eq!("hachure".parse::<FillStyle>(), Ok(FillStyle::Hachure));
        assert_eq!("solid".parse::<FillStyle>(), Ok(FillStyle::Solid));
        assert_eq!("none".parse::<FillStyle>(), Ok(FillStyle::None));
        assert!("cross-hatch".parse::<FillStyle>().is_err());
    }

    #[test]
    fn test_fill_definition_gap() {
        let mut fill = FillDefinition::default();
        assert_eq!(fill.hachure_gap(), 4.0);

        fill.set_hachure_gap(6.0);
        assert_eq!(fill.hachure_gap(), 6.0);
    }

    #[test]
    fn test_sketch_style_default() {
        let style = SketchStyle::default();
        assert_eq!(style.stroke().width(), 2.0);
        assert!(style.fill().color().alpha() < 0.1);
        assert!(style.dot_fill().alpha() < 0.1);
        assert_eq!(style.fill().color().to_opaque_string(), "rgb(99, 102, 241)");
        assert_eq!(style.stroke().color().to_opaque_string(), "rgb(30, 30, 30)");
        assert_eq!(style.text().color().to_opaque_string(), "rgb(30, 30, 30)");
        assert_eq!(style.text().font_size(), 20);
    }
}
