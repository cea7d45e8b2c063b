//! Configuration types for Scrawl sketch rendering.
//!
//! This module provides configuration structures that control how ASCII art
//! is mapped onto a grid and how the resulting primitives are drawn. All
//! types implement [`serde::Deserialize`] with every field defaulted, so a
//! partial TOML file only needs to name what it changes.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining the sections below.
//! - [`GridConfig`] - Cell size of the character grid.
//! - [`StyleConfig`] - Stroke, fill, text and roughness settings.
//! - [`CanvasConfig`] - Output canvas size and margin.
//!
//! # Example
//!
//! ```
//! # use scrawl::config::AppConfig;
//! let config = AppConfig::default();
//! assert!(config.validate().is_ok());
//! assert_eq!(config.grid().cell_size().width(), 12.0);
//! ```

use serde::Deserialize;

use scrawl_core::{
    color::Color,
    draw::{
        FillDefinition, FillStyle, SketchStyle, StrokeCap, StrokeDefinition, StrokeJoin,
        TextDefinition,
    },
};
use scrawl_parser::CellSize;

use crate::ScrawlError;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Grid configuration section.
    #[serde(default)]
    grid: GridConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,

    /// Canvas configuration section.
    #[serde(default)]
    canvas: CanvasConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(grid: GridConfig, style: StyleConfig, canvas: CanvasConfig) -> Self {
        Self {
            grid,
            style,
            canvas,
        }
    }

    /// Returns the grid configuration.
    pub fn grid(&self) -> &GridConfig {
        &self.grid
    }

    /// Returns the grid configuration for modification.
    pub fn grid_mut(&mut self) -> &mut GridConfig {
        &mut self.grid
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Returns the style configuration for modification.
    pub fn style_mut(&mut self) -> &mut StyleConfig {
        &mut self.style
    }

    /// Returns the canvas configuration.
    pub fn canvas(&self) -> &CanvasConfig {
        &self.canvas
    }

    /// Checks every section, returning the first problem found.
    ///
    /// # Errors
    ///
    /// Returns [`ScrawlError::Config`] for non-positive cell sizes, negative
    /// stroke width or roughness, unknown fill styles, unparsable colors, or
    /// a non-positive canvas size.
    pub fn validate(&self) -> Result<(), ScrawlError> {
        self.grid.validate()?;
        self.style.sketch_style()?;
        self.style.background_color()?;
        self.canvas.validate()
    }
}

/// Size of one character cell in canvas units.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    cell_width: f32,
    cell_height: f32,
}

impl Default for GridConfig {
    fn default() -> Self {
        let cell = CellSize::default();
        Self {
            cell_width: cell.width(),
            cell_height: cell.height(),
        }
    }
}

impl GridConfig {
    /// Creates a grid configuration with the given cell size.
    pub fn new(cell_width: f32, cell_height: f32) -> Self {
        Self {
            cell_width,
            cell_height,
        }
    }

    /// Returns the configured cell size.
    pub fn cell_size(&self) -> CellSize {
        CellSize::new(self.cell_width, self.cell_height)
    }

    pub fn set_cell_width(&mut self, width: f32) {
        self.cell_width = width;
    }

    pub fn set_cell_height(&mut self, height: f32) {
        self.cell_height = height;
    }

    /// Checks that both cell dimensions are positive.
    ///
    /// # Errors
    ///
    /// Returns [`ScrawlError::Config`] naming the offending dimension.
    pub fn validate(&self) -> Result<(), ScrawlError> {
        for (name, value) in [
            ("cell_width", self.cell_width),
            ("cell_height", self.cell_height),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ScrawlError::config(format!(
                    "grid.{name} must be a positive number, got {value}"
                )));
            }
        }
        Ok(())
    }
}

/// Visual styling configuration for rendered sketches.
///
/// Colors are kept as CSS color strings and parsed when the style is built,
/// so a bad color is reported with the field it came from.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    stroke_color: String,
    stroke_width: f32,
    stroke_linecap: String,
    stroke_linejoin: String,
    roughness: f32,
    seed: u64,
    fill_color: String,
    fill_style: String,
    hachure_gap: f32,
    dot_fill_color: String,
    text_color: String,
    font_family: String,
    font_size: u16,
    background_color: Option<String>,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            stroke_color: "#1e1e1e".to_string(),
            stroke_width: 2.0,
            stroke_linecap: "round".to_string(),
            stroke_linejoin: "round".to_string(),
            roughness: 1.5,
            seed: 42,
            fill_color: "rgba(99, 102, 241, 0.05)".to_string(),
            fill_style: "hachure".to_string(),
            hachure_gap: 4.0,
            dot_fill_color: "rgba(0, 0, 0, 0.05)".to_string(),
            text_color: "#1e1e1e".to_string(),
            font_family: "Segoe UI, Tahoma, Geneva, Verdana, sans-serif".to_string(),
            font_size: 20,
            background_color: None,
        }
    }
}

impl StyleConfig {
    /// Returns the seed for the rough stroke generator.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn set_seed(&mut self, seed: u64) {
        self.seed = seed;
    }

    /// Returns the configured roughness; `0` draws straight strokes.
    pub fn roughness(&self) -> f32 {
        self.roughness
    }

    pub fn set_roughness(&mut self, roughness: f32) {
        self.roughness = roughness;
    }

    /// Builds the [`SketchStyle`] used by the renderer.
    ///
    /// # Errors
    ///
    /// Returns [`ScrawlError::Config`] naming the offending field when a color,
    /// the fill style, or the stroke cap or join cannot be parsed, or when stroke width, roughness or
    /// hachure gap are out of range.
    pub fn sketch_style(&self) -> Result<SketchStyle, ScrawlError> {
        if !self.stroke_width.is_finite() || self.stroke_width < 0.0 {
            return Err(ScrawlError::config(format!(
                "style.stroke_width must not be negative, got {}",
                self.stroke_width
            )));
        }
        if !self.roughness.is_finite() || self.roughness < 0.0 {
            return Err(ScrawlError::config(format!(
                "style.roughness must not be negative, got {}",
                self.roughness
            )));
        }
        if !self.hachure_gap.is_finite() || self.hachure_gap <= 0.0 {
            return Err(ScrawlError::config(format!(
                "style.hachure_gap must be a positive number, got {}",
                self.hachure_gap
            )));
        }
        if self.font_size == 0 {
            return Err(ScrawlError::config("style.font_size must be positive"));
        }

        let mut stroke = StrokeDefinition::new(
            parse_color("stroke_color", &self.stroke_color)?,
            self.stroke_width,
        );
        let cap: StrokeCap = self
            .stroke_linecap
            .parse()
            .map_err(|err| ScrawlError::config(format!("style.stroke_linecap: {err}")))?;
        let join: StrokeJoin = self
            .stroke_linejoin
            .parse()
            .map_err(|err| ScrawlError::config(format!("style.stroke_linejoin: {err}")))?;
        stroke.set_cap(cap);
        stroke.set_join(join);

        let fill_style: FillStyle = self
            .fill_style
            .parse()
            .map_err(|err| ScrawlError::config(format!("style.fill_style: {err}")))?;
        let mut fill = FillDefinition::new(parse_color("fill_color", &self.fill_color)?, fill_style);
        fill.set_hachure_gap(self.hachure_gap);

        let mut text = TextDefinition::new();
        text.set_font_family(&self.font_family);
        text.set_font_size(self.font_size);
        text.set_color(parse_color("text_color", &self.text_color)?);

        Ok(SketchStyle::new(
            stroke,
            fill,
            parse_color("dot_fill_color", &self.dot_fill_color)?,
            text,
            self.roughness,
        ))
    }

    /// Returns the parsed background [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns [`ScrawlError::Config`] if the configured color string cannot
    /// be parsed.
    pub fn background_color(&self) -> Result<Option<Color>, ScrawlError> {
        self.background_color
            .as_deref()
            .map(|color| parse_color("background_color", color))
            .transpose()
    }
}

fn parse_color(field: &str, value: &str) -> Result<Color, ScrawlError> {
    Color::new(value).map_err(|err| ScrawlError::config(format!("style.{field}: {err}")))
}

/// Output canvas configuration.
///
/// When `width` or `height` is omitted that dimension fits the drawn
/// content plus `margin` on each side.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    width: Option<f32>,
    height: Option<f32>,
    margin: f32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: None,
            height: None,
            margin: 20.0,
        }
    }
}

impl CanvasConfig {
    /// Creates a canvas configuration.
    pub fn new(width: Option<f32>, height: Option<f32>, margin: f32) -> Self {
        Self {
            width,
            height,
            margin,
        }
    }

    /// Returns the fixed canvas width, if any.
    pub fn width(&self) -> Option<f32> {
        self.width
    }

    /// Returns the fixed canvas height, if any.
    pub fn height(&self) -> Option<f32> {
        self.height
    }

    /// Returns the margin added around fitted content.
    pub fn margin(&self) -> f32 {
        self.margin
    }

    fn validate(&self) -> Result<(), ScrawlError> {
        for (name, value) in [("width", self.width), ("height", self.height)] {
            if let Some(value) = value.filter(|v| !v.is_finite() || *v <= 0.0) {
                return Err(ScrawlError::config(format!(
                    "canvas.{name} must be a positive number, got {value}"
                )));
            }
        }
        if !self.margin.is_finite() || self.margin < 0.0 {
            return Err(ScrawlError::config(format!(
                "canvas.margin must not be negative, got {}",
                self.margin
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_toml(source: &str) -> AppConfig {
        toml::from_str(source).expect("valid config")
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.grid().cell_size(), CellSize::new(12.0, 22.0));
        assert_eq!(config.style().seed(), 42);
        assert_eq!(config.style().roughness(), 1.5);
        assert_eq!(config.canvas().margin(), 20.0);
        assert!(config.canvas().width().is_none());
        assert!(config.style().background_color().unwrap().is_none());
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = from_toml("");
        assert_eq!(config.grid().cell_size(), CellSize::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_sections() {
        let config = from_toml(
            r#"
            [grid]
            cell_width = 14.0

            [style]
            roughness = 0.0
            background_color = "white"

            [canvas]
            width = 800.0
            "#,
        );

        assert_eq!(config.grid().cell_size(), CellSize::new(14.0, 22.0));
        assert_eq!(config.style().roughness(), 0.0);
        assert_eq!(config.style().seed(), 42);
        assert!(config.style().background_color().unwrap().is_some());
        assert_eq!(config.canvas().width(), Some(800.0));
        assert_eq!(config.canvas().height(), None);
    }

    #[test]
    fn test_sketch_style_from_defaults() {
        let style = StyleConfig::default().sketch_style().unwrap();
        assert_eq!(style, SketchStyle::default());
    }

    #[test]
    fn test_rejects_non_positive_cells() {
        let config = from_toml("[grid]\ncell_height = 0.0");
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("grid.cell_height"));
    }

    #[test]
    fn test_grid_validation_ignores_style() {
        let config = from_toml("[style]\nstroke_color = \"nope\"");
        assert!(config.grid().validate().is_ok());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_bad_color() {
        let config = from_toml("[style]\nstroke_color = \"not-a-color\"");
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ScrawlError::Config { .. }));
        assert!(err.to_string().contains("style.stroke_color"));
    }

    #[test]
    fn test_rejects_bad_background() {
        let config = from_toml("[style]\nbackground_color = \"#zzzzzz\"");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_negative_roughness() {
        let mut config = AppConfig::default();
        config.style_mut().set_roughness(-1.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_unknown_fill_style() {
        let config = from_toml("[style]\nfill_style = \"zigzag\"");
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("zigzag"));
    }

    #[test]
    fn test_stroke_cap_and_join() {
        let config = from_toml(
            r#"
            [style]
            stroke_linecap = "square"
            stroke_linejoin = "bevel"
            "#,
        );
        let stroke = config.style().sketch_style().unwrap().stroke().clone();
        assert_eq!(stroke.cap(), StrokeCap::Square);
        assert_eq!(stroke.join(), StrokeJoin::Bevel);

        let config = from_toml("[style]\nstroke_linejoin = \"sharp\"");
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("style.stroke_linejoin"));
    }

    #[test]
    fn test_rejects_zero_canvas() {
        let config = from_toml("[canvas]\nwidth = 0.0");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_overrides() {
        let mut config = AppConfig::default();
        config.grid_mut().set_cell_width(20.0);
        config.grid_mut().set_cell_height(30.0);
        config.style_mut().set_seed(7);

        assert_eq!(config.grid().cell_size(), CellSize::new(20.0, 30.0));
        assert_eq!(config.style().seed(), 7);
    }
}
