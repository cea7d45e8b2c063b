//! Scrawl - turn ASCII art into hand-sketched diagrams.
//!
//! Parsing and rendering for plain-text drawings. Bracket pairs become
//! boxes, `- _ = | / \` become strokes, `+` and `*` become dots, and every
//! other character is drawn as a single glyph. The result is rendered as an
//! SVG document with a hand-drawn look, or dumped as JSON.

pub mod config;
pub mod export;
pub mod gallery;

mod error;

pub use scrawl_core::{color, draw, geometry, primitive};
pub use scrawl_parser::CellSize;

pub use error::ScrawlError;

use std::io::Write;

use log::{debug, info, trace};

use config::AppConfig;
use export::{Exporter, json::Json, svg::SvgBuilder};
use primitive::{Primitive, PrimitiveKind};

/// Builder for parsing and rendering Scrawl sketches.
///
/// # Examples
///
/// ```rust
/// use scrawl::{SketchBuilder, config::AppConfig};
///
/// let source = "[ A ]\n  |  ";
///
/// let builder = SketchBuilder::new(AppConfig::default());
///
/// // Parse ASCII art to primitives
/// let primitives = builder.parse(source)
///     .expect("Failed to parse");
/// assert_eq!(primitives.len(), 3);
///
/// // Render primitives to SVG
/// let svg = builder.render_svg(&primitives)
///     .expect("Failed to render");
/// assert!(svg.contains("<svg"));
/// ```
#[derive(Debug, Default)]
pub struct SketchBuilder {
    config: AppConfig,
}

impl SketchBuilder {
    /// Create a new sketch builder with the given configuration.
    ///
    /// The configuration is validated on use, not here.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration in use.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse ASCII art into an ordered list of primitives.
    ///
    /// All boxes come first, followed by one primitive per drawable character
    /// in row-major order.
    ///
    /// # Errors
    ///
    /// Returns [`ScrawlError::Config`] if the configured cell size is not
    /// positive. Style and canvas settings are not checked here.
    pub fn parse(&self, source: &str) -> Result<Vec<Primitive>, ScrawlError> {
        info!("Parsing ASCII art");
        self.config.grid().validate()?;

        let primitives = scrawl_parser::parse(source, self.config.grid().cell_size());

        let count = |kind| primitives.iter().filter(|p| p.kind() == kind).count();
        debug!(
            rectangles = count(PrimitiveKind::Rectangle),
            lines = count(PrimitiveKind::Line),
            circles = count(PrimitiveKind::Circle),
            texts = count(PrimitiveKind::Text);
            "ASCII art parsed"
        );
        trace!(primitives:?; "Parsed primitives");

        Ok(primitives)
    }

    /// Render primitives to an SVG string.
    ///
    /// Rendering is deterministic: the same primitives and configuration
    /// always give the same document.
    ///
    /// # Errors
    ///
    /// Returns [`ScrawlError::Config`] for an invalid style or canvas, or
    /// [`ScrawlError::Export`] if the document cannot be produced.
    pub fn render_svg(&self, primitives: &[Primitive]) -> Result<String, ScrawlError> {
        let mut buffer = Vec::new();
        self.write_svg(primitives, &mut buffer)?;

        String::from_utf8(buffer)
            .map_err(|err| export::Error::Render(format!("SVG is not valid UTF-8: {err}")).into())
    }

    /// Render primitives as an SVG document into `writer`.
    ///
    /// # Errors
    ///
    /// Same as [`SketchBuilder::render_svg`], plus I/O failures of `writer`.
    pub fn write_svg(
        &self,
        primitives: &[Primitive],
        writer: &mut dyn Write,
    ) -> Result<(), ScrawlError> {
        info!(primitives = primitives.len(); "Rendering SVG");
        self.config.validate()?;

        let style = self.config.style();
        let mut exporter = SvgBuilder::new(style.sketch_style()?)
            .with_seed(style.seed())
            .with_background(style.background_color()?)
            .with_canvas(self.config.canvas())
            .build();

        exporter.export_primitives(primitives, writer)?;

        info!("SVG rendered successfully");
        Ok(())
    }

    /// Render primitives as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ScrawlError::Export`] if serialization fails.
    pub fn render_json(&self, primitives: &[Primitive]) -> Result<String, ScrawlError> {
        let mut buffer = Vec::new();
        self.write_json(primitives, &mut buffer)?;

        String::from_utf8(buffer)
            .map_err(|err| export::Error::Render(format!("JSON is not valid UTF-8: {err}")).into())
    }

    /// Render primitives as pretty-printed JSON into `writer`.
    ///
    /// # Errors
    ///
    /// Returns [`ScrawlError::Export`] if serialization or writing fails.
    pub fn write_json(
        &self,
        primitives: &[Primitive],
        writer: &mut dyn Write,
    ) -> Result<(), ScrawlError> {
        info!(primitives = primitives.len(); "Writing JSON");
        Json::new().export_primitives(primitives, writer)?;
        Ok(())
    }
}
