//! Export functionality for Scrawl sketches.
//!
//! This module provides the [`Exporter`] trait that defines the interface for
//! writing parsed primitives to an output format. It is the final stage in
//! the Scrawl pipeline.
//!
//! # Pipeline Position
//!
//! ```text
//! ASCII Text
//!     ↓ parse (scrawl-parser)
//! Primitives
//!     ↓ export (this module)
//! SVG document / JSON dump
//! ```
//!
//! # Available Backends
//!
//! - [`svg`] — sketch-style SVG via [`svg::SvgBuilder`] and [`svg::Svg`]
//! - [`json`] — the primitive sequence as pretty-printed JSON
//!
//! # Error Handling
//!
//! Export operations return [`Error`], covering rendering failures and I/O
//! errors. [`Error`] converts into [`ScrawlError::Export`] at the crate
//! boundary.
//!
//! [`ScrawlError::Export`]: crate::ScrawlError::Export

pub mod json;
pub mod svg;

use std::io::Write;

use scrawl_core::primitive::Primitive;

/// Abstraction for export backends.
pub trait Exporter {
    /// Writes `primitives` to `writer` in the backend's output format.
    ///
    /// Primitives are taken in parser order; backends that paint must keep
    /// boxes beneath strokes and strokes beneath text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if the primitives cannot be converted to the
    /// target format, or [`Error::Io`] if writing the output fails.
    fn export_primitives(
        &mut self,
        primitives: &[Primitive],
        writer: &mut dyn Write,
    ) -> Result<(), Error>;
}

/// Errors that can occur during export.
///
/// This type is converted into [`ScrawlError::Export`] at the crate
/// boundary via the [`From`] implementation in [`crate::error`].
///
/// [`ScrawlError::Export`]: crate::ScrawlError::Export
#[derive(Debug)]
pub enum Error {
    /// A rendering or conversion failure described by `message`.
    Render(String),
    /// An I/O error encountered while writing output.
    Io(std::io::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Render(msg) => write!(f, "Render error: {msg}"),
            Self::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Render(_) => None,
            Self::Io(err) => Some(err),
        }
    }
}
