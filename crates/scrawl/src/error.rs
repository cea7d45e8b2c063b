//! Error types for Scrawl operations.
//!
//! This module provides the main error type [`ScrawlError`] which wraps
//! the conditions that can occur while turning ASCII art into a sketch.
//! Parsing itself never fails; everything here comes from configuration,
//! the example gallery, I/O, or export.

use std::io;

use thiserror::Error;

/// The main error type for Scrawl operations.
#[derive(Debug, Error)]
pub enum ScrawlError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid configuration: {message}")]
    Config { message: String },

    #[error("Unknown example `{name}`")]
    UnknownExample { name: String },

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error>),
}

impl From<crate::export::Error> for ScrawlError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}

impl ScrawlError {
    /// Create a new `Config` error from any message.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}
