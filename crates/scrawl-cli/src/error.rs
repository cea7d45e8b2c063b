//! Errors surfaced by the CLI.

use std::io;

use thiserror::Error;

use scrawl::ScrawlError;

use crate::config::ConfigError;

/// Everything that can make a CLI run fail.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Scrawl(#[from] ScrawlError),

    #[error("Failed to access `{path}`: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("No input given")]
    MissingInput,
}

impl CliError {
    /// Wraps an I/O error with the path it happened on.
    pub fn io(path: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
