//! Command-line argument definitions for the Scrawl CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments choose the input (a file, stdin, or a built-in
//! example), the output path and format, configuration file selection,
//! per-run configuration overrides, and logging verbosity.

use clap::{Parser, ValueEnum};

/// Output format written by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Format {
    /// Sketch-style SVG document
    #[default]
    Svg,
    /// The parsed primitives as JSON
    Json,
}

impl Format {
    /// Output path used when `--output` is not given.
    pub fn default_output(self) -> &'static str {
        match self {
            Self::Svg => "out.svg",
            Self::Json => "out.json",
        }
    }
}

/// Command-line arguments for the Scrawl sketch tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input ASCII art file, or `-` for stdin
    #[arg(conflicts_with = "example")]
    pub input: Option<String>,

    /// Path to the output file, or `-` for stdout [default: out.svg, or out.json with --format json]
    #[arg(short, long)]
    pub output: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Svg)]
    pub format: Format,

    /// Render a built-in example instead of an input file
    #[arg(short, long)]
    pub example: Option<String>,

    /// List the built-in examples and exit
    #[arg(long)]
    pub list_examples: bool,

    /// Override the grid cell width
    #[arg(long)]
    pub cell_width: Option<f32>,

    /// Override the grid cell height
    #[arg(long)]
    pub cell_height: Option<f32>,

    /// Override the stroke generator seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Override the stroke roughness (0 draws straight lines)
    #[arg(long)]
    pub roughness: Option<f32>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Args {
    /// Returns the output path, falling back to the format's default.
    pub fn output_path(&self) -> &str {
        self.output
            .as_deref()
            .unwrap_or_else(|| self.format.default_output())
    }
}
