//! Configuration file loading for the CLI
//!
//! This module handles finding and loading TOML configuration files
//! from various locations (explicit path, local directory, system directory),
//! and applying command-line overrides on top.

use std::{
    fs,
    ops::Range,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use scrawl::{ScrawlError, config::AppConfig};

use crate::{Args, Format};

/// Configuration-related errors for CLI
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration `{}`: {message}", path.display())]
    Parse {
        path: PathBuf,
        message: String,
        src: String,
        span: Option<Range<usize>>,
    },

    #[error("Missing configuration file: {}", .0.display())]
    MissingFile(PathBuf),

    #[error("Failed to read configuration file `{}`: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Find and load configuration from various locations
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Local project directory (scrawl/config.toml)
/// 3. Platform-specific config directory
/// 4. Default config if none found
///
/// # Errors
///
/// Returns error if:
/// - Explicit path is provided but file doesn't exist
/// - Config file exists but cannot be read or parsed
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, ConfigError> {
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Loading configuration from explicit path");
        return load_config_file(path);
    }

    let local_config = Path::new("scrawl/config.toml");
    if local_config.exists() {
        info!(path = local_config.display().to_string(); "Loading configuration from local path");
        return load_config_file(local_config);
    }

    if let Some(proj_dirs) = ProjectDirs::from("rs", "scrawl", "scrawl") {
        let system_config = proj_dirs.config_dir().join("config.toml");

        if system_config.exists() {
            info!(path = system_config.display().to_string(); "Loading configuration from system path");
            return load_config_file(system_config);
        }

        debug!(path = system_config.display().to_string(); "System configuration file not found");
    } else {
        debug!("Could not determine platform-specific config directory");
    }

    debug!("No configuration file found, using default configuration");
    Ok(AppConfig::default())
}

/// Load configuration from a TOML file
fn load_config_file(path: impl AsRef<Path>) -> Result<AppConfig, ConfigError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()));
    }

    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config(path, content)
}

fn parse_config(path: &Path, content: String) -> Result<AppConfig, ConfigError> {
    toml::from_str(&content).map_err(|err| ConfigError::Parse {
        path: path.to_path_buf(),
        message: err.message().to_string(),
        span: err.span(),
        src: content,
    })
}

/// Applies command-line overrides, then validates the result.
///
/// SVG output checks every section; JSON output only needs the grid.
///
/// # Errors
///
/// Returns [`ConfigError::Validation`] if the merged configuration is invalid.
pub fn finalize(mut config: AppConfig, args: &Args) -> Result<AppConfig, ConfigError> {
    if let Some(width) = args.cell_width {
        config.grid_mut().set_cell_width(width);
    }
    if let Some(height) = args.cell_height {
        config.grid_mut().set_cell_height(height);
    }
    if let Some(seed) = args.seed {
        config.style_mut().set_seed(seed);
    }
    if let Some(roughness) = args.roughness {
        config.style_mut().set_roughness(roughness);
    }

    let validated = match args.format {
        Format::Svg => config.validate(),
        Format::Json => config.grid().validate(),
    };
    validated.map_err(|err| match err {
        ScrawlError::Config { message } => ConfigError::Validation(message),
        other => ConfigError::Validation(other.to_string()),
    })?;

    debug!(
        cell_width = config.grid().cell_size().width(),
        cell_height = config.grid().cell_size().height(),
        seed = config.style().seed();
        "Configuration ready"
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use clap::Parser;
    use tempfile::NamedTempFile;

    use super::*;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_explicit_file() {
        let file = write_config("[grid]\ncell_width = 16.0\n");
        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.grid().cell_size().width(), 16.0);
    }

    #[test]
    fn test_missing_explicit_file() {
        let err = load_config(Some("does/not/exist.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::MissingFile(_)));
    }

    #[test]
    fn test_parse_error_keeps_span() {
        let file = write_config("[grid]\ncell_width = \"wide\"\n");
        let err = load_config(Some(file.path())).unwrap_err();

        match err {
            ConfigError::Parse { src, span, .. } => {
                let span = span.expect("toml reports a span");
                assert!(span.start >= "[grid]\n".len());
                assert!(span.end <= src.len());
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_overrides_win() {
        let args = Args::parse_from(["scrawl", "-", "--cell-height", "30", "--seed", "9"]);
        let config = finalize(AppConfig::default(), &args).unwrap();

        assert_eq!(config.grid().cell_size().height(), 30.0);
        assert_eq!(config.grid().cell_size().width(), 12.0);
        assert_eq!(config.style().seed(), 9);
    }

    #[test]
    fn test_invalid_override_is_rejected() {
        let args = Args::parse_from(["scrawl", "-", "--cell-width", "0"]);
        let err = finalize(AppConfig::default(), &args).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(ref msg) if msg.contains("cell_width")));
    }

    #[test]
    fn test_style_checked_only_for_svg() {
        let file = write_config("[style]\nstroke_color = \"nope\"\n");
        let config = load_config(Some(file.path())).unwrap();

        let json = Args::parse_from(["scrawl", "-", "--format", "json"]);
        assert!(finalize(config.clone(), &json).is_ok());

        let svg = Args::parse_from(["scrawl", "-"]);
        let err = finalize(config, &svg).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(ref msg) if msg.contains("stroke_color")));
    }
}
