//! Error adapter for converting CLI errors to miette diagnostics.
//!
//! This module provides the bridge between the standard error types used by
//! the library and CLI and miette's rich diagnostic formatting. TOML parse
//! errors carry their source and byte span, so they render with a labelled
//! snippet of the configuration file; everything else renders as a plain
//! diagnostic with a code and, where useful, a hint.

use std::{fmt, ops::Range};

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceSpan};

use scrawl::{ScrawlError, gallery};

use crate::{config::ConfigError, error::CliError};

/// Adapter for a TOML parse error with its source.
pub struct ConfigDiagnostic<'a> {
    path: String,
    message: &'a str,
    span: Option<SourceSpan>,
    src: &'a str,
}

impl<'a> ConfigDiagnostic<'a> {
    /// Create a new diagnostic for the configuration file at `path`.
    pub fn new(
        path: impl Into<String>,
        message: &'a str,
        src: &'a str,
        span: Option<Range<usize>>,
    ) -> Self {
        Self {
            path: path.into(),
            message,
            span: span.map(|span| SourceSpan::new(span.start.into(), span.len())),
            src,
        }
    }
}

impl fmt::Debug for ConfigDiagnostic<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigDiagnostic")
            .field("path", &self.path)
            .field("message", &self.message)
            .field("span", &self.span)
            .finish()
    }
}

impl fmt::Display for ConfigDiagnostic<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid configuration file `{}`", self.path)
    }
}

impl std::error::Error for ConfigDiagnostic<'_> {}

impl MietteDiagnostic for ConfigDiagnostic<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new("scrawl::config::parse"))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.message.trim()))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        self.span.map(|_| &self.src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let span = self.span?;
        Some(Box::new(std::iter::once(
            LabeledSpan::new_primary_with_span(Some("here".to_string()), span),
        )))
    }
}

/// Adapter for errors without source locations.
pub struct ErrorAdapter<'a>(pub &'a CliError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(self.0)
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            CliError::Config(ConfigError::Parse { .. }) => "scrawl::config::parse",
            CliError::Config(ConfigError::MissingFile(_)) => "scrawl::config::missing",
            CliError::Config(ConfigError::Read { .. }) => "scrawl::config::read",
            CliError::Config(ConfigError::Validation(_)) => "scrawl::config::invalid",
            CliError::Scrawl(ScrawlError::Io(_)) | CliError::Io { .. } => "scrawl::io",
            CliError::Scrawl(ScrawlError::Config { .. }) => "scrawl::config::invalid",
            CliError::Scrawl(ScrawlError::UnknownExample { .. }) => "scrawl::unknown_example",
            CliError::Scrawl(ScrawlError::Export(_)) => "scrawl::export",
            CliError::MissingInput => "scrawl::usage",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            CliError::Config(ConfigError::MissingFile(_)) => {
                "check the path passed to --config".to_string()
            }
            CliError::Scrawl(ScrawlError::UnknownExample { .. }) => format!(
                "available examples: {}",
                gallery::all()
                    .iter()
                    .map(|example| example.id())
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
            CliError::MissingInput => {
                "pass an input file, `-` to read stdin, or --example <ID>".to_string()
            }
            _ => return None,
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

/// A reportable error that can be rendered by miette.
///
/// This enum wraps either a diagnostic with a source snippet or a plain
/// error, providing a uniform interface for error rendering.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// A rich diagnostic with source location information.
    Diagnostic(ConfigDiagnostic<'a>),
    /// A simple error without source location.
    Error(ErrorAdapter<'a>),
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reportable::Diagnostic(d) => fmt::Display::fmt(d, f),
            Reportable::Error(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Reportable::Diagnostic(_) => None,
            Reportable::Error(e) => std::error::Error::source(e),
        }
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Diagnostic(d) => d.code(),
            Reportable::Error(e) => e.code(),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Diagnostic(d) => d.help(),
            Reportable::Error(e) => e.help(),
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match self {
            Reportable::Diagnostic(d) => d.source_code(),
            Reportable::Error(e) => e.source_code(),
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        match self {
            Reportable::Diagnostic(d) => d.labels(),
            Reportable::Error(e) => e.labels(),
        }
    }
}

/// Convert a [`CliError`] into a reportable error.
///
/// TOML parse errors become a [`ConfigDiagnostic`] pointing into the
/// configuration source; every other error is wrapped in an [`ErrorAdapter`].
pub fn to_reportable(err: &CliError) -> Reportable<'_> {
    match err {
        CliError::Config(ConfigError::Parse {
            path,
            message,
            src,
            span,
        }) => Reportable::Diagnostic(ConfigDiagnostic::new(
            path.display().to_string(),
            message,
            src,
            span.clone(),
        )),
        _ => Reportable::Error(ErrorAdapter(err)),
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn parse_error(span: Option<Range<usize>>) -> CliError {
        CliError::Config(ConfigError::Parse {
            path: PathBuf::from("scrawl/config.toml"),
            message: "invalid type: string \"wide\", expected f32".to_string(),
            src: "[grid]\ncell_width = \"wide\"\n".to_string(),
            span,
        })
    }

    #[test]
    fn test_parse_error_has_label() {
        let err = parse_error(Some(20..26));
        let reportable = to_reportable(&err);

        assert!(matches!(reportable, Reportable::Diagnostic(_)));
        assert_eq!(
            reportable.to_string(),
            "Invalid configuration file `scrawl/config.toml`"
        );
        assert!(reportable.source_code().is_some());

        let labels: Vec<_> = reportable.labels().unwrap().collect();
        assert_eq!(labels.len(), 1);
        assert_eq!(labels[0].offset(), 20);
        assert_eq!(labels[0].len(), 6);
        assert!(labels[0].primary());
    }

    #[test]
    fn test_parse_error_without_span() {
        let err = parse_error(None);
        let reportable = to_reportable(&err);

        assert!(reportable.source_code().is_none());
        assert!(reportable.labels().is_none());
        assert!(reportable.help().unwrap().to_string().contains("wide"));
    }

    #[test]
    fn test_unknown_example_lists_ids() {
        let err = CliError::Scrawl(ScrawlError::UnknownExample {
            name: "nope".to_string(),
        });
        let reportable = to_reportable(&err);

        assert_eq!(reportable.to_string(), "Unknown example `nope`");
        assert_eq!(
            reportable.code().unwrap().to_string(),
            "scrawl::unknown_example"
        );
        let help = reportable.help().unwrap().to_string();
        assert!(help.contains("arch"));
        assert!(help.contains("rocket"));
    }

    #[test]
    fn test_plain_error() {
        let err = CliError::Config(ConfigError::Validation("bad".to_string()));
        let reportable = to_reportable(&err);

        match &reportable {
            Reportable::Error(e) => assert_eq!(e.to_string(), "Validation error: bad"),
            Reportable::Diagnostic(_) => panic!("Expected Error"),
        }
        assert!(reportable.help().is_none());
    }
}
