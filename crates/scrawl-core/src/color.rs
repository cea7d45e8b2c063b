//! Color handling for Scrawl sketches
//!
//! This module provides the [`Color`] type which wraps the `DynamicColor` type
//! from the color crate, so stroke, fill and text colors can be written as
//! CSS color strings in configuration.

use std::str::FromStr;

use color::{DynamicColor, Rgba8, Srgb, palette};

/// Wrapper around the `DynamicColor` type from the color crate
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Color {
    /// Create a new `Color` from a string
    /// This will parse CSS color strings such as "#ff0000", "rgba(0, 0, 0, 0.05)", "red", etc.
    ///
    /// # Examples
    ///
    /// ```
    /// use scrawl_core::color::Color;
    ///
    /// let ink = Color::new("#1e1e1e").unwrap();
    /// let wash = Color::new("rgba(99, 102, 241, 0.05)").unwrap();
    /// assert!(wash.alpha() < ink.alpha());
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        match DynamicColor::from_str(color_str) {
            Ok(color) => Ok(Self { color }),
            Err(err) => Err(format!("invalid color `{color_str}`: {err}")),
        }
    }

    /// Creates a new color with the specified alpha (transparency) value.
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self {
            color: self.color.with_alpha(alpha),
        }
    }

    /// Returns the color as an opaque `rgb(r, g, b)` string, for use next to
    /// a separate `*-opacity` attribute.
    ///
    /// # Examples
    ///
    /// ```
    /// use scrawl_core::color::Color;
    ///
    /// let wash = Color::new("rgba(99, 102, 241, 0.05)").unwrap();
    /// assert_eq!(wash.to_opaque_string(), "rgb(99, 102, 241)");
    /// ```
    pub fn to_opaque_string(&self) -> String {
        let rgba = self.color.to_alpha_color::<Srgb>().to_rgba8();
        Rgba8 { a: 255, ..rgba }.to_string()
    }

    /// Returns the alpha (transparency) component of this color, between
    /// 0.0 (fully transparent) and 1.0 (fully opaque).
    pub fn alpha(&self) -> f32 {
        self.color.components[3]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self {
            color: DynamicColor::from_alpha_color(palette::css::BLACK),
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.color)
    }
}

impl From<&Color> for svg::node::Value {
    fn from(color: &Color) -> Self {
        Self::from(color.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opaque_string_drops_alpha() {
        let wash = Color::new("rgba(99, 102, 241, 0.05)").unwrap();
        assert_eq!(wash.to_opaque_string(), "rgb(99, 102, 241)");
        assert!((wash.alpha() - 0.05).abs() < 0.001);

        assert_eq!(Color::new("#1e1e1e").unwrap().to_opaque_string(), "rgb(30, 30, 30)");
        assert_eq!(Color::new("red").unwrap().to_opaque_string(), "rgb(255, 0, 0)");
    }

    #[test]
    fn test_default_is_opaque_black() {
        let black = Color::default();
        assert_eq!(black.alpha(), 1.0);
        assert_eq!(black.to_opaque_string(), "rgb(0, 0, 0)");
    }

    #[test]
    fn test_color_new() {
        assert!(Color::new("#1e1e1e").is_ok());
        assert!(Color::new("rgba(0, 0, 0, 0.05)").is_ok());
        assert!(Color::new("not-a-color").is_err());
    }

    #[test]
    fn test_color_error_mentions_input() {
        let err = Color::new("chartreuse-ish").unwrap_err();
        assert!(err.contains("chartreuse-ish"));
    }

    #[test]
    fn test_color_alpha() {
        let opaque = Color::new("red").unwrap();
        assert!((opaque.alpha() - 1.0).abs() < 0.001);

        let wash = Color::new("rgba(99, 102, 241, 0.05)").unwrap();
        assert!((wash.alpha() - 0.05).abs() < 0.001);
    }

    #[test]
    fn test_color_with_alpha() {
        let color = Color::new("red").unwrap();
        let transparent = color.with_alpha(0.5);
        assert!((transparent.alpha() - 0.5).abs() < 0.001);
    }

    #[test]
    fn test_color_display() {
        let color = Color::new("blue").unwrap();
        assert!(!color.to_string().is_empty());
    }
}
