//! Text style for single-glyph labels.

use crate::color::Color;

/// Defines the visual style for text glyphs.
///
/// # Default Values
///
/// | Property | Default |
/// |----------|---------|
/// | Font family | `"Segoe UI, Tahoma, Geneva, Verdana, sans-serif"` |
/// | Font size | `20` |
/// | Color | `#1e1e1e` |
///
/// # Examples
///
/// ```
/// # use scrawl_core::draw::TextDefinition;
/// # use scrawl_core::color::Color;
/// let mut style = TextDefinition::new();
/// style.set_font_family("monospace");
/// style.set_font_size(14);
/// style.set_color(Color::new("navy").unwrap());
/// assert_eq!(style.font_size(), 14);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TextDefinition {
    font_family: String,
    font_size: u16,
    color: Color,
}

impl TextDefinition {
    /// Creates a new text definition with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the font family (a CSS font-family list).
    pub fn set_font_family(&mut self, family: &str) {
        self.font_family = family.to_string();
    }

    /// Sets the font size in points.
    pub fn set_font_size(&mut self, size: u16) {
        self.font_size = size;
    }

    /// Sets the text color.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Returns the font family.
    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    /// Returns the font size in points.
    pub fn font_size(&self) -> u16 {
        self.font_size
    }

    /// Returns the text color.
    pub fn color(&self) -> Color {
        self.color
    }
}

impl Default for TextDefinition {
    fn default() -> Self {
        Self {
            font_family: String::from("Segoe UI, Tahoma, Geneva, Verdana, sans-serif"),
            font_size: 20,
            color: Color::new("#1e1e1e").unwrap_or_default(),
        }
    }
}
