//! Per-character classification.

/// What a single grid character draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    /// `+` or `*`: a small dot in the middle of the cell
    Dot,
    /// `-`, `_` or `=`: a horizontal stroke across the cell
    Horizontal,
    /// `|`: a vertical stroke down the cell
    Vertical,
    /// `/`: a diagonal from bottom-left to top-right
    Rising,
    /// `\`: a diagonal from top-left to bottom-right
    Falling,
    /// Space, brackets and carriage return draw nothing
    Blank,
    /// Any other character is drawn as itself
    Label(char),
}

impl Glyph {
    /// Classifies one character.
    ///
    /// # Examples
    ///
    /// ```
    /// # use scrawl_parser::Glyph;
    /// assert_eq!(Glyph::classify('+'), Glyph::Dot);
    /// assert_eq!(Glyph::classify('['), Glyph::Blank);
    /// assert_eq!(Glyph::classify('Q'), Glyph::Label('Q'));
    /// ```
    pub fn classify(character: char) -> Self {
        match character {
            '+' | '*' => Self::Dot,
            '-' | '_' | '=' => Self::Horizontal,
            '|' => Self::Vertical,
            '/' => Self::Rising,
            '\\' => Self::Falling,
            ' ' | '[' | ']' | '\r' => Self::Blank,
            other => Self::Label(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_table() {
        let cases = [
            ('+', Glyph::Dot),
            ('*', Glyph::Dot),
            ('-', Glyph::Horizontal),
            ('_', Glyph::Horizontal),
            ('=', Glyph::Horizontal),
            ('|', Glyph::Vertical),
            ('/', Glyph::Rising),
            ('\\', Glyph::Falling),
            (' ', Glyph::Blank),
            ('[', Glyph::Blank),
            (']', Glyph::Blank),
            ('\r', Glyph::Blank),
        ];

        for (character, expected) in cases {
            assert_eq!(Glyph::classify(character), expected, "for {character:?}");
        }
    }

    #[test]
    fn test_classify_labels() {
        for character in ['a', 'Z', '0', '.', '<', '>', '(', '{', '?', 'é', '→', '\t'] {
            assert_eq!(Glyph::classify(character), Glyph::Label(character));
        }
    }
}
