//! Character grid built from source text.

/// Source text split into rows of characters.
///
/// Rows are split on `\n` and keep their own length; nothing is padded. A
/// `\r` from CRLF line endings stays in the row and is classified as blank.
#[derive(Debug, Clone, Default)]
pub(crate) struct Grid {
    rows: Vec<Vec<char>>,
}

impl Grid {
    pub(crate) fn new(text: &str) -> Self {
        if text.is_empty() {
            return Self::default();
        }

        Self {
            rows: text.split('\n').map(|row| row.chars().collect()).collect(),
        }
    }

    /// Iterates rows with their index.
    pub(crate) fn rows(&self) -> impl Iterator<Item = (usize, &[char])> {
        self.rows.iter().map(Vec::as_slice).enumerate()
    }

    /// Iterates every character with its `(row, col)` position, row-major.
    pub(crate) fn cells(&self) -> impl Iterator<Item = (usize, usize, char)> {
        self.rows().flat_map(|(row, chars)| {
            chars
                .iter()
                .enumerate()
                .map(move |(col, &character)| (row, col, character))
        })
    }

    pub(crate) fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Length of the longest row.
    pub(crate) fn column_count(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }
}
