//! Error types for grid construction, mutation, and parsing.

/// An error raised by grid construction or the checked mutation primitive.
///
/// All variants are raised synchronously at the point of violation and are
/// never recovered internally; callers decide how to react.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridError {
    /// The supplied board is not exactly 9×9.
    #[display("board must be 9x9, got {rows}x{cols}")]
    Dimension {
        /// Number of rows supplied.
        rows: usize,
        /// Number of columns in the offending row.
        cols: usize,
    },
    /// A row or column index is outside 0-8.
    #[display("cell index ({row}, {col}) is outside the board")]
    IndexRange {
        /// Offending row index.
        row: usize,
        /// Offending column index.
        col: usize,
    },
    /// A cell value is outside 0-9.
    #[display("cell value {value} is outside the range 0-9")]
    ValueRange {
        /// Offending value.
        value: u8,
    },
}

/// An error raised when parsing a grid from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseGridError {
    /// The text contains a character that is not a digit, a placeholder,
    /// or whitespace.
    #[display("unexpected character {c:?} in grid text")]
    UnexpectedCharacter {
        /// The offending character.
        c: char,
    },
    /// The text does not contain exactly 81 cells.
    #[display("grid text has {count} cells, expected 81")]
    CellCount {
        /// Number of cells found.
        count: usize,
    },
}
