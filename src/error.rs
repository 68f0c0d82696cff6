//! All kinds of errors in this crate.

use ca_formats::rle::Error as RleError;
use thiserror::Error;

/// All kinds of errors in this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// The initial world is not a valid 64-bit literal.
    #[error("Invalid 64-bit literal: {0:?}.")]
    InvalidLiteral(String),
    /// The grid size is not a positive integer.
    #[error("Invalid grid size: {0:?}.")]
    InvalidSize(String),
    /// The generation limit is not a non-negative integer.
    #[error("Invalid generation limit: {0:?}.")]
    InvalidLimit(String),
    /// A required command-line argument is missing.
    #[error("Missing argument: {0}.")]
    MissingArgument(&'static str),
    /// An unexpected command-line argument.
    #[error("Unknown argument: {0:?}.")]
    UnknownArgument(String),
    /// Rows of a grid must all have the same length.
    #[error("Row {row} has {found} cells, expected {expected}.")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A pattern has a living cell outside the board.
    #[error("Cell ({col}, {row}) is outside the board.")]
    CellOutOfBounds { col: i64, row: i64 },
    /// Invalid RLE pattern.
    #[error("Invalid RLE pattern: {0}")]
    Rle(#[from] RleError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
