//! Error types for grid construction and validation.

use std::fmt;

/// Error type for building a [`DiceGrid`](crate::DiceGrid) from
/// untrusted row data (e.g. a deserialized project file).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// No rows, or a zero-length first row.
    Empty,
    /// A row's length differs from the first row's length.
    NotRectangular {
        /// Index of the offending row
        row: usize,
        /// Length of the offending row
        len: usize,
        /// Expected length (taken from the first row)
        expected: usize,
    },
    /// A cell holds a value outside 1..=6.
    FaceOutOfRange {
        /// Row index of the offending cell
        row: usize,
        /// Column index of the offending cell
        col: usize,
        /// The out-of-range value
        value: u8,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::Empty => {
                write!(f, "grid must have at least one row and one column")
            }
            GridError::NotRectangular { row, len, expected } => {
                write!(
                    f,
                    "grid is not rectangular: row {} has {} cells, expected {}",
                    row, len, expected
                )
            }
            GridError::FaceOutOfRange { row, col, value } => {
                write!(
                    f,
                    "face value {} at row {}, column {} is outside 1..=6",
                    value, row, col
                )
            }
        }
    }
}

impl std::error::Error for GridError {}
