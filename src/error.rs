//! Shape errors raised when a matrix fails validation.

use thiserror::Error;

/// The input is not a non-empty rectangular matrix.
///
/// Raised before any element is produced: every constructor on
/// [`Matrix`](crate::Matrix) validates the whole shape up front.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("matrix has no rows")]
    Empty,

    #[error("matrix rows have no columns")]
    NoColumns,

    #[error("row {row} has {found} columns, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("buffer holds {found} elements, expected {expected}")]
    Length { expected: usize, found: usize },

    #[error("{rows}x{cols} matrix is too large")]
    Overflow { rows: usize, cols: usize },
}
