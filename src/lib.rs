//! Anti-diagonal traversal of rectangular matrices.
//!
//! Elements are visited diagonal by diagonal, where diagonal `d` holds every
//! cell with `row + col == d`. Diagonals go in increasing `d`, and inside a
//! diagonal rows go top to bottom.
//!
//! ```text
//!  1  2  3
//!  4  5  6      ->   1 | 2 4 | 3 5 7 | 6 8 10 | 9 11 | 12
//!  7  8  9
//! 10 11 12
//! ```
//!
//! ## Usage
//!
//! ```
//! use antidiag::diagonal_order;
//!
//! let order = diagonal_order(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
//! assert_eq!(order, vec![1, 2, 4, 3, 5, 6]);
//! ```
//!
//! To avoid collecting, validate once into a [`Matrix`] and pull from the
//! lazy iterator:
//!
//! ```
//! use antidiag::Matrix;
//!
//! let m = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
//! let mut it = m.anti_diagonals();
//! assert_eq!(it.next(), Some(&1));
//! assert_eq!(it.len(), 3);
//! ```
//!
//! ## What's inside
//!
//! - [`Matrix`]: validated row-major storage
//! - [`traversal`]: the lazy iterators plus a naive baseline
//! - [`cli`]: the `antidiag` command-line front end

pub mod cli;
pub mod error;
pub mod matrix;
pub mod traversal;

pub use error::ShapeError;
pub use matrix::{Cell, Matrix};
pub use traversal::{AntiDiagonals, Diagonal, DiagonalCells, anti_diagonal_naive};

use std::fmt::Display;
use std::io::{self, Write};

/// Validate `rows` and return its elements in anti-diagonal order.
///
/// The whole shape is checked before anything is produced, so on error no
/// partial output exists.
///
/// # Errors
///
/// Returns [`ShapeError`] if `rows` is empty, has zero-width rows, or is
/// ragged.
pub fn diagonal_order<T: Clone>(rows: Vec<Vec<T>>) -> Result<Vec<T>, ShapeError> {
    let matrix = Matrix::from_rows(rows)?;
    Ok(matrix.anti_diagonals().cloned().collect())
}

/// Print `matrix` row by row, values separated by spaces, then a blank line.
pub fn write_grid<T: Display, W: Write>(matrix: &Matrix<T>, out: &mut W) -> io::Result<()> {
    for row in matrix.as_slice().chunks(matrix.cols()) {
        let mut values = row.iter();
        if let Some(first) = values.next() {
            write!(out, "{}", first)?;
        }
        for value in values {
            write!(out, " {}", value)?;
        }
        writeln!(out)?;
    }
    writeln!(out)
}

/// Print every element of `matrix` in anti-diagonal order, one per line.
pub fn write_diagonal_order<T: Display, W: Write>(
    matrix: &Matrix<T>,
    out: &mut W,
) -> io::Result<()> {
    for value in matrix.anti_diagonals() {
        writeln!(out, "{}", value)?;
    }
    out.flush()
}
