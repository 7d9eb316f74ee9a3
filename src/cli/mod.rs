//! CLI logic for the `antidiag` binary.
//!
//! Picks the matrix source (TOML file, generated demo, or the built-in 4×3
//! example), then prints the anti-diagonal order to the given writer.

mod args;
pub mod input;

pub use args::{Args, Dims};

use std::{fmt::Display, io::Write};

use log::info;
use thiserror::Error;

use crate::{Matrix, ShapeError, write_diagonal_order, write_grid};

/// First value of a `--demo` matrix.
pub const DEMO_START: i64 = 10;

/// Errors surfaced by the command-line front end.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse matrix file: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid matrix shape: {0}")]
    Shape(#[from] ShapeError),
}

/// The 4×3 matrix traversed when no input is given.
pub fn example_matrix() -> Result<Matrix<i64>, ShapeError> {
    Matrix::from_rows(vec![
        vec![1, 2, 3],
        vec![4, 5, 6],
        vec![7, 8, 9],
        vec![10, 11, 12],
    ])
}

/// Run the CLI: load or build the matrix, then print it.
///
/// # Errors
///
/// Returns [`CliError`] for unreadable or malformed input files, shapes
/// that fail validation, and write failures on `out`.
pub fn run<W: Write>(args: &Args, out: &mut W) -> Result<(), CliError> {
    match (&args.input, args.demo) {
        (Some(path), _) => emit(&input::load_matrix(path)?, args.show_matrix, out),
        (None, Some(dims)) => {
            info!(rows = dims.rows, cols = dims.cols; "Generating demo matrix");
            emit(
                &Matrix::sequential(dims.rows, dims.cols, DEMO_START)?,
                args.show_matrix,
                out,
            )
        }
        (None, None) => emit(&example_matrix()?, args.show_matrix, out),
    }
}

fn emit<T: Display, W: Write>(
    matrix: &Matrix<T>,
    show_matrix: bool,
    out: &mut W,
) -> Result<(), CliError> {
    if show_matrix {
        write_grid(matrix, out)?;
    }
    info!(
        rows = matrix.rows(),
        cols = matrix.cols(),
        diagonals = matrix.diagonal_count();
        "Printing matrix in anti-diagonal order"
    );
    write_diagonal_order(matrix, out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use clap::Parser;

    use super::*;

    fn run_to_string(argv: &[&str]) -> Result<String, CliError> {
        let args = Args::try_parse_from(argv).unwrap();
        let mut out = Vec::new();
        run(&args, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn default_prints_example() {
        let out = run_to_string(&["antidiag"]).unwrap();
        assert_eq!(out, "1\n2\n4\n3\n5\n7\n6\n8\n10\n9\n11\n12\n");
    }

    #[test]
    fn demo_matrix_starts_at_ten() {
        let out = run_to_string(&["antidiag", "--demo", "2x2"]).unwrap();
        assert_eq!(out, "10\n11\n12\n13\n");
    }

    #[test]
    fn zero_sized_demo_is_shape_error() {
        let err = run_to_string(&["antidiag", "--demo", "0x3"]).unwrap_err();
        assert!(matches!(err, CliError::Shape(ShapeError::Empty)));
    }

    #[test]
    fn oversized_demo_is_shape_error() {
        let err = run_to_string(&["antidiag", "--demo", "8589934592x8589934592"]).unwrap_err();
        assert!(matches!(
            err,
            CliError::Shape(ShapeError::Overflow {
                rows: 8589934592,
                cols: 8589934592
            })
        ));
    }

    #[test]
    fn show_matrix_prints_grid_first() {
        let out = run_to_string(&["antidiag", "--demo", "2x3", "--show-matrix"]).unwrap();
        assert_eq!(out, "10 11 12\n13 14 15\n\n10\n11\n13\n12\n14\n15\n");
    }

    #[test]
    fn file_input_is_printed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("m.toml");
        fs::write(&path, "matrix = [[1, 2, 3]]\n").unwrap();

        let out = run_to_string(&["antidiag", path.to_str().unwrap()]).unwrap();
        assert_eq!(out, "1\n2\n3\n");
    }

    #[test]
    fn jagged_file_prints_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("jagged.toml");
        fs::write(&path, "matrix = [[1, 2], [3]]\n").unwrap();

        let args = Args::try_parse_from(["antidiag", path.to_str().unwrap()]).unwrap();
        let mut out = Vec::new();
        let err = run(&args, &mut out).unwrap_err();
        assert!(matches!(err, CliError::Shape(_)));
        assert!(out.is_empty());
    }
}
