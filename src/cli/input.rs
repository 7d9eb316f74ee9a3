//! Loading a matrix from a TOML file.
//!
//! The file holds a single `matrix` key:
//!
//! ```toml
//! matrix = [
//!     [1, 2, 3],
//!     [4, 5, 6],
//! ]
//! ```
//!
//! Integers and floats are both accepted and read as `f64`.

use std::{fs, path::Path};

use log::info;
use serde::Deserialize;

use super::CliError;
use crate::Matrix;

#[derive(Debug, Deserialize)]
struct MatrixFile {
    matrix: Vec<Vec<f64>>,
}

/// Parse TOML source into a validated matrix.
pub fn parse_matrix(source: &str) -> Result<Matrix<f64>, CliError> {
    let file: MatrixFile = toml::from_str(source)?;
    Ok(Matrix::from_rows(file.matrix)?)
}

/// Read and parse a matrix file.
///
/// # Errors
///
/// Returns [`CliError`] if the file can't be read, isn't valid TOML with a
/// numeric `matrix` array, or the matrix isn't rectangular.
pub fn load_matrix(path: impl AsRef<Path>) -> Result<Matrix<f64>, CliError> {
    let path = path.as_ref();
    info!(path = path.display().to_string(); "Loading matrix");

    let source = fs::read_to_string(path)?;
    parse_matrix(&source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ShapeError;

    #[test]
    fn parses_integers_and_floats() {
        let m = parse_matrix("matrix = [[1, 2.5], [3, 4]]").unwrap();
        assert_eq!(m.as_slice(), &[1.0, 2.5, 3.0, 4.0]);
    }

    #[test]
    fn ragged_file_is_shape_error() {
        let err = parse_matrix("matrix = [[1, 2], [3]]").unwrap_err();
        assert!(matches!(
            err,
            CliError::Shape(ShapeError::Ragged { row: 1, .. })
        ));
    }

    #[test]
    fn missing_key_is_toml_error() {
        let err = parse_matrix("rows = 3").unwrap_err();
        assert!(matches!(err, CliError::Toml(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_matrix(dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, CliError::Io(_)));
    }
}
