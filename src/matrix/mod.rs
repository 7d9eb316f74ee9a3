//! Validated rectangular matrix storage.
//!
//! Elements live in one flat row-major buffer, same layout the matmul
//! kernels used: cell `(i, j)` sits at index `i * cols + j`. The shape is
//! checked once at construction, so the traversals never need to.

use std::ops::Index;

use log::debug;

use crate::error::ShapeError;

/// A `(row, column)` coordinate.
pub type Cell = (usize, usize);

/// Non-empty rectangular matrix, `rows × cols`, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T> Matrix<T> {
    /// Build a matrix from nested rows.
    ///
    /// Every row must have the same length as the first one, and there must
    /// be at least one row with at least one column.
    ///
    /// # Example
    ///
    /// ```
    /// use antidiag::Matrix;
    ///
    /// let m = Matrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
    /// assert_eq!((m.rows(), m.cols()), (2, 3));
    /// assert_eq!(m[(1, 0)], 4);
    ///
    /// assert!(Matrix::from_rows(vec![vec![1, 2], vec![3]]).is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// - [`ShapeError::Empty`] if `rows` is empty
    /// - [`ShapeError::Ragged`] if any row length differs from the first
    /// - [`ShapeError::NoColumns`] if the rows are all empty
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, ShapeError> {
        let Some(first) = rows.first() else {
            return Err(ShapeError::Empty);
        };
        let cols = first.len();

        if let Some((row, bad)) = rows.iter().enumerate().find(|(_, r)| r.len() != cols) {
            return Err(ShapeError::Ragged {
                row,
                expected: cols,
                found: bad.len(),
            });
        }
        if cols == 0 {
            return Err(ShapeError::NoColumns);
        }

        let row_count = rows.len();
        let data: Vec<T> = rows.into_iter().flatten().collect();

        debug!(rows = row_count, cols = cols; "Validated matrix shape");

        Ok(Self {
            data,
            rows: row_count,
            cols,
        })
    }

    /// Wrap a flat row-major buffer.
    ///
    /// # Arguments
    ///
    /// * `data` - Elements, row-major, exactly `rows * cols` of them
    /// * `rows` - Number of rows (m)
    /// * `cols` - Number of columns (n)
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError`] if either dimension is zero, `rows * cols`
    /// overflows, or the buffer length doesn't match.
    pub fn from_row_major(data: Vec<T>, rows: usize, cols: usize) -> Result<Self, ShapeError> {
        if rows == 0 {
            return Err(ShapeError::Empty);
        }
        if cols == 0 {
            return Err(ShapeError::NoColumns);
        }
        let expected = rows
            .checked_mul(cols)
            .ok_or(ShapeError::Overflow { rows, cols })?;
        if data.len() != expected {
            return Err(ShapeError::Length {
                expected,
                found: data.len(),
            });
        }

        debug!(rows = rows, cols = cols; "Validated row-major buffer");

        Ok(Self { data, rows, cols })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of anti-diagonals, `rows + cols - 1`.
    pub fn diagonal_count(&self) -> usize {
        self.rows + self.cols - 1
    }

    /// Element at `(i, j)`, or `None` outside the matrix.
    pub fn get(&self, i: usize, j: usize) -> Option<&T> {
        if i < self.rows && j < self.cols {
            self.data.get(i * self.cols + j)
        } else {
            None
        }
    }

    /// Row `i` as a slice.
    pub fn row(&self, i: usize) -> Option<&[T]> {
        let start = i.checked_mul(self.cols)?;
        self.data.get(start..start.checked_add(self.cols)?)
    }

    /// The underlying row-major buffer.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl Matrix<i64> {
    /// Demo matrix filled with consecutive integers.
    ///
    /// Cell `(i, j)` holds `start + i * cols + j`, so reading it row by row
    /// counts up from `start`.
    ///
    /// ```
    /// use antidiag::Matrix;
    ///
    /// let m = Matrix::sequential(2, 3, 10).unwrap();
    /// assert_eq!(m.as_slice(), &[10, 11, 12, 13, 14, 15]);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::Overflow`] if the element count or the last
    /// value doesn't fit, or the buffer can't be allocated. Nothing is
    /// allocated before the shape is checked.
    pub fn sequential(rows: usize, cols: usize, start: i64) -> Result<Self, ShapeError> {
        if rows == 0 {
            return Err(ShapeError::Empty);
        }
        if cols == 0 {
            return Err(ShapeError::NoColumns);
        }
        let too_large = ShapeError::Overflow { rows, cols };

        let len = rows.checked_mul(cols).ok_or_else(|| too_large.clone())?;
        let last = i64::try_from(len - 1)
            .ok()
            .and_then(|last| start.checked_add(last));
        if last.is_none() {
            return Err(too_large);
        }

        let mut data = Vec::new();
        data.try_reserve_exact(len).map_err(|_| too_large)?;
        // start + k <= last, checked above
        data.extend((0..len).map(|k| start + k as i64));

        Self::from_row_major(data, rows, cols)
    }
}

impl<T> TryFrom<Vec<Vec<T>>> for Matrix<T> {
    type Error = ShapeError;

    fn try_from(rows: Vec<Vec<T>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl<T> Index<Cell> for Matrix<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `(i, j)` is outside the matrix.
    fn index(&self, (i, j): Cell) -> &T {
        assert!(
            i < self.rows && j < self.cols,
            "cell ({}, {}) out of bounds for {}x{} matrix",
            i,
            j,
            self.rows,
            self.cols
        );
        &self.data[i * self.cols + j]
    }
}
