//! Lazy anti-diagonal traversal.
//!
//! Diagonal `d` holds the cells with `i + j == d`. For an `m × n` matrix the
//! valid rows on diagonal `d` are `max(0, d - (n - 1)) ..= min(m - 1, d)`;
//! clamping to that range means no out-of-bounds cell is ever produced, and
//! every diagonal `0 ..= m + n - 2` is non-empty.

use std::iter::FusedIterator;

use crate::matrix::{Cell, Matrix};

/// Row range `[lo, hi]` of diagonal `d`. Requires `rows, cols >= 1`.
#[inline]
fn row_bounds(d: usize, rows: usize, cols: usize) -> (usize, usize) {
    (d.saturating_sub(cols - 1), d.min(rows - 1))
}

/// Coordinates of every cell in anti-diagonal order.
///
/// Holds only the shape and a `(d, i)` cursor, so it can be created from a
/// [`Matrix`] and outlive it.
#[derive(Debug, Clone)]
pub struct DiagonalCells {
    rows: usize,
    cols: usize,
    d: usize,
    i: usize,
    remaining: usize,
}

impl DiagonalCells {
    fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            d: 0,
            i: 0,
            remaining: rows * cols,
        }
    }
}

impl Iterator for DiagonalCells {
    type Item = Cell;

    fn next(&mut self) -> Option<Cell> {
        if self.remaining == 0 {
            return None;
        }
        let cell = (self.i, self.d - self.i);

        let (_, hi) = row_bounds(self.d, self.rows, self.cols);
        if self.i < hi {
            self.i += 1;
        } else {
            self.d += 1;
            self.i = row_bounds(self.d, self.rows, self.cols).0;
        }
        self.remaining -= 1;

        Some(cell)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for DiagonalCells {}
impl FusedIterator for DiagonalCells {}

/// Elements of a matrix in anti-diagonal order.
///
/// Single forward pass; create a new one with
/// [`Matrix::anti_diagonals`] to walk again.
#[derive(Debug, Clone)]
pub struct AntiDiagonals<'a, T> {
    data: &'a [T],
    cols: usize,
    cells: DiagonalCells,
}

impl<'a, T> Iterator for AntiDiagonals<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let (i, j) = self.cells.next()?;
        Some(&self.data[i * self.cols + j])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.cells.size_hint()
    }
}

impl<T> ExactSizeIterator for AntiDiagonals<'_, T> {}
impl<T> FusedIterator for AntiDiagonals<'_, T> {}

/// Elements of one diagonal, ascending row.
#[derive(Debug, Clone)]
pub struct Diagonal<'a, T> {
    data: &'a [T],
    cols: usize,
    d: usize,
    // next row to yield
    i: usize,
    // one past the last row
    end: usize,
}

impl<T> Diagonal<'_, T> {
    /// The diagonal index `d = i + j`.
    pub fn index(&self) -> usize {
        self.d
    }
}

impl<'a, T> Iterator for Diagonal<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.i >= self.end {
            return None;
        }
        let i = self.i;
        self.i += 1;
        Some(&self.data[i * self.cols + (self.d - i)])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.end - self.i;
        (len, Some(len))
    }
}

impl<T> ExactSizeIterator for Diagonal<'_, T> {}
impl<T> FusedIterator for Diagonal<'_, T> {}

impl<T> Matrix<T> {
    /// Walk every element in anti-diagonal order.
    ///
    /// Diagonals go `d = 0, 1, ..., m + n - 2`; within a diagonal rows go
    /// top to bottom.
    ///
    /// ```
    /// use antidiag::Matrix;
    ///
    /// let m = Matrix::from_rows(vec![
    ///     vec![1, 2, 3],
    ///     vec![4, 5, 6],
    ///     vec![7, 8, 9],
    ///     vec![10, 11, 12],
    /// ])
    /// .unwrap();
    ///
    /// let order: Vec<i32> = m.anti_diagonals().copied().collect();
    /// assert_eq!(order, vec![1, 2, 4, 3, 5, 7, 6, 8, 10, 9, 11, 12]);
    /// ```
    pub fn anti_diagonals(&self) -> AntiDiagonals<'_, T> {
        AntiDiagonals {
            data: self.as_slice(),
            cols: self.cols(),
            cells: self.anti_diagonal_cells(),
        }
    }

    /// Same walk as [`anti_diagonals`](Self::anti_diagonals), yielding
    /// `(i, j)` coordinates.
    pub fn anti_diagonal_cells(&self) -> DiagonalCells {
        DiagonalCells::new(self.rows(), self.cols())
    }

    /// Elements of diagonal `d`, or `None` if `d > rows + cols - 2`.
    pub fn diagonal(&self, d: usize) -> Option<Diagonal<'_, T>> {
        if d >= self.diagonal_count() {
            return None;
        }
        let (lo, hi) = row_bounds(d, self.rows(), self.cols());
        Some(Diagonal {
            data: self.as_slice(),
            cols: self.cols(),
            d,
            i: lo,
            end: hi + 1,
        })
    }
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    // ===================
    // Strategies
    // ===================

    fn shape_strategy() -> impl Strategy<Value = (usize, usize)> {
        (1usize..24, 1usize..24)
    }

    /// Matrix whose elements encode their own position, `i * cols + j`.
    fn indexed(rows: usize, cols: usize) -> Matrix<usize> {
        Matrix::from_row_major((0..rows * cols).collect(), rows, cols).unwrap()
    }

    // ===================
    // Property Test Functions
    // ===================

    /// Every cell appears exactly once.
    fn check_visits_every_cell_once(rows: usize, cols: usize) -> Result<(), TestCaseError> {
        let m = indexed(rows, cols);
        let mut seen: Vec<usize> = m.anti_diagonals().copied().collect();
        prop_assert_eq!(seen.len(), rows * cols);
        seen.sort_unstable();
        prop_assert!(seen.iter().copied().eq(0..rows * cols));
        Ok(())
    }

    /// Diagonal index never decreases; rows strictly increase inside a diagonal.
    fn check_ordering(rows: usize, cols: usize) -> Result<(), TestCaseError> {
        let m = indexed(rows, cols);
        let cells: Vec<Cell> = m.anti_diagonal_cells().collect();
        for pair in cells.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            let (da, db) = (a.0 + a.1, b.0 + b.1);
            prop_assert!(da <= db, "diagonal went back: {a:?} -> {b:?}");
            if da == db {
                prop_assert!(a.0 < b.0, "row not increasing: {a:?} -> {b:?}");
            }
            prop_assert!(b.0 < rows && b.1 < cols, "out of bounds: {b:?}");
        }
        Ok(())
    }

    /// Concatenating `diagonal(d)` for every `d` gives the full walk.
    fn check_diagonals_concatenate(rows: usize, cols: usize) -> Result<(), TestCaseError> {
        let m = indexed(rows, cols);
        let joined: Vec<usize> = (0..m.diagonal_count())
            .filter_map(|d| m.diagonal(d))
            .flatten()
            .copied()
            .collect();
        let full: Vec<usize> = m.anti_diagonals().copied().collect();
        prop_assert_eq!(joined, full);
        Ok(())
    }

    // ===================
    // Proptest Wrappers
    // ===================

    proptest! {
        #[test]
        fn visits_every_cell_once((rows, cols) in shape_strategy()) {
            check_visits_every_cell_once(rows, cols)?;
        }

        #[test]
        fn ordering_holds((rows, cols) in shape_strategy()) {
            check_ordering(rows, cols)?;
        }

        #[test]
        fn diagonals_concatenate((rows, cols) in shape_strategy()) {
            check_diagonals_concatenate(rows, cols)?;
        }
    }
}
