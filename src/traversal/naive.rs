use crate::matrix::Matrix;

/// Naive anti-diagonal traversal.
///
/// For every diagonal `d` this scans all `m` rows and keeps the ones whose
/// column `j = d - i` lands inside the matrix. That's `m * (m + n - 1)`
/// checks instead of `m * n`, which is why the lazy iterator clamps the
/// row range up front instead.
///
/// Use this as a correctness baseline, not for performance.
///
/// # Arguments
///
/// * `matrix` - Any validated matrix, `m × n`
pub fn anti_diagonal_naive<T: Clone>(matrix: &Matrix<T>) -> Vec<T> {
    let (m, n) = (matrix.rows(), matrix.cols());
    let mut out = Vec::with_capacity(m * n);

    for d in 0..m + n - 1 {
        for i in 0..m.min(d + 1) {
            let j = d - i;
            if j < n {
                out.push(matrix[(i, j)].clone());
            }
        }
    }

    out
}
