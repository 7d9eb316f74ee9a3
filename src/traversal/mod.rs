//! Anti-diagonal traversals.
//!
//! - `anti_diagonal`: lazy iterators over the whole matrix, its coordinates,
//!   or a single diagonal
//! - `naive`: eager scan-and-filter baseline the iterators are checked against

pub mod anti_diagonal;
pub mod naive;

pub use anti_diagonal::{AntiDiagonals, Diagonal, DiagonalCells};
pub use naive::anti_diagonal_naive;
