//! Shape and structure predicates. Zero tests are exact.

use crate::types::Matrix;

/// Square, with every off-diagonal element exactly `0.0`
pub fn is_diagonal(matrix: &Matrix) -> bool {
    if !matrix.is_square() {
        return false;
    }
    (0..matrix.rows()).all(|row| {
        (0..matrix.cols()).all(|col| row == col || matrix[(row, col)] == 0.0)
    })
}

/// Square, with every element below the main diagonal exactly `0.0`
pub fn is_upper_triangular(matrix: &Matrix) -> bool {
    if !matrix.is_square() {
        return false;
    }
    (1..matrix.rows()).all(|row| (0..row).all(|col| matrix[(row, col)] == 0.0))
}

pub fn same_dimensions(a: &Matrix, b: &Matrix) -> bool {
    a.rows() == b.rows() && a.cols() == b.cols()
}
