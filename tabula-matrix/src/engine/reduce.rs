//! Reductions to a single scalar

use crate::error::MatrixError;
use crate::types::Matrix;

/// Dot product of two row-vectors of equal length
pub fn dot(v1: &Matrix, v2: &Matrix) -> Result<f64, MatrixError> {
    if !v1.is_row_vector() || !v2.is_row_vector() || v1.cols() != v2.cols() {
        return Err(MatrixError::DimensionMismatch {
            op: "dot product",
            left: v1.shape(),
            right: v2.shape(),
        });
    }

    Ok(v1.as_slice()
        .iter()
        .zip(v2.as_slice())
        .fold(0.0, |acc, (x, y)| acc + x * y))
}

/// Largest element, scanning row-major; ties keep the first one seen.
pub fn max(matrix: &Matrix) -> f64 {
    let mut values = matrix.as_slice().iter().copied();
    // never empty, so the fallback is unreachable
    let mut best = values.next().unwrap_or(f64::NEG_INFINITY);
    for value in values {
        if value > best {
            best = value;
        }
    }
    best
}

/// Sum of all elements in row-major order
pub fn sum(matrix: &Matrix) -> f64 {
    matrix.as_slice().iter().fold(0.0, |acc, x| acc + x)
}
