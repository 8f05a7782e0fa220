//! Elementwise arithmetic, product, transpose and scalar operations

use super::{check_destination, check_same_dims};
use crate::error::MatrixError;
use crate::types::{Matrix, Shape};

/// `dest = a + b`
pub fn add(a: &Matrix, b: &Matrix, dest: &mut Matrix) -> Result<(), MatrixError> {
    elementwise("add", a, b, dest, |x, y| x + y)
}

/// `dest = a - b`
pub fn subtract(a: &Matrix, b: &Matrix, dest: &mut Matrix) -> Result<(), MatrixError> {
    elementwise("subtract", a, b, dest, |x, y| x - y)
}

fn elementwise(
    op: &'static str,
    a: &Matrix,
    b: &Matrix,
    dest: &mut Matrix,
    f: impl Fn(f64, f64) -> f64,
) -> Result<(), MatrixError> {
    check_same_dims(op, a, b)?;
    check_destination(op, a.shape(), dest)?;

    for row in 0..a.rows() {
        for col in 0..a.cols() {
            dest[(row, col)] = f(a[(row, col)], b[(row, col)]);
        }
    }
    Ok(())
}

/// `dest = a · b` by naive accumulation, inner index ascending.
///
/// Requires `a.cols() == b.rows()`; `dest` must be `a.rows() × b.cols()`.
pub fn multiply(a: &Matrix, b: &Matrix, dest: &mut Matrix) -> Result<(), MatrixError> {
    if a.cols() != b.rows() {
        return Err(MatrixError::DimensionMismatch {
            op: "multiply",
            left: a.shape(),
            right: b.shape(),
        });
    }
    check_destination("multiply", Shape::new(a.rows(), b.cols()), dest)?;

    for row in 0..a.rows() {
        for col in 0..b.cols() {
            let mut acc = 0.0;
            for k in 0..a.cols() {
                acc += a[(row, k)] * b[(k, col)];
            }
            dest[(row, col)] = acc;
        }
    }
    Ok(())
}

/// `dest[c][r] = source[r][c]`; `dest` must have the swapped shape
pub fn transpose(source: &Matrix, dest: &mut Matrix) -> Result<(), MatrixError> {
    check_destination("transpose", source.shape().transposed(), dest)?;

    for row in 0..source.rows() {
        for col in 0..source.cols() {
            dest[(col, row)] = source[(row, col)];
        }
    }
    Ok(())
}

/// `dest = matrix * factor`
pub fn scale(matrix: &Matrix, factor: f64, dest: &mut Matrix) -> Result<(), MatrixError> {
    map_into("scale", matrix, dest, |x| x * factor)
}

/// `dest = matrix / divisor`, rejecting a zero divisor before dividing
pub fn divide(matrix: &Matrix, divisor: f64, dest: &mut Matrix) -> Result<(), MatrixError> {
    // -0.0 compares equal to 0.0 and is rejected as well
    if divisor == 0.0 {
        return Err(MatrixError::DivideByZero);
    }
    map_into("divide", matrix, dest, |x| x / divisor)
}

fn map_into(
    op: &'static str,
    matrix: &Matrix,
    dest: &mut Matrix,
    f: impl Fn(f64) -> f64,
) -> Result<(), MatrixError> {
    check_destination(op, matrix.shape(), dest)?;

    for row in 0..matrix.rows() {
        for col in 0..matrix.cols() {
            dest[(row, col)] = f(matrix[(row, col)]);
        }
    }
    Ok(())
}
