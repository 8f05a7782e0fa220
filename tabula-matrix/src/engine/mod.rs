//! Matrix engine
//!
//! Strictly typed `f64` operations. Every operation writes into a
//! caller-supplied destination and validates all preconditions before the
//! first write, so a failed call leaves the destination untouched.
//! A source can never alias the destination: the borrow checker forbids a
//! `&Matrix` and a `&mut Matrix` to the same value.

mod arith;
mod reduce;
mod predicates;

pub use arith::{add, subtract, multiply, transpose, scale, divide};
pub use reduce::{dot, max, sum};
pub use predicates::{is_diagonal, is_upper_triangular, same_dimensions};

use crate::error::MatrixError;
use crate::types::{Matrix, Shape};

/// Check that two matrices have the same dimensions
fn check_same_dims(op: &'static str, a: &Matrix, b: &Matrix) -> Result<(), MatrixError> {
    if !same_dimensions(a, b) {
        return Err(MatrixError::DimensionMismatch { op, left: a.shape(), right: b.shape() });
    }
    Ok(())
}

/// Check that the destination has the operation's output shape
fn check_destination(op: &'static str, expected: Shape, dest: &Matrix) -> Result<(), MatrixError> {
    if dest.shape() != expected {
        return Err(MatrixError::DimensionMismatch { op, left: expected, right: dest.shape() });
    }
    Ok(())
}
