//! Matrix error taxonomy

use crate::types::Shape;
use tabula_core::{codes, TabulaError};
use thiserror::Error;

/// Broad class of a [`MatrixError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    MissingInput,
    DimensionMismatch,
    MalformedInput,
    Allocation,
    DivideByZero,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatrixError {
    #[error("argument '{0}' is missing")]
    MissingArgument(&'static str),

    #[error("{op}: incompatible dimensions {left} and {right}")]
    DimensionMismatch {
        op: &'static str,
        left: Shape,
        right: Shape,
    },

    #[error("invalid dimensions {rows}×{cols}: rows and columns must be positive")]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("buffer of {len} elements does not fit a {rows}×{cols} matrix")]
    LengthMismatch { rows: usize, cols: usize, len: usize },

    #[error("expected a list of rows, got {found}")]
    NotAList { found: &'static str },

    #[error("row {row} is not a list, got {found}")]
    RowNotAList { row: usize, found: &'static str },

    #[error("ragged matrix: row {row} has {found} columns, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("element [{row}][{col}] is not a number, got {found}")]
    NonNumeric {
        row: usize,
        col: usize,
        found: &'static str,
    },

    #[error("expected a numeric scalar, got {found}")]
    NotAScalar { found: &'static str },

    #[error("cannot allocate a {rows}×{cols} matrix")]
    Allocation { rows: usize, cols: usize },

    #[error("division by zero")]
    DivideByZero,
}

impl MatrixError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            MatrixError::MissingArgument(_) => ErrorKind::MissingInput,
            MatrixError::DimensionMismatch { .. } => ErrorKind::DimensionMismatch,
            MatrixError::InvalidDimensions { .. }
            | MatrixError::LengthMismatch { .. }
            | MatrixError::NotAList { .. }
            | MatrixError::RowNotAList { .. }
            | MatrixError::RaggedRows { .. }
            | MatrixError::NonNumeric { .. }
            | MatrixError::NotAScalar { .. } => ErrorKind::MalformedInput,
            MatrixError::Allocation { .. } => ErrorKind::Allocation,
            MatrixError::DivideByZero => ErrorKind::DivideByZero,
        }
    }

    /// Stable host-facing error code
    pub fn code(&self) -> &'static str {
        match self {
            MatrixError::MissingArgument(_) => codes::MISSING_ARGUMENT,
            MatrixError::DimensionMismatch { .. } => codes::DIMENSION_MISMATCH,
            MatrixError::InvalidDimensions { .. } | MatrixError::LengthMismatch { .. } => {
                codes::INVALID_DIMENSIONS
            }
            MatrixError::NotAList { .. } | MatrixError::RowNotAList { .. } => codes::NOT_A_LIST,
            MatrixError::RaggedRows { .. } => codes::RAGGED_MATRIX,
            MatrixError::NonNumeric { .. } => codes::NON_NUMERIC,
            MatrixError::NotAScalar { .. } => codes::NOT_A_SCALAR,
            MatrixError::Allocation { .. } => codes::ALLOCATION,
            MatrixError::DivideByZero => codes::DIV_ZERO,
        }
    }

    fn suggestion(&self) -> Option<&'static str> {
        match self {
            MatrixError::DimensionMismatch { op: "multiply", .. } => {
                Some("The first matrix needs as many columns as the second has rows")
            }
            MatrixError::DimensionMismatch { op: "dot product", .. } => {
                Some("Pass two single-row vectors with the same number of elements")
            }
            MatrixError::DimensionMismatch { .. } => {
                Some("Both matrices need the same number of rows and columns")
            }
            MatrixError::RaggedRows { .. } => Some("Every row must have the same length"),
            MatrixError::NonNumeric { .. } | MatrixError::NotAScalar { .. } => {
                Some("Only integers and floats are accepted")
            }
            MatrixError::NotAList { .. } | MatrixError::RowNotAList { .. } => {
                Some("Pass a matrix as a list of rows, e.g. [[1, 2], [3, 4]]")
            }
            MatrixError::DivideByZero => Some("Ensure divisor is not zero"),
            _ => None,
        }
    }
}

impl From<MatrixError> for TabulaError {
    fn from(err: MatrixError) -> Self {
        let out = TabulaError::new(err.code(), err.to_string());
        match err.suggestion() {
            Some(s) => out.with_suggestion(s),
            None => out,
        }
    }
}
