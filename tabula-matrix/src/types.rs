//! Core matrix type

use crate::error::MatrixError;
use serde::Serialize;
use std::fmt;
use std::ops::{Index, IndexMut};

/// Row and column counts of a matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Shape {
    pub rows: usize,
    pub cols: usize,
}

impl Shape {
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Shape with rows and columns swapped
    pub const fn transposed(self) -> Self {
        Self { rows: self.cols, cols: self.rows }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}×{}", self.rows, self.cols)
    }
}

/// Dense `f64` matrix stored as a flat row-major buffer.
///
/// A matrix always has at least one row and one column, and
/// `data.len() == rows * cols`. Both are enforced by every constructor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Allocate a zero-filled matrix.
    ///
    /// Fails with `InvalidDimensions` if either dimension is zero, and with
    /// `Allocation` if the buffer size overflows or cannot be reserved.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self, MatrixError> {
        if rows == 0 || cols == 0 {
            return Err(MatrixError::InvalidDimensions { rows, cols });
        }
        let len = rows
            .checked_mul(cols)
            .ok_or(MatrixError::Allocation { rows, cols })?;

        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| MatrixError::Allocation { rows, cols })?;
        data.resize(len, 0.0);

        Ok(Self { rows, cols, data })
    }

    pub fn with_shape(shape: Shape) -> Result<Self, MatrixError> {
        Self::zeros(shape.rows, shape.cols)
    }

    /// Wrap an existing row-major buffer
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self, MatrixError> {
        if rows == 0 || cols == 0 {
            return Err(MatrixError::InvalidDimensions { rows, cols });
        }
        if rows.checked_mul(cols) != Some(data.len()) {
            return Err(MatrixError::LengthMismatch { rows, cols, len: data.len() });
        }
        Ok(Self { rows, cols, data })
    }

    /// Build from nested rows, rejecting ragged input
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self, MatrixError> {
        let cols = rows.first().map_or(0, Vec::len);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(MatrixError::RaggedRows { row: i, expected: cols, found: row.len() });
            }
        }
        Self::from_vec(rows.len(), cols, rows.concat())
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> Shape {
        Shape::new(self.rows, self.cols)
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    pub fn is_row_vector(&self) -> bool {
        self.rows == 1
    }

    /// Elements in row-major order
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }

    /// Get element at (row, col), `None` when out of range
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.rows && col < self.cols {
            Some(self.data[self.offset(row, col)])
        } else {
            None
        }
    }

    pub fn row(&self, row: usize) -> Option<&[f64]> {
        if row < self.rows {
            let start = self.offset(row, 0);
            Some(&self.data[start..start + self.cols])
        } else {
            None
        }
    }

    /// Iterate rows as slices, top to bottom
    pub fn iter_rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        self.data.chunks_exact(self.cols)
    }

    /// The single place that maps (row, col) to a buffer position.
    fn offset(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.rows && col < self.cols,
            "index ({}, {}) out of bounds for {}×{} matrix",
            row, col, self.rows, self.cols
        );
        row * self.cols + col
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        &self.data[self.offset(row, col)]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        let at = self.offset(row, col);
        &mut self.data[at]
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, row) in self.iter_rows().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "[")?;
            for (j, val) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{:?}", val)?;
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}
