//! Conversion between host values and matrices
//!
//! `parse` turns a list of equal-length lists of numbers into a [`Matrix`];
//! `serialize` turns a matrix back into a list of rows of floats. The host
//! value is dynamically typed, so all validation happens here and the
//! engine only ever sees `f64`.

use crate::error::MatrixError;
use crate::types::Matrix;
use tabula_core::Value;

/// Parse a nested list into a matrix.
///
/// The whole shape is validated before any element is coerced, so a ragged
/// input is reported as ragged even if it also holds non-numeric elements.
/// On failure the partially filled matrix is dropped.
pub fn parse(value: &Value) -> Result<Matrix, MatrixError> {
    let rows = rows_of(value)?;
    let cols = rows.first().map_or(0, |r| r.len());

    let mut matrix = Matrix::zeros(rows.len(), cols)?;
    for (r, row) in rows.iter().enumerate() {
        for (c, item) in row.iter().enumerate() {
            matrix[(r, c)] = item.as_f64().ok_or(MatrixError::NonNumeric {
                row: r,
                col: c,
                found: item.type_name(),
            })?;
        }
    }
    Ok(matrix)
}

/// Validate list-of-lists structure and rectangularity
fn rows_of(value: &Value) -> Result<Vec<&[Value]>, MatrixError> {
    let outer = value
        .as_list()
        .ok_or(MatrixError::NotAList { found: value.type_name() })?;

    let mut rows: Vec<&[Value]> = Vec::with_capacity(outer.len());
    for (i, row) in outer.iter().enumerate() {
        let items = row
            .as_list()
            .ok_or(MatrixError::RowNotAList { row: i, found: row.type_name() })?;

        // the first row fixes the column count
        if let Some(first) = rows.first() {
            let expected = first.len();
            if items.len() != expected {
                return Err(MatrixError::RaggedRows { row: i, expected, found: items.len() });
            }
        }
        rows.push(items);
    }
    Ok(rows)
}

/// Parse a numeric scalar argument (integer or float)
pub fn parse_scalar(value: &Value) -> Result<f64, MatrixError> {
    value.as_f64().ok_or(MatrixError::NotAScalar { found: value.type_name() })
}

/// Serialize a matrix as a list of rows of floats, in row-major order
pub fn serialize(matrix: &Matrix) -> Value {
    Value::List(
        matrix
            .iter_rows()
            .map(|row| Value::List(row.iter().map(|&x| Value::Float(x)).collect()))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ints(rows: &[&[i64]]) -> Value {
        Value::List(
            rows.iter()
                .map(|r| Value::List(r.iter().map(|&x| Value::Int(x)).collect()))
                .collect(),
        )
    }

    #[test]
    fn test_parse_row_major() {
        let m = parse(&ints(&[&[1, 2], &[3, 4]])).unwrap();
        assert_eq!(m, Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap());
    }

    #[test]
    fn test_parse_then_serialize_normalizes_to_floats() {
        let input = ints(&[&[1, 2], &[3, 4]]);
        let out = serialize(&parse(&input).unwrap());
        let expected = Value::from(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        assert_eq!(out, expected);
    }

    #[test]
    fn test_parse_mixed_int_and_float() {
        let input = Value::List(vec![Value::List(vec![Value::Int(1), Value::Float(2.5)])]);
        let m = parse(&input).unwrap();
        assert_eq!(m.as_slice(), &[1.0, 2.5]);
    }

    #[test]
    fn test_parse_ragged() {
        let err = parse(&ints(&[&[1, 2], &[3]])).unwrap_err();
        assert_eq!(err, MatrixError::RaggedRows { row: 1, expected: 2, found: 1 });
    }

    #[test]
    fn test_parse_ragged_later_row() {
        let err = parse(&ints(&[&[1, 2, 3], &[4, 5, 6], &[7, 8]])).unwrap_err();
        assert_eq!(err, MatrixError::RaggedRows { row: 2, expected: 3, found: 2 });
    }

    #[test]
    fn test_parse_single_column() {
        let m = parse(&ints(&[&[1], &[2], &[3]])).unwrap();
        assert_eq!(m.shape(), crate::Shape::new(3, 1));
        assert_eq!(m.as_slice(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_bool_and_text_elements_are_not_numbers() {
        let input = Value::List(vec![Value::List(vec![Value::Bool(true)])]);
        assert_eq!(parse(&input), Err(MatrixError::NonNumeric { row: 0, col: 0, found: "Bool" }));
        assert_eq!(parse_scalar(&Value::from("2")), Err(MatrixError::NotAScalar { found: "Text" }));
    }

    #[test]
    fn test_parse_non_numeric() {
        let input = Value::List(vec![
            Value::List(vec![Value::Int(1), Value::from("a")]),
            Value::List(vec![Value::Int(3), Value::Int(4)]),
        ]);
        let err = parse(&input).unwrap_err();
        assert_eq!(err, MatrixError::NonNumeric { row: 0, col: 1, found: "Text" });
    }

    #[test]
    fn test_shape_checked_before_element_types() {
        let input = Value::List(vec![
            Value::List(vec![Value::Int(1), Value::from("a")]),
            Value::List(vec![Value::Int(3)]),
        ]);
        assert!(matches!(parse(&input), Err(MatrixError::RaggedRows { .. })));
    }

    #[test]
    fn test_parse_not_a_list() {
        assert_eq!(parse(&Value::Int(3)), Err(MatrixError::NotAList { found: "Int" }));
        let input = Value::List(vec![Value::List(vec![Value::Int(1)]), Value::Int(2)]);
        assert_eq!(parse(&input), Err(MatrixError::RowNotAList { row: 1, found: "Int" }));
    }

    #[test]
    fn test_parse_empty_is_invalid_dimensions() {
        assert_eq!(
            parse(&Value::List(vec![])),
            Err(MatrixError::InvalidDimensions { rows: 0, cols: 0 })
        );
        assert_eq!(
            parse(&Value::List(vec![Value::List(vec![])])),
            Err(MatrixError::InvalidDimensions { rows: 1, cols: 0 })
        );
    }

    #[test]
    fn test_parse_scalar() {
        assert_eq!(parse_scalar(&Value::Int(2)), Ok(2.0));
        assert_eq!(parse_scalar(&Value::Float(-0.5)), Ok(-0.5));
        assert_eq!(parse_scalar(&Value::Bool(true)), Err(MatrixError::NotAScalar { found: "Bool" }));
    }

    #[test]
    fn test_serialize_shape() {
        let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        let rows = match serialize(&m) {
            Value::List(rows) => rows,
            other => panic!("expected list, got {:?}", other),
        };
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1], Value::from(vec![4.0, 5.0, 6.0]));
    }
}
