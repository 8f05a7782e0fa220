//! Matrix-valued operations: add, subtract, multiply, transpose, scale, divide

use tabula_plugin::prelude::*;
use crate::convert::serialize;
use crate::engine;
use crate::helpers::*;
use crate::types::Shape;

// ============ matrix-add ============

pub struct AddFn;

static PAIR_ARGS: [ArgMeta; 2] = [
    ArgMeta::matrix("a", "First matrix, as a list of rows"),
    ArgMeta::matrix("b", "Second matrix, as a list of rows"),
];

static ADD_EXAMPLES: [&str; 1] = ["matrix-add([[1, 2], [3, 4]], [[1, 1], [1, 1]]) → [[2.0, 3.0], [4.0, 5.0]]"];
static ADD_RELATED: [&str; 2] = ["matrix-subtract", "matrices-same-dimensions"];

impl FunctionPlugin for AddFn {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "matrix-add", aliases: &["sumar_matrices"], description: "Elementwise sum of two matrices of equal shape",
            usage: "matrix-add(a, b)", args: &PAIR_ARGS, returns: ReturnKind::Matrix, examples: &ADD_EXAMPLES,
            category: "matrix/arithmetic", related: &ADD_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        const NAME: &str = "matrix-add";
        run(NAME, || {
            check_arg_count(args, &PAIR_ARGS, NAME)?;
            let a = extract_matrix(args, 0, &PAIR_ARGS[0], NAME)?;
            let b = extract_matrix(args, 1, &PAIR_ARGS[1], NAME)?;
            let mut result = allocate(a.shape(), NAME)?;
            engine::add(&a, &b, &mut result).map_err(|e| engine_error(e, NAME))?;
            Ok(serialize(&result))
        })
    }
}

// ============ matrix-subtract ============

pub struct SubtractFn;

static SUB_EXAMPLES: [&str; 1] = ["matrix-subtract([[5, 5]], [[1, 2]]) → [[4.0, 3.0]]"];
static SUB_RELATED: [&str; 2] = ["matrix-add", "matrices-same-dimensions"];

impl FunctionPlugin for SubtractFn {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "matrix-subtract", aliases: &["restar_matrices"], description: "Elementwise difference of two matrices of equal shape",
            usage: "matrix-subtract(a, b)", args: &PAIR_ARGS, returns: ReturnKind::Matrix, examples: &SUB_EXAMPLES,
            category: "matrix/arithmetic", related: &SUB_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        const NAME: &str = "matrix-subtract";
        run(NAME, || {
            check_arg_count(args, &PAIR_ARGS, NAME)?;
            let a = extract_matrix(args, 0, &PAIR_ARGS[0], NAME)?;
            let b = extract_matrix(args, 1, &PAIR_ARGS[1], NAME)?;
            let mut result = allocate(a.shape(), NAME)?;
            engine::subtract(&a, &b, &mut result).map_err(|e| engine_error(e, NAME))?;
            Ok(serialize(&result))
        })
    }
}

// ============ matrix-multiply ============

pub struct MultiplyFn;

static MUL_EXAMPLES: [&str; 2] = [
    "matrix-multiply([[1, 2], [3, 4]], [[5], [6]]) → [[17.0], [39.0]]",
    "matrix-multiply([[1, 2, 3]], [[1, 2]]) → DIMENSION_MISMATCH",
];
static MUL_RELATED: [&str; 2] = ["matrix-transpose", "vector-dot-product"];

impl FunctionPlugin for MultiplyFn {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "matrix-multiply", aliases: &["multiplicar_matrices"], description: "Matrix product; columns of a must equal rows of b",
            usage: "matrix-multiply(a, b)", args: &PAIR_ARGS, returns: ReturnKind::Matrix, examples: &MUL_EXAMPLES,
            category: "matrix/arithmetic", related: &MUL_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        const NAME: &str = "matrix-multiply";
        run(NAME, || {
            check_arg_count(args, &PAIR_ARGS, NAME)?;
            let a = extract_matrix(args, 0, &PAIR_ARGS[0], NAME)?;
            let b = extract_matrix(args, 1, &PAIR_ARGS[1], NAME)?;
            let mut result = allocate(Shape::new(a.rows(), b.cols()), NAME)?;
            engine::multiply(&a, &b, &mut result).map_err(|e| engine_error(e, NAME))?;
            Ok(serialize(&result))
        })
    }
}

// ============ matrix-transpose ============

pub struct TransposeFn;

static TRANSPOSE_ARGS: [ArgMeta; 1] = [ArgMeta::matrix("matrix", "Matrix to transpose")];
static TRANSPOSE_EXAMPLES: [&str; 1] = ["matrix-transpose([[1, 2, 3]]) → [[1.0], [2.0], [3.0]]"];
static TRANSPOSE_RELATED: [&str; 1] = ["matrix-multiply"];

impl FunctionPlugin for TransposeFn {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "matrix-transpose", aliases: &["transponer_matriz"], description: "Swap rows and columns",
            usage: "matrix-transpose(matrix)", args: &TRANSPOSE_ARGS, returns: ReturnKind::Matrix, examples: &TRANSPOSE_EXAMPLES,
            category: "matrix/arithmetic", related: &TRANSPOSE_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        const NAME: &str = "matrix-transpose";
        run(NAME, || {
            check_arg_count(args, &TRANSPOSE_ARGS, NAME)?;
            let m = extract_matrix(args, 0, &TRANSPOSE_ARGS[0], NAME)?;
            let mut result = allocate(m.shape().transposed(), NAME)?;
            engine::transpose(&m, &mut result).map_err(|e| engine_error(e, NAME))?;
            Ok(serialize(&result))
        })
    }
}

// ============ matrix-scale ============

pub struct ScaleFn;

static SCALE_ARGS: [ArgMeta; 2] = [
    ArgMeta::matrix("matrix", "Matrix to scale"),
    ArgMeta::scalar("factor", "Integer or float factor"),
];
static SCALE_EXAMPLES: [&str; 1] = ["matrix-scale([[1, 2]], 3) → [[3.0, 6.0]]"];
static SCALE_RELATED: [&str; 1] = ["matrix-divide"];

impl FunctionPlugin for ScaleFn {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "matrix-scale", aliases: &["multiplicar_matriz_por_factor"], description: "Multiply every element by a scalar",
            usage: "matrix-scale(matrix, factor)", args: &SCALE_ARGS, returns: ReturnKind::Matrix, examples: &SCALE_EXAMPLES,
            category: "matrix/arithmetic", related: &SCALE_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        const NAME: &str = "matrix-scale";
        run(NAME, || {
            check_arg_count(args, &SCALE_ARGS, NAME)?;
            let m = extract_matrix(args, 0, &SCALE_ARGS[0], NAME)?;
            let factor = extract_scalar(args, 1, &SCALE_ARGS[1], NAME)?;
            let mut result = allocate(m.shape(), NAME)?;
            engine::scale(&m, factor, &mut result).map_err(|e| engine_error(e, NAME))?;
            Ok(serialize(&result))
        })
    }
}

// ============ matrix-divide ============

pub struct DivideFn;

static DIVIDE_ARGS: [ArgMeta; 2] = [
    ArgMeta::matrix("matrix", "Matrix to divide"),
    ArgMeta::scalar("divisor", "Non-zero integer or float divisor"),
];
static DIVIDE_EXAMPLES: [&str; 2] = [
    "matrix-divide([[2, 4]], 2) → [[1.0, 2.0]]",
    "matrix-divide([[2, 4]], 0) → DIV_ZERO",
];
static DIVIDE_RELATED: [&str; 1] = ["matrix-scale"];

impl FunctionPlugin for DivideFn {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "matrix-divide", aliases: &["dividir_matriz_por_factor"], description: "Divide every element by a non-zero scalar",
            usage: "matrix-divide(matrix, divisor)", args: &DIVIDE_ARGS, returns: ReturnKind::Matrix, examples: &DIVIDE_EXAMPLES,
            category: "matrix/arithmetic", related: &DIVIDE_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        const NAME: &str = "matrix-divide";
        run(NAME, || {
            check_arg_count(args, &DIVIDE_ARGS, NAME)?;
            let m = extract_matrix(args, 0, &DIVIDE_ARGS[0], NAME)?;
            let divisor = extract_scalar(args, 1, &DIVIDE_ARGS[1], NAME)?;
            let mut result = allocate(m.shape(), NAME)?;
            engine::divide(&m, divisor, &mut result).map_err(|e| engine_error(e, NAME))?;
            Ok(serialize(&result))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn v(json: serde_json::Value) -> Value {
        Value::from_json(&json)
    }

    fn call(f: &dyn FunctionPlugin, args: &[Value]) -> Value {
        f.call(args, &EvalContext::new())
    }

    fn code(value: &Value) -> &str {
        value.as_error().map(|e| e.code.as_str()).unwrap_or("")
    }

    #[test]
    fn test_add_then_subtract_reconstructs() {
        let a = v(json!([[1, 2], [3, 4]]));
        let b = v(json!([[10, -20], [0.5, 7]]));
        let sum = call(&AddFn, &[a.clone(), b.clone()]);
        let back = call(&SubtractFn, &[sum, b]);
        assert_eq!(back, v(json!([[1.0, 2.0], [3.0, 4.0]])));
    }

    #[test]
    fn test_add_mismatched_shapes() {
        let r = call(&AddFn, &[v(json!([[1, 2]])), v(json!([[1], [2]]))]);
        assert_eq!(code(&r), codes::DIMENSION_MISMATCH);
        assert_eq!(r.as_error().unwrap().context.as_ref().unwrap().function.as_deref(), Some("matrix-add"));
    }

    #[test]
    fn test_multiply() {
        let r = call(&MultiplyFn, &[v(json!([[1, 2], [3, 4]])), v(json!([[5], [6]]))]);
        assert_eq!(r, v(json!([[17.0], [39.0]])));
    }

    #[test]
    fn test_multiply_incompatible() {
        let a = v(json!([[1, 2, 3], [4, 5, 6]]));
        let b = v(json!([[1, 2], [3, 4]]));
        let r = call(&MultiplyFn, &[a, b]);
        assert_eq!(code(&r), codes::DIMENSION_MISMATCH);
        assert!(r.as_error().unwrap().message.contains("2×3 and 2×2"));
    }

    #[test]
    fn test_transpose_non_square() {
        let r = call(&TransposeFn, &[v(json!([[1, 2, 3], [4, 5, 6]]))]);
        assert_eq!(r, v(json!([[1.0, 4.0], [2.0, 5.0], [3.0, 6.0]])));
    }

    #[test]
    fn test_scale_accepts_int_and_float_factor() {
        let m = v(json!([[1, 2]]));
        assert_eq!(call(&ScaleFn, &[m.clone(), Value::Int(3)]), v(json!([[3.0, 6.0]])));
        assert_eq!(call(&ScaleFn, &[m, Value::Float(0.5)]), v(json!([[0.5, 1.0]])));
    }

    #[test]
    fn test_divide_by_zero() {
        let r = call(&DivideFn, &[v(json!([[2, 4]])), Value::Int(0)]);
        assert_eq!(code(&r), codes::DIV_ZERO);
        let r = call(&DivideFn, &[v(json!([[2, 4]])), Value::Float(0.0)]);
        assert_eq!(code(&r), codes::DIV_ZERO);
    }

    #[test]
    fn test_divide() {
        let r = call(&DivideFn, &[v(json!([[2, 4], [6, 8]])), Value::Int(2)]);
        assert_eq!(r, v(json!([[1.0, 2.0], [3.0, 4.0]])));
    }

    #[test]
    fn test_missing_and_extra_arguments() {
        let r = call(&AddFn, &[v(json!([[1]]))]);
        assert_eq!(code(&r), codes::MISSING_ARGUMENT);

        let r = call(&TransposeFn, &[v(json!([[1]])), v(json!([[1]]))]);
        assert_eq!(code(&r), codes::ARG_COUNT);
    }

    #[test]
    fn test_malformed_input_surfaces_parse_error() {
        let r = call(&AddFn, &[v(json!([[1, 2], [3]])), v(json!([[1, 2], [3, 4]]))]);
        assert_eq!(code(&r), codes::RAGGED_MATRIX);
        assert_eq!(r.as_error().unwrap().context.as_ref().unwrap().argument.as_deref(), Some("a"));

        let r = call(&ScaleFn, &[v(json!([[1, "x"]])), Value::Int(1)]);
        assert_eq!(code(&r), codes::NON_NUMERIC);
    }
}
