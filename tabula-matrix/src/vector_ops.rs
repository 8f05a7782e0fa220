//! Vector operations

use tabula_plugin::prelude::*;
use crate::engine;
use crate::helpers::*;

// ============ vector-dot-product ============

pub struct DotFn;

static DOT_ARGS: [ArgMeta; 2] = [
    ArgMeta::row_vector("v1", "Row vector, as a single-row list of lists"),
    ArgMeta::row_vector("v2", "Row vector of the same length"),
];
static DOT_EXAMPLES: [&str; 2] = [
    "vector-dot-product([[1, 2, 3]], [[4, 5, 6]]) → 32.0",
    "vector-dot-product([[1], [2]], [[1], [2]]) → DIMENSION_MISMATCH",
];
static DOT_RELATED: [&str; 1] = ["matrix-multiply"];

impl FunctionPlugin for DotFn {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "vector-dot-product", aliases: &["producto_escalar"], description: "Dot product of two row vectors",
            usage: "vector-dot-product(v1, v2)", args: &DOT_ARGS, returns: ReturnKind::Scalar, examples: &DOT_EXAMPLES,
            category: "matrix/vector", related: &DOT_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        const NAME: &str = "vector-dot-product";
        run(NAME, || {
            check_arg_count(args, &DOT_ARGS, NAME)?;
            let v1 = extract_matrix(args, 0, &DOT_ARGS[0], NAME)?;
            let v2 = extract_matrix(args, 1, &DOT_ARGS[1], NAME)?;
            let dot = engine::dot(&v1, &v2).map_err(|e| engine_error(e, NAME))?;
            Ok(Value::Float(dot))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_dot() {
        let args = [
            Value::from_json(&json!([[1, 2, 3]])),
            Value::from_json(&json!([[4, 5, 6]])),
        ];
        assert_eq!(DotFn.call(&args, &EvalContext::new()), Value::Float(32.0));
    }

    #[test]
    fn test_dot_rejects_column_vectors() {
        let col = Value::from_json(&json!([[1], [2]]));
        let r = DotFn.call(&[col.clone(), col], &EvalContext::new());
        assert_eq!(r.as_error().unwrap().code, codes::DIMENSION_MISMATCH);
    }

    #[test]
    fn test_dot_rejects_length_mismatch() {
        let args = [
            Value::from_json(&json!([[1, 2, 3]])),
            Value::from_json(&json!([[4, 5]])),
        ];
        let r = DotFn.call(&args, &EvalContext::new());
        assert_eq!(r.as_error().unwrap().code, codes::DIMENSION_MISMATCH);
    }
}
