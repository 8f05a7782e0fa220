//! Tabula - dense matrix operations for logic-programming hosts
//!
//! The host calls a named operation with nested-list arguments and gets a
//! nested list, a number, a boolean or a structured error back.

use std::sync::Arc;
use serde_json::Value as JsonValue;
use tabula_core::Value;
use tabula_plugin::{EvalContext, FunctionMeta, PluginRegistry};

pub use tabula_core::{TabulaError, codes};
pub use tabula_matrix::{Matrix, MatrixError, Shape};

/// Main Tabula entry point
pub struct Tabula {
    registry: Arc<PluginRegistry>,
    tracing: bool,
}

impl Tabula {
    pub fn new(registry: PluginRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
            tracing: false,
        }
    }

    pub fn with_matrix_library() -> Self {
        Self::new(tabula_matrix::load_matrix_library(PluginRegistry::new()))
    }

    /// Record every call made through a context from [`Tabula::context`]
    pub fn with_tracing(mut self, enabled: bool) -> Self {
        self.tracing = enabled;
        self
    }

    /// Fresh evaluation context carrying this instance's settings
    pub fn context(&self) -> EvalContext {
        EvalContext::new().with_tracing(self.tracing)
    }

    /// Call an operation by name or alias
    pub fn call(&self, name: &str, args: &[Value]) -> Value {
        self.registry.call_function(name, args, &self.context())
    }

    /// Call an operation, recording it in `ctx` when tracing is enabled
    pub fn call_with(&self, name: &str, args: &[Value], ctx: &mut EvalContext) -> Value {
        self.registry.call_traced(name, args, ctx)
    }

    /// Call with JSON arguments and get JSON back
    pub fn call_json(&self, name: &str, args: &[JsonValue]) -> JsonValue {
        let args: Vec<Value> = args.iter().map(Value::from_json).collect();
        self.call(name, &args).to_json()
    }

    pub fn list_functions(&self, category: Option<&str>) -> Vec<FunctionMeta> {
        self.registry.list_functions(category)
    }
}

impl Default for Tabula {
    fn default() -> Self {
        Self::with_matrix_library()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tabula() -> Tabula {
        Tabula::default()
    }

    fn error_code(result: &JsonValue) -> Option<&str> {
        result.get("code").and_then(JsonValue::as_str)
    }

    #[test]
    fn test_roundtrip_through_add_with_zero() {
        let t = tabula();
        let r = t.call_json("matrix-add", &[json!([[1, 2], [3, 4]]), json!([[0, 0], [0, 0]])]);
        assert_eq!(r, json!([[1.0, 2.0], [3.0, 4.0]]));
    }

    #[test]
    fn test_transpose_twice() {
        let t = tabula();
        let a = json!([[1, 2, 3], [4, 5, 6]]);
        let once = t.call_json("matrix-transpose", &[a]);
        let twice = t.call_json("matrix-transpose", &[once]);
        assert_eq!(twice, json!([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]));
    }

    #[test]
    fn test_multiply_associative() {
        let t = tabula();
        let a = json!([[1, 2], [3, 4], [5, 6]]);
        let b = json!([[1, -1, 2], [0, 3, 1]]);
        let c = json!([[2], [1], [-1]]);

        let ab = t.call_json("matrix-multiply", &[a.clone(), b.clone()]);
        let ab_c = t.call_json("matrix-multiply", &[ab, c.clone()]);
        let bc = t.call_json("matrix-multiply", &[b, c]);
        let a_bc = t.call_json("matrix-multiply", &[a, bc]);
        assert_eq!(ab_c, a_bc);
    }

    #[test]
    fn test_host_examples() {
        let t = tabula();
        let m = json!([[-5, 3], [1, -2]]);
        assert_eq!(t.call_json("matrix-max", &[m.clone()]), json!(3.0));
        assert_eq!(t.call_json("matrix-sum", &[m]), json!(-3.0));
        assert_eq!(t.call_json("matrix-is-diagonal", &[json!([[1, 0], [0, 2]])]), json!(true));
        assert_eq!(t.call_json("matrix-is-upper-triangular", &[json!([[1, 2], [3, 0]])]), json!(false));
        assert_eq!(t.call_json("vector-dot-product", &[json!([[1, 2]]), json!([[3, 4]])]), json!(11.0));
    }

    #[test]
    fn test_failures_are_structured() {
        let t = tabula();
        let ragged = t.call_json("matrix-sum", &[json!([[1, 2], [3]])]);
        assert_eq!(error_code(&ragged), Some(codes::RAGGED_MATRIX));

        let non_numeric = t.call_json("matrix-sum", &[json!([[1, "a"], [3, 4]])]);
        assert_eq!(error_code(&non_numeric), Some(codes::NON_NUMERIC));

        let div = t.call_json("matrix-divide", &[json!([[1, 2]]), json!(0)]);
        assert_eq!(error_code(&div), Some(codes::DIV_ZERO));

        let mul = t.call_json("matrix-multiply", &[json!([[1, 2, 3], [4, 5, 6]]), json!([[1, 2], [3, 4]])]);
        assert_eq!(error_code(&mul), Some(codes::DIMENSION_MISMATCH));
    }

    #[test]
    fn test_unknown_operation() {
        let r = tabula().call("matrix-ad", &[]);
        let err = r.as_error().unwrap();
        assert_eq!(err.code, codes::UNDEFINED_FUNC);
        assert!(err.suggestion.as_deref().unwrap().contains("matrix-add"));
    }

    #[test]
    fn test_alias_call() {
        let r = tabula().call_json("sumar_matrices", &[json!([[1]]), json!([[2]])]);
        assert_eq!(r, json!([[3.0]]));
    }

    #[test]
    fn test_tracing_records_calls() {
        let t = tabula().with_tracing(true);
        let mut ctx = t.context();
        let args = [Value::from_json(&json!([[1, 2]]))];
        t.call_with("matrix-sum", &args, &mut ctx);
        t.call_with("matrix-max", &args, &mut ctx);

        let steps = ctx.take_trace();
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].function, "matrix-sum");
        assert_eq!(steps[1].result, Value::Float(2.0));
    }

    #[test]
    fn test_list_functions_by_category() {
        let t = tabula();
        assert_eq!(t.list_functions(None).len(), 12);
        assert_eq!(t.list_functions(Some("matrix")).len(), 12);
        let predicates: Vec<&str> = t.list_functions(Some("matrix/predicate"))
            .iter()
            .map(|m| m.name)
            .collect();
        assert_eq!(
            predicates,
            vec!["matrices-same-dimensions", "matrix-is-diagonal", "matrix-is-upper-triangular"]
        );
    }
}
