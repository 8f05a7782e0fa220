//! Structured errors for host consumption
//!
//! Errors never crash the host. They are values returned from entry points
//! and carry a machine-readable code plus enough context to act on.

use serde::{Deserialize, Serialize};

/// Standard error codes (machine-readable)
pub mod codes {
    pub const MISSING_ARGUMENT: &str = "MISSING_ARGUMENT";
    pub const DIMENSION_MISMATCH: &str = "DIMENSION_MISMATCH";
    pub const NOT_A_LIST: &str = "NOT_A_LIST";
    pub const RAGGED_MATRIX: &str = "RAGGED_MATRIX";
    pub const NON_NUMERIC: &str = "NON_NUMERIC";
    pub const NOT_A_SCALAR: &str = "NOT_A_SCALAR";
    pub const INVALID_DIMENSIONS: &str = "INVALID_DIMENSIONS";
    pub const ALLOCATION: &str = "ALLOCATION";
    pub const DIV_ZERO: &str = "DIV_ZERO";
    pub const ARG_COUNT: &str = "ARG_COUNT";
    pub const UNDEFINED_FUNC: &str = "UNDEFINED_FUNC";
}

/// Where an error occurred
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorContext {
    /// Entry point that reported the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function: Option<String>,

    /// Argument that failed validation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub argument: Option<String>,
}

/// Structured error returned to the host
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabulaError {
    /// Machine-readable error code
    pub code: String,

    /// Human-readable error message
    pub message: String,

    /// Suggestion for fixing the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<ErrorContext>,
}

impl TabulaError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            suggestion: None,
            context: None,
        }
    }

    /// Builder: add suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Builder: set function context
    pub fn in_function(mut self, function: impl Into<String>) -> Self {
        let ctx = self.context.get_or_insert_with(ErrorContext::default);
        ctx.function = Some(function.into());
        self
    }

    /// Builder: set argument context
    pub fn for_argument(mut self, argument: impl Into<String>) -> Self {
        let ctx = self.context.get_or_insert_with(ErrorContext::default);
        ctx.argument = Some(argument.into());
        self
    }

    // ========== Common Error Constructors ==========

    pub fn undefined_func(name: &str) -> Self {
        Self::new(codes::UNDEFINED_FUNC, format!("Unknown function: {}", name))
            .with_suggestion("Use list_functions() to see available operations")
    }

    pub fn arg_count(func: &str, expected: usize, got: usize) -> Self {
        Self::new(codes::ARG_COUNT,
            format!("{}() expects {} arguments, got {}", func, expected, got))
            .in_function(func)
    }
}

impl std::fmt::Display for TabulaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, " (suggestion: {})", suggestion)?;
        }
        Ok(())
    }
}

impl std::error::Error for TabulaError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_code_and_suggestion() {
        let err = TabulaError::undefined_func("matrix-inverse");
        assert_eq!(
            err.to_string(),
            "[UNDEFINED_FUNC] Unknown function: matrix-inverse \
             (suggestion: Use list_functions() to see available operations)"
        );
    }

    #[test]
    fn test_builders_fill_context() {
        let err = TabulaError::new(codes::NON_NUMERIC, "bad element")
            .in_function("matrix-add")
            .for_argument("a");

        let ctx = err.context.unwrap();
        assert_eq!(ctx.function.as_deref(), Some("matrix-add"));
        assert_eq!(ctx.argument.as_deref(), Some("a"));
    }

    #[test]
    fn test_arg_count_names_function() {
        let err = TabulaError::arg_count("matrix-sum", 1, 3);
        assert_eq!(err.code, codes::ARG_COUNT);
        assert_eq!(err.message, "matrix-sum() expects 1 arguments, got 3");
        assert_eq!(err.context.unwrap().function.as_deref(), Some("matrix-sum"));
    }

    #[test]
    fn test_serialize_skips_empty_fields() {
        let err = TabulaError::new(codes::RAGGED_MATRIX, "ragged");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "RAGGED_MATRIX");
        assert_eq!(json["message"], "ragged");
        assert!(json.get("suggestion").is_none());
        assert!(json.get("context").is_none());
    }
}
