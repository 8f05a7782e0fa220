//! Plugin traits

use tabula_core::Value;
use crate::EvalContext;
use serde::Serialize;

/// What an argument must parse as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArgKind {
    /// Non-empty list of equal-length lists of numbers
    Matrix,
    /// A matrix with exactly one row
    RowVector,
    /// Integer or float
    Scalar,
}

/// What a successful call returns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReturnKind {
    Matrix,
    Scalar,
    Bool,
}

/// Metadata about a function argument
#[derive(Debug, Clone, Serialize)]
pub struct ArgMeta {
    pub name: &'static str,
    pub kind: ArgKind,
    pub description: &'static str,
}

impl ArgMeta {
    pub const fn matrix(name: &'static str, description: &'static str) -> Self {
        Self { name, kind: ArgKind::Matrix, description }
    }

    pub const fn row_vector(name: &'static str, description: &'static str) -> Self {
        Self { name, kind: ArgKind::RowVector, description }
    }

    pub const fn scalar(name: &'static str, description: &'static str) -> Self {
        Self { name, kind: ArgKind::Scalar, description }
    }
}

/// Metadata for a function plugin
#[derive(Debug, Clone, Serialize)]
pub struct FunctionMeta {
    pub name: &'static str,
    /// Alternative names the host may call this function by
    pub aliases: &'static [&'static str],
    pub description: &'static str,
    pub usage: &'static str,
    pub args: &'static [ArgMeta],
    pub returns: ReturnKind,
    pub examples: &'static [&'static str],
    /// Slash-separated path, e.g. `matrix/predicate`
    pub category: &'static str,
    pub related: &'static [&'static str],
}

impl FunctionMeta {
    /// True if the function sits in `category` or one of its subcategories
    pub fn in_category(&self, category: &str) -> bool {
        match self.category.strip_prefix(category) {
            Some(rest) => rest.is_empty() || rest.starts_with('/') || category.ends_with('/'),
            None => false,
        }
    }
}

/// Pure function plugin
///
/// `call` receives the host arguments in declaration order. An absent or
/// null argument counts as missing, an error argument is handed back
/// unchanged, and every other failure comes back as `Value::Error`.
/// `call` never panics on host input.
pub trait FunctionPlugin: Send + Sync {
    fn meta(&self) -> FunctionMeta;
    fn call(&self, args: &[Value], ctx: &EvalContext) -> Value;
}

#[cfg(test)]
mod tests {
    use super::*;

    static ARGS: [ArgMeta; 2] = [
        ArgMeta::row_vector("v", "Row vector"),
        ArgMeta::scalar("k", "Factor"),
    ];

    fn meta(category: &'static str) -> FunctionMeta {
        FunctionMeta {
            name: "f", aliases: &[], description: "", usage: "f(v, k)",
            args: &ARGS, returns: ReturnKind::Matrix, examples: &[], category, related: &[],
        }
    }

    #[test]
    fn test_in_category_matches_whole_segments() {
        let m = meta("matrix/predicate");
        assert!(m.in_category("matrix"));
        assert!(m.in_category("matrix/"));
        assert!(m.in_category("matrix/predicate"));
        assert!(!m.in_category("matrix/pred"));
        assert!(!m.in_category("vector"));
    }

    #[test]
    fn test_kinds_serialize_kebab_case() {
        let json = serde_json::to_value(meta("matrix")).unwrap();
        assert_eq!(json["args"][0]["kind"], "row-vector");
        assert_eq!(json["args"][1]["kind"], "scalar");
        assert_eq!(json["returns"], "matrix");
    }
}
