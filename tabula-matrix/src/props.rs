//! Matrix property functions: reductions and predicates

use tabula_core::Value;
use tabula_plugin::{ArgMeta, EvalContext, FunctionMeta, FunctionPlugin, ReturnKind};
use crate::engine;
use crate::helpers::{check_arg_count, extract_matrix, run};

static MATRIX_ARG: [ArgMeta; 1] = [ArgMeta::matrix("matrix", "Matrix to query")];

// ============================================================================
// MATRIX-MAX - Largest element
// ============================================================================

pub struct MaxFn;

static MAX_EXAMPLES: [&str; 1] = ["matrix-max([[-5, 3], [1, -2]]) → 3.0"];
static MAX_RELATED: [&str; 1] = ["matrix-sum"];

impl FunctionPlugin for MaxFn {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "matrix-max",
            aliases: &["obtener_valor_maximo"],
            description: "Largest element of a matrix",
            usage: "matrix-max(matrix)",
            args: &MATRIX_ARG,
            returns: ReturnKind::Scalar,
            examples: &MAX_EXAMPLES,
            category: "matrix/reduce",
            related: &MAX_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        const NAME: &str = "matrix-max";
        run(NAME, || {
            check_arg_count(args, &MATRIX_ARG, NAME)?;
            let matrix = extract_matrix(args, 0, &MATRIX_ARG[0], NAME)?;
            Ok(Value::Float(engine::max(&matrix)))
        })
    }
}

// ============================================================================
// MATRIX-SUM - Sum of all elements
// ============================================================================

pub struct SumFn;

static SUM_EXAMPLES: [&str; 1] = ["matrix-sum([[-5, 3], [1, -2]]) → -3.0"];
static SUM_RELATED: [&str; 1] = ["matrix-max"];

impl FunctionPlugin for SumFn {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "matrix-sum",
            aliases: &["sumar_elementos_de_matriz"],
            description: "Sum of all elements of a matrix",
            usage: "matrix-sum(matrix)",
            args: &MATRIX_ARG,
            returns: ReturnKind::Scalar,
            examples: &SUM_EXAMPLES,
            category: "matrix/reduce",
            related: &SUM_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        const NAME: &str = "matrix-sum";
        run(NAME, || {
            check_arg_count(args, &MATRIX_ARG, NAME)?;
            let matrix = extract_matrix(args, 0, &MATRIX_ARG[0], NAME)?;
            Ok(Value::Float(engine::sum(&matrix)))
        })
    }
}

// ============================================================================
// MATRIX-IS-DIAGONAL
// ============================================================================

pub struct IsDiagonalFn;

static IS_DIAGONAL_EXAMPLES: [&str; 2] = [
    "matrix-is-diagonal([[1, 0], [0, 2]]) → true",
    "matrix-is-diagonal([[1, 1], [0, 2]]) → false",
];
static IS_DIAGONAL_RELATED: [&str; 1] = ["matrix-is-upper-triangular"];

impl FunctionPlugin for IsDiagonalFn {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "matrix-is-diagonal",
            aliases: &["es_diagonal"],
            description: "Square matrix whose off-diagonal elements are all exactly zero",
            usage: "matrix-is-diagonal(matrix)",
            args: &MATRIX_ARG,
            returns: ReturnKind::Bool,
            examples: &IS_DIAGONAL_EXAMPLES,
            category: "matrix/predicate",
            related: &IS_DIAGONAL_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        const NAME: &str = "matrix-is-diagonal";
        run(NAME, || {
            check_arg_count(args, &MATRIX_ARG, NAME)?;
            let matrix = extract_matrix(args, 0, &MATRIX_ARG[0], NAME)?;
            Ok(Value::Bool(engine::is_diagonal(&matrix)))
        })
    }
}

// ============================================================================
// MATRIX-IS-UPPER-TRIANGULAR
// ============================================================================

pub struct IsUpperTriangularFn;

static IS_UPPER_EXAMPLES: [&str; 2] = [
    "matrix-is-upper-triangular([[1, 2], [0, 3]]) → true",
    "matrix-is-upper-triangular([[1, 2], [3, 0]]) → false",
];
static IS_UPPER_RELATED: [&str; 1] = ["matrix-is-diagonal"];

impl FunctionPlugin for IsUpperTriangularFn {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "matrix-is-upper-triangular",
            aliases: &["es_matriz_diagonal_superior"],
            description: "Square matrix whose elements below the main diagonal are all exactly zero",
            usage: "matrix-is-upper-triangular(matrix)",
            args: &MATRIX_ARG,
            returns: ReturnKind::Bool,
            examples: &IS_UPPER_EXAMPLES,
            category: "matrix/predicate",
            related: &IS_UPPER_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        const NAME: &str = "matrix-is-upper-triangular";
        run(NAME, || {
            check_arg_count(args, &MATRIX_ARG, NAME)?;
            let matrix = extract_matrix(args, 0, &MATRIX_ARG[0], NAME)?;
            Ok(Value::Bool(engine::is_upper_triangular(&matrix)))
        })
    }
}

// ============================================================================
// MATRICES-SAME-DIMENSIONS
// ============================================================================

pub struct SameDimensionsFn;

static SAME_DIMS_ARGS: [ArgMeta; 2] = [
    ArgMeta::matrix("a", "First matrix"),
    ArgMeta::matrix("b", "Second matrix"),
];
static SAME_DIMS_EXAMPLES: [&str; 1] = ["matrices-same-dimensions([[1, 2]], [[3, 4]]) → true"];
static SAME_DIMS_RELATED: [&str; 2] = ["matrix-add", "matrix-subtract"];

impl FunctionPlugin for SameDimensionsFn {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "matrices-same-dimensions",
            aliases: &["matrices_mismas_dimensions"],
            description: "Whether two matrices have the same number of rows and columns",
            usage: "matrices-same-dimensions(a, b)",
            args: &SAME_DIMS_ARGS,
            returns: ReturnKind::Bool,
            examples: &SAME_DIMS_EXAMPLES,
            category: "matrix/predicate",
            related: &SAME_DIMS_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        const NAME: &str = "matrices-same-dimensions";
        run(NAME, || {
            check_arg_count(args, &SAME_DIMS_ARGS, NAME)?;
            let a = extract_matrix(args, 0, &SAME_DIMS_ARGS[0], NAME)?;
            let b = extract_matrix(args, 1, &SAME_DIMS_ARGS[1], NAME)?;
            Ok(Value::Bool(engine::same_dimensions(&a, &b)))
        })
    }
}
