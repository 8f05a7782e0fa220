//! Tabula Matrix - Dense matrix arithmetic
//!
//! Two layers:
//! - the engine (`engine`): a flat row-major `f64` [`Matrix`] with
//!   add, subtract, multiply, transpose, dot product, scale, divide,
//!   sum, max and structure predicates
//! - the conversion layer (`convert`): host nested lists to matrices and back
//!
//! plus one `FunctionPlugin` per host entry point, registered by
//! [`load_matrix_library`].

mod types;
mod error;
mod helpers;
mod ops;
mod props;
mod vector_ops;

pub mod convert;
pub mod engine;

pub use types::{Matrix, Shape};
pub use error::{MatrixError, ErrorKind};
pub use convert::{parse, parse_scalar, serialize};

use tabula_plugin::PluginRegistry;

/// Load matrix functions into registry
pub fn load_matrix_library(registry: PluginRegistry) -> PluginRegistry {
    registry
        // Arithmetic (6 functions)
        .with_function(ops::AddFn)
        .with_function(ops::SubtractFn)
        .with_function(ops::MultiplyFn)
        .with_function(ops::TransposeFn)
        .with_function(ops::ScaleFn)
        .with_function(ops::DivideFn)

        // Vector (1 function)
        .with_function(vector_ops::DotFn)

        // Reductions (2 functions)
        .with_function(props::MaxFn)
        .with_function(props::SumFn)

        // Predicates (3 functions)
        .with_function(props::IsDiagonalFn)
        .with_function(props::IsUpperTriangularFn)
        .with_function(props::SameDimensionsFn)
}
