//! Helper functions shared by the entry points

use crate::convert::{parse, parse_scalar};
use crate::error::MatrixError;
use crate::types::{Matrix, Shape};
use tabula_core::{TabulaError, Value};
use tabula_plugin::ArgMeta;
use tracing::{debug, warn};

/// Fetch an argument, treating an absent or null value as missing.
/// An error value passed in by the host is propagated unchanged.
fn argument<'a>(args: &'a [Value], index: usize, meta: &ArgMeta, func: &str) -> Result<&'a Value, TabulaError> {
    match args.get(index) {
        Some(Value::Error(e)) => Err(e.clone()),
        Some(v) if !v.is_null() => Ok(v),
        _ => Err(missing(meta, func)),
    }
}

fn missing(meta: &ArgMeta, func: &str) -> TabulaError {
    context(MatrixError::MissingArgument(meta.name).into(), func, meta.name)
}

fn context(err: TabulaError, func: &str, arg: &str) -> TabulaError {
    err.in_function(func).for_argument(arg)
}

/// Check that the call has exactly as many arguments as declared
pub fn check_arg_count(args: &[Value], expected: &[ArgMeta], func: &str) -> Result<(), TabulaError> {
    if args.len() > expected.len() {
        return Err(TabulaError::arg_count(func, expected.len(), args.len()));
    }
    if let Some(arg) = expected.get(args.len()) {
        return Err(missing(arg, func));
    }
    Ok(())
}

/// Extract a matrix from the argument at `index`
pub fn extract_matrix(args: &[Value], index: usize, meta: &ArgMeta, func: &str) -> Result<Matrix, TabulaError> {
    let value = argument(args, index, meta, func)?;
    parse(value).map_err(|e| context(e.into(), func, meta.name))
}

/// Extract a numeric scalar from the argument at `index`
pub fn extract_scalar(args: &[Value], index: usize, meta: &ArgMeta, func: &str) -> Result<f64, TabulaError> {
    let value = argument(args, index, meta, func)?;
    parse_scalar(value).map_err(|e| context(e.into(), func, meta.name))
}

/// Allocate a result matrix of the given shape
pub fn allocate(shape: Shape, func: &str) -> Result<Matrix, TabulaError> {
    Matrix::with_shape(shape).map_err(|e| engine_error(e, func))
}

/// Attach the function name to an engine failure
pub fn engine_error(err: MatrixError, func: &str) -> TabulaError {
    TabulaError::from(err).in_function(func)
}

/// Run an entry point body, logging the outcome and folding errors into a value
pub fn run(func: &str, body: impl FnOnce() -> Result<Value, TabulaError>) -> Value {
    debug!(function = func, "call");
    match body() {
        Ok(value) => {
            debug!(function = func, "ok");
            value
        }
        Err(err) => {
            warn!(function = func, code = %err.code, "{}", err.message);
            Value::Error(err)
        }
    }
}
