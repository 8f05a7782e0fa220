//! Tabula Core - Fundamental types
//!
//! This crate provides the types shared by every Tabula crate:
//! - `Value`: values exchanged with the host (numbers, lists, errors)
//! - `TabulaError`: structured errors for host consumption

mod value;
mod error;

pub use value::Value;
pub use error::{TabulaError, ErrorContext, codes};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Value, TabulaError};
    pub use crate::error::codes;
}
