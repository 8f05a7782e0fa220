//! Tabula Plugin System
//!
//! Named entry points the host calls into. Each operation is a
//! `FunctionPlugin`; the `PluginRegistry` looks them up by name or alias.

mod traits;
mod registry;
mod context;

pub use traits::{FunctionPlugin, FunctionMeta, ArgMeta, ArgKind, ReturnKind};
pub use registry::PluginRegistry;
pub use context::{EvalContext, TraceStep};

/// Re-export core types for plugin authors
pub mod prelude {
    pub use crate::{
        FunctionPlugin, FunctionMeta, ArgMeta, ArgKind, ReturnKind,
        PluginRegistry, EvalContext, TraceStep,
    };
    pub use tabula_core::prelude::*;
}
