//! Evaluation Context

use tabula_core::Value;

/// Per-session settings and trace passed to plugins
#[derive(Debug, Default)]
pub struct EvalContext {
    pub tracing: bool,
    pub trace: Vec<TraceStep>,
}

/// Single recorded call
#[derive(Debug, Clone, PartialEq)]
pub struct TraceStep {
    pub function: String,
    pub args: Vec<Value>,
    pub result: Value,
}

impl EvalContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tracing(mut self, enabled: bool) -> Self {
        self.tracing = enabled;
        self
    }

    pub fn record_trace(&mut self, function: String, args: Vec<Value>, result: Value) {
        if self.tracing {
            self.trace.push(TraceStep { function, args, result });
        }
    }

    /// Drain recorded steps, leaving the trace empty
    pub fn take_trace(&mut self) -> Vec<TraceStep> {
        std::mem::take(&mut self.trace)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trace_only_recorded_when_enabled() {
        let mut off = EvalContext::new();
        off.record_trace("matrix-sum".into(), vec![], Value::Float(1.0));
        assert!(off.trace.is_empty());

        let mut on = EvalContext::new().with_tracing(true);
        on.record_trace("matrix-sum".into(), vec![], Value::Float(1.0));
        assert_eq!(on.trace.len(), 1);
        assert_eq!(on.trace[0].function, "matrix-sum");
    }

    #[test]
    fn test_take_trace_drains() {
        let mut ctx = EvalContext::new().with_tracing(true);
        ctx.record_trace("matrix-max".into(), vec![], Value::Float(3.0));
        let steps = ctx.take_trace();
        assert_eq!(steps.len(), 1);
        assert!(ctx.trace.is_empty());
    }
}
