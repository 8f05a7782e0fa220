//! Plugin Registry

use crate::{EvalContext, FunctionMeta, FunctionPlugin};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tabula_core::{TabulaError, Value};
use tracing::debug;

/// Central plugin registry
pub struct PluginRegistry {
    functions: HashMap<String, Arc<dyn FunctionPlugin>>,
    /// alias -> canonical name
    aliases: HashMap<String, String>,
}

impl PluginRegistry {
    pub fn new() -> Self {
        Self {
            functions: HashMap::new(),
            aliases: HashMap::new(),
        }
    }

    pub fn with_function<F: FunctionPlugin + 'static>(mut self, f: F) -> Self {
        let meta = f.meta();
        let name = meta.name.to_lowercase();
        for alias in meta.aliases {
            self.aliases.insert(alias.to_lowercase(), name.clone());
        }
        self.functions.insert(name, Arc::new(f));
        self
    }

    pub fn get_function(&self, name: &str) -> Option<&dyn FunctionPlugin> {
        let key = name.to_lowercase();
        let canonical = self.aliases.get(&key).unwrap_or(&key);
        self.functions.get(canonical).map(|f| f.as_ref())
    }

    pub fn call_function(&self, name: &str, args: &[Value], ctx: &EvalContext) -> Value {
        match self.get_function(name) {
            Some(f) => {
                debug!(function = name, args = args.len(), "dispatching");
                f.call(args, ctx)
            }
            None => {
                // Find similar function names for better error message
                let similar = self.find_similar_functions(name);
                let mut err = TabulaError::undefined_func(name);
                if !similar.is_empty() {
                    let suggestions: Vec<&str> = similar.iter().take(5).map(|s| s.as_str()).collect();
                    err = err.with_suggestion(format!(
                        "Similar: {}. Use list_functions() for full list.",
                        suggestions.join(", ")
                    ));
                }
                debug!(function = name, "unknown function");
                Value::Error(err)
            }
        }
    }

    /// Same as `call_function`, recording the call when tracing is enabled
    pub fn call_traced(&self, name: &str, args: &[Value], ctx: &mut EvalContext) -> Value {
        let result = self.call_function(name, args, ctx);
        ctx.record_trace(name.to_string(), args.to_vec(), result.clone());
        result
    }

    /// Find function names similar to the given name (for error suggestions)
    fn find_similar_functions(&self, name: &str) -> Vec<String> {
        let name_lower = name.to_lowercase();
        let mut matches: Vec<(String, usize)> = self.functions.keys()
            .filter_map(|func_name| {
                let score = Self::similarity_score(&name_lower, func_name);
                if score > 0 {
                    Some((func_name.clone(), score))
                } else {
                    None
                }
            })
            .collect();

        // Higher score first, ties alphabetical so suggestions are stable
        matches.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        matches.into_iter().map(|(name, _)| name).collect()
    }

    fn similarity_score(query: &str, candidate: &str) -> usize {
        let mut score = 0;

        if candidate.starts_with(query) {
            score += 100;
        } else if candidate.contains(query) {
            score += 50;
        } else if query.contains(candidate) {
            score += 30;
        }

        let query_chars: HashSet<char> = query.chars().collect();
        let candidate_chars: HashSet<char> = candidate.chars().collect();
        let common = query_chars.intersection(&candidate_chars).count();
        score += common * 2;

        let len_diff = (query.len() as i64 - candidate.len() as i64).unsigned_abs() as usize;
        if len_diff < 5 && score > 0 {
            score += 5 - len_diff;
        }

        score
    }

    /// Metadata for registered functions, optionally filtered by category, sorted by name
    pub fn list_functions(&self, category: Option<&str>) -> Vec<FunctionMeta> {
        let mut metas: Vec<FunctionMeta> = self.functions.values()
            .map(|f| f.meta())
            .filter(|m| category.map_or(true, |c| m.in_category(c)))
            .collect();
        metas.sort_by_key(|m| m.name);
        metas
    }

    pub fn function_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.functions.keys().map(|k| k.as_str()).collect();
        names.sort_unstable();
        names
    }
}

impl Default for PluginRegistry {
    fn default() -> Self {
        Self::new()
    }
}
