//! Values exchanged with the host
//!
//! A host hands over integers, floats, lists of lists and the odd atom or
//! string. Errors travel as values too, so an entry point never has to panic
//! on bad input.

use crate::TabulaError;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Dynamically typed host value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Value {
    Int(i64),
    Float(f64),
    Bool(bool),
    Text(String),
    List(Vec<Value>),
    Null,
    Error(TabulaError),
}

impl Value {
    // ========== Safe Accessors (never panic) ==========

    /// Numeric view: integers widen to `f64`, everything else is `None`
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(l) => Some(l),
            _ => None,
        }
    }

    pub fn as_error(&self) -> Option<&TabulaError> {
        match self {
            Value::Error(e) => Some(e),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "Int",
            Value::Float(_) => "Float",
            Value::Bool(_) => "Bool",
            Value::Text(_) => "Text",
            Value::List(_) => "List",
            Value::Null => "Null",
            Value::Error(_) => "Error",
        }
    }

    // ========== JSON Bridge ==========

    /// Convert a JSON document into a host value.
    ///
    /// JSON integers that fit in `i64` become `Int`; every other number
    /// becomes `Float`. Objects have no matrix meaning and map to `Text`
    /// holding their JSON source, so they fail numeric validation later
    /// with a useful type name.
    pub fn from_json(json: &JsonValue) -> Value {
        match json {
            JsonValue::Null => Value::Null,
            JsonValue::Bool(b) => Value::Bool(*b),
            JsonValue::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            JsonValue::String(s) => Value::Text(s.clone()),
            JsonValue::Array(arr) => Value::List(arr.iter().map(Value::from_json).collect()),
            JsonValue::Object(_) => Value::Text(json.to_string()),
        }
    }

    /// Convert back to JSON. Non-finite floats become `null`.
    pub fn to_json(&self) -> JsonValue {
        match self {
            Value::Int(i) => JsonValue::from(*i),
            Value::Float(f) => serde_json::Number::from_f64(*f)
                .map(JsonValue::Number)
                .unwrap_or(JsonValue::Null),
            Value::Bool(b) => JsonValue::Bool(*b),
            Value::Text(s) => JsonValue::String(s.clone()),
            Value::List(items) => JsonValue::Array(items.iter().map(Value::to_json).collect()),
            Value::Null => JsonValue::Null,
            Value::Error(e) => serde_json::to_value(e).unwrap_or(JsonValue::Null),
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{:?}", x),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Text(s) => write!(f, "{}", s),
            Value::List(items) => {
                let contents: Vec<String> = items.iter().map(|v| v.to_string()).collect();
                write!(f, "[{}]", contents.join(", "))
            }
            Value::Null => write!(f, "null"),
            Value::Error(e) => write!(f, "#ERROR: {}", e.code),
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Null
    }
}

// From implementations for convenience
impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<TabulaError> for Value {
    fn from(e: TabulaError) -> Self {
        Value::Error(e)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}
