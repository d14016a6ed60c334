//! Tagged field values.
//!
//! A value is a scalar, an absent marker, or a nested [`Row`], so projections
//! and comparisons are well-typed instead of relying on dynamic property
//! presence. `Missing` is what a lookup of a nonexistent field yields; it
//! compares equal only to another `Missing`.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::row::Row;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// A field that is not present in its source row.
    Missing,
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Row(Row),
}

/// Shared instance handed out for lookups of nonexistent fields.
pub static MISSING: Value = Value::Missing;

impl Value {
    pub fn is_missing(&self) -> bool {
        matches!(self, Value::Missing)
    }

    /// Variant name, stable, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Missing => "missing",
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "str",
            Value::Row(_) => "row",
        }
    }

    pub fn as_row(&self) -> Option<&Row> {
        match self {
            Value::Row(r) => Some(r),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

impl From<Row> for Value {
    fn from(v: Row) -> Self {
        Value::Row(v)
    }
}

/// JSON interop for loading fixture relations. Arrays have no relational
/// counterpart at the value level and are rejected.
impl TryFrom<serde_json::Value> for Value {
    type Error = Error;

    fn try_from(v: serde_json::Value) -> Result<Self> {
        use serde_json::Value as J;
        Ok(match v {
            J::Null => Value::Null,
            J::Bool(b) => Value::Bool(b),
            J::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => Value::Float(n.as_f64().ok_or_else(|| {
                    Error::Unsupported(format!("number {} is not representable", n))
                })?),
            },
            J::String(s) => Value::Str(s),
            J::Object(map) => {
                let mut row = Row::new();
                for (k, v) in map {
                    row.insert(k, Value::try_from(v)?);
                }
                Value::Row(row)
            }
            J::Array(_) => {
                return Err(Error::Unsupported(
                    "array values have no relational representation".into(),
                ))
            }
        })
    }
}
