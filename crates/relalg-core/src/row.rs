//! Key-ordered field map.
//!
//! Field order is insertion order and determines output order; equality is
//! order-independent (see [`crate::eq`]).

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::value::Value;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row {
    fields: IndexMap<String, Value>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Dynamic-lookup accessor: a nonexistent field reads as `Missing`.
    pub fn value(&self, field: &str) -> &Value {
        self.fields.get(field).unwrap_or(&crate::value::MISSING)
    }

    /// Inserts, overwriting the value but keeping the original position of an
    /// existing field.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(field.into(), value.into());
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Copy of this row with one field removed, field order preserved.
    pub fn without(&self, field: &str) -> Row {
        self.iter()
            .filter(|(k, _)| *k != field)
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }
}

impl FromIterator<(String, Value)> for Row {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Row {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

impl TryFrom<serde_json::Value> for Row {
    type Error = Error;

    fn try_from(v: serde_json::Value) -> Result<Self> {
        match Value::try_from(v)? {
            Value::Row(row) => Ok(row),
            other => Err(Error::Unsupported(format!(
                "expected a JSON object, got {}",
                other.kind()
            ))),
        }
    }
}

/// Loads a relation from a JSON array of objects.
pub fn rows_from_json(v: serde_json::Value) -> Result<Vec<Row>> {
    match v {
        serde_json::Value::Array(items) => items.into_iter().map(Row::try_from).collect(),
        other => Err(Error::Unsupported(format!(
            "expected a JSON array of objects, got a {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(v: &serde_json::Value) -> &'static str {
    use serde_json::Value as J;
    match v {
        J::Null => "null",
        J::Bool(_) => "bool",
        J::Number(_) => "number",
        J::String(_) => "string",
        J::Array(_) => "array",
        J::Object(_) => "object",
    }
}

/// Literal row construction, mostly for tests and fixtures:
/// `row! { "emp" => "A", "skill" => "x" }`.
#[macro_export]
macro_rules! row {
    () => { $crate::row::Row::new() };
    ($($field:expr => $value:expr),+ $(,)?) => {{
        let mut r = $crate::row::Row::new();
        $( r.insert($field, $crate::value::Value::from($value)); )+
        r
    }};
}
