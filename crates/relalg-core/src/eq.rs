//! Structural (deep, symmetric, order-independent) equality.
//!
//! Two values are structurally equal when they are the same scalar, both
//! `Missing`, or both rows whose fields match in both directions. The scan is
//! symmetric so neither side may carry extra fields; a field that is present
//! with a `Missing` value is indistinguishable from an absent field.
//!
//! Two differing scalars are never structurally equal. The recursive
//! "no fields to compare" formulation would let them slip through as equal,
//! which this module deliberately does not do.

use crate::row::Row;
use crate::value::Value;

pub fn value_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Row(x), Value::Row(y)) => row_eq(x, y),
        (Value::Missing, Value::Missing) => true,
        (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Int(x), Value::Int(y)) => x == y,
        (Value::Float(x), Value::Float(y)) => x == y,
        (Value::Str(x), Value::Str(y)) => x == y,
        _ => false,
    }
}

pub fn row_eq(a: &Row, b: &Row) -> bool {
    for (k, av) in a.iter() {
        if !value_eq(av, b.value(k)) {
            return false;
        }
    }
    // Fields only b has must all read as Missing on the a side.
    for (k, bv) in b.iter() {
        if !a.contains(k) && !value_eq(&Value::Missing, bv) {
            return false;
        }
    }
    true
}

/// Per-row field sets minus one excluded field, computed once for a whole
/// relation so an O(n²) exclude-field scan does not recompute them.
pub struct FieldSets<'a> {
    sets: Vec<Vec<&'a str>>,
}

impl<'a> FieldSets<'a> {
    pub fn build(rows: &'a [Row], exclude: &str) -> Self {
        Self {
            sets: rows
                .iter()
                .map(|row| row.field_names().filter(|f| *f != exclude).collect())
                .collect(),
        }
    }

    pub fn get(&self, idx: usize) -> &[&'a str] {
        &self.sets[idx]
    }
}

/// Symmetric comparison over precomputed field sets (see [`FieldSets`]).
pub fn row_eq_on(a: &Row, b: &Row, a_fields: &[&str], b_fields: &[&str]) -> bool {
    for &k in a_fields {
        if !value_eq(a.value(k), b.value(k)) {
            return false;
        }
    }
    for &k in b_fields {
        if !a_fields.contains(&k) && !value_eq(&Value::Missing, b.value(k)) {
            return false;
        }
    }
    true
}
