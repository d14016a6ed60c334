//! Projection and anti-projection.

use relalg_core::prelude::{Result, Row, Value};

use crate::node::Node;
use crate::traits::Operator;

/// Keeps exactly the listed columns, in listed order. A column absent from a
/// source row projects as `Missing` rather than erroring.
pub struct Projection {
    input: Node,
    columns: Vec<String>,
}

impl Projection {
    pub fn new(input: Node, columns: Vec<String>) -> Self {
        Self { input, columns }
    }
}

impl Operator for Projection {
    fn name(&self) -> &'static str {
        "project"
    }

    fn eval(&self) -> Result<Vec<Row>> {
        let rows = self.input.rows()?;
        Ok(rows
            .iter()
            .map(|row| {
                let mut nr = Row::new();
                for c in &self.columns {
                    nr.insert(
                        c.clone(),
                        row.get(c).cloned().unwrap_or(Value::Missing),
                    );
                }
                nr
            })
            .collect())
    }
}

/// Drops the named columns; remaining fields keep input order.
pub struct AntiProjection {
    input: Node,
    columns: Vec<String>,
}

impl AntiProjection {
    pub fn new(input: Node, columns: Vec<String>) -> Self {
        Self { input, columns }
    }
}

impl Operator for AntiProjection {
    fn name(&self) -> &'static str {
        "drop"
    }

    fn eval(&self) -> Result<Vec<Row>> {
        let rows = self.input.rows()?;
        Ok(rows
            .iter()
            .map(|row| {
                row.iter()
                    .filter(|(k, _)| !self.columns.iter().any(|c| c == k))
                    .map(|(k, v)| (k.to_string(), v.clone()))
                    .collect()
            })
            .collect())
    }
}
