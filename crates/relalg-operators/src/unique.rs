//! Structural deduplication.

use relalg_core::eq::row_eq;
use relalg_core::prelude::{Result, Row};

use crate::node::Node;
use crate::traits::Operator;

/// Keeps the first occurrence of each structurally distinct row, in input
/// order. O(n²): equality is structural, not identity, so there is no
/// hashing shortcut.
pub struct Unique {
    input: Node,
}

impl Unique {
    pub fn new(input: Node) -> Self {
        Self { input }
    }
}

impl Operator for Unique {
    fn name(&self) -> &'static str {
        "unique"
    }

    fn eval(&self) -> Result<Vec<Row>> {
        let rows = self.input.rows()?;
        let mut out: Vec<Row> = Vec::new();
        for row in rows.iter() {
            if !out.iter().any(|kept| row_eq(kept, row)) {
                out.push(row.clone());
            }
        }
        Ok(out)
    }
}
