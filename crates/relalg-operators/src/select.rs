//! Row selection.

use relalg_core::prelude::{Result, Row};

use crate::links::Criterion;
use crate::node::Node;
use crate::traits::Operator;

/// Identity filter: keeps input rows (order and content unchanged) where
/// every criterion holds.
pub struct Select {
    input: Node,
    criteria: Vec<Criterion>,
}

impl Select {
    pub fn new(input: Node, criteria: Vec<Criterion>) -> Self {
        Self { input, criteria }
    }
}

impl Operator for Select {
    fn name(&self) -> &'static str {
        "select"
    }

    fn eval(&self) -> Result<Vec<Row>> {
        let rows = self.input.rows()?;
        let mut out = Vec::new();
        'rows: for row in rows.iter() {
            for criterion in &self.criteria {
                if !criterion.holds(row)? {
                    continue 'rows;
                }
            }
            out.push(row.clone());
        }
        Ok(out)
    }
}
