//! Bag union.

use relalg_core::prelude::{Result, Row};

use crate::node::Node;
use crate::traits::Operator;

/// Concatenation: self rows then other rows, input orders preserved, no
/// dedup.
pub struct Union {
    input: Node,
    other: Node,
}

impl Union {
    pub fn new(input: Node, other: Node) -> Self {
        Self { input, other }
    }
}

impl Operator for Union {
    fn name(&self) -> &'static str {
        "union"
    }

    fn eval(&self) -> Result<Vec<Row>> {
        let srows = self.input.rows()?;
        let orows = self.other.rows()?;
        let mut out = Vec::with_capacity(srows.len() + orows.len());
        out.extend(srows.iter().cloned());
        out.extend(orows.iter().cloned());
        Ok(out)
    }
}
