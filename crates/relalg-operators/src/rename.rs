//! Field renaming.

use indexmap::IndexMap;

use relalg_core::prelude::{Result, Row};

use crate::node::Node;
use crate::traits::Operator;

/// Renames fields per the mapping; fields not in the mapping pass through
/// unchanged, values are untouched.
pub struct Rename {
    input: Node,
    mapping: IndexMap<String, String>,
}

impl Rename {
    pub fn new(input: Node, mapping: IndexMap<String, String>) -> Self {
        Self { input, mapping }
    }
}

impl Operator for Rename {
    fn name(&self) -> &'static str {
        "rename"
    }

    fn eval(&self) -> Result<Vec<Row>> {
        let rows = self.input.rows()?;
        Ok(rows
            .iter()
            .map(|row| {
                let mut nr = Row::new();
                for (k, v) in row.iter() {
                    let key = self.mapping.get(k).map(String::as_str).unwrap_or(k);
                    nr.insert(key, v.clone());
                }
                nr
            })
            .collect())
    }
}
