//! Relational division.

use relalg_core::eq::{row_eq_on, value_eq, FieldSets};
use relalg_core::prelude::{Result, Row, Value};

use crate::node::Node;
use crate::traits::Operator;

/// Classical relational division over bag inputs.
///
/// Self rows are grouped by structural equality excluding `scol`; a group
/// qualifies when the `scol` values of its members cover every distinct
/// `other[ocol]` value. One row per qualifying group is emitted: the group
/// key, `scol` removed.
///
/// The group representative's own `scol` value counts toward the divisor
/// set before any partner is scanned, so a single-row group covering the
/// whole divisor still qualifies.
pub struct Division {
    input: Node,
    other: Node,
    scol: String,
    ocol: String,
}

impl Division {
    pub fn new(input: Node, other: Node, scol: String, ocol: String) -> Self {
        Self {
            input,
            other,
            scol,
            ocol,
        }
    }
}

impl Operator for Division {
    fn name(&self) -> &'static str {
        "divide"
    }

    fn eval(&self) -> Result<Vec<Row>> {
        let srows = self.input.rows()?;
        let orows = self.other.rows()?;

        // Distinct divisor values, structural equality (no hashing).
        let mut divisor: Vec<Value> = Vec::new();
        for orow in orows.iter() {
            let v = orow.value(&self.ocol);
            if !divisor.iter().any(|d| value_eq(d, v)) {
                divisor.push(v.clone());
            }
        }

        // Field sets minus scol, computed once per row for the O(n²) scan.
        let key_fields = FieldSets::build(&srows, &self.scol);
        let mut used = vec![false; srows.len()];
        let mut out = Vec::new();

        'groups: for i in 0..srows.len() {
            if used[i] {
                continue;
            }
            let mut required = divisor.clone();
            remove_value(&mut required, srows[i].value(&self.scol));
            if required.is_empty() {
                out.push(srows[i].without(&self.scol));
                continue;
            }
            for j in (i + 1)..srows.len() {
                if row_eq_on(&srows[i], &srows[j], key_fields.get(i), key_fields.get(j)) {
                    remove_value(&mut required, srows[j].value(&self.scol));
                    used[j] = true;
                    if required.is_empty() {
                        out.push(srows[i].without(&self.scol));
                        continue 'groups;
                    }
                }
            }
        }
        Ok(out)
    }
}

fn remove_value(set: &mut Vec<Value>, v: &Value) {
    if let Some(pos) = set.iter().position(|d| value_eq(d, v)) {
        set.remove(pos);
    }
}
