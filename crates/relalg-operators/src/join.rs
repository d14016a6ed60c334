//! Natural join with explicit links.

use relalg_core::eq::value_eq;
use relalg_core::prelude::{Result, Row};

use crate::links::Link;
use crate::node::Node;
use crate::traits::Operator;

/// Nested-loop equi-join generalized with optional per-link compare fns.
///
/// Fields that appear under the same name on both sides and are not consumed
/// by a declared link act as additional implicit equality links, aliased to
/// the shared name. An accepted pair emits the link aliases (self value),
/// then the remaining self-only fields, then the remaining other-only fields.
/// No dedup is applied.
pub struct Join {
    input: Node,
    other: Node,
    links: Vec<Link>,
}

impl Join {
    pub fn new(input: Node, other: Node, links: Vec<Link>) -> Self {
        Self {
            input,
            other,
            links,
        }
    }
}

impl Operator for Join {
    fn name(&self) -> &'static str {
        "join"
    }

    fn eval(&self) -> Result<Vec<Row>> {
        let srows = self.input.rows()?;
        let orows = self.other.rows()?;

        let declared_self: Vec<&str> = self.links.iter().map(|l| l.self_field.as_str()).collect();
        let declared_other: Vec<&str> = self.links.iter().map(|l| l.other_field.as_str()).collect();

        let mut out = Vec::new();
        for srow in srows.iter() {
            let skeys: Vec<&str> = srow
                .field_names()
                .filter(|k| !declared_self.contains(k))
                .collect();
            'pairs: for orow in orows.iter() {
                let okeys: Vec<&str> = orow
                    .field_names()
                    .filter(|k| !declared_other.contains(k))
                    .collect();
                let shared: Vec<&str> = skeys
                    .iter()
                    .copied()
                    .filter(|k| okeys.contains(k))
                    .collect();

                let mut nr = Row::new();
                for link in &self.links {
                    let sv = srow.value(&link.self_field);
                    if !link.check(sv, orow.value(&link.other_field))? {
                        continue 'pairs;
                    }
                    nr.insert(link.self_field.clone(), sv.clone());
                }
                for &k in &shared {
                    let sv = srow.value(k);
                    if !value_eq(sv, orow.value(k)) {
                        continue 'pairs;
                    }
                    nr.insert(k, sv.clone());
                }
                for &k in &skeys {
                    if !shared.contains(&k) {
                        nr.insert(k, srow.value(k).clone());
                    }
                }
                for &k in &okeys {
                    if !shared.contains(&k) {
                        nr.insert(k, orow.value(k).clone());
                    }
                }
                out.push(nr);
            }
        }
        Ok(out)
    }
}
