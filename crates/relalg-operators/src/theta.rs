//! Theta (predicate) join.

use relalg_core::prelude::{Error, Result, Row};

use crate::links::Link;
use crate::node::Node;
use crate::traits::Operator;

/// Full cross product filtered by per-link compare fns; every link's compare
/// fn is mandatory (validated at construction). The output row is the other
/// row overlaid by the self row, so the self side wins on field-name
/// collisions. No implicit alias handling.
pub struct Theta {
    input: Node,
    other: Node,
    links: Vec<Link>,
}

impl Theta {
    pub fn new(input: Node, other: Node, links: Vec<Link>) -> Self {
        Self {
            input,
            other,
            links,
        }
    }
}

impl Operator for Theta {
    fn name(&self) -> &'static str {
        "theta"
    }

    fn eval(&self) -> Result<Vec<Row>> {
        let srows = self.input.rows()?;
        let orows = self.other.rows()?;

        let mut out = Vec::new();
        for srow in srows.iter() {
            'pairs: for orow in orows.iter() {
                for link in &self.links {
                    let compare = link.compare.as_ref().ok_or_else(|| {
                        Error::Parameter(format!(
                            "theta link {}/{} has no compare fn",
                            link.self_field, link.other_field
                        ))
                    })?;
                    if !compare(srow.value(&link.self_field), orow.value(&link.other_field))? {
                        continue 'pairs;
                    }
                }
                let mut nr = orow.clone();
                for (k, v) in srow.iter() {
                    nr.insert(k, v.clone());
                }
                out.push(nr);
            }
        }
        Ok(out)
    }
}
