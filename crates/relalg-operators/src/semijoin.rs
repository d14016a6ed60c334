//! Existence filters: semijoin and antijoin.

use relalg_core::prelude::{Result, Row};

use crate::links::Link;
use crate::node::Node;
use crate::traits::Operator;

/// True when at least one other row satisfies every link against `srow`.
/// Short-circuits on the first match.
fn match_exists(srow: &Row, others: &[Row], links: &[Link]) -> Result<bool> {
    'others: for orow in others {
        for link in links {
            if !link.check(srow.value(&link.self_field), orow.value(&link.other_field))? {
                continue 'others;
            }
        }
        return Ok(true);
    }
    Ok(false)
}

/// Keeps self rows that have a match on the other side. Pure existence test:
/// no enrichment, no duplication when several other rows match.
pub struct SemiJoin {
    input: Node,
    other: Node,
    links: Vec<Link>,
}

impl SemiJoin {
    pub fn new(input: Node, other: Node, links: Vec<Link>) -> Self {
        Self {
            input,
            other,
            links,
        }
    }
}

impl Operator for SemiJoin {
    fn name(&self) -> &'static str {
        "semijoin"
    }

    fn eval(&self) -> Result<Vec<Row>> {
        let srows = self.input.rows()?;
        let orows = self.other.rows()?;
        let mut out = Vec::new();
        for srow in srows.iter() {
            if match_exists(srow, &orows, &self.links)? {
                out.push(srow.clone());
            }
        }
        Ok(out)
    }
}

/// Keeps self rows with no match on the other side; the complement of
/// [`SemiJoin`] over the same operands and links.
pub struct AntiJoin {
    input: Node,
    other: Node,
    links: Vec<Link>,
}

impl AntiJoin {
    pub fn new(input: Node, other: Node, links: Vec<Link>) -> Self {
        Self {
            input,
            other,
            links,
        }
    }
}

impl Operator for AntiJoin {
    fn name(&self) -> &'static str {
        "antijoin"
    }

    fn eval(&self) -> Result<Vec<Row>> {
        let srows = self.input.rows()?;
        let orows = self.other.rows()?;
        let mut out = Vec::new();
        for srow in srows.iter() {
            if !match_exists(srow, &orows, &self.links)? {
                out.push(srow.clone());
            }
        }
        Ok(out)
    }
}
