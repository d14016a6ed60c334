//! Lazy, memoized operator nodes.
//!
//! `Node` is a cheap `Rc` handle, so a pending node can feed several
//! downstream consumers; whichever consumer demands rows first performs the
//! one evaluation and every later request is served from the cache. Resolving
//! replaces the pending payload (operand handles and captured parameters)
//! with the materialized rows, so evaluated chains release their upstream
//! graph. A failed evaluation leaves the node pending and retryable.
//!
//! The graph is single-threaded by construction (`Rc`/`RefCell`); callers
//! needing cross-thread evaluation must provide their own confinement.

use std::cell::RefCell;
use std::rc::Rc;

use relalg_core::prelude::{Error, Result, Row};

use crate::division::Division;
use crate::join::Join;
use crate::links::{Criterion, Link};
use crate::project::{AntiProjection, Projection};
use crate::rename::Rename;
use crate::select::Select;
use crate::semijoin::{AntiJoin, SemiJoin};
use crate::theta::Theta;
use crate::traits::Operator;
use crate::union::Union;
use crate::unique::Unique;

/// Materialized row sequence, shared between a node and its consumers.
pub type Rows = Rc<[Row]>;

#[derive(Clone)]
pub struct Node {
    inner: Rc<RefCell<State>>,
}

impl std::fmt::Debug for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &*self.inner.borrow() {
            State::Pending(_) => f.debug_struct("Node").field("state", &"Pending").finish(),
            State::Resolved(r) => f.debug_struct("Node").field("rows", &r.rows).finish(),
        }
    }
}

enum State {
    Pending(Box<dyn Operator>),
    Resolved(Resolved),
}

struct Resolved {
    rows: Rows,
    /// Leaf relation view over `rows`, created on demand by `as_relation`.
    relation: Option<Node>,
}

impl Node {
    /// Leaf node wrapping a fixed input sequence; born resolved.
    pub fn relation(rows: Vec<Row>) -> Node {
        Self::from_shared(Rc::from(rows))
    }

    fn from_shared(rows: Rows) -> Node {
        Node {
            inner: Rc::new(RefCell::new(State::Resolved(Resolved {
                rows,
                relation: None,
            }))),
        }
    }

    /// Pending node over an arbitrary operator.
    pub fn from_operator(op: Box<dyn Operator>) -> Node {
        Node {
            inner: Rc::new(RefCell::new(State::Pending(op))),
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(&*self.inner.borrow(), State::Resolved(_))
    }

    /// Materialized rows, evaluating on the first call.
    ///
    /// Evaluation is depth-first over the operand graph. On success the
    /// pending payload is dropped (operand handles released) and the cached
    /// sequence is returned for the node's lifetime; on error the node is
    /// left untouched.
    pub fn rows(&self) -> Result<Rows> {
        let rows: Rows = {
            let state = self.inner.borrow();
            match &*state {
                State::Resolved(res) => return Ok(res.rows.clone()),
                State::Pending(op) => {
                    let out = op.eval()?;
                    #[cfg(feature = "tracing")]
                    tracing::trace!(op = op.name(), rows = out.len(), "node resolved");
                    Rc::from(out)
                }
            }
        };
        *self.inner.borrow_mut() = State::Resolved(Resolved {
            rows: rows.clone(),
            relation: None,
        });
        Ok(rows)
    }

    /// Leaf relation view over this node's (now materialized) rows, cached.
    pub fn as_relation(&self) -> Result<Node> {
        self.rows()?;
        let mut state = self.inner.borrow_mut();
        let State::Resolved(res) = &mut *state else {
            unreachable!("rows() resolved this node");
        };
        if let Some(rel) = &res.relation {
            return Ok(rel.clone());
        }
        let rel = Node::from_shared(res.rows.clone());
        res.relation = Some(rel.clone());
        Ok(rel)
    }

    // Builders. Each returns a new pending node over the receiver and never
    // forces evaluation.

    /// Keep exactly the listed columns, in listed order; absent source fields
    /// project as `Missing`.
    pub fn project<C>(&self, columns: impl IntoIterator<Item = C>) -> Node
    where
        C: Into<String>,
    {
        Node::from_operator(Box::new(Projection::new(self.clone(), collect(columns))))
    }

    /// Drop the named columns, keeping input field order.
    pub fn drop_columns<C>(&self, columns: impl IntoIterator<Item = C>) -> Node
    where
        C: Into<String>,
    {
        Node::from_operator(Box::new(AntiProjection::new(self.clone(), collect(columns))))
    }

    /// Rename fields per the mapping; unmapped fields pass through.
    pub fn rename<K, V>(&self, mapping: impl IntoIterator<Item = (K, V)>) -> Node
    where
        K: Into<String>,
        V: Into<String>,
    {
        let mapping = mapping
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Node::from_operator(Box::new(Rename::new(self.clone(), mapping)))
    }

    /// Keep rows satisfying every criterion.
    pub fn select(&self, criteria: impl IntoIterator<Item = Criterion>) -> Node {
        Node::from_operator(Box::new(Select::new(
            self.clone(),
            criteria.into_iter().collect(),
        )))
    }

    /// Natural join: declared links plus auto-detected shared-name columns.
    pub fn join(&self, other: impl Into<Node>, links: impl IntoIterator<Item = Link>) -> Node {
        Node::from_operator(Box::new(Join::new(
            self.clone(),
            other.into(),
            links.into_iter().collect(),
        )))
    }

    /// Predicate join over the cross product; every link must carry a compare
    /// fn, validated here.
    pub fn theta(
        &self,
        other: impl Into<Node>,
        links: impl IntoIterator<Item = Link>,
    ) -> Result<Node> {
        let links: Vec<Link> = links.into_iter().collect();
        for link in &links {
            if link.compare.is_none() {
                return Err(Error::Parameter(format!(
                    "theta link {}/{} has no compare fn",
                    link.self_field, link.other_field
                )));
            }
        }
        Ok(Node::from_operator(Box::new(Theta::new(
            self.clone(),
            other.into(),
            links,
        ))))
    }

    /// Keep self rows with at least one matching other row.
    pub fn semijoin(&self, other: impl Into<Node>, links: impl IntoIterator<Item = Link>) -> Node {
        Node::from_operator(Box::new(SemiJoin::new(
            self.clone(),
            other.into(),
            links.into_iter().collect(),
        )))
    }

    /// Keep self rows with no matching other row.
    pub fn antijoin(&self, other: impl Into<Node>, links: impl IntoIterator<Item = Link>) -> Node {
        Node::from_operator(Box::new(AntiJoin::new(
            self.clone(),
            other.into(),
            links.into_iter().collect(),
        )))
    }

    /// Relational division on the same column name in both operands.
    pub fn divide(&self, other: impl Into<Node>, column: &str) -> Result<Node> {
        self.divide_on(other, column, column)
    }

    /// Relational division: self groups on everything but `scol` must cover
    /// the distinct `other[ocol]` values.
    pub fn divide_on(&self, other: impl Into<Node>, scol: &str, ocol: &str) -> Result<Node> {
        if scol.is_empty() || ocol.is_empty() {
            return Err(Error::Parameter(
                "division requires non-empty column names".into(),
            ));
        }
        Ok(Node::from_operator(Box::new(Division::new(
            self.clone(),
            other.into(),
            scol.to_string(),
            ocol.to_string(),
        ))))
    }

    /// Bag union: self rows then other rows, no dedup.
    pub fn union(&self, other: impl Into<Node>) -> Node {
        Node::from_operator(Box::new(Union::new(self.clone(), other.into())))
    }

    /// Drop structural duplicates, keeping first-seen order.
    pub fn unique(&self) -> Node {
        Node::from_operator(Box::new(Unique::new(self.clone())))
    }
}

fn collect<C: Into<String>>(columns: impl IntoIterator<Item = C>) -> Vec<String> {
    columns.into_iter().map(Into::into).collect()
}

/// A bare row sequence wraps implicitly as a leaf relation.
impl From<Vec<Row>> for Node {
    fn from(rows: Vec<Row>) -> Self {
        Node::relation(rows)
    }
}

impl From<&Node> for Node {
    fn from(node: &Node) -> Self {
        node.clone()
    }
}
