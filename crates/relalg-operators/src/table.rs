//! One-shot constructors over bare row sequences.
//!
//! Convenience layer for callers that have materialized rows and want a
//! single operator without building a graph by hand; each function wraps its
//! inputs as leaf relations and returns the pending node.

use relalg_core::prelude::{Result, Row};

use crate::links::{Criterion, Link};
use crate::node::Node;

pub fn project<C: Into<String>>(rows: Vec<Row>, columns: impl IntoIterator<Item = C>) -> Node {
    Node::relation(rows).project(columns)
}

pub fn drop_columns<C: Into<String>>(
    rows: Vec<Row>,
    columns: impl IntoIterator<Item = C>,
) -> Node {
    Node::relation(rows).drop_columns(columns)
}

pub fn rename<K, V>(rows: Vec<Row>, mapping: impl IntoIterator<Item = (K, V)>) -> Node
where
    K: Into<String>,
    V: Into<String>,
{
    Node::relation(rows).rename(mapping)
}

pub fn select(rows: Vec<Row>, criteria: impl IntoIterator<Item = Criterion>) -> Node {
    Node::relation(rows).select(criteria)
}

/// Natural join; with no declared links only the auto-detected shared-name
/// columns pair up.
pub fn join(
    self_rows: Vec<Row>,
    other_rows: Vec<Row>,
    links: impl IntoIterator<Item = Link>,
) -> Node {
    Node::relation(self_rows).join(Node::relation(other_rows), links)
}

pub fn theta(
    self_rows: Vec<Row>,
    other_rows: Vec<Row>,
    links: impl IntoIterator<Item = Link>,
) -> Result<Node> {
    Node::relation(self_rows).theta(Node::relation(other_rows), links)
}

pub fn semijoin(
    self_rows: Vec<Row>,
    other_rows: Vec<Row>,
    links: impl IntoIterator<Item = Link>,
) -> Node {
    Node::relation(self_rows).semijoin(Node::relation(other_rows), links)
}

pub fn antijoin(
    self_rows: Vec<Row>,
    other_rows: Vec<Row>,
    links: impl IntoIterator<Item = Link>,
) -> Node {
    Node::relation(self_rows).antijoin(Node::relation(other_rows), links)
}

pub fn divide(self_rows: Vec<Row>, other_rows: Vec<Row>, scol: &str, ocol: &str) -> Result<Node> {
    Node::relation(self_rows).divide_on(Node::relation(other_rows), scol, ocol)
}

pub fn union(self_rows: Vec<Row>, other_rows: Vec<Row>) -> Node {
    Node::relation(self_rows).union(Node::relation(other_rows))
}

pub fn unique(rows: Vec<Row>) -> Node {
    Node::relation(rows).unique()
}
