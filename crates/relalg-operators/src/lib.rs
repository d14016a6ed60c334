#![forbid(unsafe_code)]
//! relalg-operators: the lazy, memoized operator graph.
//!
//! A [`Node`] is a cheap handle onto a pending operator or a materialized row
//! sequence. Builder methods chain new pending nodes over their receivers and
//! never evaluate; the first `rows()` call materializes a node depth-first,
//! caches the result, and drops the pending payload so long chains do not
//! retain their intermediate graphs.

pub mod links;
pub mod node;
pub mod traits;

pub mod project;
pub mod rename;
pub mod select;

pub mod division;
pub mod join;
pub mod semijoin;
pub mod theta;
pub mod union;
pub mod unique;

pub mod table;

pub use links::{CmpFn, Criterion, Link, PredFn};
pub use node::{Node, Rows};
pub use traits::Operator;
