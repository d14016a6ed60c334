//! Operator evaluation contract.

use relalg_core::prelude::{Result, Row};

/// One relational operator, pending evaluation.
///
/// Invariants:
/// - `eval` pulls the operand nodes' materialized rows (resolving them
///   depth-first), applies the operator logic, and returns a fresh output
///   sequence; it must be deterministic given the same operands.
/// - `eval` takes `&self` so a failed evaluation leaves the operator (and its
///   node) intact and retryable; the node drops the operator only after a
///   successful evaluation.
pub trait Operator {
    /// Human-readable operator name (stable).
    fn name(&self) -> &'static str;

    /// Materialize this operator's output rows.
    fn eval(&self) -> Result<Vec<Row>>;
}
