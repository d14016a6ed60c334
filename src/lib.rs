#![forbid(unsafe_code)]
//! relalg: an embeddable, lazily evaluated relational-algebra engine over
//! in-memory rows.
//!
//! Queries are built by chaining operator constructors over a leaf relation
//! (or any other node); nothing runs until `rows()` is called, and each node
//! materializes at most once.
//!
//! ```
//! use relalg::prelude::*;
//! use relalg::row;
//!
//! let skills = Node::relation(vec![
//!     row! { "emp" => "A", "skill" => "x" },
//!     row! { "emp" => "A", "skill" => "y" },
//!     row! { "emp" => "B", "skill" => "x" },
//! ]);
//! let wanted = vec![row! { "skill" => "x" }, row! { "skill" => "y" }];
//!
//! let covered = skills.divide(wanted, "skill").unwrap();
//! assert_eq!(covered.rows().unwrap().to_vec(), vec![row! { "emp" => "A" }]);
//! ```

pub use relalg_core::{eq, error, row, value};
pub use relalg_core::{Error, Result, Row, Value};
pub use relalg_operators::{links, node, table};
pub use relalg_operators::{CmpFn, Criterion, Link, Node, Operator, PredFn, Rows};

pub mod prelude {
    pub use relalg_core::prelude::*;
    pub use relalg_operators::{table, Criterion, Link, Node, Rows};
}
