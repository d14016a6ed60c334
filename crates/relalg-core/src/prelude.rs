//! Convenient re-exports for downstream crates.

pub use crate::eq::{row_eq, value_eq};
pub use crate::error::{Error, Result};
pub use crate::row::{rows_from_json, Row};
pub use crate::value::Value;
