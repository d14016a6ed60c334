#![forbid(unsafe_code)]
//! relalg-core: the data model shared by every operator.
//!
//! Rows are key-ordered maps from field name to a tagged [`Value`] variant,
//! compared with structural (deep, symmetric, order-independent) equality.
//! This crate is pure data; the lazy operator graph lives in
//! `relalg-operators`.

pub mod eq;
pub mod error;
pub mod row;
pub mod value;

pub mod prelude;

pub use error::{Error, Result};
pub use row::Row;
pub use value::Value;
