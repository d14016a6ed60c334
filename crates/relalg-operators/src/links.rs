//! Join and selection descriptors.
//!
//! Comparison capabilities are plain `Rc<dyn Fn>` values passed explicitly at
//! construction, so node parameters stay declarative and a test predicate can
//! carry state (e.g. an invocation counter).

use std::fmt;
use std::rc::Rc;

use relalg_core::eq::value_eq;
use relalg_core::prelude::{Result, Row, Value};

/// Comparison between a self-side and an other-side value.
pub type CmpFn = Rc<dyn Fn(&Value, &Value) -> Result<bool>>;

/// Test applied to a single column value.
pub type PredFn = Rc<dyn Fn(&Value) -> Result<bool>>;

/// Pairing of a self field and an other field for the join family and
/// division. Without an explicit compare fn the pairing means structural
/// equality.
#[derive(Clone)]
pub struct Link {
    pub self_field: String,
    pub other_field: String,
    pub compare: Option<CmpFn>,
}

impl Link {
    /// Equality link between two differently named fields.
    pub fn new(self_field: impl Into<String>, other_field: impl Into<String>) -> Self {
        Self {
            self_field: self_field.into(),
            other_field: other_field.into(),
            compare: None,
        }
    }

    /// Equality link between same-named fields.
    pub fn on(field: impl Into<String>) -> Self {
        let field = field.into();
        Self::new(field.clone(), field)
    }

    /// Link with an explicit comparison.
    pub fn with<F>(
        self_field: impl Into<String>,
        other_field: impl Into<String>,
        compare: F,
    ) -> Self
    where
        F: Fn(&Value, &Value) -> Result<bool> + 'static,
    {
        Self {
            self_field: self_field.into(),
            other_field: other_field.into(),
            compare: Some(Rc::new(compare)),
        }
    }

    pub(crate) fn check(&self, self_value: &Value, other_value: &Value) -> Result<bool> {
        match &self.compare {
            Some(f) => f(self_value, other_value),
            None => Ok(value_eq(self_value, other_value)),
        }
    }
}

impl fmt::Debug for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Link")
            .field("self_field", &self.self_field)
            .field("other_field", &self.other_field)
            .field("compare", &self.compare.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

/// Selection criterion: a column and a test against its value.
///
/// The tests are mutually exclusive by construction: an equality literal, a
/// predicate, or nothing (vacuously true).
#[derive(Clone)]
pub struct Criterion {
    pub column: String,
    test: Test,
}

#[derive(Clone)]
enum Test {
    Always,
    Equals(Value),
    Predicate(PredFn),
}

impl Criterion {
    /// Structural equality against a literal.
    pub fn equals(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            column: column.into(),
            test: Test::Equals(value.into()),
        }
    }

    /// Arbitrary test of the column value; an absent field tests as `Missing`.
    pub fn matches<F>(column: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&Value) -> Result<bool> + 'static,
    {
        Self {
            column: column.into(),
            test: Test::Predicate(Rc::new(predicate)),
        }
    }

    /// Vacuously true criterion.
    pub fn any(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            test: Test::Always,
        }
    }

    pub(crate) fn holds(&self, row: &Row) -> Result<bool> {
        let value = row.value(&self.column);
        match &self.test {
            Test::Always => Ok(true),
            Test::Equals(literal) => Ok(value_eq(value, literal)),
            Test::Predicate(f) => f(value),
        }
    }
}

impl fmt::Debug for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let test = match &self.test {
            Test::Always => "always".to_string(),
            Test::Equals(v) => format!("equals {}", v.kind()),
            Test::Predicate(_) => "<fn>".to_string(),
        };
        f.debug_struct("Criterion")
            .field("column", &self.column)
            .field("test", &test)
            .finish()
    }
}
