//! Predicates as first-class values.
//!
//! A `Predicate` wraps any `Fn(i32) -> bool` behind an `Arc`, so closures,
//! named functions and factory results all travel through the same type.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

type TestFn = dyn Fn(i32) -> bool + Send + Sync;

#[derive(Clone)]
pub struct Predicate {
    name: Cow<'static, str>,
    test: Arc<TestFn>,
}

impl Predicate {
    pub fn new<F>(name: impl Into<Cow<'static, str>>, test: F) -> Self
    where
        F: Fn(i32) -> bool + Send + Sync + 'static,
    {
        Predicate {
            name: name.into(),
            test: Arc::new(test),
        }
    }

    /// Predicate that accepts every value.
    pub fn always() -> Self {
        Predicate::new("always", |_| true)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn test(&self, value: i32) -> bool {
        (self.test)(value)
    }

    /// Logical AND. `other` is only consulted when `self` passes.
    pub fn and(self, other: Predicate) -> Predicate {
        let name = format!("{} && {}", self.name, other.name);
        Predicate::new(name, move |value| self.test(value) && other.test(value))
    }

    pub fn negate(self) -> Predicate {
        let name = format!("!{}", self.name);
        Predicate::new(name, move |value| !self.test(value))
    }

    /// Folds a chain into one predicate; an empty chain accepts everything.
    pub fn all<I>(predicates: I) -> Predicate
    where
        I: IntoIterator<Item = Predicate>,
    {
        predicates
            .into_iter()
            .reduce(Predicate::and)
            .unwrap_or_else(Predicate::always)
    }
}

impl<F> From<F> for Predicate
where
    F: Fn(i32) -> bool + Send + Sync + 'static,
{
    fn from(test: F) -> Self {
        Predicate::new("anonymous", test)
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Predicate").field(&self.name).finish()
    }
}

pub fn is_even(number: i32) -> bool {
    number % 2 == 0
}

pub fn is_greater_than_3(number: i32) -> bool {
    number > 3
}

/// Returns a predicate that captures `threshold` by value.
pub fn greater_than(threshold: i32) -> Predicate {
    Predicate::new(format!("greater_than({threshold})"), move |number| number > threshold)
}
