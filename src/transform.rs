//! Transforms as first-class values.
//!
//! Transforms return `Result` so that a mapping which is undefined for some
//! input reports a `DomainError` instead of panicking or wrapping.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::error::DomainError;

type ApplyFn = dyn Fn(i32) -> Result<i32, DomainError> + Send + Sync;

#[derive(Clone)]
pub struct Transform {
    name: Cow<'static, str>,
    apply: Arc<ApplyFn>,
}

impl Transform {
    pub fn new<F>(name: impl Into<Cow<'static, str>>, apply: F) -> Self
    where
        F: Fn(i32) -> Result<i32, DomainError> + Send + Sync + 'static,
    {
        Transform {
            name: name.into(),
            apply: Arc::new(apply),
        }
    }

    /// Lifts a mapping that is defined for every `i32`.
    pub fn total<F>(name: impl Into<Cow<'static, str>>, apply: F) -> Self
    where
        F: Fn(i32) -> i32 + Send + Sync + 'static,
    {
        Transform::new(name, move |value| Ok(apply(value)))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn apply(&self, value: i32) -> Result<i32, DomainError> {
        (self.apply)(value)
    }

    /// Runs `self`, then `next` on its output. The first error wins.
    pub fn and_then(self, next: Transform) -> Transform {
        let name = format!("{} >> {}", self.name, next.name);
        Transform::new(name, move |value| next.apply(self.apply(value)?))
    }
}

impl Default for Transform {
    fn default() -> Self {
        identity()
    }
}

impl fmt::Debug for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Transform").field(&self.name).finish()
    }
}

pub fn identity() -> Transform {
    Transform::total("identity", |value| value)
}

/// Returns a transform that captures `factor` by value.
pub fn multiply_by(factor: i32) -> Transform {
    Transform::new(format!("multiply_by({factor})"), move |value| {
        value
            .checked_mul(factor)
            .ok_or_else(|| DomainError::overflow(value, factor))
    })
}
