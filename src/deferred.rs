//! Units of work that are constructed but never scheduled.
//!
//! The crate only builds these values; nothing here spawns a thread or runs the
//! body, and dropping a task has no observable effect.

use std::fmt;

/// Object-style unit of work, the counterpart of a closure task.
pub trait Runnable: Send {
    fn run(&mut self);
}

type Body = Box<dyn FnOnce() + Send>;

pub struct DeferredTask {
    label: String,
    #[cfg_attr(not(test), allow(dead_code))]
    body: Body,
}

impl DeferredTask {
    pub fn from_closure<F>(label: impl Into<String>, body: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        DeferredTask {
            label: label.into(),
            body: Box::new(body),
        }
    }

    pub fn from_runnable<R>(label: impl Into<String>, mut runnable: R) -> Self
    where
        R: Runnable + 'static,
    {
        DeferredTask::from_closure(label, move || runnable.run())
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_started(&self) -> bool {
        false
    }

    #[cfg(test)]
    pub(crate) fn run_inline(self) {
        (self.body)()
    }
}

impl fmt::Debug for DeferredTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeferredTask")
            .field("label", &self.label)
            .field("started", &self.is_started())
            .finish_non_exhaustive()
    }
}
