//! "First even number greater than three, doubled" written seven ways.
//!
//! Styles 1 and 2 only build a [`DeferredTask`]; styles 3 to 7 compute the
//! value and are collected by [`run_all`].

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::deferred::{DeferredTask, Runnable};
use crate::error::DomainError;
use crate::first_match::{find_first_transformed, FirstMatchTransformer};
use crate::predicate::{greater_than, is_even, is_greater_than_3, Predicate};
use crate::transform::multiply_by;

pub const NUMBERS: [i32; 10] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Style {
    AnonymousTask,
    LambdaTask,
    Imperative,
    LambdaChain,
    FunctionReferences,
    PredicateValues,
    HigherOrder,
}

impl Style {
    pub const ALL: [Style; 7] = [
        Style::AnonymousTask,
        Style::LambdaTask,
        Style::Imperative,
        Style::LambdaChain,
        Style::FunctionReferences,
        Style::PredicateValues,
        Style::HigherOrder,
    ];

    pub fn number(self) -> u8 {
        match self {
            Style::AnonymousTask => 1,
            Style::LambdaTask => 2,
            Style::Imperative => 3,
            Style::LambdaChain => 4,
            Style::FunctionReferences => 5,
            Style::PredicateValues => 6,
            Style::HigherOrder => 7,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Style::AnonymousTask => "task from an object implementing Runnable",
            Style::LambdaTask => "task from a closure",
            Style::Imperative => "imperative loop",
            Style::LambdaChain => "iterator chain with inline closures",
            Style::FunctionReferences => "iterator chain with named functions",
            Style::PredicateValues => "iterator chain with a predicate value",
            Style::HigherOrder => "iterator chain with closure factories",
        }
    }

    /// Whether the style produces a value rather than a deferred task.
    pub fn computes(self) -> bool {
        !matches!(self, Style::AnonymousTask | Style::LambdaTask)
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "-{}) {}", self.number(), self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyleReport {
    pub style: Style,
    pub label: &'static str,
    pub result: Option<i32>,
}

type Computation = fn(&[i32]) -> Result<Option<i32>, DomainError>;

const COMPUTATIONS: [(Style, Computation); 5] = [
    (Style::Imperative, imperative),
    (Style::LambdaChain, lambda_chain),
    (Style::FunctionReferences, function_references),
    (Style::PredicateValues, predicate_values),
    (Style::HigherOrder, higher_order),
];

/// Runs styles 3 through 7 over `sequence`, in order.
pub fn run_all(sequence: &[i32]) -> Result<Vec<StyleReport>, DomainError> {
    COMPUTATIONS
        .iter()
        .map(|&(style, compute)| {
            let result = compute(sequence)?;
            debug!(style = %style, result = ?result, "style computed");
            Ok(StyleReport {
                style,
                label: style.label(),
                result,
            })
        })
        .collect()
}

fn double(n: i32) -> Result<i32, DomainError> {
    n.checked_mul(2).ok_or_else(|| DomainError::overflow(n, 2))
}

pub fn imperative(sequence: &[i32]) -> Result<Option<i32>, DomainError> {
    let mut results = None;
    for &n in sequence {
        if n > 3 && n % 2 == 0 {
            results = Some(double(n)?);
            break;
        }
    }
    Ok(results)
}

pub fn lambda_chain(sequence: &[i32]) -> Result<Option<i32>, DomainError> {
    sequence
        .iter()
        .filter(|&&e| e % 2 == 0)
        .filter(|&&e| e > 3)
        .map(|&e| e.checked_mul(2).ok_or_else(|| DomainError::overflow(e, 2)))
        .next()
        .transpose()
}

pub fn function_references(sequence: &[i32]) -> Result<Option<i32>, DomainError> {
    sequence
        .iter()
        .copied()
        .filter(|&e| is_even(e))
        .filter(|&e| is_greater_than_3(e))
        .map(double)
        .next()
        .transpose()
}

pub fn predicate_values(sequence: &[i32]) -> Result<Option<i32>, DomainError> {
    let is_greater_than_3 = Predicate::new("is_greater_than_3", |p| p > 3);
    let predicates = [Predicate::new("is_even", is_even), is_greater_than_3];
    find_first_transformed(sequence, &predicates, &multiply_by(2))
}

/// Uses `greater_than(4)`, so over `NUMBERS` the match is 6 and the result 12.
pub fn higher_order(sequence: &[i32]) -> Result<Option<i32>, DomainError> {
    FirstMatchTransformer::builder()
        .filter(is_even)
        .filter(greater_than(4))
        .map(multiply_by(2))
        .build()
        .apply(sequence)
}

struct PrintOne;

impl Runnable for PrintOne {
    fn run(&mut self) {
        println!("1");
    }
}

/// Builds the two tasks of styles 1 and 2. Neither is started.
pub fn deferred_tasks() -> [DeferredTask; 2] {
    [
        DeferredTask::from_runnable(Style::AnonymousTask.label(), PrintOne),
        DeferredTask::from_closure(Style::LambdaTask.label(), || println!("1")),
    ]
}
