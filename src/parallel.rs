//! Parallel first match with rayon.
//!
//! `find_first` keeps the lowest-index answer, so the result always equals the
//! sequential finder. Workers may still test elements past the match.

use rayon::prelude::*;
use tracing::debug;

use crate::error::DomainError;
use crate::predicate::Predicate;
use crate::transform::Transform;

pub fn par_find_first_transformed(
    sequence: &[i32],
    predicates: &[Predicate],
    transform: &Transform,
) -> Result<Option<i32>, DomainError> {
    let matched = sequence
        .par_iter()
        .copied()
        .find_first(|&value| predicates.iter().all(|predicate| predicate.test(value)));

    debug!(matched = ?matched, len = sequence.len(), "parallel search finished");
    matched.map(|value| transform.apply(value)).transpose()
}
