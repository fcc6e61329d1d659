//! Lazy first-match search over an integer sequence.

use tracing::{debug, trace};

use crate::error::DomainError;
use crate::predicate::Predicate;
use crate::transform::{identity, Transform};

/// Transform the first element of `sequence` that passes every predicate.
///
/// Predicates run in the given order and stop at the first failure. Elements
/// after the match are never tested, and `transform` runs at most once.
/// An empty predicate chain matches the first element.
///
/// Returns `Ok(None)` when nothing matches and `Err` only when `transform` is
/// undefined at the matched value.
pub fn find_first_transformed(
    sequence: &[i32],
    predicates: &[Predicate],
    transform: &Transform,
) -> Result<Option<i32>, DomainError> {
    let matched = sequence.iter().copied().find(|&value| {
        let accepted = predicates.iter().all(|predicate| predicate.test(value));
        if !accepted {
            trace!(value = value, "rejected");
        }
        accepted
    });

    match matched {
        Some(value) => {
            debug!(value = value, transform = transform.name(), "first match");
            transform.apply(value).map(Some)
        }
        None => {
            debug!(len = sequence.len(), "no element matched");
            Ok(None)
        }
    }
}

/// A reusable predicate chain plus transform.
#[derive(Debug, Clone)]
pub struct FirstMatchTransformer {
    predicates: Vec<Predicate>,
    transform: Transform,
}

impl FirstMatchTransformer {
    pub fn builder() -> FirstMatchTransformerBuilder {
        FirstMatchTransformerBuilder::new()
    }

    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    pub fn apply(&self, sequence: &[i32]) -> Result<Option<i32>, DomainError> {
        find_first_transformed(sequence, &self.predicates, &self.transform)
    }
}

pub struct FirstMatchTransformerBuilder {
    predicates: Vec<Predicate>,
    transform: Transform,
}

impl FirstMatchTransformerBuilder {
    pub fn new() -> Self {
        FirstMatchTransformerBuilder {
            predicates: Vec::new(),
            transform: identity(),
        }
    }

    // Appended predicates keep their insertion order.
    pub fn filter(mut self, predicate: impl Into<Predicate>) -> Self {
        self.predicates.push(predicate.into());
        self
    }

    pub fn map(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    pub fn build(self) -> FirstMatchTransformer {
        FirstMatchTransformer {
            predicates: self.predicates,
            transform: self.transform,
        }
    }
}

impl Default for FirstMatchTransformerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::{greater_than, is_even};
    use crate::transform::multiply_by;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    fn one_to_ten() -> Vec<i32> {
        (1..=10).collect()
    }

    #[test]
    fn test_first_even_above_three_doubled() {
        let predicates = [Predicate::from(is_even), greater_than(3)];
        let result = find_first_transformed(&one_to_ten(), &predicates, &multiply_by(2));
        assert_eq!(result, Ok(Some(8)));
    }

    #[test]
    fn test_first_even_above_nine_doubled() {
        let predicates = [Predicate::from(is_even), greater_than(9)];
        let result = find_first_transformed(&one_to_ten(), &predicates, &multiply_by(2));
        assert_eq!(result, Ok(Some(20)));
    }

    #[test]
    fn test_no_match_is_absent() {
        let predicates = [greater_than(10)];
        let result = find_first_transformed(&one_to_ten(), &predicates, &multiply_by(2));
        assert_eq!(result, Ok(None));
    }

    #[test]
    fn test_empty_sequence_is_absent() {
        let predicates = [Predicate::always()];
        assert_eq!(find_first_transformed(&[], &predicates, &multiply_by(2)), Ok(None));
        assert_eq!(find_first_transformed(&[], &[], &identity()), Ok(None));
    }

    #[test]
    fn test_empty_chain_matches_first_element() {
        let result = find_first_transformed(&[7, 8, 9], &[], &multiply_by(3));
        assert_eq!(result, Ok(Some(21)));
    }

    #[test]
    fn test_overflow_on_matched_value_propagates() {
        let result = find_first_transformed(&[1, i32::MAX], &[greater_than(1)], &multiply_by(2));
        assert_eq!(result, Err(DomainError::overflow(i32::MAX, 2)));
    }

    #[test]
    fn test_overflow_after_match_is_never_reached() {
        let result = find_first_transformed(&[2, i32::MAX], &[], &multiply_by(2));
        assert_eq!(result, Ok(Some(4)));
    }

    #[test]
    fn test_stops_scanning_after_first_match() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let log = Arc::clone(&seen);
        let recording = Predicate::new("recording", move |value| {
            log.lock().unwrap().push(value);
            true
        });

        let predicates = [greater_than(3), recording];
        let result = find_first_transformed(&one_to_ten(), &predicates, &identity());

        assert_eq!(result, Ok(Some(4)));
        assert_eq!(*seen.lock().unwrap(), vec![4]);
    }

    #[test]
    fn test_transform_runs_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let counted = Transform::total("counted", move |value| {
            counter.fetch_add(1, Ordering::SeqCst);
            value
        });

        let result = find_first_transformed(&one_to_ten(), &[Predicate::from(is_even)], &counted);
        assert_eq!(result, Ok(Some(2)));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_builder_keeps_predicate_order() {
        let transformer = FirstMatchTransformer::builder()
            .filter(is_even)
            .filter(greater_than(3))
            .map(multiply_by(2))
            .build();

        let names: Vec<&str> = transformer.predicates().iter().map(Predicate::name).collect();
        assert_eq!(names, vec!["anonymous", "greater_than(3)"]);
        assert_eq!(transformer.transform().name(), "multiply_by(2)");
        assert_eq!(transformer.apply(&one_to_ten()), Ok(Some(8)));
    }

    #[test]
    fn test_builder_defaults_to_identity() {
        let transformer = FirstMatchTransformer::builder().filter(|n: i32| n > 5).build();
        assert_eq!(transformer.apply(&one_to_ten()), Ok(Some(6)));
    }

    #[test]
    fn test_transformer_is_shareable_across_threads() {
        let transformer = FirstMatchTransformer::builder()
            .filter(is_even)
            .map(multiply_by(2))
            .build();

        let handles: Vec<_> = (0..4)
            .map(|offset| {
                let transformer = transformer.clone();
                std::thread::spawn(move || transformer.apply(&[offset * 2 + 1, offset * 2 + 2]))
            })
            .collect();

        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(results, vec![Ok(Some(4)), Ok(Some(8)), Ok(Some(12)), Ok(Some(16))]);
    }
}
