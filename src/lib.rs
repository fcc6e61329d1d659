//! # First Match
//!
//! Find the first element of an integer sequence that passes every predicate in
//! a chain, then transform it. The same computation is expressed in several
//! closure styles so they can be compared side by side.
//!
//! ## Patterns Covered
//!
//! 1. **First-class functions**
//!    - Predicates and transforms as owned, shareable values
//!    - Named functions used where closures are expected
//!    - Factories returning configured closures
//!
//! 2. **Lazy first match**
//!    - `find` + `all` for short-circuit evaluation
//!    - Fallible transforms with `Option::transpose`
//!    - Consuming builder around the finder
//!
//! 3. **Parallel first match**
//!    - rayon `find_first` keeping lowest-index semantics
//!
//! 4. **Deferred work**
//!    - Tasks that are built but never scheduled
//!
//! ## Running
//!
//! ```bash
//! cargo run --bin lambda_tour
//! cargo run --bin lambda_tour -- --json
//! RUST_LOG=first_match=trace cargo run --bin lambda_tour
//! ```
//!
//! ## Key Dependencies
//!
//! - `thiserror` - `DomainError` derive
//! - `rayon` - parallel finder
//! - `serde` - serializable style reports
//! - `tracing` - evaluation traces

pub mod deferred;
pub mod error;
pub mod first_match;
pub mod parallel;
pub mod predicate;
pub mod styles;
pub mod transform;

pub use deferred::{DeferredTask, Runnable};
pub use error::DomainError;
pub use first_match::{find_first_transformed, FirstMatchTransformer, FirstMatchTransformerBuilder};
pub use parallel::par_find_first_transformed;
pub use predicate::{greater_than, is_even, is_greater_than_3, Predicate};
pub use styles::{deferred_tasks, run_all, Style, StyleReport, NUMBERS};
pub use transform::{identity, multiply_by, Transform};
