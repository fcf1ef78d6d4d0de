//! Exercise solutions, grouped by capability.
//!
//! - [`optional`]: possibly-absent values and `perform!`
//! - [`choice`]: branching computations and guards
//! - [`failure`]: error-or-value folds and filters
//! - [`simulation`]: region-scoped mutable state
//! - [`deferred`]: asynchronous folds

pub mod choice;
pub mod deferred;
pub mod failure;
pub mod optional;
pub mod simulation;
