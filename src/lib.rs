//! # effectfold
//!
//! Monadic fold and filter over an explicit effect capability.
//!
//! ## Overview
//!
//! A monadic fold threads an accumulator through an effectful step function,
//! one element at a time. What "effectful" means (absence, failure,
//! non-deterministic branching, deferred completion) is decided by an
//! effect capability passed explicitly to the fold:
//!
//! - **Effect capabilities**: [`effect::Effect`] with `wrap` and `chain`,
//!   implemented by [`effect::OptionEffect`], [`effect::ResultEffect`],
//!   [`effect::ListEffect`], [`effect::IdentityEffect`] and
//!   [`effect::AsyncEffect`]
//! - **Fold and filter**: [`fold::monadic_fold`], [`fold::monadic_filter`]
//! - **Law checks**: [`laws`] validates hand-rolled capabilities
//! - **Do-notation**: the [`perform!`] macro
//! - **Regions**: [`region::run_region`] for scoped mutable state
//!
//! ## Feature Flags
//!
//! - `async`: the [`effect::AsyncEffect`] capability
//! - `region`: scoped mutable regions
//! - `tracing`: trace-level spans around folds, filters and regions
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use effectfold::prelude::*;
//!
//! let divide = |total: i32, divisor: &i32| (*divisor != 0).then(|| total / divisor);
//! assert_eq!(monadic_fold(&OptionEffect, divide, 100, [5, 2, 2]), Some(5));
//! assert_eq!(monadic_fold(&OptionEffect, divide, 100, [2, 0, 4]), None);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use effectfold::prelude::*;
/// ```
pub mod prelude {
    pub use crate::effect::*;
    pub use crate::fold::*;

    #[cfg(feature = "region")]
    pub use crate::region::*;

    pub use crate::perform;
}

pub mod effect;
pub mod fold;
pub mod laws;

#[cfg(feature = "region")]
pub mod region;
