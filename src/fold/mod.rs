//! Monadic fold and filter over an explicit effect capability.
//!
//! Both operations walk a finite sequence left to right and sequence one
//! effectful call per element through [`Effect::chain`](crate::effect::Effect::chain).
//! Every policy beyond that ordering belongs to the capability:
//!
//! - a short-circuiting capability ([`OptionEffect`](crate::effect::OptionEffect),
//!   [`ResultEffect`](crate::effect::ResultEffect)) stops calling the step or
//!   predicate as soon as a computation is absent or failed;
//! - a branching capability ([`ListEffect`](crate::effect::ListEffect))
//!   continues every branch independently, first branch first;
//! - a deferred capability ([`AsyncEffect`](crate::effect::AsyncEffect))
//!   awaits each step before creating the next one.
//!
//! # Stack Safety
//!
//! Both operations go through [`Effect::fold_steps`](crate::effect::Effect::fold_steps).
//! Its provided loop builds the left-nested chain
//! `chain(chain(wrap(init), step x1), step x2) ...` one round at a time; for
//! strict capabilities each `chain` completes before the next round, so
//! arbitrarily long sequences run in constant stack.
//! [`AsyncEffect`](crate::effect::AsyncEffect) replaces the loop with a single
//! future that awaits one step at a time, which polls at constant depth.
//!
//! # Laziness
//!
//! Elements are pulled from the input only when a step is about to use them.
//! Once a short-circuiting capability has stopped, the rest of the input is
//! never pulled, so side effects of a lazy iterator stop with it.
//!
//! # Examples
//!
//! ```rust
//! use effectfold::effect::OptionEffect;
//! use effectfold::fold::{monadic_filter, monadic_fold};
//!
//! let divide = |total: i32, divisor: &i32| (*divisor != 0).then(|| total / divisor);
//!
//! assert_eq!(monadic_fold(&OptionEffect, divide, 100, vec![5, 2, 2]), Some(5));
//! assert_eq!(monadic_fold(&OptionEffect, divide, 100, vec![2, 0, 4]), None);
//!
//! let positives = monadic_filter(&OptionEffect, |n: &i32| Some(*n > 0), vec![3, -1, 4]);
//! assert_eq!(positives, Some(vec![3, 4]));
//! ```

mod accumulate;
mod drive;
mod filter;
mod trail;

pub use accumulate::monadic_fold;
pub use filter::monadic_filter;

pub(crate) use drive::chain_steps;
