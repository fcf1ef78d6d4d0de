//! Alternative capabilities: failure, choice and guards.
//!
//! An [`Alternative`] capability can also produce a computation with no
//! result (`empty`) and combine two computations into one (`alt`). Together
//! with `chain`, `guard` prunes branches that do not satisfy a condition.
//!
//! # Laws
//!
//! ```text
//! alt(empty, x)          == x
//! alt(x, empty)          == x
//! alt(alt(x, y), z)      == alt(x, alt(y, z))
//! chain(empty, f)        == empty
//! ```

use super::{Effect, ListEffect, OptionEffect};

/// A capability with an identity for choice.
///
/// # Examples
///
/// ```rust
/// use effectfold::effect::{Alternative, Effect, ListEffect};
///
/// let effect = ListEffect;
/// let evens = effect.chain((1..=6).collect::<Vec<i32>>(), move |n| {
///     ListEffect.chain(ListEffect.guard(n % 2 == 0), move |()| vec![n])
/// });
/// assert_eq!(evens, vec![2, 4, 6]);
/// ```
pub trait Alternative<'a>: Effect<'a> {
    /// A computation with no result.
    fn empty<T: 'a>(&self) -> Self::Of<T>;

    /// Combines two computations, preferring or concatenating per capability.
    fn alt<T: 'a>(&self, first: Self::Of<T>, second: Self::Of<T>) -> Self::Of<T>;

    /// `wrap(())` when `condition` holds, `empty()` otherwise.
    fn guard(&self, condition: bool) -> Self::Of<()> {
        if condition {
            self.wrap(())
        } else {
            self.empty()
        }
    }
}

impl<'a> Alternative<'a> for OptionEffect {
    #[inline]
    fn empty<T: 'a>(&self) -> Option<T> {
        None
    }

    #[inline]
    fn alt<T: 'a>(&self, first: Option<T>, second: Option<T>) -> Option<T> {
        first.or(second)
    }
}

impl<'a> Alternative<'a> for ListEffect {
    #[inline]
    fn empty<T: 'a>(&self) -> Vec<T> {
        Vec::new()
    }

    fn alt<T: 'a>(&self, mut first: Vec<T>, second: Vec<T>) -> Vec<T> {
        first.extend(second);
        first
    }
}
