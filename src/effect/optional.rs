//! Optional-value capability.

use super::Effect;

/// Capability for `Option<T>` computations.
///
/// `None` short-circuits: once a computation is absent, no continuation
/// chained after it is ever invoked.
///
/// # Examples
///
/// ```rust
/// use effectfold::effect::{Effect, OptionEffect};
///
/// let effect = OptionEffect;
/// let mut calls = 0;
/// let result: Option<i32> = effect.chain(None::<i32>, |n| {
///     calls += 1;
///     Some(n)
/// });
/// assert_eq!(result, None);
/// assert_eq!(calls, 0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OptionEffect;

impl<'a> Effect<'a> for OptionEffect {
    type Of<T: 'a> = Option<T>;

    #[inline]
    fn wrap<T: 'a>(&self, value: T) -> Option<T> {
        Some(value)
    }

    #[inline]
    fn chain<A: 'a, B: 'a, F>(&self, computation: Option<A>, continuation: F) -> Option<B>
    where
        F: FnMut(A) -> Option<B> + 'a,
    {
        computation.and_then(continuation)
    }
}
