//! Identity capability.

use super::Effect;

/// Capability whose computations are plain values.
///
/// `wrap` is the identity function and `chain` is function application.
/// A monadic fold under this capability is an ordinary left fold.
///
/// # Examples
///
/// ```rust
/// use effectfold::effect::{Effect, IdentityEffect};
///
/// assert_eq!(IdentityEffect.chain(20, |n| n + 1), 21);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IdentityEffect;

impl<'a> Effect<'a> for IdentityEffect {
    type Of<T: 'a> = T;

    #[inline]
    fn wrap<T: 'a>(&self, value: T) -> T {
        value
    }

    #[inline]
    fn chain<A: 'a, B: 'a, F>(&self, computation: A, mut continuation: F) -> B
    where
        F: FnMut(A) -> B + 'a,
    {
        continuation(computation)
    }
}
