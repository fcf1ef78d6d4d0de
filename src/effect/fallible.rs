//! Error-or-value capability.

use std::fmt;
use std::marker::PhantomData;

use super::Effect;

/// Capability for `Result<T, E>` computations.
///
/// The first `Err` short-circuits the rest of the computation and is
/// returned unchanged. The capability never inspects or rewrites errors.
///
/// # Examples
///
/// ```rust
/// use effectfold::effect::{Effect, ResultEffect};
///
/// let effect = ResultEffect::<String>::new();
/// let parsed = effect.chain(Ok("42"), |text| {
///     text.parse::<i32>().map_err(|error| error.to_string())
/// });
/// assert_eq!(parsed, Ok(42));
/// ```
pub struct ResultEffect<E> {
    error: PhantomData<fn() -> E>,
}

impl<E> ResultEffect<E> {
    /// Creates the capability for error type `E`.
    #[must_use]
    pub const fn new() -> Self {
        Self { error: PhantomData }
    }
}

impl<E> Clone for ResultEffect<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for ResultEffect<E> {}

impl<E> Default for ResultEffect<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for ResultEffect<E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "ResultEffect<{}>", std::any::type_name::<E>())
    }
}

impl<'a, E: 'a> Effect<'a> for ResultEffect<E> {
    type Of<T: 'a> = Result<T, E>;

    #[inline]
    fn wrap<T: 'a>(&self, value: T) -> Result<T, E> {
        Ok(value)
    }

    #[inline]
    fn chain<A: 'a, B: 'a, F>(&self, computation: Result<A, E>, continuation: F) -> Result<B, E>
    where
        F: FnMut(A) -> Result<B, E> + 'a,
    {
        computation.and_then(continuation)
    }
}
