//! Asynchronous capability.
//!
//! Computations are boxed, single-threaded futures. Nothing runs until the
//! outermost future is polled, and `chain` suspends only while waiting for
//! the previous computation, so a continuation never starts before the value
//! it depends on is available.
//!
//! Dropping a composed future cancels it: continuations that have not been
//! reached are never called. `futures::future::abortable` gives an explicit
//! handle for the same purpose.

use std::future::Future;

use futures::future::{self, FutureExt, LocalBoxFuture};

use super::Effect;

/// Capability for deferred computations.
///
/// # Examples
///
/// ```rust
/// use effectfold::effect::{AsyncEffect, Effect};
///
/// # futures::executor::block_on(async {
/// let effect = AsyncEffect;
/// let computation = effect.chain(effect.wrap(20), |n| AsyncEffect.wrap(n + 1));
/// assert_eq!(computation.await, 21);
/// # });
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AsyncEffect;

impl AsyncEffect {
    /// Lifts an arbitrary future into the capability.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectfold::effect::AsyncEffect;
    ///
    /// # futures::executor::block_on(async {
    /// let computation = AsyncEffect.from_future(async { 6 * 7 });
    /// assert_eq!(computation.await, 42);
    /// # });
    /// ```
    pub fn from_future<'a, T, F>(self, future: F) -> LocalBoxFuture<'a, T>
    where
        F: Future<Output = T> + 'a,
    {
        future.boxed_local()
    }
}

impl<'a> Effect<'a> for AsyncEffect {
    type Of<T: 'a> = LocalBoxFuture<'a, T>;

    fn wrap<T: 'a>(&self, value: T) -> LocalBoxFuture<'a, T> {
        future::ready(value).boxed_local()
    }

    fn chain<A: 'a, B: 'a, F>(
        &self,
        computation: LocalBoxFuture<'a, A>,
        mut continuation: F,
    ) -> LocalBoxFuture<'a, B>
    where
        F: FnMut(A) -> LocalBoxFuture<'a, B> + 'a,
    {
        async move {
            let value = computation.await;
            continuation(value).await
        }
        .boxed_local()
    }

    /// Awaits one step at a time inside a single future.
    ///
    /// Polling depth stays constant however long `items` is, and the next
    /// element is pulled only after the previous step has completed.
    fn fold_steps<A, T, I, S>(&self, step: S, initial: A, items: I) -> LocalBoxFuture<'a, A>
    where
        A: 'a,
        T: 'a,
        I: Iterator<Item = T> + 'a,
        S: Fn(A, &T) -> LocalBoxFuture<'a, A> + 'a,
    {
        async move {
            let mut accumulator = initial;
            for item in items {
                accumulator = step(accumulator, &item).await;
            }
            accumulator
        }
        .boxed_local()
    }
}
