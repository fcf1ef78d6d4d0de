//! Effect capabilities: the `wrap`/`chain` contract and its concrete instances.
//!
//! An effect capability describes how computations of some shape are
//! sequenced. Instead of being resolved implicitly from the type of a value,
//! the capability is an ordinary value passed to every operation that needs
//! it. Most capabilities are zero-sized markers, so passing them costs
//! nothing.
//!
//! # Provided Capabilities
//!
//! - [`OptionEffect`]: absence short-circuits the rest of the computation
//! - [`ResultEffect`]: the first `Err` short-circuits and is propagated as-is
//! - [`ListEffect`]: non-deterministic choice, every branch is continued
//! - [`IdentityEffect`]: no additional behavior
//! - [`AsyncEffect`]: deferred completion (requires the `async` feature)
//!
//! # Laws
//!
//! Every capability must satisfy, for all `a`, `f`, `g` and `m`:
//!
//! ```text
//! chain(wrap(a), f)          == f(a)                            // left identity
//! chain(m, wrap)             == m                               // right identity
//! chain(chain(m, f), g)      == chain(m, |x| chain(f(x), g))    // associativity
//! ```
//!
//! The folds in [`crate::fold`] rely on these laws and never check them.
//! The [`crate::laws`] module checks them for a given capability.
//!
//! # Examples
//!
//! ```rust
//! use effectfold::effect::{Effect, OptionEffect};
//!
//! let effect = OptionEffect;
//! let halved = effect.chain(Some(10), |n| if n % 2 == 0 { Some(n / 2) } else { None });
//! assert_eq!(halved, Some(5));
//!
//! let odd = effect.chain(Some(7), |n| if n % 2 == 0 { Some(n / 2) } else { None });
//! assert_eq!(odd, None);
//! ```

mod alternative;
mod branching;
#[cfg(feature = "async")]
mod deferred;
mod fallible;
mod identity;
mod optional;
mod perform_macro;

pub use alternative::Alternative;
pub use branching::ListEffect;
#[cfg(feature = "async")]
pub use deferred::AsyncEffect;
pub use fallible::ResultEffect;
pub use identity::IdentityEffect;
pub use optional::OptionEffect;

/// An explicit sequencing capability for computations of shape `Of<T>`.
///
/// The lifetime `'a` bounds everything a computation may hold on to. Strict
/// capabilities such as [`OptionEffect`] run continuations immediately and
/// accept any lifetime; [`AsyncEffect`] stores continuations inside the
/// returned future, so they must live for `'a`.
///
/// Continuations are `FnMut` because a branching capability calls them once
/// per branch.
///
/// # Examples
///
/// ```rust
/// use effectfold::effect::{Effect, ListEffect};
///
/// let effect = ListEffect;
/// let pairs = effect.chain(vec![1, 2], |x| vec![(x, 'a'), (x, 'b')]);
/// assert_eq!(pairs, vec![(1, 'a'), (1, 'b'), (2, 'a'), (2, 'b')]);
/// ```
pub trait Effect<'a>: Clone + 'a {
    /// The computation type produced by this capability.
    ///
    /// For example, [`OptionEffect`] uses `Option<T>`.
    type Of<T: 'a>;

    /// Lifts a plain value into the effect with no additional behavior.
    fn wrap<T: 'a>(&self, value: T) -> Self::Of<T>;

    /// Runs `computation`, then feeds its result to `continuation`.
    ///
    /// Whether and how often `continuation` runs is decided entirely by the
    /// capability: a short-circuiting capability may never call it, a
    /// branching one calls it once per result.
    fn chain<A: 'a, B: 'a, F>(&self, computation: Self::Of<A>, continuation: F) -> Self::Of<B>
    where
        F: FnMut(A) -> Self::Of<B> + 'a;

    /// Applies a pure function to the result of `computation`.
    ///
    /// Derived from `chain` and `wrap`: `chain(m, |a| wrap(function(a)))`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectfold::effect::{Effect, ResultEffect};
    ///
    /// let effect = ResultEffect::<String>::new();
    /// assert_eq!(effect.map(Ok(20), |n| n + 1), Ok(21));
    /// assert_eq!(effect.map(Err("boom".to_string()), |n: i32| n + 1), Err("boom".to_string()));
    /// ```
    fn map<A: 'a, B: 'a, F>(&self, computation: Self::Of<A>, mut function: F) -> Self::Of<B>
    where
        F: FnMut(A) -> B + 'a,
    {
        let effect = self.clone();
        self.chain::<A, B, _>(computation, move |value: A| effect.wrap(function(value)))
    }

    /// Sequences `step` over `items`, starting from `wrap(initial)`.
    ///
    /// The result equals the left-nested chain
    /// `chain(chain(wrap(initial), |a| step(a, x1)), |a| step(a, x2)) ...`.
    /// Elements are pulled from `items` one at a time, only once the
    /// previous step has produced an accumulator, and never after the
    /// computation has stopped.
    ///
    /// The provided implementation drives the chain with a loop and runs in
    /// constant stack for capabilities that call continuations inside
    /// `chain`. Capabilities that defer continuations should override it
    /// with a loop of their own.
    fn fold_steps<A, T, I, S>(&self, step: S, initial: A, items: I) -> Self::Of<A>
    where
        A: 'a,
        T: 'a,
        I: Iterator<Item = T> + 'a,
        S: Fn(A, &T) -> Self::Of<A> + 'a,
    {
        crate::fold::chain_steps(self, step, initial, items)
    }
}
