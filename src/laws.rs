//! Runtime checks for the effect-capability laws.
//!
//! [`monadic_fold`](crate::fold::monadic_fold) and
//! [`monadic_filter`](crate::fold::monadic_filter) are only correct for
//! capabilities that obey left identity, right identity and associativity.
//! These functions evaluate both sides of a law for concrete inputs so a
//! hand-rolled capability can be validated before results built on it are
//! trusted.
//!
//! Computations are compared through an `observe` function. For strict
//! capabilities it is usually [`std::convert::identity`]; for deferred ones
//! it runs the computation to completion.
//!
//! # Examples
//!
//! ```rust
//! use effectfold::effect::OptionEffect;
//! use effectfold::laws::{check_associativity, check_left_identity, check_right_identity};
//! use std::convert::identity;
//!
//! let half = |n: i32| (n % 2 == 0).then_some(n / 2);
//! let positive = |n: i32| (n > 0).then_some(n);
//!
//! assert!(check_left_identity(&OptionEffect, 8, half, identity).is_ok());
//! assert!(check_right_identity(&OptionEffect, || Some(3), identity).is_ok());
//! assert!(check_associativity(&OptionEffect, || Some(12), half, positive, identity).is_ok());
//! ```

use std::fmt;

use crate::effect::Effect;

/// The three laws every effect capability must satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Law {
    /// `chain(wrap(a), f) == f(a)`
    LeftIdentity,
    /// `chain(m, wrap) == m`
    RightIdentity,
    /// `chain(chain(m, f), g) == chain(m, |x| chain(f(x), g))`
    Associativity,
}

impl fmt::Display for Law {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::LeftIdentity => "left identity",
            Self::RightIdentity => "right identity",
            Self::Associativity => "associativity",
        };
        formatter.write_str(name)
    }
}

/// Both sides of a law observed different results.
///
/// # Examples
///
/// ```rust
/// use effectfold::laws::{Law, LawViolation};
///
/// let violation = LawViolation {
///     law: Law::LeftIdentity,
///     left: "(1, 1)".to_string(),
///     right: "(1, 0)".to_string(),
/// };
/// assert_eq!(
///     format!("{violation}"),
///     "left identity law violated: (1, 1) != (1, 0)"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LawViolation {
    /// The law that does not hold.
    pub law: Law,
    /// Debug rendering of the observed left-hand side.
    pub left: String,
    /// Debug rendering of the observed right-hand side.
    pub right: String,
}

impl LawViolation {
    fn compare<R>(law: Law, left: &R, right: &R) -> Result<(), Self>
    where
        R: PartialEq + fmt::Debug,
    {
        if left == right {
            Ok(())
        } else {
            Err(Self {
                law,
                left: format!("{left:?}"),
                right: format!("{right:?}"),
            })
        }
    }
}

impl fmt::Display for LawViolation {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "{} law violated: {} != {}",
            self.law, self.left, self.right
        )
    }
}

impl std::error::Error for LawViolation {}

/// Checks `chain(wrap(value), function) == function(value)`.
///
/// # Errors
///
/// Returns [`LawViolation`] when the observed sides differ.
pub fn check_left_identity<'a, M, A, B, F, O, R>(
    effect: &M,
    value: A,
    function: F,
    observe: O,
) -> Result<(), LawViolation>
where
    M: Effect<'a>,
    A: Clone + 'a,
    B: 'a,
    F: FnMut(A) -> M::Of<B> + Clone + 'a,
    O: Fn(M::Of<B>) -> R,
    R: PartialEq + fmt::Debug,
{
    let left = observe(effect.chain::<A, B, _>(effect.wrap(value.clone()), function.clone()));
    let mut function = function;
    let right = observe(function(value));
    LawViolation::compare(Law::LeftIdentity, &left, &right)
}

/// Checks `chain(m, wrap) == m`, with `m` produced twice by `computation`.
///
/// # Errors
///
/// Returns [`LawViolation`] when the observed sides differ.
pub fn check_right_identity<'a, M, A, C, O, R>(
    effect: &M,
    computation: C,
    observe: O,
) -> Result<(), LawViolation>
where
    M: Effect<'a>,
    A: 'a,
    C: Fn() -> M::Of<A>,
    O: Fn(M::Of<A>) -> R,
    R: PartialEq + fmt::Debug,
{
    let rewrap = effect.clone();
    let left = observe(effect.chain::<A, A, _>(computation(), move |value: A| rewrap.wrap(value)));
    let right = observe(computation());
    LawViolation::compare(Law::RightIdentity, &left, &right)
}

/// Checks `chain(chain(m, first), second) == chain(m, |x| chain(first(x), second))`.
///
/// # Errors
///
/// Returns [`LawViolation`] when the observed sides differ.
pub fn check_associativity<'a, M, A, B, C, K, F, G, O, R>(
    effect: &M,
    computation: K,
    first: F,
    second: G,
    observe: O,
) -> Result<(), LawViolation>
where
    M: Effect<'a>,
    A: 'a,
    B: 'a,
    C: 'a,
    K: Fn() -> M::Of<A>,
    F: FnMut(A) -> M::Of<B> + Clone + 'a,
    G: FnMut(B) -> M::Of<C> + Clone + 'a,
    O: Fn(M::Of<C>) -> R,
    R: PartialEq + fmt::Debug,
{
    let left = observe(effect.chain::<B, C, _>(
        effect.chain::<A, B, _>(computation(), first.clone()),
        second.clone(),
    ));

    let inner = effect.clone();
    let mut first = first;
    let right = observe(effect.chain::<A, C, _>(computation(), move |value: A| {
        inner.chain::<B, C, _>(first(value), second.clone())
    }));

    LawViolation::compare(Law::Associativity, &left, &right)
}
