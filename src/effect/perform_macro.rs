//! Do-notation over an explicit effect capability.
//!
//! `perform!` rewrites a sequence of binds into nested
//! [`Effect::chain`](crate::effect::Effect::chain) calls, so
//!
//! ```text
//! perform! { in effect; x <= m; y <= n; pure x + y }
//! ```
//!
//! becomes
//!
//! ```text
//! effect.chain(m, move |x| effect.chain(n, move |y| effect.wrap(x + y)))
//! ```
//!
//! # Syntax
//!
//! - `in effect;` - the capability, evaluated once and cloned into each continuation
//! - `pattern <= computation;` - bind the result of a computation
//! - `_ <= computation;` - run a computation and discard its result
//! - `let pattern = expression;` - pure binding
//! - `pure expression` - terminal, wraps a plain value
//! - `expression` - terminal, must already be a computation
//!
//! Continuations are `move` closures that a branching capability may call
//! several times. Values captured from the surrounding scope should
//! therefore be `Copy`, or cloned before use.
//!
//! # Examples
//!
//! ```rust
//! use effectfold::perform;
//! use effectfold::effect::{Alternative, ListEffect};
//!
//! let target = 10;
//! let throws: Vec<[i32; 2]> = perform! {
//!     in ListEffect;
//!     x <= (1..=6).collect::<Vec<i32>>();
//!     y <= (1..=6).collect::<Vec<i32>>();
//!     _ <= ListEffect.guard(x + y == target);
//!     pure [x, y]
//! };
//! assert_eq!(throws, vec![[4, 6], [5, 5], [6, 4]]);
//! ```

/// Do-notation for computations of an explicit effect capability.
///
/// Expands to nested [`Effect::chain`](crate::effect::Effect::chain) calls,
/// with `pure` expanding to [`Effect::wrap`](crate::effect::Effect::wrap).
///
/// # Syntax
///
/// - `in effect;` - the capability, must come first
/// - `pattern <= computation;` - bind an identifier or tuple pattern
/// - `_ <= computation;` - sequence and discard
/// - `let pattern = expression;` - pure binding
/// - `pure expression` or `computation` - the final statement
///
/// # Examples
///
/// ```rust
/// use effectfold::perform;
/// use effectfold::effect::OptionEffect;
///
/// let sum = perform! {
///     in OptionEffect;
///     x <= Some(2);
///     let y = x * 10;
///     pure x + y
/// };
/// assert_eq!(sum, Some(22));
/// ```
#[macro_export]
macro_rules! perform {
    // Entry point: evaluate the capability once.
    (in $effect:expr ; $($rest:tt)+) => {{
        let effect = ::core::clone::Clone::clone(&$effect);
        $crate::perform!(@bind effect ; $($rest)+)
    }};

    // Terminal: wrap a plain value.
    (@bind $effect:ident ; pure $result:expr) => {
        $crate::effect::Effect::wrap(&$effect, $result)
    };

    // Bind with identifier pattern.
    (@bind $effect:ident ; $pattern:ident <= $computation:expr ; $($rest:tt)+) => {{
        let continuation_effect = ::core::clone::Clone::clone(&$effect);
        $crate::effect::Effect::chain(&$effect, $computation, move |$pattern| {
            let $effect = ::core::clone::Clone::clone(&continuation_effect);
            $crate::perform!(@bind $effect ; $($rest)+)
        })
    }};

    // Bind with tuple pattern.
    (@bind $effect:ident ; ($($pattern:tt)*) <= $computation:expr ; $($rest:tt)+) => {{
        let continuation_effect = ::core::clone::Clone::clone(&$effect);
        $crate::effect::Effect::chain(&$effect, $computation, move |($($pattern)*)| {
            let $effect = ::core::clone::Clone::clone(&continuation_effect);
            $crate::perform!(@bind $effect ; $($rest)+)
        })
    }};

    // Bind with wildcard pattern.
    (@bind $effect:ident ; _ <= $computation:expr ; $($rest:tt)+) => {{
        let continuation_effect = ::core::clone::Clone::clone(&$effect);
        $crate::effect::Effect::chain(&$effect, $computation, move |_| {
            let $effect = ::core::clone::Clone::clone(&continuation_effect);
            $crate::perform!(@bind $effect ; $($rest)+)
        })
    }};

    // Pure let binding with identifier.
    (@bind $effect:ident ; let $pattern:ident = $expression:expr ; $($rest:tt)+) => {{
        let $pattern = $expression;
        $crate::perform!(@bind $effect ; $($rest)+)
    }};

    // Pure let binding with tuple pattern.
    (@bind $effect:ident ; let ($($pattern:tt)*) = $expression:expr ; $($rest:tt)+) => {{
        let ($($pattern)*) = $expression;
        $crate::perform!(@bind $effect ; $($rest)+)
    }};

    // Terminal: an existing computation.
    (@bind $effect:ident ; $result:expr) => {{
        let _ = &$effect;
        $result
    }};
}
