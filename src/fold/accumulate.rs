use crate::effect::Effect;

/// Folds `items` into an accumulator with an effectful `step`.
///
/// An empty sequence yields `effect.wrap(initial)`. Otherwise the result is
/// `chain(step(initial, x), |a| monadic_fold(effect, step, a, rest))`.
///
/// `step` is called exactly once per element and branch, in sequence order,
/// and only after the computation for the previous element has produced an
/// accumulator. Elements are lent to `step` because a branching capability
/// may need the same element for several accumulators. Elements are pulled
/// from `items` only when a step needs them, so nothing past a
/// short-circuit is ever pulled.
///
/// # Arguments
///
/// * `effect` - The capability that sequences the steps
/// * `step` - Produces the next accumulator from the current one and an element
/// * `initial` - The starting accumulator
/// * `items` - A finite sequence, consumed left to right
///
/// # Examples
///
/// ```rust
/// use effectfold::effect::ListEffect;
/// use effectfold::fold::monadic_fold;
///
/// // Every sum reachable by taking or skipping each coin.
/// let sums = monadic_fold(&ListEffect, |total: u32, coin: &u32| vec![total, total + coin], 0, [1, 2]);
/// assert_eq!(sums, vec![0, 2, 1, 3]);
/// ```
#[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip_all))]
pub fn monadic_fold<'a, M, A, T, I, S>(effect: &M, step: S, initial: A, items: I) -> M::Of<A>
where
    M: Effect<'a>,
    A: 'a,
    T: 'a,
    I: IntoIterator<Item = T>,
    I::IntoIter: 'a,
    S: Fn(A, &T) -> M::Of<A> + 'a,
{
    effect.fold_steps::<A, T, _, _>(step, initial, items.into_iter())
}
