use super::trail::Trail;
use crate::effect::Effect;

/// Keeps the elements of `items` for which an effectful `predicate` holds.
///
/// An empty sequence yields `effect.wrap(vec![])`. Otherwise `predicate` is
/// chained for the head, and the head is kept in front of the filtered tail
/// if and only if the verdict is `true`. Kept elements stay in their
/// original order.
///
/// Ordering and short-circuit guarantees are those of
/// [`monadic_fold`](super::monadic_fold): one predicate call per element and
/// branch, left to right, none after the capability has stopped.
///
/// `T: Clone` is required because a branching capability may keep the same
/// element in several branches.
///
/// # Examples
///
/// ```rust
/// use effectfold::effect::ListEffect;
/// use effectfold::fold::monadic_filter;
///
/// // Keeping and dropping every element enumerates all subsequences.
/// let subsequences = monadic_filter(&ListEffect, |_: &char| vec![true, false], vec!['a', 'b']);
/// assert_eq!(
///     subsequences,
///     vec![vec!['a', 'b'], vec!['a'], vec!['b'], vec![]]
/// );
/// ```
#[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip_all))]
pub fn monadic_filter<'a, M, T, I, P>(effect: &M, predicate: P, items: I) -> M::Of<Vec<T>>
where
    M: Effect<'a>,
    T: Clone + 'a,
    I: IntoIterator<Item = T>,
    I::IntoIter: 'a,
    P: Fn(&T) -> M::Of<bool> + 'a,
{
    let decide = effect.clone();
    let kept = effect.fold_steps::<Trail<T>, T, _, _>(
        move |kept: Trail<T>, item: &T| {
            let verdict = predicate(item);
            let candidate = item.clone();
            let keep_effect = decide.clone();
            decide.chain::<bool, Trail<T>, _>(verdict, move |keep: bool| {
                let next = if keep {
                    kept.push(candidate.clone())
                } else {
                    kept.clone()
                };
                keep_effect.wrap(next)
            })
        },
        Trail::new(),
        items.into_iter(),
    );
    effect.map::<Trail<T>, Vec<T>, _>(kept, |trail: Trail<T>| trail.to_vec())
}
