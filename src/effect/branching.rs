//! Multi-result capability (non-deterministic choice).

use super::Effect;

/// Capability for `Vec<T>` computations.
///
/// A `Vec` is a set of simultaneous results. `chain` continues every result
/// and concatenates the branches in order, so the first result's branches
/// come first. An empty `Vec` has no results and acts as failure.
///
/// # Examples
///
/// ```rust
/// use effectfold::effect::{Effect, ListEffect};
///
/// let effect = ListEffect;
/// let die = || (1..=6).collect::<Vec<i32>>();
/// let doubles = effect.chain(die(), move |x| {
///     ListEffect.chain(die(), move |y| if x == y { vec![(x, y)] } else { vec![] })
/// });
/// assert_eq!(doubles.len(), 6);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListEffect;

impl<'a> Effect<'a> for ListEffect {
    type Of<T: 'a> = Vec<T>;

    #[inline]
    fn wrap<T: 'a>(&self, value: T) -> Vec<T> {
        vec![value]
    }

    fn chain<A: 'a, B: 'a, F>(&self, computation: Vec<A>, continuation: F) -> Vec<B>
    where
        F: FnMut(A) -> Vec<B> + 'a,
    {
        computation.into_iter().flat_map(continuation).collect()
    }
}
