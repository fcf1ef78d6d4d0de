//! Branching computations.

use effectfold::effect::{Alternative, ListEffect};
use effectfold::fold::{monadic_filter, monadic_fold};
use effectfold::perform;

const FACES: std::ops::RangeInclusive<u32> = 1..=6;

/// Every ordered throw of two dice summing to `target`.
///
/// # Examples
///
/// ```
/// use effects_tour::exercises::choice::count_throws;
///
/// assert_eq!(count_throws(10), vec![[4, 6], [5, 5], [6, 4]]);
/// ```
pub fn count_throws(target: u32) -> Vec<[u32; 2]> {
    perform! {
        in ListEffect;
        first <= FACES.collect::<Vec<u32>>();
        second <= FACES.collect::<Vec<u32>>();
        _ <= ListEffect.guard(first + second == target);
        pure [first, second]
    }
}

/// Every total reachable by paying with any subset of `coins`, ascending and
/// without duplicates.
pub fn possible_sums(coins: &[u32]) -> Vec<u32> {
    let mut sums = monadic_fold(
        &ListEffect,
        |total: u32, coin: &u32| vec![total, total + coin],
        0,
        coins.iter().copied(),
    );
    sums.sort_unstable();
    sums.dedup();
    sums
}

/// All subsequences of `items`, keeping each element before dropping it.
pub fn subsequences<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    monadic_filter(&ListEffect, |_: &T| vec![true, false], items.to_vec())
}
