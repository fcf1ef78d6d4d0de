//! Possibly-absent values.

use effectfold::effect::OptionEffect;
use effectfold::fold::monadic_fold;
use effectfold::perform;

fn head<T: Clone>(items: &[T]) -> Option<T> {
    items.first().cloned()
}

fn tail<T>(items: &[T]) -> Option<&[T]> {
    items.split_first().map(|(_, rest)| rest)
}

/// Returns the third element, or `None` for slices shorter than three.
///
/// # Examples
///
/// ```
/// use effects_tour::exercises::optional::third;
///
/// assert_eq!(third(&[1, 2, 3, 4]), Some(3));
/// assert_eq!(third(&[1, 2]), None);
/// ```
pub fn third<T: Clone>(items: &[T]) -> Option<T> {
    perform! {
        in OptionEffect;
        rest <= tail(items);
        rest <= tail(rest);
        head(rest)
    }
}

/// Divides `dividend` by every divisor in turn.
///
/// Absent on the first zero divisor (or overflow); later divisors are
/// never inspected.
pub fn safe_divide_all(dividend: i32, divisors: &[i32]) -> Option<i32> {
    monadic_fold(
        &OptionEffect,
        |quotient: i32, divisor: &i32| quotient.checked_div(*divisor),
        dividend,
        divisors.iter().copied(),
    )
}
