//! Error-or-value computations.

use effectfold::effect::ResultEffect;
use effectfold::fold::{monadic_filter, monadic_fold};

use crate::error::TourError;

/// Divides, reporting zero divisors and overflow as errors.
///
/// # Errors
///
/// [`TourError::DivideByZero`] when `divisor` is zero,
/// [`TourError::DivisionOverflow`] for `i32::MIN / -1`.
pub fn exception_divide(dividend: i32, divisor: i32) -> Result<i32, TourError> {
    if divisor == 0 {
        return Err(TourError::DivideByZero { dividend });
    }
    dividend
        .checked_div(divisor)
        .ok_or(TourError::DivisionOverflow { dividend, divisor })
}

/// Divides `dividend` by every divisor in turn, stopping at the first error.
///
/// # Errors
///
/// The first error reported by [`exception_divide`].
///
/// # Examples
///
/// ```
/// use effects_tour::error::TourError;
/// use effects_tour::exercises::failure::divide_all;
///
/// assert_eq!(divide_all(100, &[5, 2, 2]), Ok(5));
/// assert_eq!(divide_all(100, &[5, 0, 2]), Err(TourError::DivideByZero { dividend: 20 }));
/// ```
pub fn divide_all(dividend: i32, divisors: &[i32]) -> Result<i32, TourError> {
    monadic_fold(
        &ResultEffect::<TourError>::new(),
        |quotient: i32, divisor: &i32| exception_divide(quotient, *divisor),
        dividend,
        divisors.iter().copied(),
    )
}

/// Keeps the even values, rejecting the whole input at the first negative one.
///
/// # Errors
///
/// [`TourError::NegativeInput`] naming the first negative value.
pub fn even_non_negative(values: &[i32]) -> Result<Vec<i32>, TourError> {
    monadic_filter(
        &ResultEffect::<TourError>::new(),
        |value: &i32| {
            if *value < 0 {
                Err(TourError::NegativeInput { value: *value })
            } else {
                Ok(value % 2 == 0)
            }
        },
        values.iter().copied(),
    )
}
