//! Error types for the tour exercises.

use thiserror::Error;

/// Recoverable failures of the exercise solutions.
///
/// # Examples
///
/// ```
/// use effects_tour::error::TourError;
///
/// let error = TourError::DivideByZero { dividend: 10 };
/// assert_eq!(error.to_string(), "cannot divide 10 by zero");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TourError {
    /// A division had a zero divisor.
    #[error("cannot divide {dividend} by zero")]
    DivideByZero {
        /// The value that was being divided.
        dividend: i32,
    },

    /// A division overflowed (`i32::MIN / -1`).
    #[error("dividing {dividend} by {divisor} overflows")]
    DivisionOverflow {
        /// The value that was being divided.
        dividend: i32,
        /// The divisor.
        divisor: i32,
    },

    /// A negative value was rejected.
    #[error("negative input {value} is not allowed")]
    NegativeInput {
        /// The rejected value.
        value: i32,
    },

    /// The requested Fibonacci number does not fit in a `u64`.
    #[error("fibonacci({index}) does not fit in 64 bits")]
    FibonacciOverflow {
        /// The requested index.
        index: u32,
    },

    /// A Monte Carlo estimate was requested with no samples.
    #[error("at least one sample is required")]
    NoSamples,
}
