//! Region-scoped mutable state.
//!
//! Each function mutates cells that live only inside its region, so every
//! one of them is a plain function to its caller.

use effectfold::region::run_region;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::TourError;

const GRAVITY: f64 = -9.81;
const TIME_STEP: f64 = 0.001;
const LAST_FITTING_FIBONACCI: u32 = 93;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Particle {
    position: f64,
    velocity: f64,
}

impl Particle {
    fn advance(self) -> Self {
        Self {
            position: TIME_STEP.mul_add(self.velocity, self.position),
            velocity: TIME_STEP.mul_add(GRAVITY, self.velocity),
        }
    }
}

/// Position of a falling particle after `millis` one-millisecond Euler steps.
///
/// # Examples
///
/// ```
/// use effects_tour::exercises::simulation::simulate;
///
/// assert_eq!(simulate(5.0, 0.0, 0), 5.0);
/// assert!((simulate(0.0, 0.0, 1000) + 4.90).abs() < 0.01);
/// ```
pub fn simulate(position: f64, velocity: f64, millis: usize) -> f64 {
    run_region(|region| {
        let particle = region.new_ref(Particle { position, velocity });
        region.for_range(0..millis, |_| particle.modify(|current| current.advance()));
        particle.with(|particle| particle.position)
    })
}

/// Monte Carlo estimate of pi from `samples` points in the unit square.
///
/// # Errors
///
/// [`TourError::NoSamples`] when `samples` is zero.
#[allow(clippy::cast_precision_loss)]
pub fn estimate_pi(samples: usize, seed: u64) -> Result<f64, TourError> {
    if samples == 0 {
        return Err(TourError::NoSamples);
    }

    let inside = run_region(|region| {
        let rng = region.new_ref(StdRng::seed_from_u64(seed));
        let inside = region.new_ref(0_usize);
        region.for_range(0..samples, |_| {
            let (x, y) = rng.update(|rng| (rng.random::<f64>(), rng.random::<f64>()));
            if x.mul_add(x, y * y) <= 1.0 {
                inside.modify(|count| count + 1);
            }
        });
        inside.read()
    });

    Ok(4.0 * inside as f64 / samples as f64)
}

/// The `index`-th Fibonacci number, counting `fibonacci(0) == 0`.
///
/// # Errors
///
/// [`TourError::FibonacciOverflow`] for indices past 93.
pub fn fibonacci(index: u32) -> Result<u64, TourError> {
    if index > LAST_FITTING_FIBONACCI {
        return Err(TourError::FibonacciOverflow { index });
    }

    Ok(run_region(|region| {
        // Starts one step before zero: fibonacci(-1) == 1.
        let previous = region.new_ref(1_u64);
        let current = region.new_ref(0_u64);
        let remaining = region.new_ref(index);
        region.while_loop(
            || remaining.read() > 0,
            || {
                let next = previous.read() + current.read();
                previous.write(current.write(next));
                remaining.modify(|n| n - 1);
            },
        );
        current.read()
    }))
}
