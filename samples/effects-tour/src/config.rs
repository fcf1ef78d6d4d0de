//! Tour configuration.
//!
//! Configuration is read once at startup from environment variables. Every
//! variable is optional; a missing variable falls back to its default, an
//! unparsable one is reported as an error.
//!
//! | Variable | Default |
//! |---|---|
//! | `TOUR_DICE_TARGET` | `10` |
//! | `TOUR_PI_SAMPLES` | `100000` |
//! | `TOUR_SEED` | `42` |
//! | `TOUR_SIMULATION_MILLIS` | `1000` |

use std::fmt::Display;
use std::str::FromStr;

use thiserror::Error;

/// Configuration error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// An environment variable has an invalid value.
    #[error("Invalid value for {key}: {message}")]
    InvalidValue {
        /// The name of the environment variable.
        key: String,
        /// Description of why the value is invalid.
        message: String,
    },
}

/// Tour configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TourConfig {
    /// Target sum for the two-dice exercise.
    pub dice_target: u32,
    /// Number of samples for the Monte Carlo estimate of pi.
    pub pi_samples: usize,
    /// Seed for the random number generator.
    pub seed: u64,
    /// Length of the particle simulation in milliseconds.
    pub simulation_millis: usize,
}

impl Default for TourConfig {
    fn default() -> Self {
        Self {
            dice_target: 10,
            pi_samples: 100_000,
            seed: 42,
            simulation_millis: 1_000,
        }
    }
}

impl TourConfig {
    /// Loads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if a variable is present but cannot be parsed.
    ///
    /// # Examples
    ///
    /// ```
    /// use effects_tour::config::TourConfig;
    ///
    /// let config = TourConfig::from_lookup(|key| (key == "TOUR_SEED").then(|| "7".to_string())).unwrap();
    /// assert_eq!(config.seed, 7);
    /// assert_eq!(config.dice_target, 10);
    /// ```
    pub fn from_lookup<L>(lookup: L) -> Result<Self, ConfigError>
    where
        L: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Ok(Self {
            dice_target: parse_or(&lookup, "TOUR_DICE_TARGET", defaults.dice_target)?,
            pi_samples: parse_or(&lookup, "TOUR_PI_SAMPLES", defaults.pi_samples)?,
            seed: parse_or(&lookup, "TOUR_SEED", defaults.seed)?,
            simulation_millis: parse_or(&lookup, "TOUR_SIMULATION_MILLIS", defaults.simulation_millis)?,
        })
    }
}

fn parse_or<T, L>(lookup: &L, key: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
    L: Fn(&str) -> Option<String>,
{
    lookup(key).map_or(Ok(default), |raw| {
        raw.trim().parse().map_err(|error: T::Err| ConfigError::InvalidValue {
            key: key.to_string(),
            message: error.to_string(),
        })
    })
}
