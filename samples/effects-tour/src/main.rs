//! Effects Tour Entry Point
//!
//! Runs every exercise solution once and logs the results.

use std::time::Duration;

use effects_tour::config::TourConfig;
use effects_tour::exercises::{choice, deferred, failure, optional, simulation};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,effects_tour=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match TourConfig::from_env() {
        Ok(config) => {
            tracing::info!(?config, "Configuration loaded");
            config
        }
        Err(e) => {
            tracing::warn!("Failed to load configuration from environment: {e}");
            tracing::info!("Using default configuration");
            TourConfig::default()
        }
    };

    // Possibly-absent values
    tracing::info!(result = ?optional::third(&["a", "b", "c", "d"]), "third");
    tracing::info!(result = ?optional::safe_divide_all(100, &[5, 2, 2]), "safe_divide_all");
    tracing::info!(result = ?optional::safe_divide_all(100, &[5, 0, 2]), "safe_divide_all");

    // Branching
    let throws = choice::count_throws(config.dice_target);
    tracing::info!(dice_target = config.dice_target, count = throws.len(), ?throws, "count_throws");
    tracing::info!(result = ?choice::possible_sums(&[1, 2, 5]), "possible_sums");

    // Failure
    match failure::divide_all(120, &[2, 3, 0]) {
        Ok(quotient) => tracing::info!(quotient, "divide_all"),
        Err(e) => tracing::warn!("divide_all failed: {e}"),
    }
    match failure::even_non_negative(&[4, 7, 10]) {
        Ok(kept) => tracing::info!(?kept, "even_non_negative"),
        Err(e) => tracing::warn!("even_non_negative failed: {e}"),
    }

    // Scoped state
    let position = simulation::simulate(0.0, 0.0, config.simulation_millis);
    tracing::info!(millis = config.simulation_millis, position, "simulate");
    match simulation::estimate_pi(config.pi_samples, config.seed) {
        Ok(estimate) => tracing::info!(samples = config.pi_samples, estimate, "estimate_pi"),
        Err(e) => tracing::warn!("estimate_pi failed: {e}"),
    }
    match simulation::fibonacci(90) {
        Ok(value) => tracing::info!(value, "fibonacci(90)"),
        Err(e) => tracing::warn!("fibonacci failed: {e}"),
    }

    // Deferred
    let total = deferred::delayed_total(&[1, 2, 3], Duration::from_millis(50)).await;
    tracing::info!(total, "delayed_total");
}
