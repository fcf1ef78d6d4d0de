//! Asynchronous folds.

use std::time::Duration;

use effectfold::effect::AsyncEffect;
use effectfold::fold::monadic_fold;

/// Sums `values`, waiting `delay` before each addition.
///
/// The additions run one after another, so the total takes
/// `values.len() * delay` to compute.
pub async fn delayed_total(values: &[u64], delay: Duration) -> u64 {
    monadic_fold(
        &AsyncEffect,
        move |total: u64, value: &u64| {
            let value = *value;
            AsyncEffect.from_future(async move {
                tokio::time::sleep(delay).await;
                tracing::debug!(total, value, "adding");
                total + value
            })
        },
        0,
        values.to_vec(),
    )
    .await
}
