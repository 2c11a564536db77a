pub mod catalog_service;
pub mod order_service;

use std::time::Duration;

use crate::domain::ports::ChaosSource;

/// Sleeps for a random interval below `max` without blocking the worker.
async fn simulate_latency<C: ChaosSource + ?Sized>(chaos: &C, max: Duration) {
    let delay = chaos.delay(max);
    if !delay.is_zero() {
        log::debug!("simulating {}ms of latency", delay.as_millis());
        tokio::time::sleep(delay).await;
    }
}
