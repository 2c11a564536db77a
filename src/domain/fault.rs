use std::time::Duration;

/// Artificial latency and failure injected in front of one endpoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaultProfile {
    /// Delays are drawn uniformly from `[0, max_delay)`.
    pub max_delay: Duration,
    /// Probability in `[0, 1]` that a request is failed on purpose.
    pub failure_rate: f64,
}

impl FaultProfile {
    pub const fn new(max_delay: Duration, failure_rate: f64) -> Self {
        Self {
            max_delay,
            failure_rate,
        }
    }

    /// No latency, never fails.
    pub const fn none() -> Self {
        Self::new(Duration::ZERO, 0.0)
    }

    pub const fn users() -> Self {
        Self::new(Duration::from_millis(500), 0.05)
    }

    pub const fn products() -> Self {
        Self::new(Duration::from_millis(300), 0.0)
    }

    pub const fn orders() -> Self {
        Self::new(Duration::from_millis(1000), 0.1)
    }
}

impl std::fmt::Display for FaultProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "delay < {}ms, failure rate {}",
            self.max_delay.as_millis(),
            self.failure_rate
        )
    }
}
