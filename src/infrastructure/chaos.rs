use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domain::ports::ChaosSource;

/// `ChaosSource` backed by a shared `StdRng`.
pub struct RandomChaos {
    rng: Mutex<StdRng>,
}

impl RandomChaos {
    pub fn from_entropy() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Reproducible sequence of delays, failures and order ids.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }

    fn with_rng<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> T {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut rng)
    }
}

impl ChaosSource for RandomChaos {
    fn delay(&self, max: Duration) -> Duration {
        if max.is_zero() {
            return Duration::ZERO;
        }
        // whole nanoseconds keep the upper bound exclusive
        let bound = u64::try_from(max.as_nanos()).unwrap_or(u64::MAX);
        Duration::from_nanos(self.with_rng(|rng| rng.gen_range(0..bound)))
    }

    fn roll(&self, probability: f64) -> bool {
        if probability <= 0.0 {
            return false;
        }
        self.with_rng(|rng| rng.gen::<f64>() < probability)
    }

    fn order_id(&self, bound: u32) -> u32 {
        self.with_rng(|rng| rng.gen_range(0..bound))
    }
}
