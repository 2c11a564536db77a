use std::time::Duration;

use super::product::Product;
use super::user::User;

/// Read-only source of the catalog the API serves.
pub trait CatalogRepository: Send + Sync + 'static {
    fn users(&self) -> Vec<User>;
    fn products(&self) -> Vec<Product>;
}

/// Source of the randomness behind simulated latency and failures.
pub trait ChaosSource: Send + Sync + 'static {
    /// A delay drawn uniformly from `[0, max)`; zero when `max` is zero.
    fn delay(&self, max: Duration) -> Duration;
    /// `true` with the given probability.
    fn roll(&self, probability: f64) -> bool;
    /// A fabricated order id below `bound`.
    fn order_id(&self, bound: u32) -> u32;
}
