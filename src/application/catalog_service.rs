use std::sync::Arc;

use crate::domain::errors::DomainError;
use crate::domain::fault::FaultProfile;
use crate::domain::ports::{CatalogRepository, ChaosSource};
use crate::domain::product::Product;
use crate::domain::user::User;

use super::simulate_latency;

pub struct CatalogService<R, C> {
    repo: R,
    chaos: Arc<C>,
    users: FaultProfile,
    products: FaultProfile,
}

impl<R: CatalogRepository, C: ChaosSource> CatalogService<R, C> {
    pub fn new(repo: R, chaos: Arc<C>, users: FaultProfile, products: FaultProfile) -> Self {
        Self {
            repo,
            chaos,
            users,
            products,
        }
    }

    pub async fn list_users(&self) -> Result<Vec<User>, DomainError> {
        simulate_latency(self.chaos.as_ref(), self.users.max_delay).await;

        if self.chaos.roll(self.users.failure_rate) {
            return Err(DomainError::DatabaseTimeout);
        }

        Ok(self.repo.users())
    }

    /// All products, or only those whose category equals `category` ignoring
    /// case. An empty category counts as no filter.
    pub async fn list_products(&self, category: Option<&str>) -> Result<Vec<Product>, DomainError> {
        simulate_latency(self.chaos.as_ref(), self.products.max_delay).await;

        if self.chaos.roll(self.products.failure_rate) {
            return Err(DomainError::DatabaseTimeout);
        }

        let products = self.repo.products();
        Ok(match category.filter(|c| !c.is_empty()) {
            Some(category) => products
                .into_iter()
                .filter(|p| p.matches_category(category))
                .collect(),
            None => products,
        })
    }
}
