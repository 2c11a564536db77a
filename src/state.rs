use std::path::PathBuf;
use std::sync::Arc;

use crate::application::catalog_service::CatalogService;
use crate::application::order_service::OrderService;
use crate::config::AppConfig;
use crate::infrastructure::catalog::InMemoryCatalog;
use crate::infrastructure::chaos::RandomChaos;

pub type DemoCatalogService = CatalogService<InMemoryCatalog, RandomChaos>;
pub type DemoOrderService = OrderService<RandomChaos>;

/// Shared, read-only state handed to every handler.
pub struct AppState {
    pub catalog: DemoCatalogService,
    pub orders: DemoOrderService,
    pub client_build_dir: PathBuf,
}

impl AppState {
    pub fn from_config(config: &AppConfig) -> Self {
        let chaos = Arc::new(RandomChaos::new(config.chaos.seed));

        Self {
            catalog: CatalogService::new(
                InMemoryCatalog::new(),
                Arc::clone(&chaos),
                config.chaos.users,
                config.chaos.products,
            ),
            orders: OrderService::new(chaos, config.chaos.orders),
            client_build_dir: config.client_build_dir.clone(),
        }
    }
}
