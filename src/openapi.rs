use utoipa::OpenApi;

use crate::handlers::health::{self, HealthResponse};
use crate::handlers::orders::{self, CreateOrderRequest, OrderResponse};
use crate::handlers::products::{self, ProductResponse};
use crate::handlers::users::{self, UserResponse};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Demo Web App API",
        description = "Mock users, products and orders with simulated latency and failures."
    ),
    paths(
        health::health,
        users::list_users,
        products::list_products,
        orders::create_order,
    ),
    components(schemas(
        HealthResponse,
        UserResponse,
        ProductResponse,
        CreateOrderRequest,
        OrderResponse,
    )),
    tags(
        (name = "health", description = "Liveness"),
        (name = "users", description = "Sample users"),
        (name = "products", description = "Sample products"),
        (name = "orders", description = "Simulated checkout"),
    )
)]
pub struct ApiDoc;
