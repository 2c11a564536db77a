use actix_web::error::QueryPayloadError;
use actix_web::{web, HttpRequest, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::product::Product;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct ProductResponse {
    pub id: u32,
    pub name: String,
    pub price: f64,
    pub category: String,
    pub stock: u32,
}

impl From<Product> for ProductResponse {
    fn from(p: Product) -> Self {
        Self {
            id: p.id,
            name: p.name,
            price: p.price,
            category: p.category,
            stock: p.stock,
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProductFilter {
    /// Category to match, ignoring case. Empty or absent returns everything.
    pub category: Option<String>,
}

/// GET /api/products
#[utoipa::path(
    get,
    path = "/api/products",
    params(ProductFilter),
    responses(
        (status = 200, description = "Products, optionally filtered by category", body = [ProductResponse]),
        (status = 400, description = "Query string is not a valid filter"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "products"
)]
pub async fn list_products(
    state: web::Data<AppState>,
    query: web::Query<ProductFilter>,
) -> Result<HttpResponse, AppError> {
    let filter = query.into_inner();

    let products = state
        .catalog
        .list_products(filter.category.as_deref())
        .await
        .map_err(|e| {
            log::error!("Error fetching products: {}", e);
            AppError::FetchProducts(e)
        })?;

    let body: Vec<ProductResponse> = products.into_iter().map(ProductResponse::from).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// Query strings that do not decode, such as a repeated `category`, get the
/// same `{"error": ...}` body as every other failure.
pub fn query_error_handler(err: QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    log::warn!("Rejected query string {:?}: {}", req.query_string(), err);
    AppError::InvalidQuery(err.to_string()).into()
}
