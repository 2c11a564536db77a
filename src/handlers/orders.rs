use actix_web::error::JsonPayloadError;
use actix_web::{web, HttpRequest, HttpResponse};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::domain::order::{NewOrder, Order};
use crate::errors::AppError;
use crate::state::AppState;

use super::iso_timestamp;

// ── Request / response DTOs ──────────────────────────────────────────────────

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub user_id: i64,
    pub product_ids: Vec<i64>,
    /// Taken at face value and echoed unchanged; never checked against
    /// product prices. Absent means `null`.
    #[serde(default)]
    #[schema(value_type = f64)]
    pub total: Value,
}

impl From<CreateOrderRequest> for NewOrder {
    fn from(r: CreateOrderRequest) -> Self {
        Self {
            user_id: r.user_id,
            product_ids: r.product_ids,
            total: r.total,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    /// Random in `[0, 10000)`, not unique.
    pub id: u32,
    pub user_id: i64,
    pub product_ids: Vec<i64>,
    #[schema(value_type = f64)]
    pub total: Value,
    pub status: String,
    pub created_at: String,
}

impl From<Order> for OrderResponse {
    fn from(o: Order) -> Self {
        Self {
            id: o.id,
            user_id: o.user_id,
            product_ids: o.product_ids,
            total: o.total,
            status: o.status,
            created_at: iso_timestamp(o.created_at),
        }
    }
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// POST /api/orders
///
/// Simulates payment processing and answers with a fabricated, confirmed
/// order. Nothing is persisted.
#[utoipa::path(
    post,
    path = "/api/orders",
    request_body = CreateOrderRequest,
    responses(
        (status = 200, description = "Order confirmed", body = OrderResponse),
        (status = 400, description = "Body is not a valid order"),
        (status = 500, description = "Injected payment failure"),
    ),
    tag = "orders"
)]
pub async fn create_order(
    state: web::Data<AppState>,
    body: web::Json<CreateOrderRequest>,
) -> Result<HttpResponse, AppError> {
    let order = state
        .orders
        .place_order(body.into_inner().into())
        .await
        .map_err(|e| {
            log::error!("Error processing order: {}", e);
            AppError::ProcessOrder(e)
        })?;

    log::info!("Order {} confirmed for user {}", order.id, order.user_id);
    Ok(HttpResponse::Ok().json(OrderResponse::from(order)))
}

/// Answers undecodable JSON bodies with the same `{"error": ...}` shape as
/// every other failure.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    log::warn!("Rejected order body: {}", err);
    AppError::BadRequest(err.to_string()).into()
}
