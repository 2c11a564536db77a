use std::sync::Arc;

use chrono::Utc;

use crate::domain::errors::DomainError;
use crate::domain::fault::FaultProfile;
use crate::domain::order::{NewOrder, Order, ORDER_CONFIRMED, ORDER_ID_BOUND};
use crate::domain::ports::ChaosSource;

use super::simulate_latency;

pub struct OrderService<C> {
    chaos: Arc<C>,
    profile: FaultProfile,
}

impl<C: ChaosSource> OrderService<C> {
    pub fn new(chaos: Arc<C>, profile: FaultProfile) -> Self {
        Self { chaos, profile }
    }

    /// Fabricates a confirmed order from the submitted one. The result is not
    /// stored anywhere and its id may repeat across calls.
    pub async fn place_order(&self, order: NewOrder) -> Result<Order, DomainError> {
        simulate_latency(self.chaos.as_ref(), self.profile.max_delay).await;

        if self.chaos.roll(self.profile.failure_rate) {
            return Err(DomainError::PaymentFailed);
        }

        Ok(Order {
            id: self.chaos.order_id(ORDER_ID_BOUND),
            user_id: order.user_id,
            product_ids: order.product_ids,
            total: order.total,
            status: ORDER_CONFIRMED.to_string(),
            created_at: Utc::now(),
        })
    }
}
