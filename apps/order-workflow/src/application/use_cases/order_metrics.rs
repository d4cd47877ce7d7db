//! Order Metrics Use Case
//!
//! Read-side projection of one order's timing picture.

use std::sync::Arc;
use std::time::Duration;

use crate::application::use_cases::{bounded, retryable};
use crate::domain::metrics::{OrderMetricsReport, order_report};
use crate::domain::order_tracking::{EventStore, OrderStore, WorkflowError};
use crate::domain::shared::{OrderId, TenantId};

/// Use case for computing per-order timing metrics.
pub struct OrderMetricsUseCase<S, L>
where
    S: OrderStore,
    L: EventStore,
{
    orders: Arc<S>,
    events: Arc<L>,
    op_timeout: Duration,
}

impl<S, L> OrderMetricsUseCase<S, L>
where
    S: OrderStore,
    L: EventStore,
{
    /// Create a new OrderMetricsUseCase.
    pub fn new(orders: Arc<S>, events: Arc<L>, op_timeout: Duration) -> Self {
        Self {
            orders,
            events,
            op_timeout,
        }
    }

    /// Execute the use case. Performs no writes.
    ///
    /// # Errors
    ///
    /// Returns `OrderNotFound` for an unknown order, or a retryable error on
    /// store unavailability.
    pub async fn execute(
        &self,
        tenant_id: &TenantId,
        order_id: &OrderId,
    ) -> Result<OrderMetricsReport, WorkflowError> {
        let order = bounded(self.op_timeout, self.orders.get(tenant_id, order_id))
            .await
            .map_err(retryable)?
            .ok_or_else(|| WorkflowError::OrderNotFound {
                tenant_id: tenant_id.to_string(),
                order_id: order_id.to_string(),
            })?;

        let events = bounded(self.op_timeout, self.events.query_ordered(order_id))
            .await
            .map_err(retryable)?;

        Ok(order_report(&order, &events))
    }
}
