//! Place Order Use Case
//!
//! Order creation is the degenerate transition `∅ → RECEIVED`.

use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::{
    DetailType, EVENT_SOURCE, EventPublisherPort, OrderNotification,
};
use crate::application::use_cases::{bounded, retryable};
use crate::domain::order_tracking::{
    EventStore, Order, OrderStore, PlaceOrderCommand, WorkflowError,
};
use crate::domain::shared::Timestamp;

/// Use case for placing a new order.
pub struct PlaceOrderUseCase<S, L, P>
where
    S: OrderStore,
    L: EventStore,
    P: EventPublisherPort,
{
    orders: Arc<S>,
    events: Arc<L>,
    publisher: Arc<P>,
    op_timeout: Duration,
}

impl<S, L, P> PlaceOrderUseCase<S, L, P>
where
    S: OrderStore,
    L: EventStore,
    P: EventPublisherPort + 'static,
{
    /// Create a new PlaceOrderUseCase.
    pub fn new(orders: Arc<S>, events: Arc<L>, publisher: Arc<P>, op_timeout: Duration) -> Self {
        Self {
            orders,
            events,
            publisher,
            op_timeout,
        }
    }

    /// Execute the use case.
    ///
    /// The creation event is appended only after the order record committed;
    /// the `order.created` notification is fire-and-forget.
    ///
    /// # Errors
    ///
    /// Returns error if validation fails or the store is unavailable.
    pub async fn execute(&self, cmd: PlaceOrderCommand) -> Result<Order, WorkflowError> {
        let mut order = Order::place(cmd, Timestamp::now())?;

        bounded(self.op_timeout, self.orders.put(&order))
            .await
            .map_err(retryable)?;

        for event in order.drain_events() {
            bounded(self.op_timeout, self.events.append(event))
                .await
                .map_err(retryable)?;
        }

        tracing::info!(
            tenant_id = %order.tenant_id(),
            order_id = %order.order_id(),
            "order placed"
        );

        let notification = OrderNotification::created(&order);
        let publisher = Arc::clone(&self.publisher);
        tokio::spawn(async move {
            if let Err(e) = publisher
                .publish(EVENT_SOURCE, DetailType::OrderCreated, notification)
                .await
            {
                tracing::error!(error = %e, "failed to publish order.created");
            }
        });

        Ok(order)
    }
}
