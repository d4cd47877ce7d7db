//! Dashboard Use Case
//!
//! Read-side fleet snapshot for one tenant.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use crate::application::use_cases::{bounded, retryable};
use crate::domain::metrics::{DashboardSummary, dashboard_summary};
use crate::domain::order_tracking::{EventStore, Order, OrderStore, WorkflowError};
use crate::domain::shared::{OrderId, TenantId};

/// Use case for building the operational dashboard.
pub struct DashboardUseCase<S, L>
where
    S: OrderStore,
    L: EventStore,
{
    orders: Arc<S>,
    events: Arc<L>,
    op_timeout: Duration,
    recent_window: usize,
}

impl<S, L> DashboardUseCase<S, L>
where
    S: OrderStore,
    L: EventStore,
{
    /// Create a new DashboardUseCase.
    pub fn new(orders: Arc<S>, events: Arc<L>, op_timeout: Duration, recent_window: usize) -> Self {
        Self {
            orders,
            events,
            op_timeout,
            recent_window,
        }
    }

    /// Execute the use case. Performs no writes.
    ///
    /// Event histories are fetched only for the orders inside the recent
    /// window; counts and averages cover the whole tenant.
    ///
    /// # Errors
    ///
    /// Returns a retryable error on store unavailability.
    pub async fn execute(&self, tenant_id: &TenantId) -> Result<DashboardSummary, WorkflowError> {
        let orders = bounded(self.op_timeout, self.orders.query_by_tenant(tenant_id))
            .await
            .map_err(retryable)?;

        let mut recent: Vec<&Order> = orders.iter().collect();
        recent.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
        recent.truncate(self.recent_window);

        let mut histories: HashMap<OrderId, _> = HashMap::with_capacity(recent.len());
        for order in recent {
            let events = bounded(self.op_timeout, self.events.query_ordered(order.order_id()))
                .await
                .map_err(retryable)?;
            histories.insert(order.order_id().clone(), events);
        }

        Ok(dashboard_summary(&orders, &histories, self.recent_window))
    }
}
