//! Advance Order Use Case
//!
//! Handles one status-change request: validate against the current status,
//! write conditionally, append the documenting event, notify downstream.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;

use crate::application::ports::{
    DetailType, EVENT_SOURCE, EventPublisherPort, OrderNotification,
};
use crate::application::use_cases::{bounded, retryable};
use crate::domain::order_tracking::{
    Attribution, EventStore, OrderStatus, OrderStore, OrderWorkflow, RoleMismatch, StoreError,
    WorkflowError,
};
use crate::domain::shared::{OrderId, TenantId, Timestamp};

/// Request to move an order to a new status.
#[derive(Debug, Clone)]
pub struct AdvanceOrderCommand {
    /// Tenant scope.
    pub tenant_id: TenantId,
    /// Order to advance.
    pub order_id: OrderId,
    /// Requested status, as the exact wire string (case-sensitive).
    pub status: String,
    /// Attending actor; may be empty.
    pub attended_by: String,
    /// Attending actor's role; may be empty.
    pub role: String,
}

/// Result of an accepted transition.
#[derive(Debug, Clone, Serialize)]
pub struct TransitionReceipt {
    /// Order identifier.
    pub order_id: String,
    /// Status entered.
    pub status: OrderStatus,
    /// Status left.
    pub previous_status: OrderStatus,
    /// Attending actor as supplied.
    pub attended_by: String,
    /// Role as supplied.
    pub role: String,
    /// When the transition was accepted.
    pub timestamp: Timestamp,
    /// Advisory when the supplied role was not the expected attending role.
    /// Never blocks the transition.
    pub role_warning: Option<RoleMismatch>,
}

/// Use case for advancing an order through the workflow.
pub struct AdvanceOrderUseCase<S, L, P>
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

impl<S, L, P> AdvanceOrderUseCase<S, L, P>
where
    S: OrderStore,
    L: EventStore,
    P: EventPublisherPort + 'static,
{
    /// Create a new AdvanceOrderUseCase.
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
    /// The whole read-validate-write sequence is optimistic: a concurrent
    /// writer that moves the status first surfaces as [`WorkflowError::Conflict`]
    /// and the caller retries from the top. Retries are idempotent (phase
    /// stamps are write-once; a repeated transition fails validation).
    ///
    /// # Errors
    ///
    /// `InvalidStatus`, `OrderNotFound` and `InvalidTransition` are final
    /// client errors; `Conflict` and `StoreUnavailable` are retryable.
    pub async fn execute(&self, cmd: AdvanceOrderCommand) -> Result<TransitionReceipt, WorkflowError> {
        let target: OrderStatus = cmd.status.parse()?;
        let now = Timestamp::now();

        let mut order = bounded(self.op_timeout, self.orders.get(&cmd.tenant_id, &cmd.order_id))
            .await
            .map_err(retryable)?
            .ok_or_else(|| WorkflowError::OrderNotFound {
                tenant_id: cmd.tenant_id.to_string(),
                order_id: cmd.order_id.to_string(),
            })?;

        let previous = order.status();
        order.advance(
            target,
            Attribution::new(cmd.attended_by.clone(), cmd.role.clone()),
            now,
        )?;

        // Conditional write: reject if the observed status changed between
        // read and write. Same-order serialisation lives entirely here.
        match bounded(self.op_timeout, self.orders.update_if_status(&order, previous)).await {
            Ok(()) => {}
            Err(StoreError::Conflict { .. }) => {
                tracing::warn!(
                    order_id = %cmd.order_id,
                    expected = %previous,
                    "conditional update lost to a concurrent transition"
                );
                return Err(WorkflowError::Conflict {
                    order_id: cmd.order_id.to_string(),
                    expected: previous,
                });
            }
            Err(StoreError::NotFound { .. }) => {
                return Err(WorkflowError::OrderNotFound {
                    tenant_id: cmd.tenant_id.to_string(),
                    order_id: cmd.order_id.to_string(),
                });
            }
            Err(other) => return Err(retryable(other)),
        }

        // The record update has committed; now document it.
        let events = order.drain_events();
        for event in &events {
            bounded(self.op_timeout, self.events.append(event.clone()))
                .await
                .map_err(retryable)?;
        }

        let role_warning = OrderWorkflow::role_advisory(target, &cmd.role);
        if let Some(warning) = &role_warning {
            tracing::warn!(order_id = %cmd.order_id, %warning, "unexpected attending role");
        }

        tracing::info!(
            tenant_id = %cmd.tenant_id,
            order_id = %cmd.order_id,
            from = %previous,
            to = %target,
            "order advanced"
        );

        if let Some(event) = events.last() {
            let notification = OrderNotification::updated(&order, event);
            let publisher = Arc::clone(&self.publisher);
            tokio::spawn(async move {
                if let Err(e) = publisher
                    .publish(EVENT_SOURCE, DetailType::OrderUpdated, notification)
                    .await
                {
                    tracing::error!(error = %e, "failed to publish order.updated");
                }
            });
        }

        Ok(TransitionReceipt {
            order_id: cmd.order_id.to_string(),
            status: target,
            previous_status: previous,
            attended_by: cmd.attended_by,
            role: cmd.role,
            timestamp: now,
            role_warning,
        })
    }
}
