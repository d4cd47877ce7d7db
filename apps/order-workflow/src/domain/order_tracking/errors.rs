//! Order tracking errors.

use std::fmt;

use super::value_objects::OrderStatus;

/// Errors that can occur while tracking an order through the workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkflowError {
    /// Requested status string is not a member of the known set.
    InvalidStatus {
        /// The rejected status string.
        value: String,
    },

    /// Requested status is not reachable from the current status.
    InvalidTransition {
        /// Current order status.
        from: OrderStatus,
        /// Requested status.
        to: OrderStatus,
        /// Full set of statuses reachable from `from`.
        allowed_next: Vec<OrderStatus>,
    },

    /// No order exists for the given tenant/order id.
    OrderNotFound {
        /// Tenant scope.
        tenant_id: String,
        /// Order ID.
        order_id: String,
    },

    /// Invalid order parameters.
    InvalidParameters {
        /// Field with invalid value.
        field: String,
        /// Error message.
        message: String,
    },

    /// Concurrent modification detected by the store's conditional write.
    Conflict {
        /// Order ID.
        order_id: String,
        /// Status the write was conditioned on.
        expected: OrderStatus,
    },

    /// Store or publisher is temporarily unavailable.
    StoreUnavailable {
        /// Failure description (no backend detail leaked to clients).
        message: String,
    },
}

impl WorkflowError {
    /// Whether the caller should retry the whole validate-and-write sequence.
    ///
    /// Client errors (bad status, bad transition, unknown order) are final;
    /// conflicts and infrastructure failures are transient.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Conflict { .. } | Self::StoreUnavailable { .. }
        )
    }
}

impl fmt::Display for WorkflowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidStatus { value } => {
                write!(f, "Invalid status: {value}")
            }
            Self::InvalidTransition {
                from,
                to,
                allowed_next,
            } => {
                let allowed: Vec<&str> = allowed_next.iter().map(OrderStatus::as_str).collect();
                write!(
                    f,
                    "Invalid transition from {from} to {to} (allowed next states: [{}])",
                    allowed.join(", ")
                )
            }
            Self::OrderNotFound {
                tenant_id,
                order_id,
            } => {
                write!(f, "Order not found: {tenant_id}/{order_id}")
            }
            Self::InvalidParameters { field, message } => {
                write!(f, "Invalid order parameter '{field}': {message}")
            }
            Self::Conflict { order_id, expected } => {
                write!(
                    f,
                    "Concurrent update on order {order_id} (expected status {expected})"
                )
            }
            Self::StoreUnavailable { message } => {
                write!(f, "Store temporarily unavailable: {message}")
            }
        }
    }
}

impl std::error::Error for WorkflowError {}
