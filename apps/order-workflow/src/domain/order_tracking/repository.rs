//! Order and Event Store Traits
//!
//! Persistence abstractions for the order record and the append-only event
//! log. Implemented by adapters in the infrastructure layer. Both are
//! single-round-trip operations against an external store; callers bound
//! them with a timeout and surface a retryable failure on unavailability.

use async_trait::async_trait;

use super::aggregate::Order;
use super::events::OrderEvent;
use super::value_objects::OrderStatus;
use crate::domain::shared::{OrderId, TenantId};

/// Store-level failures.
#[derive(Debug, Clone, thiserror::Error)]
pub enum StoreError {
    /// Conditional write lost: the persisted status no longer matches.
    #[error("conditional update failed for order {order_id}: status is no longer {expected}")]
    Conflict {
        /// Order the write targeted.
        order_id: String,
        /// Status the write was conditioned on.
        expected: String,
    },

    /// No record for the given key.
    #[error("no record for order {order_id}")]
    NotFound {
        /// Order the operation targeted.
        order_id: String,
    },

    /// Transient infrastructure failure; the operation may be retried.
    #[error("store unavailable: {message}")]
    Unavailable {
        /// Failure description.
        message: String,
    },
}

/// Repository trait for the mutable order record.
///
/// The record's current-status field is the single point of contention:
/// same-order races are serialised by [`OrderStore::update_if_status`], the
/// store's conditional-write primitive. There is no in-process lock manager.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Fetch an order by tenant and order id.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    async fn get(
        &self,
        tenant_id: &TenantId,
        order_id: &OrderId,
    ) -> Result<Option<Order>, StoreError>;

    /// Write a newly placed order.
    ///
    /// # Errors
    ///
    /// Returns error if persistence fails.
    async fn put(&self, order: &Order) -> Result<(), StoreError>;

    /// Write an updated order only if the persisted status still equals
    /// `expected_status`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Conflict`] when a concurrent writer moved the
    /// status first; the caller retries the whole validate-and-write sequence.
    async fn update_if_status(
        &self,
        order: &Order,
        expected_status: OrderStatus,
    ) -> Result<(), StoreError>;

    /// All orders for a tenant.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    async fn query_by_tenant(&self, tenant_id: &TenantId) -> Result<Vec<Order>, StoreError>;
}

/// Repository trait for the append-only event log.
#[async_trait]
pub trait EventStore: Send + Sync {
    /// Append one event to the order's log.
    ///
    /// Timestamps are expected to be strictly increasing per order; a tie or
    /// regression (clock skew) is tolerated by falling back to append order,
    /// never by rejecting the event.
    ///
    /// # Errors
    ///
    /// Returns error if persistence fails.
    async fn append(&self, event: OrderEvent) -> Result<(), StoreError>;

    /// Full ordered event sequence for an order, ascending by timestamp with
    /// ties broken by append order. Restartable, finite, no side effects.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    async fn query_ordered(&self, order_id: &OrderId) -> Result<Vec<OrderEvent>, StoreError>;
}
