//! Domain events for order tracking.
//!
//! Every accepted status transition (order creation included) is captured as
//! one immutable event. The per-order event sequence, read in time order, is
//! the source of truth for the order's history.

use serde::{Deserialize, Serialize};

use crate::domain::order_tracking::value_objects::OrderStatus;
use crate::domain::shared::{OrderId, TenantId, Timestamp};

/// Record of one accepted status transition.
///
/// Append-only: never mutated or deleted once written. The sequence of
/// `status` values per order, read in `ts` order, forms a walk on the
/// transition graph starting at `RECEIVED`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderEvent {
    /// Tenant scope of the order.
    pub tenant_id: TenantId,
    /// Order this event belongs to.
    pub order_id: OrderId,
    /// When the transition was accepted.
    pub ts: Timestamp,
    /// Status entered by this event.
    pub status: OrderStatus,
    /// Status left. `None` only for the creation event.
    pub previous_status: Option<OrderStatus>,
    /// Attending actor; empty when unknown.
    pub by: String,
    /// Attending actor's role; empty when unknown.
    pub by_role: String,
}

impl OrderEvent {
    /// Whether this is the creation event (`∅ → RECEIVED`).
    #[must_use]
    pub const fn is_creation(&self) -> bool {
        self.previous_status.is_none()
    }
}
