//! In-memory store adapters for testing and development.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::order_tracking::aggregate::Order;
use crate::domain::order_tracking::events::OrderEvent;
use crate::domain::order_tracking::repository::{EventStore, OrderStore, StoreError};
use crate::domain::order_tracking::value_objects::OrderStatus;
use crate::domain::shared::{OrderId, TenantId};

fn key(tenant_id: &TenantId, order_id: &OrderId) -> (String, String) {
    (tenant_id.to_string(), order_id.to_string())
}

/// In-memory implementation of [`OrderStore`].
///
/// The conditional update holds the write lock across the status check and
/// the write, standing in for the backing store's compare-and-swap.
/// Suitable for testing and development. Not for production use.
#[derive(Debug, Default)]
pub struct InMemoryOrderStore {
    orders: RwLock<HashMap<(String, String), Order>>,
}

impl InMemoryOrderStore {
    /// Create a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            orders: RwLock::new(HashMap::new()),
        }
    }

    /// Number of stored orders.
    #[must_use]
    pub fn len(&self) -> usize {
        self.orders.read().map(|orders| orders.len()).unwrap_or(0)
    }

    /// Check if the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn get(
        &self,
        tenant_id: &TenantId,
        order_id: &OrderId,
    ) -> Result<Option<Order>, StoreError> {
        let orders = self.orders.read().map_err(poisoned)?;
        Ok(orders.get(&key(tenant_id, order_id)).cloned())
    }

    async fn put(&self, order: &Order) -> Result<(), StoreError> {
        let mut orders = self.orders.write().map_err(poisoned)?;
        orders.insert(key(order.tenant_id(), order.order_id()), order.clone());
        Ok(())
    }

    async fn update_if_status(
        &self,
        order: &Order,
        expected_status: OrderStatus,
    ) -> Result<(), StoreError> {
        let mut orders = self.orders.write().map_err(poisoned)?;

        let slot = orders
            .get_mut(&key(order.tenant_id(), order.order_id()))
            .ok_or_else(|| StoreError::NotFound {
                order_id: order.order_id().to_string(),
            })?;

        if slot.status() != expected_status {
            return Err(StoreError::Conflict {
                order_id: order.order_id().to_string(),
                expected: expected_status.to_string(),
            });
        }

        *slot = order.clone();
        Ok(())
    }

    async fn query_by_tenant(&self, tenant_id: &TenantId) -> Result<Vec<Order>, StoreError> {
        let orders = self.orders.read().map_err(poisoned)?;
        Ok(orders
            .values()
            .filter(|order| order.tenant_id() == tenant_id)
            .cloned()
            .collect())
    }
}

/// In-memory implementation of [`EventStore`].
///
/// Events are kept in append order per order id, which is also the read
/// order: timestamps are expected to increase, and a tie or regression
/// (clock skew) falls back to append order rather than being rejected.
#[derive(Debug, Default)]
pub struct InMemoryEventLog {
    events: RwLock<HashMap<String, Vec<OrderEvent>>>,
}

impl InMemoryEventLog {
    /// Create a new empty log.
    #[must_use]
    pub fn new() -> Self {
        Self {
            events: RwLock::new(HashMap::new()),
        }
    }

    /// Total number of events across all orders.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events
            .read()
            .map(|events| events.values().map(Vec::len).sum())
            .unwrap_or(0)
    }

    /// Check if the log is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl EventStore for InMemoryEventLog {
    async fn append(&self, event: OrderEvent) -> Result<(), StoreError> {
        let mut events = self.events.write().map_err(poisoned)?;
        let log = events.entry(event.order_id.to_string()).or_default();

        if let Some(last) = log.last() {
            if event.ts <= last.ts {
                tracing::warn!(
                    order_id = %event.order_id,
                    last_ts = %last.ts,
                    event_ts = %event.ts,
                    "out-of-order event timestamp; keeping append order"
                );
            }
        }

        log.push(event);
        Ok(())
    }

    async fn query_ordered(&self, order_id: &OrderId) -> Result<Vec<OrderEvent>, StoreError> {
        let events = self.events.read().map_err(poisoned)?;
        Ok(events.get(order_id.as_str()).cloned().unwrap_or_default())
    }
}

fn poisoned<T>(_: std::sync::PoisonError<T>) -> StoreError {
    StoreError::Unavailable {
        message: "store lock poisoned".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order_tracking::PlaceOrderCommand;
    use crate::domain::order_tracking::value_objects::{
        Attribution, CustomerContact, OrderLine,
    };
    use crate::domain::shared::Timestamp;
    use rust_decimal_macros::dec;

    fn make_order() -> Order {
        Order::place(
            PlaceOrderCommand {
                tenant_id: TenantId::new("pardos-chicken"),
                customer: CustomerContact::default(),
                items: vec![OrderLine::new("Pollo a la brasa", 1, dec!(18.50))],
            },
            Timestamp::now(),
        )
        .unwrap()
    }

    fn make_event(order: &Order, status: OrderStatus, ts: &str) -> OrderEvent {
        OrderEvent {
            tenant_id: order.tenant_id().clone(),
            order_id: order.order_id().clone(),
            ts: Timestamp::parse(ts).unwrap(),
            status,
            previous_status: None,
            by: String::new(),
            by_role: String::new(),
        }
    }

    #[tokio::test]
    async fn put_and_get() {
        let store = InMemoryOrderStore::new();
        let order = make_order();

        store.put(&order).await.unwrap();

        let found = store
            .get(order.tenant_id(), order.order_id())
            .await
            .unwrap();
        assert!(found.is_some());
        assert_eq!(found.unwrap().order_id(), order.order_id());
    }

    #[tokio::test]
    async fn get_unknown_is_none() {
        let store = InMemoryOrderStore::new();
        let found = store
            .get(&TenantId::new("t"), &OrderId::new("missing"))
            .await
            .unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn conditional_update_applies_when_status_matches() {
        let store = InMemoryOrderStore::new();
        let mut order = make_order();
        store.put(&order).await.unwrap();

        order
            .advance(OrderStatus::Cooking, Attribution::default(), Timestamp::now())
            .unwrap();
        store
            .update_if_status(&order, OrderStatus::Received)
            .await
            .unwrap();

        let stored = store
            .get(order.tenant_id(), order.order_id())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.status(), OrderStatus::Cooking);
    }

    #[tokio::test]
    async fn conditional_update_conflicts_when_status_moved() {
        let store = InMemoryOrderStore::new();
        let placed = make_order();
        store.put(&placed).await.unwrap();

        // Writer A wins.
        let mut a = placed.clone();
        a.advance(OrderStatus::Cooking, Attribution::default(), Timestamp::now())
            .unwrap();
        store
            .update_if_status(&a, OrderStatus::Received)
            .await
            .unwrap();

        // Writer B validated against the stale RECEIVED and must lose.
        let mut b = placed.clone();
        b.advance(OrderStatus::Cooking, Attribution::default(), Timestamp::now())
            .unwrap();
        let err = store
            .update_if_status(&b, OrderStatus::Received)
            .await
            .unwrap_err();

        assert!(matches!(err, StoreError::Conflict { .. }));
    }

    #[tokio::test]
    async fn conditional_update_unknown_order() {
        let store = InMemoryOrderStore::new();
        let order = make_order();

        let err = store
            .update_if_status(&order, OrderStatus::Received)
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
    }

    #[tokio::test]
    async fn query_by_tenant_filters() {
        let store = InMemoryOrderStore::new();
        let order = make_order();
        store.put(&order).await.unwrap();

        let mine = store.query_by_tenant(order.tenant_id()).await.unwrap();
        assert_eq!(mine.len(), 1);

        let other = store
            .query_by_tenant(&TenantId::new("someone-else"))
            .await
            .unwrap();
        assert!(other.is_empty());
    }

    #[tokio::test]
    async fn event_log_appends_and_reads_in_order() {
        let log = InMemoryEventLog::new();
        let order = make_order();

        log.append(make_event(&order, OrderStatus::Received, "2026-03-02T12:00:00Z"))
            .await
            .unwrap();
        log.append(make_event(&order, OrderStatus::Cooking, "2026-03-02T12:10:00Z"))
            .await
            .unwrap();

        let events = log.query_ordered(order.order_id()).await.unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].status, OrderStatus::Received);
        assert_eq!(events[1].status, OrderStatus::Cooking);
    }

    #[tokio::test]
    async fn event_log_tolerates_clock_regression() {
        let log = InMemoryEventLog::new();
        let order = make_order();

        log.append(make_event(&order, OrderStatus::Received, "2026-03-02T12:00:00Z"))
            .await
            .unwrap();
        // Clock skew: a later transition stamped earlier. Never rejected.
        log.append(make_event(&order, OrderStatus::Cooking, "2026-03-02T11:59:00Z"))
            .await
            .unwrap();

        let events = log.query_ordered(order.order_id()).await.unwrap();
        assert_eq!(events.len(), 2);
        // Append order is preserved.
        assert_eq!(events[0].status, OrderStatus::Received);
        assert_eq!(events[1].status, OrderStatus::Cooking);
    }

    #[tokio::test]
    async fn query_ordered_unknown_order_is_empty() {
        let log = InMemoryEventLog::new();
        let events = log.query_ordered(&OrderId::new("missing")).await.unwrap();
        assert!(events.is_empty());
    }

    #[test]
    fn len_and_is_empty() {
        let store = InMemoryOrderStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);

        let log = InMemoryEventLog::new();
        assert!(log.is_empty());
    }
}
