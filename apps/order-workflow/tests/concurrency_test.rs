//! Concurrency Integration Tests
//!
//! Same-order races are serialised by the store's conditional write: of two
//! requests validated against the same stale status, exactly one commits.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use order_workflow::{
    AdvanceOrderCommand, AdvanceOrderUseCase, CustomerContact, EventStore, InMemoryEventLog,
    InMemoryOrderStore, NoOpEventPublisher, Order, OrderId, OrderLine, OrderStatus, OrderStore,
    PlaceOrderCommand, PlaceOrderUseCase, StoreError, TenantId, WorkflowError,
};
use rust_decimal_macros::dec;
use tokio::sync::Barrier;

/// Store wrapper that holds every `get` at a barrier, forcing two requests
/// to read the same stale status before either writes.
struct RacingOrderStore {
    inner: Arc<InMemoryOrderStore>,
    read_barrier: Arc<Barrier>,
}

#[async_trait]
impl OrderStore for RacingOrderStore {
    async fn get(
        &self,
        tenant_id: &TenantId,
        order_id: &OrderId,
    ) -> Result<Option<Order>, StoreError> {
        let result = self.inner.get(tenant_id, order_id).await;
        self.read_barrier.wait().await;
        result
    }

    async fn put(&self, order: &Order) -> Result<(), StoreError> {
        self.inner.put(order).await
    }

    async fn update_if_status(
        &self,
        order: &Order,
        expected_status: OrderStatus,
    ) -> Result<(), StoreError> {
        self.inner.update_if_status(order, expected_status).await
    }

    async fn query_by_tenant(&self, tenant_id: &TenantId) -> Result<Vec<Order>, StoreError> {
        self.inner.query_by_tenant(tenant_id).await
    }
}

fn place_command() -> PlaceOrderCommand {
    PlaceOrderCommand {
        tenant_id: TenantId::new("pardos-chicken"),
        customer: CustomerContact::new("Maria", "maria@example.com"),
        items: vec![OrderLine::new("Pollo a la brasa", 1, dec!(18.50))],
    }
}

fn cooking_command(order: &Order, actor: &str) -> AdvanceOrderCommand {
    AdvanceOrderCommand {
        tenant_id: order.tenant_id().clone(),
        order_id: order.order_id().clone(),
        status: "COOKING".to_string(),
        attended_by: actor.to_string(),
        role: "KITCHEN_STAFF".to_string(),
    }
}

#[tokio::test]
async fn concurrent_transitions_exactly_one_wins() {
    let orders = Arc::new(InMemoryOrderStore::new());
    let events = Arc::new(InMemoryEventLog::new());
    let publisher = Arc::new(NoOpEventPublisher);
    let timeout = Duration::from_secs(5);

    let place = PlaceOrderUseCase::new(
        Arc::clone(&orders),
        Arc::clone(&events),
        Arc::clone(&publisher),
        timeout,
    );
    let order = place.execute(place_command()).await.unwrap();

    // Both requests are forced to observe RECEIVED before either writes.
    let racing = Arc::new(RacingOrderStore {
        inner: Arc::clone(&orders),
        read_barrier: Arc::new(Barrier::new(2)),
    });
    let advance = Arc::new(AdvanceOrderUseCase::new(
        Arc::clone(&racing),
        Arc::clone(&events),
        Arc::clone(&publisher),
        timeout,
    ));

    let first = {
        let advance = Arc::clone(&advance);
        let cmd = cooking_command(&order, "chef1");
        tokio::spawn(async move { advance.execute(cmd).await })
    };
    let second = {
        let advance = Arc::clone(&advance);
        let cmd = cooking_command(&order, "chef2");
        tokio::spawn(async move { advance.execute(cmd).await })
    };

    let (first, second) = (first.await.unwrap(), second.await.unwrap());

    let successes = [&first, &second].iter().filter(|r| r.is_ok()).count();
    assert_eq!(successes, 1, "exactly one concurrent transition must win");

    let loser = if first.is_ok() { second } else { first };
    match loser.unwrap_err() {
        WorkflowError::Conflict { expected, .. } => {
            assert_eq!(expected, OrderStatus::Received);
        }
        WorkflowError::InvalidTransition { from, .. } => {
            // The loser re-read an already-updated status.
            assert_eq!(from, OrderStatus::Cooking);
        }
        other => panic!("Expected Conflict or InvalidTransition, got {other:?}"),
    }

    // The record moved exactly once and the log holds exactly two events:
    // creation plus the single accepted transition.
    let stored = orders
        .get(order.tenant_id(), order.order_id())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.status(), OrderStatus::Cooking);

    let log = events.query_ordered(order.order_id()).await.unwrap();
    assert_eq!(log.len(), 2);
    assert_eq!(log[1].status, OrderStatus::Cooking);
}

#[tokio::test]
async fn conflict_is_retryable_and_retry_converges() {
    let orders = Arc::new(InMemoryOrderStore::new());
    let events = Arc::new(InMemoryEventLog::new());
    let publisher = Arc::new(NoOpEventPublisher);
    let timeout = Duration::from_secs(1);

    let place = PlaceOrderUseCase::new(
        Arc::clone(&orders),
        Arc::clone(&events),
        Arc::clone(&publisher),
        timeout,
    );
    let advance = AdvanceOrderUseCase::new(
        Arc::clone(&orders),
        Arc::clone(&events),
        Arc::clone(&publisher),
        timeout,
    );

    let order = place.execute(place_command()).await.unwrap();

    // First attempt wins.
    advance.execute(cooking_command(&order, "chef1")).await.unwrap();

    // A client retrying its own successful request gets a clean client
    // error, not a duplicate transition.
    let err = advance
        .execute(cooking_command(&order, "chef1"))
        .await
        .unwrap_err();
    assert!(matches!(err, WorkflowError::InvalidTransition { .. }));
    assert!(!err.is_retryable());

    // Retrying with the *next* step converges.
    let receipt = advance
        .execute(AdvanceOrderCommand {
            tenant_id: order.tenant_id().clone(),
            order_id: order.order_id().clone(),
            status: "PACKING".to_string(),
            attended_by: "packer1".to_string(),
            role: "PACKER".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(receipt.status, OrderStatus::Packing);
}
