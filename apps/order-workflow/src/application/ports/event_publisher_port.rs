//! Event Publisher Port (Driven Port)
//!
//! Interface for the fire-and-forget "order created/updated" notifications
//! consumed by downstream notifiers. Delivery is at-least-once and entirely
//! best-effort: a publish failure never rolls back or blocks a transition.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Mutex;

use crate::domain::order_tracking::{Order, OrderEvent};

/// Source tag attached to every published notification.
pub const EVENT_SOURCE: &str = "comanda.orders";

/// Kind of order notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DetailType {
    /// A new order was placed.
    OrderCreated,
    /// An order moved to a new status.
    OrderUpdated,
}

impl DetailType {
    /// The wire detail-type string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::OrderCreated => "order.created",
            Self::OrderUpdated => "order.updated",
        }
    }
}

impl fmt::Display for DetailType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Notification payload for downstream notifiers.
///
/// Every key is always present; fields are empty strings, never absent,
/// when unknown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderNotification {
    /// Tenant scope.
    pub tenant_id: String,
    /// Order identifier.
    pub order_id: String,
    /// Status entered.
    pub status: String,
    /// Status left; empty for order creation.
    pub previous_status: String,
    /// Role of the attending actor.
    pub by_role: String,
    /// Attending actor.
    pub attended_by: String,
    /// Customer contact email.
    pub customer_email: String,
    /// Customer display name.
    pub customer_name: String,
}

impl OrderNotification {
    /// Payload for an `order.created` notification.
    #[must_use]
    pub fn created(order: &Order) -> Self {
        Self {
            tenant_id: order.tenant_id().to_string(),
            order_id: order.order_id().to_string(),
            status: order.status().to_string(),
            previous_status: String::new(),
            by_role: "SYSTEM".to_string(),
            attended_by: String::new(),
            customer_email: order.customer().email.clone(),
            customer_name: order.customer().name.clone(),
        }
    }

    /// Payload for an `order.updated` notification documenting `event`.
    #[must_use]
    pub fn updated(order: &Order, event: &OrderEvent) -> Self {
        Self {
            tenant_id: order.tenant_id().to_string(),
            order_id: order.order_id().to_string(),
            status: event.status.to_string(),
            previous_status: event
                .previous_status
                .map(|status| status.to_string())
                .unwrap_or_default(),
            by_role: event.by_role.clone(),
            attended_by: event.by.clone(),
            customer_email: order.customer().email.clone(),
            customer_name: order.customer().name.clone(),
        }
    }
}

/// Event publishing error.
#[derive(Debug, Clone, thiserror::Error)]
pub enum EventPublishError {
    /// Connection error.
    #[error("Event publish connection error: {message}")]
    ConnectionError {
        /// Failure description.
        message: String,
    },

    /// Serialization error.
    #[error("Event serialization error: {message}")]
    SerializationError {
        /// Failure description.
        message: String,
    },

    /// Publishing failed.
    #[error("Event publish failed: {message}")]
    PublishFailed {
        /// Failure description.
        message: String,
    },
}

/// Port for publishing order notifications.
#[async_trait]
pub trait EventPublisherPort: Send + Sync {
    /// Publish one notification.
    async fn publish(
        &self,
        source: &str,
        detail_type: DetailType,
        detail: OrderNotification,
    ) -> Result<(), EventPublishError>;
}

/// No-op event publisher for testing.
#[derive(Debug, Clone, Default)]
pub struct NoOpEventPublisher;

#[async_trait]
impl EventPublisherPort for NoOpEventPublisher {
    async fn publish(
        &self,
        _source: &str,
        _detail_type: DetailType,
        _detail: OrderNotification,
    ) -> Result<(), EventPublishError> {
        Ok(())
    }
}

/// A published notification captured by [`RecordingEventPublisher`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishedNotification {
    /// Source tag.
    pub source: String,
    /// Detail type.
    pub detail_type: DetailType,
    /// Payload.
    pub detail: OrderNotification,
}

/// Publisher that records every notification, for test assertions.
#[derive(Debug, Default)]
pub struct RecordingEventPublisher {
    published: Mutex<Vec<PublishedNotification>>,
}

impl RecordingEventPublisher {
    /// Create an empty recording publisher.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything published so far.
    #[must_use]
    pub fn published(&self) -> Vec<PublishedNotification> {
        self.published.lock().map(|p| p.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl EventPublisherPort for RecordingEventPublisher {
    async fn publish(
        &self,
        source: &str,
        detail_type: DetailType,
        detail: OrderNotification,
    ) -> Result<(), EventPublishError> {
        if let Ok(mut published) = self.published.lock() {
            published.push(PublishedNotification {
                source: source.to_string(),
                detail_type,
                detail,
            });
        }
        Ok(())
    }
}
