//! Order Aggregate Root
//!
//! The Order aggregate is the mutable "current view" of one food order as it
//! moves through the preparation workflow. The workflow service validates
//! every transition; phase start stamps are write-once.

use serde::{Deserialize, Serialize};

use crate::domain::order_tracking::errors::WorkflowError;
use crate::domain::order_tracking::events::OrderEvent;
use crate::domain::order_tracking::services::OrderWorkflow;
use crate::domain::order_tracking::value_objects::{
    Attribution, CustomerContact, OrderLine, OrderStatus,
};
use crate::domain::shared::{OrderId, TenantId, Timestamp};

/// Start-of-phase record: when the phase began and who attended it.
///
/// Write-once: an order cannot re-enter a phase, so a set stamp is never
/// overwritten by a later transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseStamp {
    /// When the order entered the phase.
    pub started_at: Timestamp,
    /// Attending actor; empty when unknown.
    pub by: String,
}

/// Command to place a new order.
#[derive(Debug, Clone)]
pub struct PlaceOrderCommand {
    /// Tenant the order belongs to.
    pub tenant_id: TenantId,
    /// Ordering customer's contact identity.
    pub customer: CustomerContact,
    /// Ordered items; must be non-empty.
    pub items: Vec<OrderLine>,
}

impl PlaceOrderCommand {
    /// Validate the command parameters.
    ///
    /// # Errors
    ///
    /// Returns error if required parameters are missing or invalid.
    pub fn validate(&self) -> Result<(), WorkflowError> {
        if self.tenant_id.is_empty() {
            return Err(WorkflowError::InvalidParameters {
                field: "tenant_id".to_string(),
                message: "tenant_id is required".to_string(),
            });
        }

        if self.items.is_empty() {
            return Err(WorkflowError::InvalidParameters {
                field: "items".to_string(),
                message: "items is required".to_string(),
            });
        }

        if let Some(line) = self.items.iter().find(|line| line.quantity == 0) {
            return Err(WorkflowError::InvalidParameters {
                field: "items".to_string(),
                message: format!("zero quantity for item '{}'", line.name),
            });
        }

        Ok(())
    }
}

/// Parameters for reconstituting an Order from storage.
///
/// Used by stores to rebuild aggregates from persisted state.
/// No domain events are generated during reconstitution.
#[derive(Debug, Clone)]
pub struct ReconstitutedOrderParams {
    /// Tenant scope.
    pub tenant_id: TenantId,
    /// Order identifier.
    pub order_id: OrderId,
    /// Current order status.
    pub status: OrderStatus,
    /// Customer contact identity.
    pub customer: CustomerContact,
    /// Ordered items.
    pub items: Vec<OrderLine>,
    /// Creation timestamp.
    pub created_at: Timestamp,
    /// Last update timestamp.
    pub updated_at: Timestamp,
    /// Cooking phase stamp, if entered.
    pub cooking: Option<PhaseStamp>,
    /// Packing phase stamp, if entered.
    pub packing: Option<PhaseStamp>,
    /// Delivering phase stamp, if entered.
    pub delivering: Option<PhaseStamp>,
    /// Delivered phase stamp, if entered.
    pub delivered: Option<PhaseStamp>,
}

/// Order Aggregate Root.
///
/// `(tenant_id, order_id)` identify the order and are immutable after
/// creation, as is `created_at`. `status` always equals the status of the
/// most recently accepted transition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    tenant_id: TenantId,
    order_id: OrderId,
    status: OrderStatus,
    customer: CustomerContact,
    items: Vec<OrderLine>,
    created_at: Timestamp,
    updated_at: Timestamp,
    cooking: Option<PhaseStamp>,
    packing: Option<PhaseStamp>,
    delivering: Option<PhaseStamp>,
    delivered: Option<PhaseStamp>,
    #[serde(skip)]
    events: Vec<OrderEvent>,
}

impl Order {
    /// Place a new order: the degenerate transition `∅ → RECEIVED`.
    ///
    /// Allocates a fresh order id and generates the creation event.
    ///
    /// # Errors
    ///
    /// Returns error if command validation fails.
    pub fn place(cmd: PlaceOrderCommand, now: Timestamp) -> Result<Self, WorkflowError> {
        cmd.validate()?;

        let order_id = OrderId::generate();

        let mut order = Self {
            tenant_id: cmd.tenant_id.clone(),
            order_id: order_id.clone(),
            status: OrderStatus::Received,
            customer: cmd.customer,
            items: cmd.items,
            created_at: now,
            updated_at: now,
            cooking: None,
            packing: None,
            delivering: None,
            delivered: None,
            events: Vec::new(),
        };

        let creation = Attribution::system();
        order.events.push(OrderEvent {
            tenant_id: cmd.tenant_id,
            order_id,
            ts: now,
            status: OrderStatus::Received,
            previous_status: None,
            by: creation.attended_by,
            by_role: creation.role,
        });

        Ok(order)
    }

    /// Reconstitute an order from stored state (no events generated).
    #[must_use]
    pub fn reconstitute(params: ReconstitutedOrderParams) -> Self {
        Self {
            tenant_id: params.tenant_id,
            order_id: params.order_id,
            status: params.status,
            customer: params.customer,
            items: params.items,
            created_at: params.created_at,
            updated_at: params.updated_at,
            cooking: params.cooking,
            packing: params.packing,
            delivering: params.delivering,
            delivered: params.delivered,
            events: Vec::new(),
        }
    }

    // ========================================================================
    // Getters
    // ========================================================================

    /// Get the tenant id.
    #[must_use]
    pub const fn tenant_id(&self) -> &TenantId {
        &self.tenant_id
    }

    /// Get the order id.
    #[must_use]
    pub const fn order_id(&self) -> &OrderId {
        &self.order_id
    }

    /// Get the current status.
    #[must_use]
    pub const fn status(&self) -> OrderStatus {
        self.status
    }

    /// Get the customer contact.
    #[must_use]
    pub const fn customer(&self) -> &CustomerContact {
        &self.customer
    }

    /// Get the ordered items.
    #[must_use]
    pub fn items(&self) -> &[OrderLine] {
        &self.items
    }

    /// Get the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Get the last update timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    /// Whether the order has reached the terminal status.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.status.is_terminal()
    }

    /// Start-of-phase stamp for a non-initial status.
    ///
    /// Explicit status-to-field mapping; `RECEIVED` has no phase stamp
    /// (its start time is `created_at`).
    #[must_use]
    pub const fn phase_stamp(&self, status: OrderStatus) -> Option<&PhaseStamp> {
        match status {
            OrderStatus::Received => None,
            OrderStatus::Cooking => self.cooking.as_ref(),
            OrderStatus::Packing => self.packing.as_ref(),
            OrderStatus::Delivering => self.delivering.as_ref(),
            OrderStatus::Delivered => self.delivered.as_ref(),
        }
    }

    // ========================================================================
    // State Transitions
    // ========================================================================

    /// Apply a validated transition to `target`.
    ///
    /// Sets `status` and `updated_at`, stamps the entered phase (write-once),
    /// and generates the documenting event. Role expectations are advisory
    /// and checked by the caller; attribution is recorded as supplied.
    ///
    /// # Errors
    ///
    /// Returns `InvalidTransition` if `target` is not reachable from the
    /// current status.
    pub fn advance(
        &mut self,
        target: OrderStatus,
        attribution: Attribution,
        now: Timestamp,
    ) -> Result<(), WorkflowError> {
        OrderWorkflow::validate_transition(self.status, target)?;

        let previous = self.status;
        self.status = target;
        self.updated_at = now;
        self.stamp_phase(target, now, attribution.attended_by.clone());

        self.events.push(OrderEvent {
            tenant_id: self.tenant_id.clone(),
            order_id: self.order_id.clone(),
            ts: now,
            status: target,
            previous_status: Some(previous),
            by: attribution.attended_by,
            by_role: attribution.role,
        });

        Ok(())
    }

    fn stamp_phase(&mut self, status: OrderStatus, started_at: Timestamp, by: String) {
        let slot = match status {
            OrderStatus::Received => return,
            OrderStatus::Cooking => &mut self.cooking,
            OrderStatus::Packing => &mut self.packing,
            OrderStatus::Delivering => &mut self.delivering,
            OrderStatus::Delivered => &mut self.delivered,
        };

        // Write-once: re-entrant applies must not move an existing stamp.
        if slot.is_none() {
            *slot = Some(PhaseStamp { started_at, by });
        }
    }

    // ========================================================================
    // Events
    // ========================================================================

    /// Drain accumulated domain events.
    pub fn drain_events(&mut self) -> Vec<OrderEvent> {
        std::mem::take(&mut self.events)
    }

    /// Get pending events without draining.
    #[must_use]
    pub fn pending_events(&self) -> &[OrderEvent] {
        &self.events
    }
}
