//! Per-order metrics report.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::duration::DurationBreakdown;
use super::estimate::{EstimatedRemaining, estimated_remaining};
use super::timeline::{TimelineEntry, timeline};
use crate::domain::order_tracking::{Order, OrderEvent, OrderStatus};
use crate::domain::shared::Timestamp;

/// Timing detail for one entered phase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseMetric {
    /// When the phase started.
    pub started_at: Timestamp,
    /// Attending actor; empty when unknown.
    pub attended_by: String,
    /// Elapsed time from order creation to the phase start.
    pub time_from_order_creation: DurationBreakdown,
}

/// Complete timing picture of a single order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderMetricsReport {
    /// Order identifier.
    pub order_id: String,
    /// Tenant scope.
    pub tenant_id: String,
    /// Current status.
    pub current_status: OrderStatus,
    /// Whether the order has been delivered.
    pub is_completed: bool,
    /// When the order was placed.
    pub created_at: Timestamp,
    /// Customer display name; empty when unknown.
    pub customer_name: String,
    /// Named-transition timeline from the event log.
    pub timeline: Vec<TimelineEntry>,
    /// Per-phase start metrics, keyed by entered status.
    pub phase_metrics: BTreeMap<OrderStatus, PhaseMetric>,
    /// Creation-to-delivery total; only present once delivered.
    pub total_time: Option<DurationBreakdown>,
    /// Heuristic remaining time; only present while in progress.
    pub estimated_remaining: Option<EstimatedRemaining>,
}

/// Total elapsed time from creation to delivery.
///
/// Defined only when the order's status is `DELIVERED`.
#[must_use]
pub fn total_duration(order: &Order) -> Option<DurationBreakdown> {
    if !order.is_completed() {
        return None;
    }

    order
        .phase_stamp(OrderStatus::Delivered)
        .map(|stamp| DurationBreakdown::between(order.created_at(), stamp.started_at))
}

/// Build the full metrics report for one order.
///
/// `events` must be the order's full sequence in log order; the report is a
/// pure projection and performs no writes.
#[must_use]
pub fn order_report(order: &Order, events: &[OrderEvent]) -> OrderMetricsReport {
    let phase_metrics = OrderStatus::ALL
        .iter()
        .filter_map(|&status| {
            order.phase_stamp(status).map(|stamp| {
                (
                    status,
                    PhaseMetric {
                        started_at: stamp.started_at,
                        attended_by: stamp.by.clone(),
                        time_from_order_creation: DurationBreakdown::between(
                            order.created_at(),
                            stamp.started_at,
                        ),
                    },
                )
            })
        })
        .collect();

    OrderMetricsReport {
        order_id: order.order_id().to_string(),
        tenant_id: order.tenant_id().to_string(),
        current_status: order.status(),
        is_completed: order.is_completed(),
        created_at: order.created_at(),
        customer_name: order.customer().name.clone(),
        timeline: timeline(events),
        phase_metrics,
        total_time: total_duration(order),
        estimated_remaining: estimated_remaining(order),
    }
}
