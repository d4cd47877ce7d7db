//! Fleet dashboard summary.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use super::fleet::{FleetAverages, fleet_averages};
use super::timeline::{TimelineEntry, timeline};
use crate::domain::order_tracking::{Order, OrderEvent, OrderStatus};
use crate::domain::shared::{OrderId, Timestamp};

/// A recently created order annotated with its own timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentOrder {
    /// Order identifier.
    pub order_id: String,
    /// Current status.
    pub status: OrderStatus,
    /// Customer display name; empty when unknown.
    pub customer_name: String,
    /// When the order was placed.
    pub created_at: Timestamp,
    /// Named-transition timeline; empty when the log has no events.
    pub timeline: Vec<TimelineEntry>,
}

/// Operational snapshot of a tenant's order fleet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    /// Total orders considered.
    pub total_orders: usize,
    /// Order counts grouped by current status (every status listed).
    pub by_status: BTreeMap<OrderStatus, usize>,
    /// Fleet-wide averages and completed/in-progress counts.
    pub fleet: FleetAverages,
    /// Bounded window of the most recently created orders.
    pub recent_orders: Vec<RecentOrder>,
}

/// Build a dashboard summary over a tenant's orders.
///
/// `histories` maps order ids to their ordered event sequences; orders
/// absent from the map get an empty timeline. The `recent_window` most
/// recently created orders are annotated.
#[must_use]
pub fn dashboard_summary(
    orders: &[Order],
    histories: &HashMap<OrderId, Vec<OrderEvent>>,
    recent_window: usize,
) -> DashboardSummary {
    let mut by_status: BTreeMap<OrderStatus, usize> =
        OrderStatus::ALL.iter().map(|&status| (status, 0)).collect();
    for order in orders {
        if let Some(count) = by_status.get_mut(&order.status()) {
            *count += 1;
        }
    }

    let mut recent: Vec<&Order> = orders.iter().collect();
    recent.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
    recent.truncate(recent_window);

    let recent_orders = recent
        .into_iter()
        .map(|order| RecentOrder {
            order_id: order.order_id().to_string(),
            status: order.status(),
            customer_name: order.customer().name.clone(),
            created_at: order.created_at(),
            timeline: histories
                .get(order.order_id())
                .map(|events| timeline(events))
                .unwrap_or_default(),
        })
        .collect();

    DashboardSummary {
        total_orders: orders.len(),
        by_status,
        fleet: fleet_averages(orders),
        recent_orders,
    }
}
