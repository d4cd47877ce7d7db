//! Remaining-time estimation for in-progress orders.

use serde::{Deserialize, Serialize};

use super::duration::round2;
use crate::domain::order_tracking::{Order, OrderStatus};

/// Fixed average dwell time per phase, in minutes.
///
/// A static heuristic: estimation never consults other orders' actual
/// timings. The entry for a status is the expected time spent *in* that
/// status before moving on; `DELIVERED` is terminal and has none.
pub const AVERAGE_PHASE_MINUTES: [(OrderStatus, u32); 4] = [
    (OrderStatus::Received, 10),
    (OrderStatus::Cooking, 20),
    (OrderStatus::Packing, 5),
    (OrderStatus::Delivering, 30),
];

/// Estimated time until delivery for an in-progress order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EstimatedRemaining {
    /// Estimated minutes remaining.
    pub minutes: u32,
    /// The same estimate in hours, rounded to 2 decimal places.
    pub hours: f64,
}

/// Estimate the remaining time for an order.
///
/// Sums the fixed per-phase averages from the order's current status through
/// the last non-terminal phase, following the graph's linear order (the time
/// still expected in the current phase is included). `None` once delivered.
#[must_use]
pub fn estimated_remaining(order: &Order) -> Option<EstimatedRemaining> {
    if order.is_completed() {
        return None;
    }

    let current = order.status().sequence_index();
    let minutes: u32 = AVERAGE_PHASE_MINUTES
        .iter()
        .filter(|(status, _)| status.sequence_index() >= current)
        .map(|(_, avg)| avg)
        .sum();

    Some(EstimatedRemaining {
        minutes,
        hours: round2(f64::from(minutes) / 60.0),
    })
}
