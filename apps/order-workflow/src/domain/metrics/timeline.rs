//! Per-order transition timeline derived from the event log.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::duration::DurationBreakdown;
use crate::domain::order_tracking::{OrderEvent, OrderStatus};
use crate::domain::shared::Timestamp;

/// One step of an order's history: the status entered, who entered it, and
/// how long the order stayed there (absent for the most recent step).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEntry {
    /// Status entered.
    pub status: OrderStatus,
    /// When the status was entered.
    pub timestamp: Timestamp,
    /// Attending actor; empty when unknown.
    pub attended_by: String,
    /// Attending actor's role; empty when unknown.
    pub role: String,
    /// Time until the next transition; `None` on the last entry.
    pub duration: Option<DurationBreakdown>,
}

/// Build the named-transition timeline for an order from its ordered events.
#[must_use]
pub fn timeline(events: &[OrderEvent]) -> Vec<TimelineEntry> {
    events
        .iter()
        .enumerate()
        .map(|(i, event)| TimelineEntry {
            status: event.status,
            timestamp: event.ts,
            attended_by: event.by.clone(),
            role: event.by_role.clone(),
            duration: events
                .get(i + 1)
                .map(|next| DurationBreakdown::between(event.ts, next.ts)),
        })
        .collect()
}

/// Time spent in each status: the gap between consecutive events, keyed by
/// the status being left. The current (last) status has no dwell time yet.
#[must_use]
pub fn state_durations(events: &[OrderEvent]) -> BTreeMap<OrderStatus, DurationBreakdown> {
    events
        .windows(2)
        .map(|pair| {
            (
                pair[0].status,
                DurationBreakdown::between(pair[0].ts, pair[1].ts),
            )
        })
        .collect()
}
