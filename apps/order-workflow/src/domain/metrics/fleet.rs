//! Fleet-wide timing averages across a collection of orders.

use serde::{Deserialize, Serialize};

use super::duration::round2;
use crate::domain::order_tracking::{Order, OrderStatus};

/// Averages over the completed portion of a fleet of orders, in minutes.
///
/// Each intermediate phase average is the mean gap between that phase's
/// start and the next phase's start; an order missing either boundary is
/// excluded from that phase's average only. Empty sets average to `0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FleetAverages {
    /// Orders that reached `DELIVERED`.
    pub completed_orders: usize,
    /// Orders still moving through the workflow.
    pub in_progress_orders: usize,
    /// Mean creation-to-delivery time, minutes.
    pub avg_total_minutes: f64,
    /// Mean cooking time, minutes.
    pub avg_cooking_minutes: f64,
    /// Mean packing time, minutes.
    pub avg_packing_minutes: f64,
    /// Mean delivering time, minutes.
    pub avg_delivering_minutes: f64,
}

/// Boundary pair for an intermediate phase: entered at the first status,
/// left at the second.
const PHASE_BOUNDARIES: [(OrderStatus, OrderStatus); 3] = [
    (OrderStatus::Cooking, OrderStatus::Packing),
    (OrderStatus::Packing, OrderStatus::Delivering),
    (OrderStatus::Delivering, OrderStatus::Delivered),
];

fn mean(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        0.0
    } else {
        round2(samples.iter().sum::<f64>() / samples.len() as f64)
    }
}

fn phase_minutes(order: &Order, entered: OrderStatus, left: OrderStatus) -> Option<f64> {
    let start = order.phase_stamp(entered)?;
    let end = order.phase_stamp(left)?;
    Some(end.started_at.seconds_since(start.started_at) / 60.0)
}

/// Compute fleet averages over a collection of orders.
#[must_use]
pub fn fleet_averages(orders: &[Order]) -> FleetAverages {
    let (completed, in_progress): (Vec<&Order>, Vec<&Order>) =
        orders.iter().partition(|order| order.is_completed());

    let totals: Vec<f64> = completed
        .iter()
        .filter_map(|order| {
            order
                .phase_stamp(OrderStatus::Delivered)
                .map(|stamp| stamp.started_at.seconds_since(order.created_at()) / 60.0)
        })
        .collect();

    let mut phase_means = PHASE_BOUNDARIES.iter().map(|&(entered, left)| {
        let samples: Vec<f64> = completed
            .iter()
            .filter_map(|order| phase_minutes(order, entered, left))
            .collect();
        mean(&samples)
    });

    FleetAverages {
        completed_orders: completed.len(),
        in_progress_orders: in_progress.len(),
        avg_total_minutes: mean(&totals),
        avg_cooking_minutes: phase_means.next().unwrap_or(0.0),
        avg_packing_minutes: phase_means.next().unwrap_or(0.0),
        avg_delivering_minutes: phase_means.next().unwrap_or(0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order_tracking::{
        Attribution, CustomerContact, OrderLine, PlaceOrderCommand,
    };
    use crate::domain::shared::Timestamp;
    use crate::domain::shared::TenantId;
    use rust_decimal_macros::dec;

    fn ts(s: &str) -> Timestamp {
        Timestamp::parse(s).unwrap()
    }

    fn placed(created: &str) -> Order {
        Order::place(
            PlaceOrderCommand {
                tenant_id: TenantId::new("pardos-chicken"),
                customer: CustomerContact::default(),
                items: vec![OrderLine::new("Pollo a la brasa", 1, dec!(18.50))],
            },
            ts(created),
        )
        .unwrap()
    }

    /// Walk an order through all four transitions at the given times.
    fn delivered(created: &str, steps: [&str; 4]) -> Order {
        let mut order = placed(created);
        let statuses = [
            OrderStatus::Cooking,
            OrderStatus::Packing,
            OrderStatus::Delivering,
            OrderStatus::Delivered,
        ];
        for (status, at) in statuses.into_iter().zip(steps) {
            order
                .advance(status, Attribution::default(), ts(at))
                .unwrap();
        }
        order
    }

    #[test]
    fn empty_fleet_averages_to_zero() {
        let averages = fleet_averages(&[]);

        assert_eq!(averages.completed_orders, 0);
        assert_eq!(averages.in_progress_orders, 0);
        assert_eq!(averages.avg_total_minutes, 0.0);
        assert_eq!(averages.avg_cooking_minutes, 0.0);
        assert_eq!(averages.avg_packing_minutes, 0.0);
        assert_eq!(averages.avg_delivering_minutes, 0.0);
    }

    #[test]
    fn partitions_completed_from_in_progress() {
        let orders = vec![
            delivered(
                "2026-03-02T12:00:00Z",
                [
                    "2026-03-02T12:10:00Z",
                    "2026-03-02T12:30:00Z",
                    "2026-03-02T12:35:00Z",
                    "2026-03-02T13:05:00Z",
                ],
            ),
            placed("2026-03-02T12:30:00Z"),
        ];

        let averages = fleet_averages(&orders);
        assert_eq!(averages.completed_orders, 1);
        assert_eq!(averages.in_progress_orders, 1);
    }

    #[test]
    fn averages_over_two_completed_orders() {
        let orders = vec![
            // cooking 20m, packing 5m, delivering 30m, total 65m
            delivered(
                "2026-03-02T12:00:00Z",
                [
                    "2026-03-02T12:10:00Z",
                    "2026-03-02T12:30:00Z",
                    "2026-03-02T12:35:00Z",
                    "2026-03-02T13:05:00Z",
                ],
            ),
            // cooking 10m, packing 15m, delivering 10m, total 40m
            delivered(
                "2026-03-02T13:00:00Z",
                [
                    "2026-03-02T13:05:00Z",
                    "2026-03-02T13:15:00Z",
                    "2026-03-02T13:30:00Z",
                    "2026-03-02T13:40:00Z",
                ],
            ),
        ];

        let averages = fleet_averages(&orders);
        assert_eq!(averages.completed_orders, 2);
        assert_eq!(averages.avg_total_minutes, 52.5);
        assert_eq!(averages.avg_cooking_minutes, 15.0);
        assert_eq!(averages.avg_packing_minutes, 10.0);
        assert_eq!(averages.avg_delivering_minutes, 20.0);
    }

    #[test]
    fn in_progress_orders_do_not_skew_averages() {
        let mut half_way = placed("2026-03-02T12:00:00Z");
        half_way
            .advance(
                OrderStatus::Cooking,
                Attribution::default(),
                ts("2026-03-02T12:01:00Z"),
            )
            .unwrap();

        let orders = vec![
            delivered(
                "2026-03-02T12:00:00Z",
                [
                    "2026-03-02T12:10:00Z",
                    "2026-03-02T12:30:00Z",
                    "2026-03-02T12:35:00Z",
                    "2026-03-02T13:05:00Z",
                ],
            ),
            half_way,
        ];

        let averages = fleet_averages(&orders);
        assert_eq!(averages.avg_cooking_minutes, 20.0);
        assert_eq!(averages.avg_total_minutes, 65.0);
    }
}
