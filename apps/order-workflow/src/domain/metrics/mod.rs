//! Metrics Bounded Context
//!
//! Pure read-side projections over order records and their event sequences:
//! per-order timelines, phase durations, completion totals, a remaining-time
//! heuristic and fleet-wide averages. Performs no writes.

mod dashboard;
mod duration;
mod estimate;
mod fleet;
mod report;
mod timeline;

pub use dashboard::{DashboardSummary, RecentOrder, dashboard_summary};
pub use duration::DurationBreakdown;
pub use estimate::{AVERAGE_PHASE_MINUTES, EstimatedRemaining, estimated_remaining};
pub use fleet::{FleetAverages, fleet_averages};
pub use report::{OrderMetricsReport, PhaseMetric, order_report, total_duration};
pub use timeline::{TimelineEntry, state_durations, timeline};
