//! Application Use Cases
//!
//! Orchestration over the domain: each use case is generic over the store
//! and publisher ports and receives its collaborators as `Arc`s, constructed
//! once at process start. Every store round-trip is bounded by the
//! configured operation timeout; an elapsed timeout surfaces as a retryable
//! failure.

mod advance_order;
mod dashboard;
mod order_metrics;
mod place_order;

pub use advance_order::{AdvanceOrderCommand, AdvanceOrderUseCase, TransitionReceipt};
pub use dashboard::DashboardUseCase;
pub use order_metrics::OrderMetricsUseCase;
pub use place_order::PlaceOrderUseCase;

use std::future::Future;
use std::time::Duration;

use crate::domain::order_tracking::{StoreError, WorkflowError};

/// Run one store operation under the configured timeout.
///
/// The store itself may also fail transiently; both cases surface as
/// [`StoreError::Unavailable`] so callers see a single retryable signal.
pub(crate) async fn bounded<T, F>(limit: Duration, op: F) -> Result<T, StoreError>
where
    F: Future<Output = Result<T, StoreError>>,
{
    match tokio::time::timeout(limit, op).await {
        Ok(result) => result,
        Err(_) => Err(StoreError::Unavailable {
            message: format!("store operation timed out after {}ms", limit.as_millis()),
        }),
    }
}

/// Map an unexpected store failure to the generic retryable error.
pub(crate) fn retryable(err: StoreError) -> WorkflowError {
    WorkflowError::StoreUnavailable {
        message: err.to_string(),
    }
}
