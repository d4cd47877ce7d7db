// Allow unwrap/expect in tests - tests should panic on unexpected errors
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::float_cmp,
        clippy::too_many_lines,
        clippy::match_same_arms,
        clippy::needless_pass_by_value,
        clippy::default_trait_access,
        clippy::items_after_statements
    )
)]

//! Order Workflow - Rust Core Library
//!
//! Deterministic order lifecycle core for the Comanda restaurant platform:
//! the status state machine, the append-only event log and the derived
//! metrics engine.
//!
//! # Architecture (Clean Architecture + DDD + Hexagonal)
//!
//! ## Layers (inside → outside)
//!
//! - **Domain**: Core business logic (aggregates, value objects, domain events)
//!   - `order_tracking`: Order aggregate, workflow graph, event log ports
//!   - `metrics`: Pure read-side timing projections
//!
//! - **Application**: Use cases and orchestration
//!   - `ports`: Interfaces for external systems (`EventPublisherPort`)
//!   - `use_cases`: `PlaceOrder`, `AdvanceOrder`, `OrderMetrics`, Dashboard
//!
//! - **Infrastructure**: Adapters (implementations)
//!   - `persistence`: Order store and event log (in-memory)
//!
//! Transport (HTTP routing), authentication, menu/tenant catalog management
//! and notification delivery live outside this crate; they call into, or
//! listen on, the interfaces defined here.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Clean Architecture Layers
// =============================================================================

/// Domain layer - Core business logic with no external dependencies.
pub mod domain;

/// Application layer - Use cases and port definitions.
pub mod application;

/// Infrastructure layer - Adapters and external integrations.
pub mod infrastructure;

/// Configuration loading and validation.
pub mod config;

/// Logging initialisation.
pub mod observability;

// =============================================================================
// Re-exports from Clean Architecture
// =============================================================================

// Domain re-exports
pub use domain::metrics::{
    DashboardSummary, DurationBreakdown, EstimatedRemaining, FleetAverages, OrderMetricsReport,
    TimelineEntry,
};
pub use domain::order_tracking::{
    Attribution, CustomerContact, EventStore, Order, OrderEvent, OrderLine, OrderStatus,
    OrderStore, OrderWorkflow, PhaseStamp, PlaceOrderCommand, RoleMismatch, StaffRole, StoreError,
    WorkflowError,
};
pub use domain::shared::{OrderId, TenantId, Timestamp};

// Application re-exports
pub use application::ports::{
    DetailType, EVENT_SOURCE, EventPublishError, EventPublisherPort, NoOpEventPublisher,
    OrderNotification,
};
pub use application::use_cases::{
    AdvanceOrderCommand, AdvanceOrderUseCase, DashboardUseCase, OrderMetricsUseCase,
    PlaceOrderUseCase, TransitionReceipt,
};

// Infrastructure re-exports
pub use config::{Config, ConfigError, load_config};
pub use infrastructure::persistence::{InMemoryEventLog, InMemoryOrderStore};
pub use observability::init_logging;
