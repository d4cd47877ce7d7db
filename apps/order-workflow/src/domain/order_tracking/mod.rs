//! Order Tracking Bounded Context
//!
//! Tracks the lifecycle of a food order through the fixed preparation
//! sequence, recording every accepted transition as an immutable event.
//!
//! # Key Concepts
//!
//! - **Order Aggregate**: the mutable "current view" of one order
//! - **Workflow Service**: owns the transition graph and role expectations
//! - **Order Events**: append-only history, the source of truth

pub mod aggregate;
pub mod errors;
pub mod events;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use aggregate::{Order, PhaseStamp, PlaceOrderCommand, ReconstitutedOrderParams};
pub use errors::WorkflowError;
pub use events::OrderEvent;
pub use repository::{EventStore, OrderStore, StoreError};
pub use services::{OrderWorkflow, RoleMismatch};
pub use value_objects::{Attribution, CustomerContact, OrderLine, OrderStatus, StaffRole};
