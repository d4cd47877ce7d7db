//! Order Tracking Domain Services
//!
//! Stateless business logic over the order lifecycle.

mod workflow;

pub use workflow::{OrderWorkflow, RoleMismatch, TRANSITION_RULES, TransitionRule};
