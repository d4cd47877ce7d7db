//! Order Workflow Service
//!
//! Owns the status transition graph and the advisory expected-role table.

use std::fmt;

use serde::Serialize;

use crate::domain::order_tracking::errors::WorkflowError;
use crate::domain::order_tracking::value_objects::{OrderStatus, StaffRole};

/// One node of the transition graph: a status and its outgoing edges.
#[derive(Debug, Clone, Copy)]
pub struct TransitionRule {
    /// Status this rule applies to.
    pub from: OrderStatus,
    /// Statuses reachable from `from`. Empty for the terminal status.
    pub allowed_next: &'static [OrderStatus],
    /// Role expected to move an order *into* `from`, if any.
    pub expected_role: Option<StaffRole>,
}

/// The full transition graph, one rule per status in graph order.
///
/// An explicit configuration structure rather than a keyed map: the set of
/// legal states and edges is enumerable and exhaustively testable.
pub const TRANSITION_RULES: [TransitionRule; 5] = [
    TransitionRule {
        from: OrderStatus::Received,
        allowed_next: &[OrderStatus::Cooking],
        expected_role: None,
    },
    TransitionRule {
        from: OrderStatus::Cooking,
        allowed_next: &[OrderStatus::Packing],
        expected_role: Some(StaffRole::KitchenStaff),
    },
    TransitionRule {
        from: OrderStatus::Packing,
        allowed_next: &[OrderStatus::Delivering],
        expected_role: Some(StaffRole::Packer),
    },
    TransitionRule {
        from: OrderStatus::Delivering,
        allowed_next: &[OrderStatus::Delivered],
        expected_role: Some(StaffRole::DeliveryDriver),
    },
    TransitionRule {
        from: OrderStatus::Delivered,
        allowed_next: &[],
        expected_role: Some(StaffRole::DeliveryDriver),
    },
];

/// Advisory attached to a transition whose caller role did not match the
/// expected attending role. Never blocks the transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoleMismatch {
    /// Role expected for the entered status.
    pub expected: StaffRole,
    /// Role the caller supplied (possibly empty).
    pub actual: String,
}

impl fmt::Display for RoleMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Expected role {} but got {}", self.expected, self.actual)
    }
}

/// Order Workflow state machine for validating transitions.
pub struct OrderWorkflow;

impl OrderWorkflow {
    /// Look up the rule for a status.
    #[must_use]
    pub fn rule(from: OrderStatus) -> &'static TransitionRule {
        &TRANSITION_RULES[from.sequence_index()]
    }

    /// Get all valid next states from a given state.
    #[must_use]
    pub fn allowed_next(from: OrderStatus) -> &'static [OrderStatus] {
        Self::rule(from).allowed_next
    }

    /// Check if a state transition is valid.
    #[must_use]
    pub fn is_valid_transition(from: OrderStatus, to: OrderStatus) -> bool {
        Self::allowed_next(from).contains(&to)
    }

    /// Validate a state transition.
    ///
    /// # Errors
    ///
    /// Returns `InvalidTransition` carrying the current status and the full
    /// allowed-next set so clients can self-correct.
    pub fn validate_transition(from: OrderStatus, to: OrderStatus) -> Result<(), WorkflowError> {
        if Self::is_valid_transition(from, to) {
            Ok(())
        } else {
            Err(WorkflowError::InvalidTransition {
                from,
                to,
                allowed_next: Self::allowed_next(from).to_vec(),
            })
        }
    }

    /// Role expected to move an order into `target`, if any.
    #[must_use]
    pub fn expected_role(target: OrderStatus) -> Option<StaffRole> {
        Self::rule(target).expected_role
    }

    /// Compare the caller's role against the expected attending role.
    ///
    /// Returns a [`RoleMismatch`] advisory when they differ; `None` when they
    /// match or no role is expected for `target`.
    #[must_use]
    pub fn role_advisory(target: OrderStatus, role: &str) -> Option<RoleMismatch> {
        match Self::expected_role(target) {
            Some(expected) if role != expected.as_str() => Some(RoleMismatch {
                expected,
                actual: role.to_string(),
            }),
            _ => None,
        }
    }
}
