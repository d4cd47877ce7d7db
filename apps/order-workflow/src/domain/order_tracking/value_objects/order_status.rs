//! Order status in the preparation lifecycle.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::order_tracking::errors::WorkflowError;

/// Order status following the kitchen-to-door preparation sequence.
///
/// The lifecycle is strictly linear:
///
/// ```text
/// RECEIVED -> COOKING -> PACKING -> DELIVERING -> DELIVERED
/// ```
///
/// The declaration order is the graph order; `Ord` on this enum is the
/// "how far along is this order" comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    /// Order accepted and queued for the kitchen.
    Received,
    /// Kitchen staff preparing the order.
    Cooking,
    /// Order being packed for handoff.
    Packing,
    /// Driver en route to the customer.
    Delivering,
    /// Order handed to the customer.
    Delivered,
}

impl OrderStatus {
    /// All statuses in graph order.
    pub const ALL: [Self; 5] = [
        Self::Received,
        Self::Cooking,
        Self::Packing,
        Self::Delivering,
        Self::Delivered,
    ];

    /// Position of this status in the linear graph (0-based).
    #[must_use]
    pub const fn sequence_index(&self) -> usize {
        match self {
            Self::Received => 0,
            Self::Cooking => 1,
            Self::Packing => 2,
            Self::Delivering => 3,
            Self::Delivered => 4,
        }
    }

    /// Returns true if the order is in the terminal state.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Delivered)
    }

    /// The exact wire string for this status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Received => "RECEIVED",
            Self::Cooking => "COOKING",
            Self::Packing => "PACKING",
            Self::Delivering => "DELIVERING",
            Self::Delivered => "DELIVERED",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = WorkflowError;

    /// Case-sensitive: client-supplied strings must match the wire
    /// contract exactly.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "RECEIVED" => Ok(Self::Received),
            "COOKING" => Ok(Self::Cooking),
            "PACKING" => Ok(Self::Packing),
            "DELIVERING" => Ok(Self::Delivering),
            "DELIVERED" => Ok(Self::Delivered),
            other => Err(WorkflowError::InvalidStatus {
                value: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_status_is_terminal() {
        assert!(!OrderStatus::Received.is_terminal());
        assert!(!OrderStatus::Cooking.is_terminal());
        assert!(!OrderStatus::Packing.is_terminal());
        assert!(!OrderStatus::Delivering.is_terminal());
        assert!(OrderStatus::Delivered.is_terminal());
    }

    #[test]
    fn order_status_sequence_matches_all() {
        for (i, status) in OrderStatus::ALL.iter().enumerate() {
            assert_eq!(status.sequence_index(), i);
        }
    }

    #[test]
    fn order_status_graph_order() {
        assert!(OrderStatus::Received < OrderStatus::Cooking);
        assert!(OrderStatus::Cooking < OrderStatus::Packing);
        assert!(OrderStatus::Packing < OrderStatus::Delivering);
        assert!(OrderStatus::Delivering < OrderStatus::Delivered);
    }

    #[test]
    fn order_status_display() {
        assert_eq!(format!("{}", OrderStatus::Received), "RECEIVED");
        assert_eq!(format!("{}", OrderStatus::Cooking), "COOKING");
        assert_eq!(format!("{}", OrderStatus::Packing), "PACKING");
        assert_eq!(format!("{}", OrderStatus::Delivering), "DELIVERING");
        assert_eq!(format!("{}", OrderStatus::Delivered), "DELIVERED");
    }

    #[test]
    fn order_status_parse_exact() {
        assert_eq!("COOKING".parse::<OrderStatus>().unwrap(), OrderStatus::Cooking);
        assert_eq!(
            "DELIVERED".parse::<OrderStatus>().unwrap(),
            OrderStatus::Delivered
        );
    }

    #[test]
    fn order_status_parse_is_case_sensitive() {
        assert!("cooking".parse::<OrderStatus>().is_err());
        assert!("Cooking".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn order_status_parse_unknown() {
        let err = "BURNING".parse::<OrderStatus>().unwrap_err();
        assert!(matches!(err, WorkflowError::InvalidStatus { value } if value == "BURNING"));
    }

    #[test]
    fn order_status_serde() {
        let json = serde_json::to_string(&OrderStatus::Delivering).unwrap();
        assert_eq!(json, "\"DELIVERING\"");

        let parsed: OrderStatus = serde_json::from_str("\"PACKING\"").unwrap();
        assert_eq!(parsed, OrderStatus::Packing);
    }
}
