//! Staff roles attending order phases.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Known roles on the preparation floor.
///
/// Incoming requests carry free-form role strings; this enum is the
/// vocabulary of the advisory expected-role table, not a validation gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StaffRole {
    /// Cook preparing the order.
    KitchenStaff,
    /// Dispatcher packing the order.
    Packer,
    /// Driver delivering (and confirming delivery of) the order.
    DeliveryDriver,
    /// The platform itself (order creation).
    System,
}

impl StaffRole {
    /// The exact wire string for this role.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::KitchenStaff => "KITCHEN_STAFF",
            Self::Packer => "PACKER",
            Self::DeliveryDriver => "DELIVERY_DRIVER",
            Self::System => "SYSTEM",
        }
    }
}

impl fmt::Display for StaffRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Attribution of a status change to an actor.
///
/// Both fields may be empty when the caller supplied no identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribution {
    /// Name or id of the attending staff member.
    pub attended_by: String,
    /// Free-form role string as supplied by the caller.
    pub role: String,
}

impl Attribution {
    /// Create an attribution from attending actor and role.
    #[must_use]
    pub fn new(attended_by: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            attended_by: attended_by.into(),
            role: role.into(),
        }
    }

    /// Attribution for platform-originated changes (order creation).
    #[must_use]
    pub fn system() -> Self {
        Self {
            attended_by: String::new(),
            role: StaffRole::System.as_str().to_string(),
        }
    }
}
