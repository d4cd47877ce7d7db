//! A single line item on an order.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One menu item and quantity on an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    /// Menu item name.
    pub name: String,
    /// Number of units ordered.
    pub quantity: u32,
    /// Price per unit.
    pub unit_price: Decimal,
}

impl OrderLine {
    /// Create a new order line.
    #[must_use]
    pub fn new(name: impl Into<String>, quantity: u32, unit_price: Decimal) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit_price,
        }
    }

    /// Total price for this line.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}
