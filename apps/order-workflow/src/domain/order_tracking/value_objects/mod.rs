//! Order Tracking Value Objects
//!
//! Immutable types for the order lifecycle.

mod customer;
mod order_line;
mod order_status;
mod staff_role;

pub use customer::CustomerContact;
pub use order_line::OrderLine;
pub use order_status::OrderStatus;
pub use staff_role::{Attribution, StaffRole};
