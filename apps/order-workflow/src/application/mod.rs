//! Application Layer
//!
//! Use cases and port definitions. Use cases orchestrate the domain through
//! the store and publisher ports and carry no business rules of their own.

pub mod ports;
pub mod use_cases;
