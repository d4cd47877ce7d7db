//! Infrastructure Layer
//!
//! Adapters implementing the domain's store ports. The backing store in
//! production supplies the conditional-write primitive; the in-memory
//! adapters here mirror its semantics for tests and development.

pub mod persistence;
