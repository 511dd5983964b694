//! Business logic services (use cases).
//!
//! Services validate input and check ownership before calling into the
//! registry. They depend on traits (ports) -- never on concrete
//! infrastructure implementations.

pub mod access;
pub mod shop;
