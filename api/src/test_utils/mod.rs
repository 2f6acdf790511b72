//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! The in-memory repositories implement the port traits directly, so services
//! can be exercised without a database. Write faults are opt-in per account.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
