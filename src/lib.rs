//! appenv — typed access to application configuration stored in bundle metadata.
//!
//! Hexagonal architecture: domain logic in [`domain`], port traits in [`ports`],
//! concrete metadata stores in [`adapters`].

pub mod domain;
pub mod ports;
pub mod adapters;
pub mod cli;
pub mod logging;
