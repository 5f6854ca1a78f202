//! Core domain types and logic.

pub mod config_key;
pub mod metadata;
pub mod environment;
pub mod config_validation;
pub mod error;
