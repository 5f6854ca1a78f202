//! Concrete metadata store implementations.

pub mod file_metadata_adapter;
#[cfg(feature = "json")]
pub mod json_metadata_adapter;
pub mod memory_metadata_adapter;
pub mod process_metadata;
