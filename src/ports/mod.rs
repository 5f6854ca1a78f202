//! Port traits implemented by adapters.

pub mod metadata_port;
