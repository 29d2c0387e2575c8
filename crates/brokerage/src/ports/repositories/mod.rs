//! Repository Ports
//!
//! Abstract interfaces for catalog storage operations.

mod property_repository;

pub use property_repository::*;
