//! Ports (Interfaces)
//!
//! Abstract interfaces that define how the application layer
//! reaches the property catalog storage.
//!
//! Implementations of these traits live in `adapters/`.

pub mod repositories;

// Re-exports
pub use repositories::*;
