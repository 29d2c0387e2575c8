//! Application Layer (Use Cases)
//!
//! Orchestrates domain operations over the catalog repository.

mod manager;

pub use manager::Manager;
