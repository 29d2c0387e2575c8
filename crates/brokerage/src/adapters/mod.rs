//! Adapters
//!
//! Implementations of the ports. Only in-memory storage is provided.

mod memory;

pub use memory::InMemoryPropertyRepository;
