//! Domain Entities
//!
//! Pure domain models without infrastructure dependencies.
//! - Property: Catalog entry, residential or commercial
//! - Agent: Sells and buys properties, earns commission

mod agent;
mod property;

pub use agent::*;
pub use property::*;
