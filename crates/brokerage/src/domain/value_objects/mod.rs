//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod catalog_policy;
mod ids;
mod property_category;

pub use catalog_policy::*;
pub use ids::*;
pub use property_category::*;
