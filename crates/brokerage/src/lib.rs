//! Brokerage Domain Library
//!
//! Core domain types and the catalog manager for a small real-estate
//! brokerage: residential and commercial properties, the agents who sell and
//! buy them, and the manager who keeps the catalog.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain/`): Pure business entities and rules
//!   - `entities/`: Property (residential / commercial), Agent
//!   - `value_objects/`: IDs, PropertyCategory, CatalogPolicy
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): The catalog repository interface
//! - **Adapters** (`adapters/`): In-memory catalog
//! - **Application** (`application/`): The `Manager` use-case service
//! - **Seed** (`seed`): TOML catalog seed documents
//!
//! # Usage
//!
//! ```rust
//! use brokerage::{Agent, Manager, Property, PropertyId, PropertySearchFilter};
//!
//! let mut manager = Manager::in_memory();
//! let house = Property::residential(
//!     "#R001", "123 Dufferin Road", 1233.0, 700000.0, 3, 2, "Town House",
//! )?;
//! manager.add_property(house)?;
//!
//! let mut agent = Agent::new("#A001", "Bryan", "Bryan@gmail.com");
//! manager.assign_agent(&PropertyId::from("#R001"), &agent)?;
//!
//! let found = manager.search_properties(&PropertySearchFilter::new().with_max_price(800000.0))?;
//! agent.sell_property(found[0])?;
//! assert_eq!(agent.total_commission_earned(), 35000.0);
//! # Ok::<(), brokerage::DomainError>(())
//! ```

pub mod adapters;
pub mod application;
pub mod domain;
pub mod ports;
pub mod seed;

// Re-export commonly used types
pub use adapters::InMemoryPropertyRepository;
pub use application::Manager;
pub use domain::{
    highest_earning_agent, Agent, AgentId, CatalogPolicy, CommercialDetails, DomainError,
    Property, PropertyCategory, PropertyId, PropertyKind, PropertyRecord, ResidentialDetails,
    COMMISSION_RATE,
};
pub use ports::{PropertyRepository, PropertySearchFilter};
pub use seed::{AgentSeed, AssignmentSeed, CatalogSeed, SeededCatalog};
