//! Catalog seed documents
//!
//! A seed lists properties, agents and property-to-agent assignments in
//! TOML. Loading a seed runs every property through the validated
//! constructors, so a single bad entry fails the whole document.
//!
//! ```toml
//! [[properties]]
//! property_id = "#R001"
//! address = "123 Dufferin Road"
//! area = 1233.0
//! selling_price = 700000.0
//! category = "residential"
//! number_of_bedrooms = 3
//! number_of_bathrooms = 2
//! property_type = "Town House"
//!
//! [[agents]]
//! agent_id = "#A001"
//! name = "Bryan"
//! email = "Bryan@gmail.com"
//!
//! [[assignments]]
//! property_id = "#R001"
//! agent_id = "#A001"
//! ```

use serde::Deserialize;

use crate::application::Manager;
use crate::domain::{Agent, AgentId, CatalogPolicy, DomainError, Property, PropertyId};

#[derive(Debug, Clone, Deserialize)]
pub struct AgentSeed {
    pub agent_id: AgentId,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AssignmentSeed {
    pub property_id: PropertyId,
    pub agent_id: AgentId,
}

/// Parsed seed document
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogSeed {
    #[serde(default)]
    pub properties: Vec<Property>,
    #[serde(default)]
    pub agents: Vec<AgentSeed>,
    #[serde(default)]
    pub assignments: Vec<AssignmentSeed>,
}

/// Catalog and agents built from a seed
#[derive(Debug)]
pub struct SeededCatalog {
    pub manager: Manager,
    pub agents: Vec<Agent>,
}

impl SeededCatalog {
    pub fn agent(&self, agent_id: &AgentId) -> Option<&Agent> {
        self.agents.iter().find(|a| a.agent_id() == agent_id)
    }
}

impl CatalogSeed {
    /// Parse a TOML seed. Invalid properties surface as parse errors.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Build the catalog: create agents, add properties in order, then apply
    /// assignments. Every agent named by a property or an assignment must be
    /// listed in the seed.
    pub fn into_catalog(self, policy: CatalogPolicy) -> Result<SeededCatalog, DomainError> {
        let agents: Vec<Agent> = self
            .agents
            .into_iter()
            .map(|a| Agent::new(a.agent_id, a.name, a.email))
            .collect();

        let mut manager = Manager::in_memory().with_policy(policy);
        for property in self.properties {
            if let Some(agent_id) = property.selling_agent() {
                if !agents.iter().any(|a| a.agent_id() == agent_id) {
                    return Err(DomainError::not_found("Agent", agent_id));
                }
            }
            manager.add_property(property)?;
        }

        for assignment in &self.assignments {
            let agent = agents
                .iter()
                .find(|a| a.agent_id() == &assignment.agent_id)
                .ok_or_else(|| DomainError::not_found("Agent", &assignment.agent_id))?;
            manager.assign_agent(&assignment.property_id, agent)?;
        }

        tracing::info!(
            "Loaded seed: {} properties, {} agents, {} assignments",
            manager.count()?,
            agents.len(),
            self.assignments.len()
        );

        Ok(SeededCatalog { manager, agents })
    }
}
