//! Agent - Sells and buys catalog properties, earns commission
//!
//! Pure domain entity without infrastructure dependencies.
//! Agents hold property IDs, never the properties themselves.

use serde::Serialize;
use std::io::Write;

use crate::domain::entities::Property;
use crate::domain::errors::DomainError;
use crate::domain::value_objects::{AgentId, PropertyId};

/// Agent - Brokerage agent with sale/purchase history
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Agent {
    agent_id: AgentId,
    name: String,
    email: String,
    properties_selling: Vec<PropertyId>,
    properties_buying: Vec<PropertyId>,
    total_commission_earned: f64,
}

impl Agent {
    /// Create an agent with empty histories and no commission
    pub fn new(
        agent_id: impl Into<AgentId>,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            agent_id: agent_id.into(),
            name: name.into(),
            email: email.into(),
            properties_selling: Vec::new(),
            properties_buying: Vec::new(),
            total_commission_earned: 0.0,
        }
    }

    pub fn agent_id(&self) -> &AgentId {
        &self.agent_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn properties_selling(&self) -> &[PropertyId] {
        &self.properties_selling
    }

    pub fn properties_buying(&self) -> &[PropertyId] {
        &self.properties_buying
    }

    pub fn total_commission_earned(&self) -> f64 {
        self.total_commission_earned
    }

    /// Whether this agent is the assigned selling agent of `property`
    pub fn is_selling_agent_of(&self, property: &Property) -> bool {
        property.selling_agent() == Some(&self.agent_id)
    }

    /// Record a sale of `property`.
    ///
    /// Only the assigned selling agent may sell. On success the property ID is
    /// appended to the selling list and commission on the *current* price is
    /// credited; the credited amount is returned. The property is not touched.
    pub fn sell_property(&mut self, property: &Property) -> Result<f64, DomainError> {
        if !self.is_selling_agent_of(property) {
            tracing::warn!(
                "Sale rejected: {} is not assigned to agent {}",
                property.property_id(),
                self.agent_id
            );
            return Err(DomainError::rejected(format!(
                "property {} is not assigned to agent {} for selling",
                property.property_id(),
                self.agent_id
            )));
        }

        let commission = property.calculate_commission();
        self.properties_selling.push(property.property_id().clone());
        self.total_commission_earned += commission;

        tracing::info!(
            "{} ({}) sold property {} - commission {}",
            self.name,
            self.agent_id,
            property.property_id(),
            commission
        );

        Ok(commission)
    }

    /// Record a purchase of `property`.
    ///
    /// Rejected when nobody is handling the sale, or when this agent already
    /// sells the same property ID.
    pub fn buy_property(&mut self, property: &Property) -> Result<(), DomainError> {
        if property.selling_agent().is_none() {
            tracing::warn!(
                "Purchase rejected: {} has no selling agent",
                property.property_id()
            );
            return Err(DomainError::rejected(format!(
                "property {} does not have a selling agent",
                property.property_id()
            )));
        }

        if self.properties_selling.contains(property.property_id()) {
            tracing::warn!(
                "Purchase rejected: agent {} is selling {}",
                self.agent_id,
                property.property_id()
            );
            return Err(DomainError::rejected(format!(
                "agent {} cannot buy property {} they are selling",
                self.agent_id,
                property.property_id()
            )));
        }

        self.properties_buying.push(property.property_id().clone());
        tracing::info!(
            "{} ({}) bought property {}",
            self.name,
            self.agent_id,
            property.property_id()
        );

        Ok(())
    }

    /// Write the human-readable rendering of this agent
    pub fn show_details<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(out, "{}", self)
    }
}

fn join_ids(ids: &[PropertyId]) -> String {
    ids.iter()
        .map(PropertyId::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

impl std::fmt::Display for Agent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Agent Details:")?;
        writeln!(
            f,
            "ID: {}, Name: {}, Email: {}, Total Commission Earned: {}",
            self.agent_id, self.name, self.email, self.total_commission_earned
        )?;
        writeln!(f, "Selling Properties: [{}]", join_ids(&self.properties_selling))?;
        write!(f, "Buying Properties: [{}]", join_ids(&self.properties_buying))
    }
}

/// Agent with the largest total commission.
///
/// Ties go to the agent that appears first; `None` for an empty slice.
pub fn highest_earning_agent(agents: &[Agent]) -> Option<&Agent> {
    agents.iter().fold(None, |best, agent| match best {
        Some(current) if current.total_commission_earned >= agent.total_commission_earned => {
            Some(current)
        }
        _ => Some(agent),
    })
}
