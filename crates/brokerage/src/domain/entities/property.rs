//! Property - Catalog entry (residential or commercial)
//!
//! Pure domain entity without infrastructure dependencies. Instances only
//! come out of the validated constructors (or a deserialized record that is
//! pushed through the same validation), so `area > 0` and
//! `selling_price > 0` hold for every live value.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::domain::errors::DomainError;
use crate::domain::value_objects::{AgentId, PropertyCategory, PropertyId};

/// Flat commission rate credited to the selling agent
pub const COMMISSION_RATE: f64 = 0.05;

/// Attributes specific to residential properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResidentialDetails {
    pub number_of_bedrooms: i32,
    pub number_of_bathrooms: i32,
    /// e.g. "Town House", "Single House"; never empty
    pub property_type: String,
}

/// Attributes specific to commercial properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommercialDetails {
    pub number_of_shelves: i32,
    pub number_of_exits: i32,
    pub number_of_storeys: i32,
    /// e.g. "Warehouse", "Store"; may be empty
    pub property_type: String,
}

/// Variant-specific part of a property
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "snake_case")]
pub enum PropertyKind {
    Residential(ResidentialDetails),
    Commercial(CommercialDetails),
}

impl ResidentialDetails {
    fn validate(&self) -> Result<(), DomainError> {
        if self.number_of_bedrooms <= 0 {
            return Err(DomainError::validation(format!(
                "number_of_bedrooms must be positive, got {}",
                self.number_of_bedrooms
            )));
        }
        if self.number_of_bathrooms <= 0 {
            return Err(DomainError::validation(format!(
                "number_of_bathrooms must be positive, got {}",
                self.number_of_bathrooms
            )));
        }
        if self.property_type.is_empty() {
            return Err(DomainError::validation(
                "residential property_type cannot be empty",
            ));
        }
        Ok(())
    }
}

impl CommercialDetails {
    // An empty property_type is accepted here, unlike residential.
    fn validate(&self) -> Result<(), DomainError> {
        if self.number_of_shelves < 0 {
            return Err(DomainError::validation(format!(
                "number_of_shelves cannot be negative, got {}",
                self.number_of_shelves
            )));
        }
        if self.number_of_exits <= 0 {
            return Err(DomainError::validation(format!(
                "number_of_exits must be positive, got {}",
                self.number_of_exits
            )));
        }
        if self.number_of_storeys <= 0 {
            return Err(DomainError::validation(format!(
                "number_of_storeys must be positive, got {}",
                self.number_of_storeys
            )));
        }
        Ok(())
    }
}

impl PropertyKind {
    pub fn category(&self) -> PropertyCategory {
        match self {
            PropertyKind::Residential(_) => PropertyCategory::Residential,
            PropertyKind::Commercial(_) => PropertyCategory::Commercial,
        }
    }

    pub fn property_type(&self) -> &str {
        match self {
            PropertyKind::Residential(details) => &details.property_type,
            PropertyKind::Commercial(details) => &details.property_type,
        }
    }

    fn validate(&self) -> Result<(), DomainError> {
        match self {
            PropertyKind::Residential(details) => details.validate(),
            PropertyKind::Commercial(details) => details.validate(),
        }
    }
}

/// Property - A listing owned by the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PropertyRecord")]
pub struct Property {
    property_id: PropertyId,
    address: String,
    area: f64,
    selling_price: f64,
    /// Agent currently authorized to sell; a lookup key, not ownership
    #[serde(skip_serializing_if = "Option::is_none")]
    selling_agent: Option<AgentId>,
    #[serde(flatten)]
    kind: PropertyKind,
    listed_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Unvalidated wire shape of a [`Property`]
#[derive(Debug, Clone, Deserialize)]
pub struct PropertyRecord {
    pub property_id: PropertyId,
    pub address: String,
    pub area: f64,
    pub selling_price: f64,
    #[serde(default)]
    pub selling_agent: Option<AgentId>,
    #[serde(flatten)]
    pub kind: PropertyKind,
    #[serde(default)]
    pub listed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl TryFrom<PropertyRecord> for Property {
    type Error = DomainError;

    fn try_from(record: PropertyRecord) -> Result<Self, Self::Error> {
        let mut property = Property::build(
            record.property_id,
            record.address,
            record.area,
            record.selling_price,
            record.kind,
        )?;
        property.selling_agent = record.selling_agent;
        if let Some(listed_at) = record.listed_at {
            property.listed_at = listed_at;
            property.updated_at = listed_at;
        }
        if let Some(updated_at) = record.updated_at {
            property.updated_at = updated_at;
        }
        Ok(property)
    }
}

fn validate_positive(field: &str, value: f64) -> Result<(), DomainError> {
    // NaN fails this comparison as well.
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(DomainError::validation(format!(
            "{} must be positive, got {}",
            field, value
        )))
    }
}

impl Property {
    /// Create a residential property.
    ///
    /// Fails when `area` or `selling_price` is not positive, when either room
    /// count is not positive, or when `property_type` is empty.
    #[allow(clippy::too_many_arguments)]
    pub fn residential(
        property_id: impl Into<PropertyId>,
        address: impl Into<String>,
        area: f64,
        selling_price: f64,
        number_of_bedrooms: i32,
        number_of_bathrooms: i32,
        property_type: impl Into<String>,
    ) -> Result<Self, DomainError> {
        Self::build(
            property_id.into(),
            address.into(),
            area,
            selling_price,
            PropertyKind::Residential(ResidentialDetails {
                number_of_bedrooms,
                number_of_bathrooms,
                property_type: property_type.into(),
            }),
        )
    }

    /// Create a commercial property.
    ///
    /// Fails when `area` or `selling_price` is not positive, when shelves are
    /// negative, or when exits or storeys are not positive.
    #[allow(clippy::too_many_arguments)]
    pub fn commercial(
        property_id: impl Into<PropertyId>,
        address: impl Into<String>,
        area: f64,
        selling_price: f64,
        number_of_shelves: i32,
        number_of_exits: i32,
        number_of_storeys: i32,
        property_type: impl Into<String>,
    ) -> Result<Self, DomainError> {
        Self::build(
            property_id.into(),
            address.into(),
            area,
            selling_price,
            PropertyKind::Commercial(CommercialDetails {
                number_of_shelves,
                number_of_exits,
                number_of_storeys,
                property_type: property_type.into(),
            }),
        )
    }

    fn build(
        property_id: PropertyId,
        address: String,
        area: f64,
        selling_price: f64,
        kind: PropertyKind,
    ) -> Result<Self, DomainError> {
        validate_positive("area", area)?;
        validate_positive("selling_price", selling_price)?;
        kind.validate()?;

        let now = Utc::now();
        Ok(Self {
            property_id,
            address,
            area,
            selling_price,
            selling_agent: None,
            kind,
            listed_at: now,
            updated_at: now,
        })
    }

    /// Set the initial selling agent at construction time
    pub fn with_selling_agent(mut self, agent_id: impl Into<AgentId>) -> Self {
        self.selling_agent = Some(agent_id.into());
        self
    }

    pub fn property_id(&self) -> &PropertyId {
        &self.property_id
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn area(&self) -> f64 {
        self.area
    }

    pub fn selling_price(&self) -> f64 {
        self.selling_price
    }

    pub fn selling_agent(&self) -> Option<&AgentId> {
        self.selling_agent.as_ref()
    }

    pub fn kind(&self) -> &PropertyKind {
        &self.kind
    }

    pub fn category(&self) -> PropertyCategory {
        self.kind.category()
    }

    /// Variant type label, whichever variant this is
    pub fn property_type(&self) -> &str {
        self.kind.property_type()
    }

    pub fn listed_at(&self) -> DateTime<Utc> {
        self.listed_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Commission on the current selling price
    pub fn calculate_commission(&self) -> f64 {
        self.selling_price * COMMISSION_RATE
    }

    /// Change the selling price. The old price is kept on failure.
    pub fn set_selling_price(&mut self, selling_price: f64) -> Result<(), DomainError> {
        validate_positive("selling_price", selling_price)?;
        self.selling_price = selling_price;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Overwrite the selling agent
    pub fn set_selling_agent(&mut self, agent_id: AgentId) {
        self.selling_agent = Some(agent_id);
        self.updated_at = Utc::now();
    }

    /// Write the human-readable rendering of every field
    pub fn show_details<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(out, "{}", self)
    }
}

impl std::fmt::Display for Property {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let header = match self.kind {
            PropertyKind::Residential(_) => "Residential Property:",
            PropertyKind::Commercial(_) => "Commercial Property:",
        };
        writeln!(f, "{}", header)?;
        write!(
            f,
            "ID: {}, Address: {}, Area: {} sqft, Price: {}",
            self.property_id, self.address, self.area, self.selling_price
        )?;
        match &self.kind {
            PropertyKind::Residential(d) => write!(
                f,
                ", Bedrooms: {}, Bathrooms: {}, Type: {}",
                d.number_of_bedrooms, d.number_of_bathrooms, d.property_type
            )?,
            PropertyKind::Commercial(d) => write!(
                f,
                ", Shelves: {}, Exits: {}, Storeys: {}, Type: {}",
                d.number_of_shelves, d.number_of_exits, d.number_of_storeys, d.property_type
            )?,
        }
        match &self.selling_agent {
            Some(agent_id) => write!(f, ", Agent: {}", agent_id),
            None => write!(f, ", Agent: none"),
        }
    }
}
