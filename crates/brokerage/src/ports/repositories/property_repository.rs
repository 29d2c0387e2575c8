//! Property Repository Port
//!
//! Abstract interface over the ordered property catalog. The catalog keeps
//! insertion order and may hold several entries with the same ID; callers
//! decide whether to allow that.

use crate::domain::{errors::DomainError, Property, PropertyCategory, PropertyId};

/// Search filter for catalog queries
///
/// Every supplied field must match; `None` fields match everything.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct PropertySearchFilter {
    /// Exact match on the variant's property type
    pub property_type: Option<String>,
    /// Case-sensitive substring of the address
    pub address: Option<String>,
    /// Inclusive upper bound on the selling price
    pub max_price: Option<f64>,
    /// Restrict to one variant
    pub category: Option<PropertyCategory>,
}

impl PropertySearchFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_property_type(mut self, property_type: impl Into<String>) -> Self {
        self.property_type = Some(property_type.into());
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn with_max_price(mut self, max_price: f64) -> Self {
        self.max_price = Some(max_price);
        self
    }

    pub fn with_category(mut self, category: PropertyCategory) -> Self {
        self.category = Some(category);
        self
    }

    /// True when no field is set
    pub fn is_empty(&self) -> bool {
        self.property_type.is_none()
            && self.address.is_none()
            && self.max_price.is_none()
            && self.category.is_none()
    }

    pub fn matches(&self, property: &Property) -> bool {
        self.property_type
            .as_deref()
            .map_or(true, |t| property.property_type() == t)
            && self
                .address
                .as_deref()
                .map_or(true, |a| property.address().contains(a))
            && self
                .max_price
                .map_or(true, |max| property.selling_price() <= max)
            && self
                .category
                .map_or(true, |c| property.category() == c)
    }
}

/// Repository interface for the property catalog
pub trait PropertyRepository {
    /// First entry with this ID
    fn find_by_id(&self, id: &PropertyId) -> Result<Option<&Property>, DomainError>;

    /// First entry with this ID, mutably
    fn find_by_id_mut(&mut self, id: &PropertyId) -> Result<Option<&mut Property>, DomainError>;

    /// All entries in catalog order
    fn find_all(&self) -> Result<Vec<&Property>, DomainError>;

    /// Append an entry at the end of the catalog
    fn append(&mut self, property: Property) -> Result<(), DomainError>;

    /// Replace the first entry with this ID in place; false if none matched
    fn replace_first(&mut self, id: &PropertyId, property: Property) -> Result<bool, DomainError>;

    /// Delete every entry with this ID, returning how many were removed
    fn delete_all(&mut self, id: &PropertyId) -> Result<usize, DomainError>;

    /// Number of entries
    fn count(&self) -> Result<usize, DomainError>;

    /// Check if an entry with this ID exists
    fn exists(&self, id: &PropertyId) -> Result<bool, DomainError> {
        Ok(self.find_by_id(id)?.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> Property {
        Property::commercial("#C002", "202 Queen St", 3000.0, 750000.0, 20, 2, 2, "Store").unwrap()
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let filter = PropertySearchFilter::new();
        assert!(filter.is_empty());
        assert!(filter.matches(&store()));
    }

    #[test]
    fn test_filters_are_conjunctive() {
        let property = store();

        assert!(PropertySearchFilter::new()
            .with_property_type("Store")
            .with_address("Queen")
            .with_max_price(750000.0)
            .matches(&property));

        assert!(!PropertySearchFilter::new()
            .with_property_type("Store")
            .with_max_price(749999.0)
            .matches(&property));

        assert!(!PropertySearchFilter::new()
            .with_property_type("Warehouse")
            .matches(&property));
    }

    #[test]
    fn test_address_is_case_sensitive_substring() {
        let property = store();
        assert!(PropertySearchFilter::new().with_address("202 Q").matches(&property));
        assert!(!PropertySearchFilter::new().with_address("queen").matches(&property));
    }

    #[test]
    fn test_category_filter() {
        let property = store();
        assert!(PropertySearchFilter::new()
            .with_category(PropertyCategory::Commercial)
            .matches(&property));
        assert!(!PropertySearchFilter::new()
            .with_category(PropertyCategory::Residential)
            .matches(&property));
    }
}
