//! In-memory property catalog

use crate::domain::{errors::DomainError, Property, PropertyId};
use crate::ports::PropertyRepository;

/// Ordered catalog held in a `Vec`
#[derive(Debug, Default, Clone)]
pub struct InMemoryPropertyRepository {
    properties: Vec<Property>,
}

impl InMemoryPropertyRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl From<Vec<Property>> for InMemoryPropertyRepository {
    fn from(properties: Vec<Property>) -> Self {
        Self { properties }
    }
}

impl PropertyRepository for InMemoryPropertyRepository {
    fn find_by_id(&self, id: &PropertyId) -> Result<Option<&Property>, DomainError> {
        Ok(self.properties.iter().find(|p| p.property_id() == id))
    }

    fn find_by_id_mut(&mut self, id: &PropertyId) -> Result<Option<&mut Property>, DomainError> {
        Ok(self.properties.iter_mut().find(|p| p.property_id() == id))
    }

    fn find_all(&self) -> Result<Vec<&Property>, DomainError> {
        Ok(self.properties.iter().collect())
    }

    fn append(&mut self, property: Property) -> Result<(), DomainError> {
        self.properties.push(property);
        Ok(())
    }

    fn replace_first(&mut self, id: &PropertyId, property: Property) -> Result<bool, DomainError> {
        match self.properties.iter().position(|p| p.property_id() == id) {
            Some(index) => {
                self.properties[index] = property;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn delete_all(&mut self, id: &PropertyId) -> Result<usize, DomainError> {
        let before = self.properties.len();
        self.properties.retain(|p| p.property_id() != id);
        Ok(before - self.properties.len())
    }

    fn count(&self) -> Result<usize, DomainError> {
        Ok(self.properties.len())
    }
}
