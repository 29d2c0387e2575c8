//! Catalog Manager (Use Case)
//!
//! Orchestrates catalog maintenance, agent assignment, search and
//! price-ordered reporting on top of a [`PropertyRepository`].

use std::io::Write;

use crate::adapters::InMemoryPropertyRepository;
use crate::domain::{Agent, CatalogPolicy, DomainError, Property, PropertyId};
use crate::ports::{PropertyRepository, PropertySearchFilter};

/// Application service owning the property catalog
#[derive(Debug)]
pub struct Manager<R: PropertyRepository = InMemoryPropertyRepository> {
    repo: R,
    policy: CatalogPolicy,
}

impl Manager<InMemoryPropertyRepository> {
    /// Manager over an empty in-memory catalog
    pub fn in_memory() -> Self {
        Self::new(InMemoryPropertyRepository::new())
    }
}

impl Default for Manager<InMemoryPropertyRepository> {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl<R: PropertyRepository> Manager<R> {
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            policy: CatalogPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: CatalogPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> CatalogPolicy {
        self.policy
    }

    /// Append a property to the catalog.
    ///
    /// With [`CatalogPolicy::UniqueIds`] a repeated ID is a conflict and the
    /// catalog is left as is.
    pub fn add_property(&mut self, property: Property) -> Result<(), DomainError> {
        if self.policy == CatalogPolicy::UniqueIds && self.repo.exists(property.property_id())? {
            tracing::warn!("Rejected duplicate property ID: {}", property.property_id());
            return Err(DomainError::Conflict(format!(
                "property {} is already in the catalog",
                property.property_id()
            )));
        }

        let id = property.property_id().clone();
        self.repo.append(property)?;
        tracing::info!("Added property: {}", id);

        Ok(())
    }

    /// Remove every entry with this ID. Unknown IDs are a no-op.
    pub fn remove_property(&mut self, property_id: &PropertyId) -> Result<usize, DomainError> {
        let removed = self.repo.delete_all(property_id)?;
        if removed > 0 {
            tracing::info!("Removed property: {} ({} entries)", property_id, removed);
        }
        Ok(removed)
    }

    /// Replace the first entry with this ID, keeping its catalog position.
    /// Unknown IDs are a no-op and return `false`.
    pub fn update_property(
        &mut self,
        property_id: &PropertyId,
        new_property: Property,
    ) -> Result<bool, DomainError> {
        if !self.repo.exists(property_id)? {
            return Ok(false);
        }

        if self.policy == CatalogPolicy::UniqueIds
            && new_property.property_id() != property_id
            && self.repo.exists(new_property.property_id())?
        {
            return Err(DomainError::Conflict(format!(
                "property {} is already in the catalog",
                new_property.property_id()
            )));
        }

        let replaced = self.repo.replace_first(property_id, new_property)?;
        if replaced {
            tracing::info!("Updated property: {}", property_id);
        }
        Ok(replaced)
    }

    /// Make `agent` the selling agent of the property, replacing any previous one
    pub fn assign_agent(
        &mut self,
        property_id: &PropertyId,
        agent: &Agent,
    ) -> Result<(), DomainError> {
        let property = match self.repo.find_by_id_mut(property_id)? {
            Some(p) => p,
            None => {
                tracing::warn!("Cannot assign agent: property {} not found", property_id);
                return Err(DomainError::not_found("Property", property_id));
            }
        };

        property.set_selling_agent(agent.agent_id().clone());
        tracing::info!(
            "{} has been assigned to {} ({})",
            property_id,
            agent.name(),
            agent.agent_id()
        );

        Ok(())
    }

    /// Change the selling price of a catalog entry
    pub fn set_selling_price(
        &mut self,
        property_id: &PropertyId,
        selling_price: f64,
    ) -> Result<(), DomainError> {
        let property = self
            .repo
            .find_by_id_mut(property_id)?
            .ok_or_else(|| DomainError::not_found("Property", property_id))?;

        property.set_selling_price(selling_price)?;
        tracing::info!("Repriced property {} to {}", property_id, selling_price);

        Ok(())
    }

    /// Get a property by ID
    pub fn property(&self, property_id: &PropertyId) -> Result<Option<&Property>, DomainError> {
        self.repo.find_by_id(property_id)
    }

    /// All properties in catalog order
    pub fn properties(&self) -> Result<Vec<&Property>, DomainError> {
        self.repo.find_all()
    }

    pub fn count(&self) -> Result<usize, DomainError> {
        self.repo.count()
    }

    /// Properties matching every supplied filter, in catalog order
    pub fn search_properties(
        &self,
        filter: &PropertySearchFilter,
    ) -> Result<Vec<&Property>, DomainError> {
        let results: Vec<&Property> = self
            .repo
            .find_all()?
            .into_iter()
            .filter(|p| filter.matches(p))
            .collect();

        tracing::debug!("Search {:?} matched {} properties", filter, results.len());

        Ok(results)
    }

    /// All properties by ascending price; equal prices keep catalog order
    pub fn properties_sorted_by_price(&self) -> Result<Vec<&Property>, DomainError> {
        let mut sorted = self.repo.find_all()?;
        sorted.sort_by(|a, b| a.selling_price().total_cmp(&b.selling_price()));
        Ok(sorted)
    }

    /// Write every property, cheapest first
    pub fn show_all_properties_sorted<W: Write>(&self, out: &mut W) -> Result<(), DomainError> {
        for property in self.properties_sorted_by_price()? {
            property.show_details(out)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PropertyCategory;

    fn id(raw: &str) -> PropertyId {
        PropertyId::from(raw)
    }

    fn res1() -> Property {
        Property::residential("#R001", "123 Dufferin Road", 1233.0, 700000.0, 3, 2, "Town House")
            .unwrap()
    }

    fn res2() -> Property {
        Property::residential("#R002", "31 Dewry Road", 120.0, 1500000.0, 7, 5, "Single House")
            .unwrap()
    }

    fn com1() -> Property {
        Property::commercial("#C001", "101 Daveford Rd", 3124.0, 1000000.0, 50, 4, 1, "Warehouse")
            .unwrap()
    }

    fn com2() -> Property {
        Property::commercial("#C002", "202 Queen St", 3000.0, 750000.0, 20, 2, 2, "Store").unwrap()
    }

    fn catalog() -> Manager {
        let mut manager = Manager::in_memory();
        for property in [res1(), res2(), com1(), com2()] {
            manager.add_property(property).unwrap();
        }
        manager
    }

    fn ids(properties: &[&Property]) -> Vec<String> {
        properties
            .iter()
            .map(|p| p.property_id().to_string())
            .collect()
    }

    #[test]
    fn test_add_keeps_catalog_order() {
        let manager = catalog();
        assert_eq!(manager.count().unwrap(), 4);
        assert_eq!(
            ids(&manager.properties().unwrap()),
            vec!["#R001", "#R002", "#C001", "#C002"]
        );
    }

    #[test]
    fn test_permissive_policy_allows_duplicates() {
        let mut manager = catalog();
        manager.add_property(res1()).unwrap();
        assert_eq!(manager.count().unwrap(), 5);

        assert_eq!(manager.remove_property(&id("#R001")).unwrap(), 2);
        assert!(manager.property(&id("#R001")).unwrap().is_none());
    }

    #[test]
    fn test_unique_ids_policy_rejects_duplicates() {
        let mut manager = Manager::in_memory().with_policy(CatalogPolicy::UniqueIds);
        manager.add_property(res1()).unwrap();
        manager.add_property(com1()).unwrap();

        let err = manager.add_property(res1()).unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
        assert_eq!(manager.count().unwrap(), 2);

        let err = manager.update_property(&id("#R001"), com1()).unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));

        // Unknown ID stays a silent no-op even when the replacement collides
        assert!(!manager.update_property(&id("#X999"), com1()).unwrap());
        assert_eq!(manager.count().unwrap(), 2);
    }

    #[test]
    fn test_assign_agent_bumps_updated_at() {
        let listed: Property = serde_json::from_value(serde_json::json!({
            "property_id": "#C002",
            "address": "202 Queen St",
            "area": 3000.0,
            "selling_price": 750000.0,
            "category": "commercial",
            "number_of_shelves": 20,
            "number_of_exits": 2,
            "number_of_storeys": 2,
            "property_type": "Store",
            "listed_at": "2020-01-01T00:00:00Z"
        }))
        .unwrap();
        let before = listed.updated_at();
        let mut manager = Manager::new(InMemoryPropertyRepository::from(vec![listed]));

        let khoi = Agent::new("#A002", "Khoi", "Khoi@gmail.com");
        manager.assign_agent(&id("#C002"), &khoi).unwrap();

        let after = manager.property(&id("#C002")).unwrap().unwrap();
        assert!(after.updated_at() > before);
        assert_eq!(after.listed_at(), before);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut manager = catalog();
        assert_eq!(manager.remove_property(&id("#R002")).unwrap(), 1);

        let all = manager.search_properties(&PropertySearchFilter::new()).unwrap();
        assert_eq!(ids(&all), vec!["#R001", "#C001", "#C002"]);

        assert_eq!(manager.remove_property(&id("#R002")).unwrap(), 0);
        assert_eq!(manager.count().unwrap(), 3);
    }

    #[test]
    fn test_update_replaces_in_place() {
        let mut manager = catalog();
        let replacement =
            Property::residential("#R001", "123 Dufferin Road", 1233.0, 820000.0, 4, 2, "Town House")
                .unwrap();

        assert!(manager.update_property(&id("#R001"), replacement).unwrap());
        let all = manager.properties().unwrap();
        assert_eq!(ids(&all), vec!["#R001", "#R002", "#C001", "#C002"]);
        assert_eq!(all[0].selling_price(), 820000.0);

        assert!(!manager.update_property(&id("#X999"), res1()).unwrap());
        assert_eq!(manager.count().unwrap(), 4);
    }

    #[test]
    fn test_assign_agent() {
        let mut manager = catalog();
        let bryan = Agent::new("#A001", "Bryan", "Bryan@gmail.com");
        let khoi = Agent::new("#A002", "Khoi", "Khoi@gmail.com");

        manager.assign_agent(&id("#R001"), &bryan).unwrap();
        let property = manager.property(&id("#R001")).unwrap().unwrap();
        assert_eq!(property.selling_agent(), Some(bryan.agent_id()));

        // Reassignment overwrites
        manager.assign_agent(&id("#R001"), &khoi).unwrap();
        let property = manager.property(&id("#R001")).unwrap().unwrap();
        assert_eq!(property.selling_agent(), Some(khoi.agent_id()));
    }

    #[test]
    fn test_assign_agent_unknown_property() {
        let mut manager = catalog();
        let before: Vec<Property> = manager.properties().unwrap().into_iter().cloned().collect();

        let bryan = Agent::new("#A001", "Bryan", "Bryan@gmail.com");
        let err = manager.assign_agent(&id("#R404"), &bryan).unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));

        let after: Vec<Property> = manager.properties().unwrap().into_iter().cloned().collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_set_selling_price() {
        let mut manager = catalog();
        manager.set_selling_price(&id("#R001"), 750000.0).unwrap();
        let property = manager.property(&id("#R001")).unwrap().unwrap();
        assert_eq!(property.selling_price(), 750000.0);

        assert!(manager.set_selling_price(&id("#R001"), -1.0).is_err());
        assert!(matches!(
            manager.set_selling_price(&id("#R404"), 1.0),
            Err(DomainError::NotFound { .. })
        ));
    }

    #[test]
    fn test_search_without_filters_returns_catalog() {
        let manager = catalog();
        let all = manager.search_properties(&PropertySearchFilter::new()).unwrap();
        assert_eq!(ids(&all), ids(&manager.properties().unwrap()));
    }

    #[test]
    fn test_search_conjunction() {
        let manager = catalog();

        let warehouses = manager
            .search_properties(
                &PropertySearchFilter::new()
                    .with_property_type("Warehouse")
                    .with_max_price(1800000.0),
            )
            .unwrap();
        assert_eq!(ids(&warehouses), vec!["#C001"]);

        let roads = manager
            .search_properties(&PropertySearchFilter::new().with_address("Road"))
            .unwrap();
        assert_eq!(ids(&roads), vec!["#R001", "#R002"]);

        let cheap_roads = manager
            .search_properties(
                &PropertySearchFilter::new()
                    .with_address("Road")
                    .with_max_price(700000.0),
            )
            .unwrap();
        assert_eq!(ids(&cheap_roads), vec!["#R001"]);

        let commercial = manager
            .search_properties(
                &PropertySearchFilter::new().with_category(PropertyCategory::Commercial),
            )
            .unwrap();
        assert_eq!(ids(&commercial), vec!["#C001", "#C002"]);

        let none = manager
            .search_properties(
                &PropertySearchFilter::new()
                    .with_property_type("Store")
                    .with_address("Dufferin"),
            )
            .unwrap();
        assert!(none.is_empty());
    }

    #[test]
    fn test_sorted_by_price_is_stable() {
        let mut manager = catalog();
        let tie =
            Property::commercial("#C010", "5 King St", 100.0, 750000.0, 0, 1, 1, "Kiosk").unwrap();
        manager.add_property(tie).unwrap();

        let sorted = manager.properties_sorted_by_price().unwrap();
        assert_eq!(
            ids(&sorted),
            vec!["#R001", "#C002", "#C010", "#C001", "#R002"]
        );
        assert!(sorted
            .windows(2)
            .all(|w| w[0].selling_price() <= w[1].selling_price()));
    }

    #[test]
    fn test_show_all_properties_sorted() {
        let manager = catalog();
        let mut out = Vec::new();
        manager.show_all_properties_sorted(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        let positions: Vec<usize> = ["#R001", "#C002", "#C001", "#R002"]
            .iter()
            .map(|id| text.find(&format!("ID: {}", id)).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_brokerage_walkthrough() {
        let mut manager = catalog();
        let mut bryan = Agent::new("#A001", "Bryan", "Bryan@gmail.com");
        let khoi = Agent::new("#A002", "Khoi", "Khoi@gmail.com");

        manager.assign_agent(&id("#R001"), &bryan).unwrap();
        manager.assign_agent(&id("#C002"), &bryan).unwrap();
        manager.assign_agent(&id("#R002"), &khoi).unwrap();
        manager.assign_agent(&id("#C001"), &khoi).unwrap();

        let res1 = manager.property(&id("#R001")).unwrap().unwrap().clone();
        bryan.sell_property(&res1).unwrap();
        assert!((bryan.total_commission_earned() - 35000.0).abs() < 1e-6);
        assert_eq!(bryan.properties_selling(), &[id("#R001")]);

        let com1 = manager.property(&id("#C001")).unwrap().unwrap().clone();
        bryan.buy_property(&com1).unwrap();

        let snapshot = bryan.clone();
        assert!(bryan.buy_property(&res1).is_err());
        assert_eq!(bryan, snapshot);

        // Khoi is not the agent of #R001
        let mut khoi = khoi;
        assert!(khoi.sell_property(&res1).is_err());
        assert_eq!(khoi.total_commission_earned(), 0.0);
    }
}
