//! High-level service facade over the location catalog.

use std::sync::Arc;

use crate::catalog::{CatalogError, LocationCatalog};
use crate::filter::{FilterCriteria, filter_locations};
use crate::model::{Location, LocationId, MapRegion};

/// Public entry point for listing, searching and mapping locations.
pub struct LocatorService {
    catalog: Arc<LocationCatalog>,
}

impl LocatorService {
    /// Create a new service bound to the provided catalog.
    #[must_use]
    pub fn new(catalog: Arc<LocationCatalog>) -> Self {
        Self { catalog }
    }

    /// Display name of the underlying source.
    #[must_use]
    pub fn source_name(&self) -> &str {
        &self.catalog.meta().name
    }

    /// All locations in dataset order.
    #[must_use]
    pub fn locations(&self) -> &[Location] {
        self.catalog.locations()
    }

    /// Look up a single location.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] if the identifier is unknown.
    pub fn location(&self, id: &LocationId) -> Result<&Location, CatalogError> {
        self.catalog.get(id)
    }

    /// Locations matching `criteria`, in dataset order.
    #[must_use]
    pub fn search(&self, criteria: &FilterCriteria) -> Vec<&Location> {
        let hits = filter_locations(self.catalog.locations(), criteria);
        tracing::debug!(
            query = %criteria.query,
            services = criteria.services.len(),
            items = criteria.items.len(),
            hits = hits.len(),
            "Filtered locations"
        );
        hits
    }

    /// Initial map viewport, centered on the first location.
    #[must_use]
    pub fn map_region(&self) -> MapRegion {
        MapRegion::around(self.catalog.locations())
    }
}
