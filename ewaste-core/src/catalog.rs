//! Validated snapshot of a location source with lookup by identifier.

use std::collections::HashMap;

use crate::model::{Location, LocationId, SourceMeta};
use crate::ports::LocationSource;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
/// Errors raised while building or querying a catalog.
pub enum CatalogError {
    /// Two records share an identifier.
    #[error("Duplicate location id: {0}")]
    DuplicateId(LocationId),
    /// A record has an empty identifier.
    #[error("Location without id: {name}")]
    MissingId {
        /// Display name of the offending record.
        name: String,
    },
    /// A record's coordinates are not finite or out of range.
    #[error("Invalid coordinates for {id}: ({latitude}, {longitude})")]
    InvalidCoordinates {
        /// Offending record.
        id: LocationId,
        /// Reported latitude.
        latitude: f64,
        /// Reported longitude.
        longitude: f64,
    },
    /// No record with the requested identifier.
    #[error("Location not found: {0}")]
    NotFound(LocationId),
}

/// Read-only set of locations resolved by identifier.
pub struct LocationCatalog {
    meta: SourceMeta,
    locations: Vec<Location>,
    index: HashMap<LocationId, usize>,
}

impl LocationCatalog {
    /// Snapshot and validate every record of `source`.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] when an identifier is empty or repeated, or when
    /// coordinates are outside the valid latitude/longitude ranges.
    pub fn new(source: &dyn LocationSource) -> Result<Self, CatalogError> {
        Self::from_parts(source.meta().clone(), source.locations().to_vec())
    }

    /// Build a catalog from metadata and an owned record list.
    ///
    /// # Errors
    ///
    /// Same validation as [`LocationCatalog::new`].
    pub fn from_parts(meta: SourceMeta, locations: Vec<Location>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(locations.len());

        for (position, location) in locations.iter().enumerate() {
            if location.id.as_str().trim().is_empty() {
                return Err(CatalogError::MissingId {
                    name: location.name.clone(),
                });
            }
            if !location.coordinates.is_valid() {
                return Err(CatalogError::InvalidCoordinates {
                    id: location.id.clone(),
                    latitude: location.coordinates.latitude,
                    longitude: location.coordinates.longitude,
                });
            }
            if index.insert(location.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateId(location.id.clone()));
            }
        }

        tracing::info!(
            source = %meta.id,
            locations = locations.len(),
            "Location catalog loaded"
        );

        Ok(Self {
            meta,
            locations,
            index,
        })
    }

    /// Metadata of the source this catalog was built from.
    #[must_use]
    pub fn meta(&self) -> &SourceMeta {
        &self.meta
    }

    /// All records in dataset order.
    #[must_use]
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// Look up a record.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] when no record has this identifier.
    pub fn get(&self, id: &LocationId) -> Result<&Location, CatalogError> {
        self.index
            .get(id)
            .and_then(|position| self.locations.get(*position))
            .ok_or_else(|| CatalogError::NotFound(id.clone()))
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// Whether the catalog holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Coordinates;

    struct FixedSource {
        meta: SourceMeta,
        locations: Vec<Location>,
    }

    impl LocationSource for FixedSource {
        fn meta(&self) -> &SourceMeta {
            &self.meta
        }

        fn locations(&self) -> &[Location] {
            &self.locations
        }
    }

    fn meta() -> SourceMeta {
        SourceMeta {
            id: String::from("fixture"),
            name: String::from("Fixture"),
        }
    }

    fn location(id: &str, latitude: f64, longitude: f64) -> Location {
        Location {
            id: LocationId::new(id),
            name: format!("Center {id}"),
            address: String::from("Somewhere"),
            services: String::from("Recycling"),
            accepted_items: vec![String::from("Laptops")],
            distance: String::from("1 km away"),
            coordinates: Coordinates {
                latitude,
                longitude,
            },
        }
    }

    #[test]
    fn builds_from_source_and_resolves_ids() {
        let source = FixedSource {
            meta: meta(),
            locations: vec![location("one", 1.0, 2.0), location("two", 3.0, 4.0)],
        };
        let catalog = LocationCatalog::new(&source).expect("valid catalog");

        assert_eq!(catalog.len(), 2, "record count");
        assert!(!catalog.is_empty(), "not empty");
        assert_eq!(catalog.meta().id, "fixture", "meta kept");
        let two = catalog.get(&LocationId::new("two")).expect("known id");
        assert_eq!(two.name, "Center two", "lookup by id");
        let order: Vec<&str> = catalog
            .locations()
            .iter()
            .map(|loc| loc.id.as_str())
            .collect();
        assert_eq!(order, vec!["one", "two"], "dataset order kept");
    }

    #[test]
    fn unknown_id_is_not_found() {
        let catalog = LocationCatalog::from_parts(meta(), vec![location("one", 0.0, 0.0)])
            .expect("valid catalog");
        let err = catalog
            .get(&LocationId::new("missing"))
            .expect_err("unknown id");
        assert_eq!(err, CatalogError::NotFound(LocationId::new("missing")), "error kind");
        assert_eq!(err.to_string(), "Location not found: missing", "message");
    }

    #[test]
    fn rejects_duplicate_ids() {
        let result = LocationCatalog::from_parts(
            meta(),
            vec![location("same", 0.0, 0.0), location("same", 1.0, 1.0)],
        );
        assert_eq!(
            result.err(),
            Some(CatalogError::DuplicateId(LocationId::new("same"))),
            "duplicate detected"
        );
    }

    #[test]
    fn rejects_blank_ids() {
        let result = LocationCatalog::from_parts(meta(), vec![location("  ", 0.0, 0.0)]);
        assert!(
            matches!(result, Err(CatalogError::MissingId { .. })),
            "blank id rejected"
        );
    }

    #[test]
    fn rejects_invalid_coordinates() {
        let result = LocationCatalog::from_parts(meta(), vec![location("far", 0.0, 200.0)]);
        assert!(
            matches!(result, Err(CatalogError::InvalidCoordinates { ref id, .. }) if id.as_str() == "far"),
            "longitude out of range"
        );
    }

    #[test]
    fn empty_source_is_allowed() {
        let catalog = LocationCatalog::from_parts(meta(), Vec::new()).expect("empty catalog");
        assert!(catalog.is_empty(), "no records");
    }
}
