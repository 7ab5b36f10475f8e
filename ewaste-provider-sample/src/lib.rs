//! Built-in source with three San Francisco collection centers.

use std::sync::Arc;

use ewaste_core::{
    model::{Coordinates, Location, LocationId, SourceMeta},
    ports::LocationSource,
};

/// Static record set compiled into the binary.
pub struct SampleSource {
    meta: SourceMeta,
    locations: Vec<Location>,
}

impl SampleSource {
    /// Create the source with its embedded records.
    #[must_use]
    pub fn new() -> Self {
        Self {
            meta: source_meta(),
            locations: sample_locations(),
        }
    }
}

impl Default for SampleSource {
    fn default() -> Self {
        Self::new()
    }
}

impl LocationSource for SampleSource {
    fn meta(&self) -> &SourceMeta {
        &self.meta
    }

    fn locations(&self) -> &[Location] {
        &self.locations
    }
}

/// Build the shared source handle used by clients.
#[must_use]
pub fn source() -> Arc<dyn LocationSource> {
    Arc::new(SampleSource::new())
}

fn source_meta() -> SourceMeta {
    SourceMeta {
        id: String::from("sample"),
        name: String::from("San Francisco sample centers"),
    }
}

fn sample_locations() -> Vec<Location> {
    vec![
        center(
            "greentech",
            "GreenTech Recycling Center",
            "1234 Environmental Ave, San Francisco, CA",
            "Recycling, Donation, Buy Back",
            &["Mobile Phones", "Laptops", "Batteries", "Monitors"],
            "2.3 km away",
            (37.779_26, -122.419_2),
        ),
        center(
            "ecodrop",
            "EcoDrop Mobile Collection",
            "5678 Green Street, San Francisco, CA",
            "Pickup, Drop-off",
            &["Mobile Phones", "Laptops", "Batteries"],
            "1.8 km away",
            (37.771_9, -122.431_2),
        ),
        center(
            "techrepair",
            "TechRepair Plus",
            "9012 Tech Boulevard, San Francisco, CA",
            "Repair, Recycling, Buy Back",
            &["Laptops", "Monitors"],
            "3.1 km away",
            (37.788_5, -122.407_5),
        ),
    ]
}

fn center(
    id: &str,
    name: &str,
    address: &str,
    services: &str,
    accepted_items: &[&str],
    distance: &str,
    (latitude, longitude): (f64, f64),
) -> Location {
    Location {
        id: LocationId::new(id),
        name: name.to_owned(),
        address: address.to_owned(),
        services: services.to_owned(),
        accepted_items: accepted_items.iter().map(|item| (*item).to_owned()).collect(),
        distance: distance.to_owned(),
        coordinates: Coordinates {
            latitude,
            longitude,
        },
    }
}
