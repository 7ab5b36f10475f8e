//! Domain data structures for collection centers, facets, and map viewports.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Service labels offered as chips in the search screen.
pub const SERVICE_TYPES: [&str; 4] = ["Recycling", "Donation", "Repair", "Buy Back"];

/// Accepted item labels offered as chips in the search screen.
pub const ITEM_TYPES: [&str; 4] = ["Mobile Phones", "Laptops", "Batteries", "Monitors"];

/// Map center used when no location is available.
pub const FALLBACK_CENTER: Coordinates = Coordinates {
    latitude: 37.779_26,
    longitude: -122.419_2,
};

/// Latitude/longitude span of the initial map viewport, in degrees.
pub const DEFAULT_REGION_SPAN: f64 = 0.06;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
/// Identifier for a collection center, unique within a source.
pub struct LocationId(pub String);

impl LocationId {
    /// Create an identifier from any string-like value.
    #[must_use]
    pub fn new<S: Into<String>>(id: S) -> Self {
        Self(id.into())
    }

    /// Borrow the raw identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LocationId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
/// Geographic position in decimal degrees.
pub struct Coordinates {
    /// Latitude, positive north.
    pub latitude: f64,
    /// Longitude, positive east.
    pub longitude: f64,
}

impl Coordinates {
    /// Whether both components are finite and inside their valid ranges.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// A single e-waste collection center.
///
/// Records are defined once when a source is built and never mutated afterwards.
/// Coordinates only place map markers; `distance` is a precomputed display label.
pub struct Location {
    /// Unique identifier.
    pub id: LocationId,
    /// Display name.
    pub name: String,
    /// Street address for display.
    pub address: String,
    /// Free-text, comma-separated list of offered services.
    pub services: String,
    /// Item categories the center takes, in display order.
    pub accepted_items: Vec<String>,
    /// Distance label such as "2.3 km away".
    pub distance: String,
    /// Marker position.
    pub coordinates: Coordinates,
}

impl Location {
    /// Text searched by free-text queries: name, address, services and items joined by spaces.
    #[must_use]
    pub fn search_text(&self) -> String {
        let mut parts = vec![
            self.name.as_str(),
            self.address.as_str(),
            self.services.as_str(),
        ];
        parts.extend(self.accepted_items.iter().map(String::as_str));
        parts.join(" ")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Filterable attribute categories.
pub enum Facet {
    /// Services such as recycling or repair.
    Service,
    /// Item categories such as laptops or batteries.
    AcceptedItem,
}

impl Facet {
    /// Fixed candidate values presented as chips.
    #[must_use]
    pub fn candidates(self) -> &'static [&'static str] {
        match self {
            Facet::Service => &SERVICE_TYPES,
            Facet::AcceptedItem => &ITEM_TYPES,
        }
    }
}

impl fmt::Display for Facet {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let title = match self {
            Facet::Service => "Service Types",
            Facet::AcceptedItem => "Accepted Items",
        };
        write!(formatter, "{title}")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Metadata describing a location source.
pub struct SourceMeta {
    /// Unique identifier.
    pub id: String,
    /// Human-friendly name.
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
/// Initial viewport of the map screen.
pub struct MapRegion {
    /// Center of the viewport.
    pub center: Coordinates,
    /// Full latitude span in degrees.
    pub latitude_delta: f64,
    /// Full longitude span in degrees.
    pub longitude_delta: f64,
}

impl MapRegion {
    /// Viewport centered on the first location, or on [`FALLBACK_CENTER`] when there is none.
    #[must_use]
    pub fn around<'a, I>(locations: I) -> Self
    where
        I: IntoIterator<Item = &'a Location>,
    {
        let center = locations
            .into_iter()
            .next()
            .map_or(FALLBACK_CENTER, |location| location.coordinates);
        Self {
            center,
            latitude_delta: DEFAULT_REGION_SPAN,
            longitude_delta: DEFAULT_REGION_SPAN,
        }
    }

    /// Inclusive longitude bounds, suitable for a canvas x axis.
    #[must_use]
    pub fn longitude_bounds(&self) -> [f64; 2] {
        let half = self.longitude_delta / 2.0;
        [self.center.longitude - half, self.center.longitude + half]
    }

    /// Inclusive latitude bounds, suitable for a canvas y axis.
    #[must_use]
    pub fn latitude_bounds(&self) -> [f64; 2] {
        let half = self.latitude_delta / 2.0;
        [self.center.latitude - half, self.center.latitude + half]
    }

    /// Whether the position falls inside the viewport.
    #[must_use]
    pub fn contains(&self, position: Coordinates) -> bool {
        let [west, east] = self.longitude_bounds();
        let [south, north] = self.latitude_bounds();
        (west..=east).contains(&position.longitude) && (south..=north).contains(&position.latitude)
    }
}
