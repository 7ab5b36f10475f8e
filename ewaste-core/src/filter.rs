//! Multi-criteria location filter.
//!
//! All active criteria are AND-combined; an empty criterion passes every record.
//! The filter is a pure function and is re-run in full whenever the criteria change.

use serde::{Deserialize, Serialize};

use crate::model::{Facet, Location};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Set of selected facet labels that remembers selection order.
pub struct FacetSelection {
    labels: Vec<String>,
}

impl FacetSelection {
    /// Build a selection from labels, dropping repeats.
    #[must_use]
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut selection = Self::default();
        for label in labels {
            selection.insert(label);
        }
        selection
    }

    /// Add a label; returns `false` when it was already selected.
    pub fn insert<S: Into<String>>(&mut self, label: S) -> bool {
        let label = label.into();
        if self.contains(&label) {
            return false;
        }
        self.labels.push(label);
        true
    }

    /// Select the label if absent, deselect it otherwise. Returns the new state.
    pub fn toggle(&mut self, label: &str) -> bool {
        if let Some(position) = self.labels.iter().position(|selected| selected == label) {
            self.labels.remove(position);
            false
        } else {
            self.labels.push(label.to_owned());
            true
        }
    }

    /// Whether the exact label is selected.
    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        self.labels.iter().any(|selected| selected == label)
    }

    /// Whether nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Number of selected labels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Selected labels in selection order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }

    /// Deselect everything.
    pub fn clear(&mut self) {
        self.labels.clear();
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Complete filter state owned by the search screen.
pub struct FilterCriteria {
    /// Free-text query, matched against name, address, services and items.
    pub query: String,
    /// Selected service labels; substring match against the services text.
    pub services: FacetSelection,
    /// Selected item labels; exact match against accepted items.
    pub items: FacetSelection,
}

impl FilterCriteria {
    /// Criteria with only a free-text query.
    #[must_use]
    pub fn with_query<S: Into<String>>(query: S) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    /// Returns true if no criterion is active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.query.trim().is_empty() && self.services.is_empty() && self.items.is_empty()
    }

    /// Selection for the given facet.
    #[must_use]
    pub fn selection(&self, facet: Facet) -> &FacetSelection {
        match facet {
            Facet::Service => &self.services,
            Facet::AcceptedItem => &self.items,
        }
    }

    /// Mutable selection for the given facet.
    pub fn selection_mut(&mut self, facet: Facet) -> &mut FacetSelection {
        match facet {
            Facet::Service => &mut self.services,
            Facet::AcceptedItem => &mut self.items,
        }
    }

    /// Reset query and both selections.
    pub fn clear(&mut self) {
        self.query.clear();
        self.services.clear();
        self.items.clear();
    }

    /// Check a single location against every active criterion.
    #[must_use]
    pub fn matches(&self, location: &Location) -> bool {
        matches_query(location, &self.query)
            && matches_services(location, &self.services)
            && matches_items(location, &self.items)
    }
}

/// Keep the locations that match `criteria`, preserving their relative order.
pub fn filter_locations<'a, I>(locations: I, criteria: &FilterCriteria) -> Vec<&'a Location>
where
    I: IntoIterator<Item = &'a Location>,
{
    locations
        .into_iter()
        .filter(|location| criteria.matches(location))
        .collect()
}

fn matches_query(location: &Location, query: &str) -> bool {
    let needle = query.trim();
    if needle.is_empty() {
        return true;
    }
    location
        .search_text()
        .to_lowercase()
        .contains(&needle.to_lowercase())
}

// Substring on purpose: "Repair" also matches inside longer words.
fn matches_services(location: &Location, selected: &FacetSelection) -> bool {
    if selected.is_empty() {
        return true;
    }
    let services = location.services.to_lowercase();
    selected
        .iter()
        .any(|label| services.contains(&label.to_lowercase()))
}

fn matches_items(location: &Location, selected: &FacetSelection) -> bool {
    if selected.is_empty() {
        return true;
    }
    selected.iter().any(|label| {
        let wanted = label.to_lowercase();
        location
            .accepted_items
            .iter()
            .any(|item| item.to_lowercase() == wanted)
    })
}
