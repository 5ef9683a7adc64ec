//! The mutable aggregate produced by one extraction pass.
//!
//! Each backend returns its own [`ExtractedEntities`]; the registry folds
//! them together with [`ExtractedEntities::merge`]. Merging never
//! deduplicates - collapsing equivalent mentions is the disambiguation
//! strategies' job, and it depends on arrival order, so the sequences
//! here stay append-only and ordered.

use serde::{Deserialize, Serialize};

use super::occurrence::{LocationOccurrence, Occurrence};

/// All entity mentions produced by one extraction pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedEntities {
    /// Person mentions in extraction order.
    pub persons: Vec<Occurrence>,

    /// Organization mentions in extraction order.
    pub organizations: Vec<Occurrence>,

    /// Location mentions in extraction order.
    pub locations: Vec<LocationOccurrence>,
}

impl ExtractedEntities {
    /// Create an empty result set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append all of `other`'s mentions onto `self`, preserving order.
    ///
    /// Later results land after earlier ones, so folding backend outputs
    /// left-to-right in registration order keeps "first seen" stable for
    /// the disambiguation pass.
    pub fn merge(&mut self, other: ExtractedEntities) {
        self.persons.extend(other.persons);
        self.organizations.extend(other.organizations);
        self.locations.extend(other.locations);
    }

    pub fn add_person(&mut self, occurrence: Occurrence) {
        self.persons.push(occurrence);
    }

    pub fn add_organization(&mut self, occurrence: Occurrence) {
        self.organizations.push(occurrence);
    }

    pub fn add_location(&mut self, occurrence: LocationOccurrence) {
        self.locations.push(occurrence);
    }

    /// Total mention count across all kinds.
    pub fn len(&self) -> usize {
        self.persons.len() + self.organizations.len() + self.locations.len()
    }

    /// True when no backend produced any mention.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
