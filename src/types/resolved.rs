//! Resolved (deduplicated, canonical) entities.
//!
//! A [`ResolvedEntity`] aggregates the raw occurrences a disambiguation
//! strategy decided refer to the same real-world thing. Its canonical
//! name is derived on demand, never stored: merging a longer alias into
//! the entity changes what `name()` returns from then on, which the
//! substring strategy relies on.

use serde::{Deserialize, Serialize};

use super::occurrence::{LocationOccurrence, Occurrence};

/// A deduplicated entity aggregating one or more occurrences.
///
/// Invariant: holds at least one occurrence (construction requires a
/// seed and nothing ever removes occurrences).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedEntity {
    occurrences: Vec<Occurrence>,
}

/// A resolved person.
pub type ResolvedPerson = ResolvedEntity;

/// A resolved organization.
pub type ResolvedOrganization = ResolvedEntity;

impl ResolvedEntity {
    /// Create an entity seeded with its first occurrence.
    pub fn new(seed: Occurrence) -> Self {
        Self {
            occurrences: vec![seed],
        }
    }

    /// Attach a further occurrence of the same entity.
    ///
    /// Called only during a strategy's folding pass; the entity is
    /// read-only once handed to the caller.
    pub fn add_occurrence(&mut self, occurrence: Occurrence) {
        self.occurrences.push(occurrence);
    }

    /// The canonical display name: the longest occurrence text, ties
    /// broken by first-seen order. Recomputed on every call.
    pub fn name(&self) -> &str {
        let mut best = self.occurrences[0].text.as_str();
        for occ in &self.occurrences[1..] {
            if occ.text.len() > best.len() {
                best = &occ.text;
            }
        }
        best
    }

    /// All occurrences in arrival order.
    pub fn occurrences(&self) -> &[Occurrence] {
        &self.occurrences
    }

    /// Number of aggregated occurrences.
    pub fn occurrence_count(&self) -> usize {
        self.occurrences.len()
    }
}

/// A location occurrence geocoded against the gazetteer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedLocation {
    /// The mention this resolution is for.
    pub occurrence: LocationOccurrence,

    /// Identifier of the matched gazetteer record.
    pub gazetteer_id: String,

    /// Latitude of the matched record, decimal degrees.
    pub latitude: f64,

    /// Longitude of the matched record, decimal degrees.
    pub longitude: f64,

    /// Rank of the chosen candidate within the hit list (0 = best).
    pub rank: u32,
}
