//! Location resolution - geocoding location mentions against the
//! gazetteer.
//!
//! The resolver is built once at startup. A missing or corrupt index
//! directory degrades it to "unavailable" (logged once) instead of
//! failing the caller: extraction keeps working, locations simply stop
//! resolving, and callers consult [`LocationResolver::is_available`]
//! rather than catching errors. An occurrence with no candidates is a
//! normal outcome and is omitted from the output, not reported.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::types::{LocationOccurrence, ResolvedLocation};

use super::index::{GazetteerIndex, GazetteerRecord};

/// Jaro-Winkler floor for fuzzy candidates.
const FUZZY_THRESHOLD: f64 = 0.85;

/// Quality of an exact match on a record's primary name.
const QUALITY_PRIMARY: f64 = 1.0;

/// Quality of an exact match on an alternate name.
const QUALITY_ALTERNATE: f64 = 0.9;

/// Scale applied to fuzzy similarities so near-misses always rank below
/// exact hits of the same record class.
const QUALITY_FUZZY_SCALE: f64 = 0.8;

/// A ranked gazetteer candidate for one looked-up name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GazetteerCandidate {
    /// The matched geographic record.
    pub record: GazetteerRecord,

    /// Combined relevance score (textual quality x importance).
    pub score: f64,

    /// Position in the ranked hit list (0 = best).
    pub rank: u32,
}

/// Geocoder over a loaded gazetteer index.
pub struct LocationResolver {
    index: Option<GazetteerIndex>,
}

impl LocationResolver {
    /// Wrap a loaded index.
    pub fn new(index: GazetteerIndex) -> Self {
        Self { index: Some(index) }
    }

    /// A resolver with no index; every resolution yields nothing.
    pub fn unavailable() -> Self {
        Self { index: None }
    }

    /// Load the index from `dir`, degrading to an unavailable resolver
    /// on any load failure.
    pub fn from_directory(dir: &Path) -> Self {
        match GazetteerIndex::load(dir) {
            Ok(index) => Self::new(index),
            Err(e) => {
                warn!("gazetteer unavailable, location resolution disabled: {}", e);
                Self::unavailable()
            }
        }
    }

    /// Health flag: distinguishes "no entities found" from "resolver
    /// never had an index to search".
    pub fn is_available(&self) -> bool {
        self.index.is_some()
    }

    /// Ranked candidates for a place name, best first, at most
    /// `max_hit_depth` entries.
    ///
    /// Score combines textual match quality (exact primary > exact
    /// alternate > fuzzy) with an importance weight derived from
    /// population. Ties prefer the larger place, then index load order.
    pub fn lookup(&self, name: &str, max_hit_depth: usize, fuzzy: bool) -> Vec<GazetteerCandidate> {
        let Some(index) = &self.index else {
            return Vec::new();
        };

        // (record idx, match quality), exact hits first in load order.
        let mut hits: Vec<(usize, f64)> = index
            .entries(name)
            .iter()
            .map(|entry| {
                let quality = if entry.primary {
                    QUALITY_PRIMARY
                } else {
                    QUALITY_ALTERNATE
                };
                (entry.record, quality)
            })
            .collect();

        if fuzzy {
            let folded = name.to_lowercase();
            for (candidate_name, entries) in index.name_table() {
                if candidate_name == folded {
                    continue;
                }
                let similarity = strsim::jaro_winkler(&folded, candidate_name);
                if similarity < FUZZY_THRESHOLD {
                    continue;
                }
                for entry in entries {
                    let class = if entry.primary {
                        QUALITY_PRIMARY
                    } else {
                        QUALITY_ALTERNATE
                    };
                    hits.push((entry.record, class * similarity * QUALITY_FUZZY_SCALE));
                }
            }
        }

        let mut candidates: Vec<(f64, &GazetteerRecord)> = hits
            .into_iter()
            .map(|(idx, quality)| {
                let record = index.record(idx);
                (quality * (1.0 + importance(record.population)), record)
            })
            .collect();

        // Stable sort: equal score and population fall back to load order.
        candidates.sort_by(|(score_a, rec_a), (score_b, rec_b)| {
            score_b
                .partial_cmp(score_a)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| rec_b.population.cmp(&rec_a.population))
        });

        let mut seen = std::collections::HashSet::new();
        candidates
            .into_iter()
            .filter(|(_, record)| seen.insert(record.id.clone()))
            .take(max_hit_depth)
            .enumerate()
            .map(|(rank, (score, record))| GazetteerCandidate {
                record: record.clone(),
                score,
                rank: rank as u32,
            })
            .collect()
    }

    /// Geocode each occurrence to its best candidate.
    ///
    /// Unresolvable occurrences are omitted. `max_results` caps the
    /// output length; a negative value means unlimited.
    pub fn resolve(
        &self,
        occurrences: &[LocationOccurrence],
        max_hit_depth: usize,
        max_results: i64,
        fuzzy: bool,
    ) -> Vec<ResolvedLocation> {
        if self.index.is_none() {
            debug!(
                mentions = occurrences.len(),
                "gazetteer unavailable; skipping location resolution"
            );
            return Vec::new();
        }

        let mut resolved = Vec::new();
        for occurrence in occurrences {
            if max_results >= 0 && resolved.len() as i64 >= max_results {
                break;
            }
            let candidates = self.lookup(occurrence.text(), max_hit_depth, fuzzy);
            match candidates.into_iter().next() {
                Some(best) => resolved.push(ResolvedLocation {
                    occurrence: occurrence.clone(),
                    gazetteer_id: best.record.id,
                    latitude: best.record.latitude,
                    longitude: best.record.longitude,
                    rank: best.rank,
                }),
                None => {
                    debug!(mention = occurrence.text(), "no gazetteer match");
                }
            }
        }
        resolved
    }
}

/// Log-scaled population weight in `[0, ~1]`.
fn importance(population: u64) -> f64 {
    ((population + 1) as f64).log10() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Occurrence;

    fn record(id: &str, name: &str, lat: f64, lng: f64, population: u64) -> GazetteerRecord {
        GazetteerRecord {
            id: id.into(),
            name: name.into(),
            latitude: lat,
            longitude: lng,
            population,
        }
    }

    fn paris_resolver() -> LocationResolver {
        LocationResolver::new(GazetteerIndex::from_records([
            (
                record("2988507", "Paris", 48.85341, 2.3488, 2_138_551),
                "Lutetia".to_string(),
            ),
            (
                record("4717560", "Paris", 33.66094, -95.55551, 24_171),
                String::new(),
            ),
        ]))
    }

    fn mention(text: &str) -> LocationOccurrence {
        LocationOccurrence::new(Occurrence::unpositioned(text))
    }

    #[test]
    fn test_population_ranks_equal_quality_matches() {
        let resolver = paris_resolver();
        let candidates = resolver.lookup("Paris", 2, false);
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].record.id, "2988507");
        assert_eq!(candidates[0].rank, 0);
        assert_eq!(candidates[1].record.id, "4717560");
        assert_eq!(candidates[1].rank, 1);
    }

    #[test]
    fn test_resolve_binds_best_candidate() {
        let resolver = paris_resolver();
        let resolved = resolver.resolve(&[mention("Paris")], 2, -1, false);
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].gazetteer_id, "2988507");
        assert!((resolved[0].latitude - 48.85341).abs() < 1e-9);
        assert_eq!(resolved[0].rank, 0);
    }

    #[test]
    fn test_hit_depth_limits_candidates() {
        let resolver = paris_resolver();
        assert_eq!(resolver.lookup("Paris", 1, false).len(), 1);
    }

    #[test]
    fn test_unresolved_mentions_are_omitted() {
        let resolver = paris_resolver();
        let resolved = resolver.resolve(&[mention("Atlantis"), mention("Paris")], 2, -1, false);
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].occurrence.text(), "Paris");
    }

    #[test]
    fn test_max_results_caps_output() {
        let resolver = paris_resolver();
        let mentions = [mention("Paris"), mention("Paris"), mention("Paris")];
        assert_eq!(resolver.resolve(&mentions, 2, 2, false).len(), 2);
        assert_eq!(resolver.resolve(&mentions, 2, -1, false).len(), 3);
        assert_eq!(resolver.resolve(&mentions, 2, 0, false).len(), 0);
    }

    #[test]
    fn test_alternate_name_resolves_at_lower_quality() {
        let resolver = paris_resolver();
        let candidates = resolver.lookup("Lutetia", 5, false);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].record.id, "2988507");
        let exact = resolver.lookup("Paris", 5, false);
        assert!(candidates[0].score < exact[0].score);
    }

    #[test]
    fn test_fuzzy_includes_near_misses_below_exact() {
        let resolver = paris_resolver();
        assert!(resolver.lookup("Pariss", 5, false).is_empty());

        let fuzzy = resolver.lookup("Pariss", 5, true);
        assert_eq!(fuzzy.len(), 2);
        // Near-miss candidates rank below what an exact hit would score.
        let exact = resolver.lookup("Paris", 5, false);
        assert!(fuzzy[0].score < exact[0].score);
        assert_eq!(fuzzy[0].record.id, "2988507");
    }

    #[test]
    fn test_unavailable_resolver_reports_and_returns_empty() {
        let dir = tempfile::tempdir().unwrap();
        let resolver = LocationResolver::from_directory(&dir.path().join("missing"));
        assert!(!resolver.is_available());
        assert!(resolver.resolve(&[mention("Paris")], 2, -1, false).is_empty());
        assert!(resolver.lookup("Paris", 2, false).is_empty());
    }
}
