//! Disambiguation strategies - collapsing raw occurrences into
//! resolved entities.
//!
//! Both strategies fold occurrences left to right and merge each new
//! occurrence into the first existing entity that matches, so output is
//! a deterministic function of input order. The substring policy is
//! intentionally order-dependent and non-transitive: "Dan" arriving
//! before both "Ion Dan" and "Dan Popescu" merges into whichever was
//! created first. First-match-wins is the documented behavior, not an
//! accident to correct.

use crate::traits::DisambiguationStrategy;
use crate::types::{Occurrence, ResolvedEntity};

/// Equality-based deduplication, used for organizations.
///
/// A new occurrence joins an existing entity only when its case-folded
/// text equals the entity's case-folded canonical name. "Apple" and
/// "Apple Inc." stay separate.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactMatchStrategy;

impl ExactMatchStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl DisambiguationStrategy for ExactMatchStrategy {
    fn name(&self) -> &str {
        "exact-match"
    }

    fn select(&self, occurrences: Vec<Occurrence>) -> Vec<ResolvedEntity> {
        fold(occurrences, |text, name| text == name)
    }
}

/// Either-direction substring containment, used for persons.
///
/// "Dan" merges into "Nicușor Dan" (or the reverse, depending on
/// arrival order) on the assumption that shorter mentions abbreviate
/// fuller ones in the same document. Comparisons always run against the
/// entity's current canonical name, so once a longer alias is merged
/// in, later occurrences are matched against it.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubstringMatchStrategy;

impl SubstringMatchStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl DisambiguationStrategy for SubstringMatchStrategy {
    fn name(&self) -> &str {
        "substring-match"
    }

    fn select(&self, occurrences: Vec<Occurrence>) -> Vec<ResolvedEntity> {
        fold(occurrences, |text, name| {
            text.contains(name) || name.contains(text)
        })
    }
}

/// Left-to-right fold shared by both policies. `matches` receives the
/// case-folded occurrence text and the case-folded canonical name of an
/// existing entity, in creation order; the first hit wins.
fn fold(
    occurrences: Vec<Occurrence>,
    matches: impl Fn(&str, &str) -> bool,
) -> Vec<ResolvedEntity> {
    let mut resolved: Vec<ResolvedEntity> = Vec::new();

    for occurrence in occurrences {
        let text = occurrence.text.to_lowercase();
        let hit = resolved
            .iter()
            .position(|entity| matches(&text, &entity.name().to_lowercase()));
        match hit {
            Some(index) => resolved[index].add_occurrence(occurrence),
            None => resolved.push(ResolvedEntity::new(occurrence)),
        }
    }

    resolved
}

#[cfg(test)]
mod tests {
    use super::*;

    fn occurrences(texts: &[&str]) -> Vec<Occurrence> {
        texts.iter().map(|t| Occurrence::unpositioned(*t)).collect()
    }

    #[test]
    fn test_exact_match_is_case_insensitive() {
        let resolved = ExactMatchStrategy.select(occurrences(&["ACME", "acme"]));
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].occurrence_count(), 2);
    }

    #[test]
    fn test_exact_match_identical_text_idempotence() {
        let resolved = ExactMatchStrategy.select(occurrences(&["Apple", "Apple"]));
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].occurrence_count(), 2);
    }

    #[test]
    fn test_exact_match_never_merges_substrings() {
        let resolved = ExactMatchStrategy.select(occurrences(&["Apple", "Apple Inc."]));
        assert_eq!(resolved.len(), 2);
    }

    #[test]
    fn test_substring_merges_abbreviation_into_full_name() {
        let resolved = SubstringMatchStrategy.select(occurrences(&["Nicușor Dan", "Dan"]));
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].name(), "Nicușor Dan");
        assert_eq!(resolved[0].occurrence_count(), 2);
    }

    #[test]
    fn test_substring_name_recomputed_after_longer_alias() {
        // Reversed arrival order: the short form seeds the entity, the
        // full name merges in afterwards and takes over as canonical.
        let resolved = SubstringMatchStrategy.select(occurrences(&["Dan", "Nicușor Dan"]));
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].name(), "Nicușor Dan");
    }

    #[test]
    fn test_substring_first_match_wins() {
        // "Dan" seeds an entity; "Ion Dan" merges into it and becomes
        // canonical; "Dan Popescu" no longer matches and seeds its own.
        let resolved =
            SubstringMatchStrategy.select(occurrences(&["Dan", "Ion Dan", "Dan Popescu"]));
        assert_eq!(resolved.len(), 2);
        assert_eq!(resolved[0].name(), "Ion Dan");
        assert_eq!(resolved[1].name(), "Dan Popescu");
    }

    #[test]
    fn test_totality_no_occurrence_dropped() {
        let input = occurrences(&["a", "ab", "abc", "b", "xyz", "a"]);
        let count = input.len();
        for resolved in [
            ExactMatchStrategy.select(input.clone()),
            SubstringMatchStrategy.select(input),
        ] {
            let total: usize = resolved.iter().map(ResolvedEntity::occurrence_count).sum();
            assert_eq!(total, count);
        }
    }

    #[test]
    fn test_log_stats_does_not_panic() {
        let resolved = ExactMatchStrategy.select(occurrences(&["ACME"]));
        ExactMatchStrategy.log_stats(&resolved);
        SubstringMatchStrategy.log_stats(&[]);
    }
}
