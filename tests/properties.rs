//! Property tests for merge ordering and disambiguation totality.

use entities::{
    DisambiguationStrategy, ExactMatchStrategy, ExtractedEntities, Occurrence, ResolvedEntity,
    SubstringMatchStrategy,
};
use proptest::prelude::*;

fn occurrences(texts: &[String]) -> Vec<Occurrence> {
    texts
        .iter()
        .map(|t| Occurrence::unpositioned(t.clone()))
        .collect()
}

fn backend_result(texts: &[String]) -> ExtractedEntities {
    let mut entities = ExtractedEntities::new();
    for occurrence in occurrences(texts) {
        entities.add_person(occurrence);
    }
    entities
}

fn person_texts(entities: &ExtractedEntities) -> Vec<String> {
    entities.persons.iter().map(|p| p.text.clone()).collect()
}

/// Arbitrary mention text: one or two short words.
fn mention() -> impl Strategy<Value = String> {
    "[A-Za-z]{1,10}( [A-Za-z]{1,10})?"
}

proptest! {
    /// Folding backend outputs in any registration order produces the
    /// concatenation of those outputs in that same order.
    #[test]
    fn merge_matches_concatenation_for_all_permutations(
        a in prop::collection::vec(mention(), 0..8),
        b in prop::collection::vec(mention(), 0..8),
        c in prop::collection::vec(mention(), 0..8),
    ) {
        let backends = [&a, &b, &c];
        let permutations = [
            [0, 1, 2], [0, 2, 1], [1, 0, 2], [1, 2, 0], [2, 0, 1], [2, 1, 0],
        ];

        for order in permutations {
            let mut merged = ExtractedEntities::new();
            let mut expected = Vec::new();
            for &i in &order {
                merged.merge(backend_result(backends[i]));
                expected.extend(backends[i].iter().cloned());
            }
            prop_assert_eq!(person_texts(&merged), expected);
        }
    }

    /// Merge is associative: (A + B) + C == A + (B + C).
    #[test]
    fn merge_is_associative(
        a in prop::collection::vec(mention(), 0..8),
        b in prop::collection::vec(mention(), 0..8),
        c in prop::collection::vec(mention(), 0..8),
    ) {
        let mut left = backend_result(&a);
        left.merge(backend_result(&b));
        left.merge(backend_result(&c));

        let mut right_tail = backend_result(&b);
        right_tail.merge(backend_result(&c));
        let mut right = backend_result(&a);
        right.merge(right_tail);

        prop_assert_eq!(left, right);
    }

    /// Every input occurrence ends up in exactly one resolved entity.
    #[test]
    fn disambiguation_is_total(texts in prop::collection::vec(mention(), 1..24)) {
        let input = occurrences(&texts);
        for resolved in [
            ExactMatchStrategy.select(input.clone()),
            SubstringMatchStrategy.select(input.clone()),
        ] {
            let total: usize = resolved.iter().map(ResolvedEntity::occurrence_count).sum();
            prop_assert_eq!(total, input.len());

            // No silent duplication either: the multiset of texts survives.
            let mut output: Vec<&str> = resolved
                .iter()
                .flat_map(|e| e.occurrences().iter().map(|o| o.text.as_str()))
                .collect();
            let mut expected: Vec<&str> = texts.iter().map(String::as_str).collect();
            output.sort_unstable();
            expected.sort_unstable();
            prop_assert_eq!(output, expected);
        }
    }

    /// Feeding the same organization text twice always collapses to one
    /// entity with both occurrences.
    #[test]
    fn exact_match_idempotence(text in mention()) {
        let resolved = ExactMatchStrategy.select(occurrences(&[text.clone(), text]));
        prop_assert_eq!(resolved.len(), 1);
        prop_assert_eq!(resolved[0].occurrence_count(), 2);
    }
}
