//! Token merging - turning per-token tag annotations into entity
//! occurrences.
//!
//! Sentence taggers label each token independently; a mention spanning
//! several tokens ("Nicusor" "Dan", both `PERSON`) comes back as a run
//! of identically-tagged tokens. The merger joins each maximal run of
//! adjacent same-tag tokens into one occurrence, resetting at sentence
//! boundaries so a run never crosses sentences.

use crate::types::{
    ExtractedEntities, LocationOccurrence, Occurrence, TaggedSentence, TokenTag,
};

/// Merge tagged tokens into entity occurrences, one occurrence per
/// maximal run of adjacent tokens sharing the same non-`OTHER` tag.
///
/// Positions default to `0`; taggers in this pipeline do not report
/// character offsets. Location occurrences carry their sentence id.
pub fn merge_tagged_tokens(sentences: &[TaggedSentence]) -> ExtractedEntities {
    let mut entities = ExtractedEntities::new();

    for sentence in sentences {
        let mut pending: Option<(String, TokenTag)> = None;

        for token in &sentence.tokens {
            if token.word.is_empty() {
                continue;
            }
            match pending.as_mut() {
                // Span continuation: same entity tag as the open span.
                Some((text, tag)) if *tag == token.tag => {
                    text.push(' ');
                    text.push_str(&token.word);
                }
                _ => {
                    flush(&mut entities, pending.take(), sentence.id);
                    if token.tag.is_entity() {
                        pending = Some((token.word.clone(), token.tag));
                    }
                }
            }
        }

        // A span still open at the end of the sentence is complete.
        flush(&mut entities, pending.take(), sentence.id);
    }

    entities
}

fn flush(entities: &mut ExtractedEntities, pending: Option<(String, TokenTag)>, sentence_id: u32) {
    let Some((text, tag)) = pending else {
        return;
    };
    let occurrence = Occurrence::unpositioned(text);
    match tag {
        TokenTag::Person => entities.add_person(occurrence),
        TokenTag::Organization => entities.add_organization(occurrence),
        TokenTag::Location => entities.add_location(
            LocationOccurrence::new(occurrence).with_sentence_id(sentence_id),
        ),
        TokenTag::Other => {}
    }
}
