//! Occurrence value types - a single mention of an entity within a text.
//!
//! Occurrences are immutable once created: the extraction pipeline only
//! ever moves them between collections, it never rewrites them. A
//! location mention is a base [`Occurrence`] composed with an optional
//! sentence id rather than a subtype, so the same value flows through
//! merging and disambiguation regardless of kind.

use serde::{Deserialize, Serialize};

/// Classification of an entity mention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Person,
    Organization,
    Location,
}

impl EntityKind {
    /// Human-readable label used in logs.
    pub fn label(&self) -> &'static str {
        match self {
            EntityKind::Person => "person",
            EntityKind::Organization => "organization",
            EntityKind::Location => "location",
        }
    }
}

/// Sentiment class attached to a mention by a backend that scores tone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SentimentClass {
    Negative,
    Neutral,
    Positive,
}

/// Sentiment attached to a single mention.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sentiment {
    /// Polarity class.
    pub class: SentimentClass,

    /// Backend-specific confidence or magnitude score.
    pub score: f32,
}

impl Sentiment {
    pub fn new(class: SentimentClass, score: f32) -> Self {
        Self { class, score }
    }
}

/// A single mention of an entity within a text.
///
/// Invariants: `text` is non-empty; `position` is a character offset into
/// the source text, `0` when the backend does not track offsets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Occurrence {
    /// The literal mention text as it appeared in the source.
    pub text: String,

    /// Character offset of the mention, `0` if unknown.
    pub position: usize,

    /// Sentiment, when the producing backend scores it.
    pub sentiment: Option<Sentiment>,
}

impl Occurrence {
    /// Create an occurrence at a known offset.
    pub fn new(text: impl Into<String>, position: usize) -> Self {
        let text = text.into();
        debug_assert!(!text.is_empty(), "occurrence text must be non-empty");
        Self {
            text,
            position,
            sentiment: None,
        }
    }

    /// Create an occurrence with no tracked offset.
    pub fn unpositioned(text: impl Into<String>) -> Self {
        Self::new(text, 0)
    }

    /// Attach sentiment.
    pub fn with_sentiment(mut self, sentiment: Sentiment) -> Self {
        self.sentiment = Some(sentiment);
        self
    }
}

/// A location mention: a base occurrence plus the id of the sentence it
/// was extracted from, when the backend groups mentions by sentence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationOccurrence {
    /// The underlying mention.
    pub occurrence: Occurrence,

    /// Id of the originating sentence, if tracked.
    pub sentence_id: Option<u32>,
}

impl LocationOccurrence {
    pub fn new(occurrence: Occurrence) -> Self {
        Self {
            occurrence,
            sentence_id: None,
        }
    }

    /// Tag with the originating sentence.
    pub fn with_sentence_id(mut self, sentence_id: u32) -> Self {
        self.sentence_id = Some(sentence_id);
        self
    }

    /// The literal mention text.
    pub fn text(&self) -> &str {
        &self.occurrence.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unpositioned_defaults_to_zero() {
        let occ = Occurrence::unpositioned("Bucharest");
        assert_eq!(occ.position, 0);
        assert!(occ.sentiment.is_none());
    }

    #[test]
    fn test_with_sentiment() {
        let occ = Occurrence::new("ACME", 12)
            .with_sentiment(Sentiment::new(SentimentClass::Negative, 0.8));
        assert_eq!(occ.sentiment.unwrap().class, SentimentClass::Negative);
    }

    #[test]
    fn test_location_sentence_tag() {
        let loc = LocationOccurrence::new(Occurrence::unpositioned("Paris")).with_sentence_id(3);
        assert_eq!(loc.sentence_id, Some(3));
        assert_eq!(loc.text(), "Paris");
    }
}
