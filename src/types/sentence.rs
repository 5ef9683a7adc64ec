//! Typed schema for NLP-tagged sentence payloads.
//!
//! Sentence-tagging services hand back a JSON object keyed by sentence
//! id, each value holding the tagged token stream for that sentence:
//!
//! ```json
//! { "0": { "tokens": [ { "word": "Nicusor", "tag": "PERSON" }, ... ] } }
//! ```
//!
//! The payload is deserialized through a strict model - unknown fields
//! and unrecognized tags are rejected up front instead of being cast
//! through untyped maps deeper in the pipeline.

use indexmap::IndexMap;
use serde::de::Error as _;
use serde::{Deserialize, Serialize};

use crate::error::{ExtractionError, Result};

/// Tag assigned to a single token by the sentence tagger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TokenTag {
    Person,
    Location,
    Organization,
    Other,
}

impl TokenTag {
    /// True for tags that name an entity kind (everything but `Other`).
    pub fn is_entity(&self) -> bool {
        !matches!(self, TokenTag::Other)
    }
}

/// One tagged token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TaggedToken {
    pub word: String,
    pub tag: TokenTag,
}

impl TaggedToken {
    pub fn new(word: impl Into<String>, tag: TokenTag) -> Self {
        Self {
            word: word.into(),
            tag,
        }
    }
}

/// One sentence's worth of tagged tokens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaggedSentence {
    /// Sentence id as assigned by the tagging service.
    pub id: u32,

    /// Tokens in sentence order.
    pub tokens: Vec<TaggedToken>,
}

impl TaggedSentence {
    pub fn new(id: u32, tokens: Vec<TaggedToken>) -> Self {
        Self { id, tokens }
    }
}

/// Wire-side sentence body, before the id key is folded in.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SentenceBody {
    tokens: Vec<TaggedToken>,
}

/// Parse a tagging-service payload of shape `{id: {tokens: [...]}}`.
///
/// Sentences come back in wire order. Fails on any shape mismatch:
/// non-numeric sentence keys, unknown fields, unrecognized tags.
pub fn parse_tagged_sentences(payload: &str) -> Result<Vec<TaggedSentence>> {
    let wire: IndexMap<String, SentenceBody> = serde_json::from_str(payload)?;

    let mut sentences = Vec::with_capacity(wire.len());
    for (key, body) in wire {
        let id: u32 = key.parse().map_err(|_| {
            ExtractionError::MalformedSentences(serde_json::Error::custom(format!(
                "sentence key '{key}' is not a numeric id"
            )))
        })?;
        sentences.push(TaggedSentence::new(id, body.tokens));
    }
    Ok(sentences)
}
