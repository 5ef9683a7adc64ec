//! Value types flowing through the extraction pipeline.

pub mod config;
pub mod extracted;
pub mod occurrence;
pub mod resolved;
pub mod sentence;

pub use config::ExtractionConfig;
pub use extracted::ExtractedEntities;
pub use occurrence::{EntityKind, LocationOccurrence, Occurrence, Sentiment, SentimentClass};
pub use resolved::{ResolvedEntity, ResolvedLocation, ResolvedOrganization, ResolvedPerson};
pub use sentence::{parse_tagged_sentences, TaggedSentence, TaggedToken, TokenTag};
