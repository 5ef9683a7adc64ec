//! Concrete extraction backend implementations.

pub mod tagged;

pub use tagged::{SentenceTagger, TaggedSentenceExtractor};
