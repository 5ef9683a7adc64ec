//! Named-Entity Extraction Aggregation Library
//!
//! Merges raw entity occurrences (people, organizations, locations)
//! from any number of independent extraction backends, collapses
//! duplicate and overlapping mentions into canonical entities, and
//! geocodes resolved location names against a gazetteer index.
//!
//! # Design Philosophy
//!
//! - Backends are opaque: anything that produces occurrence lists plugs
//!   in behind the [`Extractor`] trait
//! - Merging is ordered and never deduplicates; disambiguation owns
//!   dedup and depends on arrival order
//! - Best-effort per request: one failing backend or an unresolvable
//!   mention never fails the whole extraction
//! - Explicit lifecycle: everything process-wide is built once at
//!   startup and passed by handle, no lazy singletons
//!
//! # Usage
//!
//! ```rust,ignore
//! use entities::{ExtractionConfig, ExtractionService};
//! use entities::testing::MockExtractor;
//!
//! let config = ExtractionConfig::new()
//!     .with_language("ro")
//!     .with_gazetteer_dir("/var/lib/gazetteer");
//! let backends = vec![Box::new(MockExtractor::new("mock")) as Box<_>];
//!
//! let service = ExtractionService::start(config, backends).await?;
//! let resolved = service.process("Nicușor Dan declară în România").await;
//! ```
//!
//! # Modules
//!
//! - [`traits`] - Core trait abstractions (Extractor, DisambiguationStrategy)
//! - [`types`] - Occurrence, aggregate, and resolved-entity types
//! - [`pipeline`] - Normalization, merging, registry, disambiguation, service
//! - [`gazetteer`] - Gazetteer index and location resolver
//! - [`extractors`] - Backend implementations (sentence-tagger adapter)
//! - [`testing`] - Mock backend for downstream tests

pub mod error;
pub mod extractors;
pub mod gazetteer;
pub mod pipeline;
pub mod testing;
pub mod traits;
pub mod types;

// Re-export core types at crate root
pub use error::{ExtractionError, GazetteerError, Result};
pub use traits::{extractor::Extractor, strategy::DisambiguationStrategy};
pub use types::{
    config::ExtractionConfig,
    extracted::ExtractedEntities,
    occurrence::{EntityKind, LocationOccurrence, Occurrence, Sentiment, SentimentClass},
    resolved::{ResolvedEntity, ResolvedLocation, ResolvedOrganization, ResolvedPerson},
    sentence::{parse_tagged_sentences, TaggedSentence, TaggedToken, TokenTag},
};

// Re-export pipeline components
pub use pipeline::{
    demonyms::DemonymMap,
    disambiguate::{ExactMatchStrategy, SubstringMatchStrategy},
    registry::ExtractorRegistry,
    service::{ExtractionService, ResolvedEntitySet},
    tokens::merge_tagged_tokens,
};

// Re-export gazetteer components
pub use gazetteer::{GazetteerCandidate, GazetteerIndex, GazetteerRecord, LocationResolver};

// Re-export backend implementations
pub use extractors::{SentenceTagger, TaggedSentenceExtractor};

// Re-export testing utilities
pub use testing::{MockCall, MockExtractor};
