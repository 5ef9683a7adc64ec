//! Extraction pipeline - the core of the library.
//!
//! The pipeline orchestrates:
//! - Demonym normalization (rewriting "French" to "France")
//! - Backend fan-out and ordered result merging
//! - Token merging for tagger-style backends
//! - Per-kind disambiguation into resolved entities
//! - Gazetteer resolution for locations

pub mod demonyms;
pub mod disambiguate;
pub mod registry;
pub mod service;
pub mod tokens;

pub use demonyms::DemonymMap;
pub use disambiguate::{ExactMatchStrategy, SubstringMatchStrategy};
pub use registry::ExtractorRegistry;
pub use service::{ExtractionService, ResolvedEntitySet};
pub use tokens::merge_tagged_tokens;
