//! Core trait abstractions for the entity-extraction library.
//!
//! These traits define the seams applications plug into: extraction
//! backends and disambiguation policies.

pub mod extractor;
pub mod strategy;

pub use extractor::Extractor;
pub use strategy::DisambiguationStrategy;
