//! Extractor trait for pluggable entity-extraction backends.
//!
//! Backends are opaque producers of raw occurrence lists - a cloud
//! vision API, an OCR microservice, a language-model service, or a local
//! tagger. The registry treats them uniformly: initialize once, then
//! fan every request out to all of them and merge what comes back.
//!
//! # Usage
//!
//! ```rust,ignore
//! use entities::traits::extractor::Extractor;
//!
//! let entities = backend.extract_entities("en", text, false).await?;
//! ```

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{ExtractedEntities, ExtractionConfig, TaggedSentence};

/// A pluggable entity-extraction backend.
///
/// Implementations must be safe to call concurrently after
/// `initialize`; the registry never mutates a backend post-startup.
#[async_trait]
pub trait Extractor: Send + Sync {
    /// Stable backend identifier used in logs and option keys.
    fn name(&self) -> &str;

    /// One-time startup hook, called before first use.
    ///
    /// Fails with [`ExtractionError::Configuration`](crate::ExtractionError::Configuration)
    /// on bad or missing settings. A failing backend is excluded from
    /// the registry; it does not take the other backends down.
    async fn initialize(&mut self, config: &ExtractionConfig) -> Result<()>;

    /// Extract raw entity mentions from free text.
    ///
    /// `replace_demonyms` asks the backend to rewrite demonym forms to
    /// place names before its own extraction step, when it supports
    /// that preprocessing.
    async fn extract_entities(
        &self,
        language: &str,
        text: &str,
        replace_demonyms: bool,
    ) -> Result<ExtractedEntities>;

    /// Extract entity mentions from pre-tagged sentences.
    ///
    /// Backends that only consume raw text can rely on the default,
    /// which contributes nothing for tagged input.
    async fn extract_entities_from_sentences(
        &self,
        language: &str,
        sentences: &[TaggedSentence],
        replace_demonyms: bool,
    ) -> Result<ExtractedEntities> {
        let _ = (language, sentences, replace_demonyms);
        tracing::debug!(
            backend = self.name(),
            "backend does not consume tagged sentences"
        );
        Ok(ExtractedEntities::new())
    }
}
