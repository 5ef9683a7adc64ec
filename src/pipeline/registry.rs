//! Extractor registry - backend fan-out and result aggregation.
//!
//! The registry owns the set of extraction backends for the life of the
//! process. Registration is explicit (no hidden service discovery): the
//! application constructs its backends, hands them over once at
//! startup, and passes the initialized registry by handle to whatever
//! needs it. After initialization the backend list is read-only, so
//! `extract` can be called concurrently from any number of requests.
//!
//! # Failure policy
//!
//! A backend that fails `initialize` is logged and excluded; the
//! registry only fails startup when no backend survives. A backend that
//! errors during a request contributes an empty result and the request
//! continues with the rest - one misbehaving plugin must not block the
//! others.

use futures::future::join_all;
use tracing::{debug, info, warn};

use crate::error::{ExtractionError, Result};
use crate::traits::Extractor;
use crate::types::{ExtractedEntities, ExtractionConfig, TaggedSentence};

/// The initialized set of extraction backends.
pub struct ExtractorRegistry {
    backends: Vec<Box<dyn Extractor>>,
}

impl std::fmt::Debug for ExtractorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExtractorRegistry")
            .field("backends", &self.backend_names())
            .finish()
    }
}

impl ExtractorRegistry {
    /// Initialize every registered backend once, in registration order.
    ///
    /// Backends whose `initialize` fails are excluded with a warning.
    /// Fails with a configuration error when no backends were
    /// registered, or when none survive initialization - a registry
    /// that can never extract anything is a startup problem the
    /// operator needs to see, not something to discover per request.
    pub async fn initialize(
        config: &ExtractionConfig,
        backends: Vec<Box<dyn Extractor>>,
    ) -> Result<Self> {
        if backends.is_empty() {
            return Err(ExtractionError::config("no extractor backends registered"));
        }

        let mut live = Vec::with_capacity(backends.len());
        for mut backend in backends {
            match backend.initialize(config).await {
                Ok(()) => {
                    debug!(backend = backend.name(), "backend initialized");
                    live.push(backend);
                }
                Err(e) => {
                    warn!("backend '{}' failed to initialize: {}", backend.name(), e);
                }
            }
        }

        if live.is_empty() {
            return Err(ExtractionError::config(
                "all extractor backends failed to initialize",
            ));
        }

        info!(backends = live.len(), "extractor registry ready");
        Ok(Self { backends: live })
    }

    /// Names of the live backends, in registration order.
    pub fn backend_names(&self) -> Vec<&str> {
        self.backends.iter().map(|b| b.name()).collect()
    }

    /// Number of live backends.
    pub fn len(&self) -> usize {
        self.backends.len()
    }

    pub fn is_empty(&self) -> bool {
        self.backends.is_empty()
    }

    /// Run every backend against `text` and merge the results.
    ///
    /// Backends run concurrently; `join_all` yields results in the
    /// order the futures were created, so the merged output follows
    /// registration order regardless of completion order. That keeps
    /// "first seen" stable for the disambiguation fold downstream.
    pub async fn extract(
        &self,
        language: &str,
        text: &str,
        replace_demonyms: bool,
    ) -> ExtractedEntities {
        let results = join_all(self.backends.iter().map(|backend| async move {
            match backend
                .extract_entities(language, text, replace_demonyms)
                .await
            {
                Ok(entities) => entities,
                Err(e) => {
                    warn!("backend '{}' failed during extract: {}", backend.name(), e);
                    ExtractedEntities::new()
                }
            }
        }))
        .await;

        Self::fold(results)
    }

    /// Run every backend against pre-tagged sentences and merge the
    /// results. Same ordering and failure policy as [`extract`](Self::extract).
    pub async fn extract_from_sentences(
        &self,
        language: &str,
        sentences: &[TaggedSentence],
        replace_demonyms: bool,
    ) -> ExtractedEntities {
        let results = join_all(self.backends.iter().map(|backend| async move {
            match backend
                .extract_entities_from_sentences(language, sentences, replace_demonyms)
                .await
            {
                Ok(entities) => entities,
                Err(e) => {
                    warn!("backend '{}' failed during extract: {}", backend.name(), e);
                    ExtractedEntities::new()
                }
            }
        }))
        .await;

        Self::fold(results)
    }

    fn fold(results: Vec<ExtractedEntities>) -> ExtractedEntities {
        let mut merged = ExtractedEntities::new();
        for result in results {
            merged.merge(result);
        }
        merged
    }
}
