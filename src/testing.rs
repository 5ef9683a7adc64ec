//! Testing utilities including mock implementations.
//!
//! These are useful for testing applications that use the extraction
//! library without standing up real tagging or vision services.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::error::{ExtractionError, Result};
use crate::pipeline::tokens::merge_tagged_tokens;
use crate::traits::Extractor;
use crate::types::{
    ExtractedEntities, ExtractionConfig, LocationOccurrence, Occurrence, TaggedSentence,
};

/// Record of a call made to a [`MockExtractor`].
#[derive(Debug, Clone, PartialEq)]
pub enum MockCall {
    Initialize,
    Extract {
        language: String,
        text: String,
        replace_demonyms: bool,
    },
    ExtractFromSentences {
        language: String,
        sentence_count: usize,
    },
}

/// A mock extraction backend for testing.
///
/// Returns deterministic, configurable occurrence lists and records
/// every call for assertions. Failure injection covers both the
/// initialization path (excluded from the registry) and the per-request
/// path (contribution treated as empty).
#[derive(Debug, Clone)]
pub struct MockExtractor {
    name: String,
    result: ExtractedEntities,
    fail_initialize: bool,
    fail_extract: bool,
    calls: Arc<RwLock<Vec<MockCall>>>,
}

impl MockExtractor {
    /// Create a mock that returns an empty result set.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            result: ExtractedEntities::new(),
            fail_initialize: false,
            fail_extract: false,
            calls: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Replace the canned result wholesale.
    pub fn with_result(mut self, result: ExtractedEntities) -> Self {
        self.result = result;
        self
    }

    /// Add a person mention to the canned result.
    pub fn with_person(mut self, text: impl Into<String>) -> Self {
        self.result.add_person(Occurrence::unpositioned(text.into()));
        self
    }

    /// Add an organization mention to the canned result.
    pub fn with_organization(mut self, text: impl Into<String>) -> Self {
        self.result
            .add_organization(Occurrence::unpositioned(text.into()));
        self
    }

    /// Add a location mention to the canned result.
    pub fn with_location(mut self, text: impl Into<String>) -> Self {
        self.result
            .add_location(LocationOccurrence::new(Occurrence::unpositioned(text.into())));
        self
    }

    /// Make `initialize` fail with a configuration error.
    pub fn failing_initialize(mut self) -> Self {
        self.fail_initialize = true;
        self
    }

    /// Make extraction calls fail at runtime.
    pub fn failing_extract(mut self) -> Self {
        self.fail_extract = true;
        self
    }

    /// All calls made to this mock, in order.
    pub fn calls(&self) -> Vec<MockCall> {
        self.calls.read().unwrap().clone()
    }

    fn record(&self, call: MockCall) {
        self.calls.write().unwrap().push(call);
    }
}

#[async_trait]
impl Extractor for MockExtractor {
    fn name(&self) -> &str {
        &self.name
    }

    async fn initialize(&mut self, _config: &ExtractionConfig) -> Result<()> {
        self.record(MockCall::Initialize);
        if self.fail_initialize {
            return Err(ExtractionError::config(format!(
                "mock backend '{}' is misconfigured",
                self.name
            )));
        }
        Ok(())
    }

    async fn extract_entities(
        &self,
        language: &str,
        text: &str,
        replace_demonyms: bool,
    ) -> Result<ExtractedEntities> {
        self.record(MockCall::Extract {
            language: language.to_string(),
            text: text.to_string(),
            replace_demonyms,
        });
        if self.fail_extract {
            return Err(ExtractionError::backend(
                self.name.as_str(),
                std::io::Error::other("simulated backend failure"),
            ));
        }
        Ok(self.result.clone())
    }

    async fn extract_entities_from_sentences(
        &self,
        language: &str,
        sentences: &[TaggedSentence],
        _replace_demonyms: bool,
    ) -> Result<ExtractedEntities> {
        self.record(MockCall::ExtractFromSentences {
            language: language.to_string(),
            sentence_count: sentences.len(),
        });
        if self.fail_extract {
            return Err(ExtractionError::backend(
                self.name.as_str(),
                std::io::Error::other("simulated backend failure"),
            ));
        }
        // Sentence-aware mocks run the real merger so tests exercise the
        // same span handling as production backends.
        Ok(merge_tagged_tokens(sentences))
    }
}
