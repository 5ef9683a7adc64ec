//! The extraction service - explicit-lifecycle entry point wiring the
//! whole pipeline together.
//!
//! Construction happens once during application startup via
//! [`ExtractionService::start`]; the service is then passed by
//! reference to every caller that extracts. There is no hidden global
//! and no lazy initialization race: if startup fails, the operator
//! hears about it before the first request.
//!
//! Request flow: raw text -> demonym normalizer (when configured) ->
//! registry fan-out -> merged occurrences -> per-kind disambiguation ->
//! gazetteer resolution for locations.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::gazetteer::LocationResolver;
use crate::traits::{DisambiguationStrategy, Extractor};
use crate::types::{
    ExtractedEntities, ExtractionConfig, ResolvedLocation, ResolvedOrganization, ResolvedPerson,
    TaggedSentence,
};

use super::demonyms::DemonymMap;
use super::disambiguate::{ExactMatchStrategy, SubstringMatchStrategy};
use super::registry::ExtractorRegistry;

/// Resolved entities for one document, ready for persistence.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResolvedEntitySet {
    pub persons: Vec<ResolvedPerson>,
    pub organizations: Vec<ResolvedOrganization>,
    pub locations: Vec<ResolvedLocation>,
}

/// Process-wide extraction pipeline.
pub struct ExtractionService {
    config: ExtractionConfig,
    registry: ExtractorRegistry,
    demonyms: DemonymMap,
    person_strategy: SubstringMatchStrategy,
    organization_strategy: ExactMatchStrategy,
    resolver: LocationResolver,
}

impl ExtractionService {
    /// Start the service: initialize backends, load the demonym map,
    /// and open the gazetteer.
    ///
    /// Backend configuration problems are fatal here (see
    /// [`ExtractorRegistry::initialize`]); missing datasets degrade
    /// their component and are logged once.
    pub async fn start(
        config: ExtractionConfig,
        backends: Vec<Box<dyn Extractor>>,
    ) -> Result<Self> {
        let registry = ExtractorRegistry::initialize(&config, backends).await?;
        let demonyms = DemonymMap::bundled(config.demonyms_case_insensitive);
        let resolver = match &config.gazetteer_dir {
            Some(dir) => LocationResolver::from_directory(dir),
            None => {
                debug!("no gazetteer directory configured; location resolution disabled");
                LocationResolver::unavailable()
            }
        };

        Ok(Self {
            config,
            registry,
            demonyms,
            person_strategy: SubstringMatchStrategy::new(),
            organization_strategy: ExactMatchStrategy::new(),
            resolver,
        })
    }

    pub fn config(&self) -> &ExtractionConfig {
        &self.config
    }

    pub fn registry(&self) -> &ExtractorRegistry {
        &self.registry
    }

    /// The location resolver, exposing its availability flag.
    pub fn resolver(&self) -> &LocationResolver {
        &self.resolver
    }

    /// Extract raw occurrences from text in the configured language.
    pub async fn extract_entities(&self, text: &str) -> ExtractedEntities {
        self.extract_entities_in(&self.config.language, text).await
    }

    /// Extract raw occurrences from text in an explicit language.
    ///
    /// When demonym replacement is configured, the rewrite runs here,
    /// before fan-out; the flag is still forwarded unchanged so
    /// backends that tokenize internally may rewrite on their side.
    /// The rewrite is idempotent, so both passes together are safe.
    pub async fn extract_entities_in(&self, language: &str, text: &str) -> ExtractedEntities {
        let replace = self.config.replace_demonyms;
        if replace {
            let normalized = self.demonyms.normalize(text);
            self.registry.extract(language, &normalized, replace).await
        } else {
            self.registry.extract(language, text, replace).await
        }
    }

    /// Extract raw occurrences from pre-tagged sentences.
    pub async fn extract_from_sentences(
        &self,
        language: &str,
        sentences: &[TaggedSentence],
    ) -> ExtractedEntities {
        self.registry
            .extract_from_sentences(language, sentences, self.config.replace_demonyms)
            .await
    }

    /// Disambiguate merged occurrences and geocode the locations.
    ///
    /// Best-effort by design: an unavailable resolver yields an empty
    /// location list, never an error.
    pub fn resolve_entities(&self, entities: ExtractedEntities) -> ResolvedEntitySet {
        let persons = self.person_strategy.select(entities.persons);
        self.person_strategy.log_stats(&persons);

        let organizations = self.organization_strategy.select(entities.organizations);
        self.organization_strategy.log_stats(&organizations);

        let locations = self.resolver.resolve(
            &entities.locations,
            self.config.max_hit_depth,
            self.config.max_results,
            self.config.fuzzy_matching,
        );

        ResolvedEntitySet {
            persons,
            organizations,
            locations,
        }
    }

    /// Full pipeline over raw text: extract, disambiguate, geocode.
    pub async fn process(&self, text: &str) -> ResolvedEntitySet {
        let entities = self.extract_entities(text).await;
        self.resolve_entities(entities)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockExtractor;

    fn boxed(mock: &MockExtractor) -> Box<dyn Extractor> {
        Box::new(mock.clone())
    }

    async fn service_with(backends: Vec<Box<dyn Extractor>>) -> ExtractionService {
        ExtractionService::start(ExtractionConfig::default(), backends)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_process_disambiguates_merged_results() {
        let first = MockExtractor::new("first")
            .with_person("Nicușor Dan")
            .with_organization("ACME");
        let second = MockExtractor::new("second")
            .with_person("Dan")
            .with_organization("acme");

        let service = service_with(vec![boxed(&first), boxed(&second)]).await;
        let resolved = service.process("whatever").await;

        assert_eq!(resolved.persons.len(), 1);
        assert_eq!(resolved.persons[0].name(), "Nicușor Dan");
        assert_eq!(resolved.organizations.len(), 1);
        assert_eq!(resolved.organizations[0].occurrence_count(), 2);
        // No gazetteer configured: locations resolve to nothing.
        assert!(resolved.locations.is_empty());
        assert!(!service.resolver().is_available());
    }

    #[tokio::test]
    async fn test_demonym_rewrite_applies_before_fan_out() {
        let mock = MockExtractor::new("mock");
        let config = ExtractionConfig::default()
            .with_replace_demonyms(true)
            .with_case_insensitive_demonyms();
        let service = ExtractionService::start(config, vec![boxed(&mock)])
            .await
            .unwrap();

        service.extract_entities("He is French").await;
        // The backend received the rewritten text, flag still forwarded.
        let calls = mock.calls();
        assert!(calls.iter().any(|c| matches!(
            c,
            crate::testing::MockCall::Extract { text, replace_demonyms: true, .. }
            if text == "He is France"
        )));
    }
}
