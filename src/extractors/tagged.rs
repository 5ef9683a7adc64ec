//! Backend adapter for sentence-tagging services.
//!
//! Many extraction services do not return entity lists directly - they
//! return per-token tag annotations grouped by sentence. This adapter
//! turns any such service into an [`Extractor`]: it fetches tagged
//! sentences, then runs the token merger to produce occurrences.

use async_trait::async_trait;

use crate::error::Result;
use crate::pipeline::demonyms::DemonymMap;
use crate::pipeline::tokens::merge_tagged_tokens;
use crate::traits::Extractor;
use crate::types::{ExtractedEntities, ExtractionConfig, TaggedSentence};

/// A service that tags the tokens of a text, sentence by sentence.
///
/// Implementations typically wrap an HTTP client for an NLP service;
/// tests use canned sentence lists.
#[async_trait]
pub trait SentenceTagger: Send + Sync {
    /// Split `text` into sentences and tag every token.
    async fn tag_sentences(&self, language: &str, text: &str) -> Result<Vec<TaggedSentence>>;
}

/// [`Extractor`] over a [`SentenceTagger`].
pub struct TaggedSentenceExtractor<T: SentenceTagger> {
    name: String,
    tagger: T,
    demonyms: Option<DemonymMap>,
}

impl<T: SentenceTagger> TaggedSentenceExtractor<T> {
    pub fn new(name: impl Into<String>, tagger: T) -> Self {
        Self {
            name: name.into(),
            tagger,
            demonyms: None,
        }
    }
}

#[async_trait]
impl<T: SentenceTagger> Extractor for TaggedSentenceExtractor<T> {
    fn name(&self) -> &str {
        &self.name
    }

    async fn initialize(&mut self, config: &ExtractionConfig) -> Result<()> {
        // Own demonym map so the backend honors `replace_demonyms` even
        // when invoked directly, outside the service-level rewrite.
        self.demonyms = Some(DemonymMap::bundled(config.demonyms_case_insensitive));
        Ok(())
    }

    async fn extract_entities(
        &self,
        language: &str,
        text: &str,
        replace_demonyms: bool,
    ) -> Result<ExtractedEntities> {
        let rewritten;
        let text = match (&self.demonyms, replace_demonyms) {
            (Some(demonyms), true) => {
                rewritten = demonyms.normalize(text);
                rewritten.as_str()
            }
            _ => text,
        };
        let sentences = self.tagger.tag_sentences(language, text).await?;
        Ok(merge_tagged_tokens(&sentences))
    }

    /// Tagged input is past the point where demonym rewriting could
    /// apply, so the flag is ignored here.
    async fn extract_entities_from_sentences(
        &self,
        _language: &str,
        sentences: &[TaggedSentence],
        _replace_demonyms: bool,
    ) -> Result<ExtractedEntities> {
        Ok(merge_tagged_tokens(sentences))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{TaggedToken, TokenTag};

    struct CannedTagger {
        sentences: Vec<TaggedSentence>,
    }

    #[async_trait]
    impl SentenceTagger for CannedTagger {
        async fn tag_sentences(
            &self,
            _language: &str,
            _text: &str,
        ) -> Result<Vec<TaggedSentence>> {
            Ok(self.sentences.clone())
        }
    }

    #[tokio::test]
    async fn test_extracts_via_token_merger() {
        let tagger = CannedTagger {
            sentences: vec![TaggedSentence::new(
                0,
                vec![
                    TaggedToken::new("Nicusor", TokenTag::Person),
                    TaggedToken::new("Dan", TokenTag::Person),
                    TaggedToken::new("declara", TokenTag::Other),
                    TaggedToken::new("Romania", TokenTag::Location),
                ],
            )],
        };
        let mut backend = TaggedSentenceExtractor::new("tagger", tagger);
        backend
            .initialize(&ExtractionConfig::default())
            .await
            .unwrap();

        let entities = backend.extract_entities("ro", "text", false).await.unwrap();
        assert_eq!(entities.persons[0].text, "Nicusor Dan");
        assert_eq!(entities.locations[0].text(), "Romania");
    }

    #[tokio::test]
    async fn test_sentence_path_skips_tagger() {
        let tagger = CannedTagger { sentences: vec![] };
        let backend = TaggedSentenceExtractor::new("tagger", tagger);

        let sentences = vec![TaggedSentence::new(
            4,
            vec![TaggedToken::new("Bucuresti", TokenTag::Location)],
        )];
        let entities = backend
            .extract_entities_from_sentences("ro", &sentences, false)
            .await
            .unwrap();
        assert_eq!(entities.locations[0].sentence_id, Some(4));
    }
}
