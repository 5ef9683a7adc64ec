//! Configuration for the extraction pipeline.

use std::collections::HashMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Configuration for the extraction pipeline and its backends.
///
/// Built once at application startup and handed to
/// [`ExtractorRegistry::initialize`](crate::pipeline::ExtractorRegistry::initialize)
/// and [`ExtractionService::start`](crate::pipeline::ExtractionService::start).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Default language code passed to backends (ISO 639-1).
    pub language: String,

    /// Rewrite demonyms to place names before extraction by default.
    pub replace_demonyms: bool,

    /// Match demonyms case-insensitively. Default: case-sensitive.
    pub demonyms_case_insensitive: bool,

    /// Directory holding the pre-built gazetteer index. `None` leaves
    /// the location resolver unavailable.
    pub gazetteer_dir: Option<PathBuf>,

    /// How many gazetteer candidates to consider per location mention.
    pub max_hit_depth: usize,

    /// Cap on resolved locations per request; negative means unlimited.
    pub max_results: i64,

    /// Include fuzzy (near-miss) gazetteer candidates at lower rank.
    pub fuzzy_matching: bool,

    /// Backend-specific settings (credentials, endpoints), keyed by
    /// backend name and option name as `"backend.option"`.
    #[serde(default)]
    pub backend_options: HashMap<String, String>,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            replace_demonyms: false,
            demonyms_case_insensitive: false,
            gazetteer_dir: None,
            max_hit_depth: 5,
            max_results: -1,
            fuzzy_matching: false,
            backend_options: HashMap::new(),
        }
    }
}

impl ExtractionConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default language.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Enable demonym replacement by default.
    pub fn with_replace_demonyms(mut self, replace: bool) -> Self {
        self.replace_demonyms = replace;
        self
    }

    /// Match demonyms case-insensitively.
    pub fn with_case_insensitive_demonyms(mut self) -> Self {
        self.demonyms_case_insensitive = true;
        self
    }

    /// Point the location resolver at a gazetteer directory.
    pub fn with_gazetteer_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.gazetteer_dir = Some(dir.into());
        self
    }

    /// Set the gazetteer hit depth.
    pub fn with_max_hit_depth(mut self, depth: usize) -> Self {
        self.max_hit_depth = depth;
        self
    }

    /// Cap resolved locations per request (negative = unlimited).
    pub fn with_max_results(mut self, max: i64) -> Self {
        self.max_results = max;
        self
    }

    /// Include fuzzy gazetteer candidates.
    pub fn with_fuzzy_matching(mut self, fuzzy: bool) -> Self {
        self.fuzzy_matching = fuzzy;
        self
    }

    /// Add a backend-specific option.
    pub fn with_backend_option(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.backend_options.insert(key.into(), value.into());
        self
    }

    /// Look up a backend-specific option.
    pub fn backend_option(&self, key: &str) -> Option<&str> {
        self.backend_options.get(key).map(String::as_str)
    }
}
