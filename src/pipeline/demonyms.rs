//! Demonym normalization - rewriting "French" to "France" before
//! extraction.
//!
//! Location recall improves when adjectival and national-identity forms
//! are rewritten to the place names a gazetteer actually knows. The map
//! is built once from a bundled tab-separated dataset and is read-only
//! afterwards, so it can be shared freely across extraction requests.
//!
//! Matching operates one word-boundary unit at a time: multi-word
//! demonym keys in the dataset ("New Zealand") can never match. Known
//! limitation, kept as-is.

use std::collections::HashMap;

use unicode_segmentation::UnicodeSegmentation;

/// Read-only mapping from demonym form to canonical place name.
#[derive(Debug, Clone)]
pub struct DemonymMap {
    mapping: HashMap<String, String>,
    case_insensitive: bool,
}

/// Bundled dataset: two header rows, then
/// `country \t adjectivals \t demonyms`, comma-separated within columns.
const BUNDLED_DATASET: &str = include_str!("../../data/demonyms.tsv");

impl DemonymMap {
    /// Build the map from the bundled dataset.
    ///
    /// Never fails: a dataset that yields no usable rows produces an
    /// empty map, which makes [`normalize`](Self::normalize) an identity
    /// transform. The degraded condition is logged here, once.
    pub fn bundled(case_insensitive: bool) -> Self {
        let map = Self::parse(BUNDLED_DATASET, case_insensitive);
        if map.is_empty() {
            tracing::warn!("demonym dataset yielded no entries; normalization disabled");
        } else {
            tracing::info!(entries = map.len(), "demonym map loaded");
        }
        map
    }

    /// Build a map from explicit `(demonym, place)` pairs.
    pub fn from_entries<I, K, V>(entries: I, case_insensitive: bool) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut mapping = HashMap::new();
        for (form, place) in entries {
            let key = normalize_key(&form.into(), case_insensitive);
            mapping.insert(key, place.into());
        }
        Self {
            mapping,
            case_insensitive,
        }
    }

    /// Parse dataset text: skip the two header rows, map every
    /// comma-separated form in columns 2+ back to the column-1 name.
    fn parse(dataset: &str, case_insensitive: bool) -> Self {
        let mut mapping = HashMap::new();
        for line in dataset.lines().skip(2) {
            let mut columns = line.split('\t');
            let Some(place) = columns.next().filter(|c| !c.is_empty()) else {
                tracing::debug!(line, "skipping malformed demonym row");
                continue;
            };
            for column in columns {
                for form in column.split(',') {
                    let form = form.trim();
                    if form.is_empty() {
                        continue;
                    }
                    mapping
                        .entry(normalize_key(form, case_insensitive))
                        .or_insert_with(|| place.to_string());
                }
            }
        }
        Self {
            mapping,
            case_insensitive,
        }
    }

    /// Look up a single word unit.
    pub fn get(&self, form: &str) -> Option<&str> {
        let key = normalize_key(form, self.case_insensitive);
        self.mapping.get(&key).map(String::as_str)
    }

    /// Rewrite every word unit that matches a demonym entry to its
    /// canonical place name; everything else passes through verbatim.
    ///
    /// One O(n) pass over word-boundary units with an O(1) expected
    /// lookup per unit. Pure: repeated application is idempotent, since
    /// place names are not themselves demonym keys.
    pub fn normalize(&self, text: &str) -> String {
        if self.mapping.is_empty() {
            return text.to_string();
        }
        let mut out = String::with_capacity(text.len());
        for unit in text.split_word_bounds() {
            match self.get(unit) {
                Some(place) => out.push_str(place),
                None => out.push_str(unit),
            }
        }
        out
    }

    pub fn len(&self) -> usize {
        self.mapping.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mapping.is_empty()
    }
}

fn normalize_key(form: &str, case_insensitive: bool) -> String {
    if case_insensitive {
        form.to_lowercase()
    } else {
        form.to_string()
    }
}
