//! On-disk gazetteer index loading.
//!
//! The index directory holds one or more tab-separated files of place
//! records, one record per line:
//!
//! ```text
//! id \t name \t alternate_names \t latitude \t longitude \t population
//! ```
//!
//! `alternate_names` is comma-separated and may be empty. Files are
//! read in filename order and records keep their load order, which is
//! the final tie-break during candidate ranking. The loaded index is
//! read-only; concurrent lookups need no synchronization.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{GazetteerError, GazetteerResult};

/// One geographic record from the gazetteer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GazetteerRecord {
    /// Stable identifier of the record.
    pub id: String,

    /// Primary place name.
    pub name: String,

    /// Latitude, decimal degrees.
    pub latitude: f64,

    /// Longitude, decimal degrees.
    pub longitude: f64,

    /// Population, used as the importance weight.
    pub population: u64,
}

/// A name-table entry pointing at a record.
#[derive(Debug, Clone, Copy)]
pub(crate) struct NameEntry {
    /// Index into the record table.
    pub record: usize,

    /// True when the name is the record's primary name rather than an
    /// alternate.
    pub primary: bool,
}

/// In-memory gazetteer: place names mapped to candidate records.
#[derive(Debug, Default)]
pub struct GazetteerIndex {
    records: Vec<GazetteerRecord>,
    // Case-folded name -> entries in load order. Insertion-ordered so
    // fuzzy scans over the name table are deterministic.
    names: IndexMap<String, Vec<NameEntry>>,
}

impl GazetteerIndex {
    /// Load every `*.tsv` file under `dir`.
    ///
    /// Malformed lines are skipped with a debug log; an index that ends
    /// up empty is an error, since a resolver over it could never
    /// produce a result.
    pub fn load(dir: &Path) -> GazetteerResult<Self> {
        let mut files: Vec<_> = fs::read_dir(dir)?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.extension().is_some_and(|ext| ext == "tsv"))
            .collect();
        files.sort();

        let mut index = Self::default();
        for file in &files {
            let data = fs::read_to_string(file)?;
            for line in data.lines() {
                if line.is_empty() {
                    continue;
                }
                match parse_record(line) {
                    Some((record, alternates)) => index.insert(record, alternates),
                    None => debug!(file = %file.display(), line, "skipping malformed gazetteer row"),
                }
            }
        }

        if index.records.is_empty() {
            return Err(GazetteerError::Empty {
                dir: dir.display().to_string(),
            });
        }

        info!(
            records = index.records.len(),
            names = index.names.len(),
            "gazetteer index loaded"
        );
        Ok(index)
    }

    /// Build an index from in-memory records (tests, embedded data).
    /// Alternates are paired with each record as comma-separated text.
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = (GazetteerRecord, String)>,
    {
        let mut index = Self::default();
        for (record, alternates) in records {
            let alternates = alternates
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect();
            index.insert(record, alternates);
        }
        index
    }

    fn insert(&mut self, record: GazetteerRecord, alternates: Vec<String>) {
        let idx = self.records.len();
        self.names
            .entry(record.name.to_lowercase())
            .or_default()
            .push(NameEntry {
                record: idx,
                primary: true,
            });
        for alternate in alternates {
            self.names
                .entry(alternate.to_lowercase())
                .or_default()
                .push(NameEntry {
                    record: idx,
                    primary: false,
                });
        }
        self.records.push(record);
    }

    /// Entries for an exact (case-folded) name, in load order.
    pub(crate) fn entries(&self, name: &str) -> &[NameEntry] {
        self.names
            .get(&name.to_lowercase())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// All name-table entries, in insertion order, for fuzzy scans.
    pub(crate) fn name_table(&self) -> impl Iterator<Item = (&str, &[NameEntry])> {
        self.names
            .iter()
            .map(|(name, entries)| (name.as_str(), entries.as_slice()))
    }

    pub(crate) fn record(&self, idx: usize) -> &GazetteerRecord {
        &self.records[idx]
    }

    /// Number of loaded records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Parse one `id \t name \t alternates \t lat \t lng \t population` row.
fn parse_record(line: &str) -> Option<(GazetteerRecord, Vec<String>)> {
    let mut fields = line.split('\t');
    let id = fields.next()?.trim();
    let name = fields.next()?.trim();
    let alternates = fields.next()?;
    let latitude: f64 = fields.next()?.trim().parse().ok()?;
    let longitude: f64 = fields.next()?.trim().parse().ok()?;
    let population: u64 = fields.next()?.trim().parse().ok()?;

    if id.is_empty() || name.is_empty() {
        return None;
    }

    let alternates = alternates
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();

    Some((
        GazetteerRecord {
            id: id.to_string(),
            name: name.to_string(),
            latitude,
            longitude,
            population,
        },
        alternates,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_index(dir: &Path, name: &str, rows: &[&str]) {
        let mut file = fs::File::create(dir.join(name)).unwrap();
        for row in rows {
            writeln!(file, "{row}").unwrap();
        }
    }

    #[test]
    fn test_load_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        write_index(
            dir.path(),
            "cities.tsv",
            &[
                "2988507\tParis\tLutetia,Ville Lumiere\t48.85341\t2.3488\t2138551",
                "4717560\tParis\t\t33.66094\t-95.55551\t24171",
                "not-a-record",
            ],
        );

        let index = GazetteerIndex::load(dir.path()).unwrap();
        assert_eq!(index.len(), 2);
        assert_eq!(index.entries("paris").len(), 2);
        assert_eq!(index.entries("Lutetia").len(), 1);
        assert!(!index.entries("Lutetia")[0].primary);
    }

    #[test]
    fn test_load_empty_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            GazetteerIndex::load(dir.path()),
            Err(GazetteerError::Empty { .. })
        ));
    }

    #[test]
    fn test_load_missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        assert!(matches!(
            GazetteerIndex::load(&missing),
            Err(GazetteerError::Io(_))
        ));
    }

    #[test]
    fn test_lookup_is_case_folded() {
        let index = GazetteerIndex::from_records([(
            GazetteerRecord {
                id: "1".into(),
                name: "Cluj-Napoca".into(),
                latitude: 46.76667,
                longitude: 23.6,
                population: 316_748,
            },
            String::new(),
        )]);
        assert_eq!(index.entries("CLUJ-NAPOCA").len(), 1);
    }
}
