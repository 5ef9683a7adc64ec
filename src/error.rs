//! Typed errors for the entity-extraction library.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to provide
//! strongly-typed, composable error handling.
//!
//! The taxonomy mirrors the failure policy of the pipeline:
//! configuration problems are fatal at startup, individual backend
//! failures are recoverable per request, and a missing gazetteer or
//! demonym dataset degrades the affected component rather than erroring
//! on every call. "No match" for a location is a normal outcome and is
//! represented by omission from the result set, never by an error.

use thiserror::Error;

/// Errors that can occur during extraction operations.
#[derive(Debug, Error)]
pub enum ExtractionError {
    /// Missing or invalid required setting. Fatal to the component;
    /// surfaced at startup, never swallowed.
    #[error("config error: {reason}")]
    Configuration { reason: String },

    /// An individual extractor backend failed.
    ///
    /// During steady-state extraction this is logged and the backend's
    /// contribution is treated as empty; it only propagates from
    /// per-backend `initialize`.
    #[error("backend '{backend}' failed: {source}")]
    Backend {
        backend: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A startup resource (gazetteer, demonym dataset) failed to load.
    #[error("resource unavailable: {0}")]
    ResourceUnavailable(String),

    /// Tagged-sentence payload did not match the expected shape.
    #[error("malformed tagged sentences: {0}")]
    MalformedSentences(#[from] serde_json::Error),
}

impl ExtractionError {
    /// Shorthand for a configuration error with a formatted reason.
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Configuration {
            reason: reason.into(),
        }
    }

    /// Wrap a backend error, tagging it with the backend's name.
    pub fn backend(
        name: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Backend {
            backend: name.into(),
            source: Box::new(source),
        }
    }
}

/// Errors that can occur while loading a gazetteer index.
///
/// These surface only from [`GazetteerIndex::load`](crate::gazetteer::GazetteerIndex::load);
/// the resolver built on top of the index converts them into an
/// "unavailable" state rather than propagating them per call.
#[derive(Debug, Error)]
pub enum GazetteerError {
    /// Index directory missing or unreadable.
    #[error("gazetteer directory error: {0}")]
    Io(#[from] std::io::Error),

    /// Directory exists but holds no usable index data.
    #[error("no gazetteer records found in {dir}")]
    Empty { dir: String },
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractionError>;

/// Result type alias for gazetteer loading.
pub type GazetteerResult<T> = std::result::Result<T, GazetteerError>;
