use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by each stage of a localization run.
///
/// Variants map one-to-one onto pipeline stages so callers can decide which
/// failures are fatal (see `FailurePolicy`).
#[derive(Debug, Error)]
pub enum Error {
    /// The source strings file could not be read
    #[error("failed to read source strings file {path}: {source}")]
    SourceRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Connection failure, timeout, or unreadable response body
    #[error("translation request to '{target}' failed: {source}")]
    Transport {
        target: String,
        #[source]
        source: reqwest::Error,
    },

    /// The translation endpoint answered with a non-success status
    #[error("translation API error for '{target}' ({status}): {body}")]
    Status {
        target: String,
        status: reqwest::StatusCode,
        body: String,
    },

    /// The response body did not have the expected nested-list shape
    #[error("unexpected translation response for '{target}': {detail}")]
    ResponseShape { target: String, detail: String },

    /// An output directory or file could not be created or written
    #[error("failed to write {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A requested language code is not in the language table
    #[error("unknown language code: '{0}'")]
    UnknownLanguage(String),
}

impl Error {
    /// Whether the error came from translating a single entry.
    ///
    /// Only these errors may be skipped under `FailurePolicy::SkipEntry`.
    pub fn is_translation_failure(&self) -> bool {
        matches!(
            self,
            Error::Transport { .. } | Error::Status { .. } | Error::ResponseShape { .. }
        )
    }
}
