//! Crate-wide error type.

use thiserror::Error as ThisError;

/// Errors raised while loading an instance or building a tour.
#[derive(Debug, ThisError)]
pub enum Error {
    /// The instance file could not be opened or read.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// A required section marker never appeared in the input.
    #[error("missing section: {0}")]
    MissingSection(&'static str),
    /// A coordinate record could not be parsed.
    #[error("malformed record on line {line}: {reason}")]
    MalformedRecord {
        /// 1-based line number in the input.
        line: usize,
        /// What was wrong with the record.
        reason: String,
    },
    /// No node carries the requested start id.
    #[error("start id {0} not found among input nodes")]
    UnknownStartId(usize),
    /// Two input nodes share the same id.
    #[error("duplicate node id {0}")]
    DuplicateId(usize),
    /// A tour could not be serialized.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    /// The global logger could not be installed.
    #[error("logger init failed: {0}")]
    Logger(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn malformed(line: usize, reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            line,
            reason: reason.into(),
        }
    }
}
