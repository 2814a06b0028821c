//! Error types for topeval.

use crate::schema::DatasetRole;
use thiserror::Error;

/// Result type for topeval operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for topeval operations.
///
/// Validation errors name the offending dataset and the violated invariant;
/// all of them abort the run before any metric is computed.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// A dataset's column order does not match the expected header.
    #[error("the {role} file header must be: {expected}")]
    Schema {
        /// Which dataset carried the bad header.
        role: DatasetRole,
        /// The expected header, comma-joined.
        expected: String,
    },

    /// A dataset contains the same PMID more than once.
    #[error("the {role} file contains duplicate PMIDs")]
    DuplicateId {
        /// Which dataset contained the duplicate.
        role: DatasetRole,
    },

    /// Gold and prediction files hold different numbers of documents.
    #[error("the files should have the same size (gold has {gold} documents, pred has {pred})")]
    SizeMismatch {
        /// Document count in the gold file.
        gold: usize,
        /// Document count in the prediction file.
        pred: usize,
    },

    /// Gold and prediction files cover different PMID sets.
    #[error("the files should have the same PMIDs")]
    IdSetMismatch,

    /// The instance-based F1 aggregate has a zero denominator.
    #[error("instance-based F1 is undefined: mean precision and mean recall are both zero")]
    UndefinedMetric,

    /// Input file could not be parsed.
    #[error("parse error: {0}")]
    Parse(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Report serialization error.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a parse error.
    pub fn parse(msg: impl Into<String>) -> Self {
        Error::Parse(msg.into())
    }
}
