//! The fixed topic taxonomy and expected file schema.
//!
//! Both input files must carry exactly this header, in this order. The
//! schema check is an ordered comparison against these constants, never a
//! dynamic lookup.

use std::fmt;

/// Name of the document identifier column.
pub const ID_COLUMN: &str = "PMID";

/// The seven topics, in canonical column order.
pub const TOPICS: [&str; 7] = [
    "Treatment",
    "Diagnosis",
    "Prevention",
    "Mechanism",
    "Transmission",
    "Epidemic Forecasting",
    "Case Report",
];

/// Number of topics in the taxonomy.
pub const TOPIC_COUNT: usize = TOPICS.len();

/// Default score cutoff for turning predicted scores into label decisions.
pub const DEFAULT_THRESHOLD: f64 = 0.5;

/// The expected header: identifier column followed by the topics, in order.
#[must_use]
pub fn expected_header() -> Vec<&'static str> {
    let mut header = Vec::with_capacity(TOPIC_COUNT + 1);
    header.push(ID_COLUMN);
    header.extend_from_slice(&TOPICS);
    header
}

/// Which of the two input datasets an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatasetRole {
    /// The gold-standard label file.
    Gold,
    /// The predicted-score file.
    Pred,
}

impl DatasetRole {
    /// Short lowercase name, as used in error messages.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            DatasetRole::Gold => "gold",
            DatasetRole::Pred => "pred",
        }
    }
}

impl fmt::Display for DatasetRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
