//! # topeval
//!
//! Multi-label topic classification evaluation for biomedical literature.
//!
//! Given a gold-standard label file and a predicted-score file over the same
//! set of documents (keyed by PMID, over a fixed 7-topic taxonomy), topeval
//! validates structural consistency and computes two families of metrics:
//!
//! - **Label-based**: per-topic precision/recall/F1/support, with micro,
//!   macro, weighted and samples aggregates — each topic scored as an
//!   independent binary classification problem.
//! - **Instance-based**: per-document precision/recall over the assigned
//!   topic sets, averaged across documents (Zhou-style F-measure).
//!
//! Validation is a hard gate: a schema mismatch, duplicate PMID, size
//! mismatch or PMID-set mismatch aborts the run before any metric is
//! computed.
//!
//! ## Quick Start
//!
//! ```rust
//! use topeval::{evaluate, Dataset, DEFAULT_THRESHOLD};
//!
//! let gold = Dataset::parse_csv(
//!     "PMID,Treatment,Diagnosis,Prevention,Mechanism,Transmission,Epidemic Forecasting,Case Report\n\
//!      101,1,0,0,0,0,0,0\n\
//!      102,0,1,0,0,0,0,0\n",
//! )?;
//! let pred = Dataset::parse_csv(
//!     "PMID,Treatment,Diagnosis,Prevention,Mechanism,Transmission,Epidemic Forecasting,Case Report\n\
//!      101,0.9,0.1,0.0,0.0,0.0,0.0,0.0\n\
//!      102,0.2,0.8,0.0,0.0,0.0,0.0,0.0\n",
//! )?;
//!
//! let evaluation = evaluate(&gold, &pred, DEFAULT_THRESHOLD)?;
//! assert_eq!(evaluation.instance_based.f1, 1.0);
//! println!("{}", evaluation);
//! # Ok::<(), topeval::Error>(())
//! ```
//!
//! ## Pipeline
//!
//! ```text
//! load (CSV) → validate (gate) → sort by PMID → binarize → score → report
//! ```
//!
//! Row pairing is positional after both datasets are sorted by PMID, so the
//! input row order never affects the metrics. A prediction counts as
//! assigned when its score is strictly greater than the threshold
//! (default 0.5).

pub mod cli;
pub mod dataset;
pub mod error;
pub mod metrics;
pub mod report;
pub mod schema;
pub mod validate;

pub use dataset::{Dataset, LabeledDocument};
pub use error::{Error, Result};
pub use metrics::{InstanceReport, LabelReport, TopicMetrics};
pub use report::{evaluate, Evaluation};
pub use schema::{DatasetRole, DEFAULT_THRESHOLD, ID_COLUMN, TOPICS, TOPIC_COUNT};
pub use validate::validate;
