//! Structural validation of a gold/prediction dataset pair.
//!
//! Four checks gate the scorer, in order:
//!
//! 1. each file's header must exactly equal the expected schema;
//! 2. each file's PMID column must be duplicate-free;
//! 3. both files must hold the same number of documents;
//! 4. both files must cover the same PMID set.
//!
//! Per-file checks run before the cross-file checks — a schema mismatch
//! makes identifier comparison meaningless. Every failure is fatal and
//! names the offending dataset; no metric is computed after a failure.

use crate::dataset::Dataset;
use crate::error::{Error, Result};
use crate::schema::{expected_header, DatasetRole};
use std::collections::HashSet;

/// Validate a gold/prediction pair, failing on the first violated invariant.
pub fn validate(gold: &Dataset, pred: &Dataset) -> Result<()> {
    log::info!("validation starts...");

    validate_file(gold, DatasetRole::Gold)?;
    validate_file(pred, DatasetRole::Pred)?;

    if gold.len() != pred.len() {
        return Err(Error::SizeMismatch {
            gold: gold.len(),
            pred: pred.len(),
        });
    }

    let gold_ids: HashSet<&str> = gold.pmids().collect();
    let pred_ids: HashSet<&str> = pred.pmids().collect();
    if gold_ids != pred_ids {
        return Err(Error::IdSetMismatch);
    }

    log::info!("validation passes...");
    Ok(())
}

/// Per-file checks: schema match, then PMID uniqueness.
fn validate_file(dataset: &Dataset, role: DatasetRole) -> Result<()> {
    let expected = expected_header();
    let header: Vec<&str> = dataset.header.iter().map(String::as_str).collect();
    if header != expected {
        return Err(Error::Schema {
            role,
            expected: expected.join(","),
        });
    }

    let mut seen = HashSet::with_capacity(dataset.len());
    for pmid in dataset.pmids() {
        if !seen.insert(pmid) {
            return Err(Error::DuplicateId { role });
        }
    }

    Ok(())
}
