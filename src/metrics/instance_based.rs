//! Per-document (instance-based) measures.
//!
//! For each document the assigned topic sets of gold and prediction are
//! compared directly:
//!
//! - both empty: the document is trivially correct (precision = recall = 1);
//! - disjoint non-empty: precision = recall = 0;
//! - otherwise |∩|/|pred| and |∩|/|gold| (denominators non-empty by
//!   construction).
//!
//! The means are rounded to 4 decimals *before* the F1 combination; the
//! final F1 is computed from the rounded means, not from unrounded
//! intermediates. Callers comparing runs must preserve this ordering.

use super::round4;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Instance-based summary: mean precision, mean recall and their F1,
/// all rounded to 4 decimal places.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InstanceReport {
    /// Mean per-document precision.
    pub precision: f64,
    /// Mean per-document recall.
    pub recall: f64,
    /// F1 of the rounded means.
    pub f1: f64,
}

/// Compute instance-based measures from aligned binary matrices.
///
/// # Errors
///
/// Returns [`Error::UndefinedMetric`] when mean precision + mean recall is
/// not positive: every document had disjoint non-empty label sets, or there
/// were no documents at all. The F1 division is undefined there, so the
/// condition surfaces as its own error instead of a fault or a default.
pub fn instance_report(gold: &[Vec<bool>], pred: &[Vec<bool>]) -> Result<InstanceReport> {
    let mut precision_sum = 0.0;
    let mut recall_sum = 0.0;

    for (gold_row, pred_row) in gold.iter().zip(pred) {
        let intersect = gold_row
            .iter()
            .zip(pred_row)
            .filter(|(&g, &p)| g && p)
            .count();
        let n_gold = gold_row.iter().filter(|&&g| g).count();
        let n_pred = pred_row.iter().filter(|&&p| p).count();

        let (precision, recall) = if n_gold == 0 && n_pred == 0 {
            (1.0, 1.0)
        } else if intersect == 0 {
            (0.0, 0.0)
        } else {
            (
                intersect as f64 / n_pred as f64,
                intersect as f64 / n_gold as f64,
            )
        };
        precision_sum += precision;
        recall_sum += recall;
    }

    let count = gold.len() as f64;
    let mean_precision = round4(precision_sum / count);
    let mean_recall = round4(recall_sum / count);

    let denominator = mean_precision + mean_recall;
    if !(denominator > 0.0) {
        return Err(Error::UndefinedMetric);
    }

    Ok(InstanceReport {
        precision: mean_precision,
        recall: mean_recall,
        f1: round4(2.0 * mean_precision * mean_recall / denominator),
    })
}
