//! The evaluation pipeline and its combined report.
//!
//! [`evaluate`] is the whole run: validate the pair, sort both datasets by
//! PMID so rows pair positionally, binarize, then score both ways. It is a
//! pure function of its inputs — no state survives the call.

use crate::dataset::Dataset;
use crate::error::Result;
use crate::metrics::{instance_report, label_report, InstanceReport, LabelReport};
use crate::schema::TOPICS;
use crate::validate::validate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Combined evaluation report: label-based and instance-based measures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Per-topic classification report.
    pub label_based: LabelReport,
    /// Per-document (Zhou-style) summary.
    pub instance_based: InstanceReport,
}

/// Validate and score a gold/prediction pair.
///
/// A topic is considered predicted when its score is strictly greater than
/// `threshold`. Gold cells are 0/1 labels.
///
/// # Errors
///
/// Any validation failure aborts before scoring; an all-disjoint dataset
/// yields [`crate::Error::UndefinedMetric`] from the instance-based
/// aggregate.
pub fn evaluate(gold: &Dataset, pred: &Dataset, threshold: f64) -> Result<Evaluation> {
    validate(gold, pred)?;

    let mut gold = gold.clone();
    let mut pred = pred.clone();
    gold.sort_by_pmid();
    pred.sort_by_pmid();

    let gold_labels = gold.label_matrix();
    let pred_labels = pred.score_matrix(threshold);

    let instance_based = instance_report(&gold_labels, &pred_labels)?;
    let label_based = label_report(&gold_labels, &pred_labels, &TOPICS);

    Ok(Evaluation {
        label_based,
        instance_based,
    })
}

impl Evaluation {
    /// Render both report sections as text, values to 4 decimal places.
    #[must_use]
    pub fn to_text(&self) -> String {
        format!(
            "label-based measures\n\n{}\ninstance-based measures\nmean precision: {:.4}\nmean recall:    {:.4}\nmean f1:        {:.4}\n",
            self.label_based.to_text(),
            self.instance_based.precision,
            self.instance_based.recall,
            self.instance_based.f1,
        )
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str =
        "PMID,Treatment,Diagnosis,Prevention,Mechanism,Transmission,Epidemic Forecasting,Case Report";

    fn dataset(rows: &[&str]) -> Dataset {
        let mut csv = String::from(HEADER);
        for row in rows {
            csv.push('\n');
            csv.push_str(row);
        }
        Dataset::parse_csv(&csv).unwrap()
    }

    #[test]
    fn test_evaluate_perfect_pair() {
        let gold = dataset(&["101,1,0,0,0,0,0,0", "102,0,1,0,0,0,0,0"]);
        let pred = dataset(&["101,0.9,0.1,0,0,0,0,0", "102,0.2,0.8,0,0,0,0,0"]);
        let evaluation = evaluate(&gold, &pred, 0.5).unwrap();

        assert_eq!(evaluation.instance_based.precision, 1.0);
        assert_eq!(evaluation.instance_based.recall, 1.0);
        assert_eq!(evaluation.instance_based.f1, 1.0);

        let (name, treatment) = &evaluation.label_based.per_topic[0];
        assert_eq!(name, "Treatment");
        assert_eq!(treatment.f1, 1.0);
        assert_eq!(treatment.support, 1);
        assert_eq!(evaluation.label_based.micro_avg.f1, 1.0);
    }

    #[test]
    fn test_evaluate_rejects_invalid_pair() {
        let gold = dataset(&["101,1,0,0,0,0,0,0"]);
        let pred = dataset(&["999,0.9,0.1,0,0,0,0,0"]);
        assert!(evaluate(&gold, &pred, 0.5).is_err());
    }

    #[test]
    fn test_report_text_sections() {
        let gold = dataset(&["101,1,0,0,0,0,0,0"]);
        let pred = dataset(&["101,0.9,0,0,0,0,0,0"]);
        let text = evaluate(&gold, &pred, 0.5).unwrap().to_text();
        assert!(text.contains("label-based measures"));
        assert!(text.contains("instance-based measures"));
        assert!(text.contains("mean precision: 1.0000"));
        assert!(text.contains("Epidemic Forecasting"));
    }
}
