//! Per-topic (column-wise) classification metrics.
//!
//! Each topic is scored as an independent binary classification problem
//! over all documents, then combined four ways: micro (pooled counts),
//! macro (unweighted mean), weighted (support-weighted mean) and samples
//! (per-document mean). Zero denominators yield 0, never a fault.

use super::f1_score;
use serde::{Deserialize, Serialize};

/// Precision/recall/F1 plus support for one topic or one aggregate row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TopicMetrics {
    /// tp / (tp + fp); 0 when nothing was predicted.
    pub precision: f64,
    /// tp / (tp + fn); 0 when nothing was annotated.
    pub recall: f64,
    /// Harmonic mean of precision and recall; 0 when both are 0.
    pub f1: f64,
    /// Count of gold-positive documents for this row.
    pub support: usize,
}

impl TopicMetrics {
    fn from_counts(tp: usize, fp: usize, fn_: usize) -> Self {
        let precision = ratio(tp, tp + fp);
        let recall = ratio(tp, tp + fn_);
        TopicMetrics {
            precision,
            recall,
            f1: f1_score(precision, recall),
            support: tp + fn_,
        }
    }

    fn zero() -> Self {
        TopicMetrics {
            precision: 0.0,
            recall: 0.0,
            f1: 0.0,
            support: 0,
        }
    }
}

/// Label-based report: one row per topic plus the four aggregate rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelReport {
    /// Per-topic metrics in taxonomy order.
    pub per_topic: Vec<(String, TopicMetrics)>,
    /// Metrics from pooled tp/fp/fn counts across all topics.
    pub micro_avg: TopicMetrics,
    /// Unweighted mean of the per-topic metrics.
    pub macro_avg: TopicMetrics,
    /// Support-weighted mean of the per-topic metrics.
    pub weighted_avg: TopicMetrics,
    /// Per-document precision/recall/F1 averaged over documents.
    pub samples_avg: TopicMetrics,
}

/// Compute the label-based report from aligned binary matrices.
///
/// `gold` and `pred` must have the same shape: one row per document, one
/// boolean per topic, rows already paired (PMID-sorted upstream).
#[must_use]
pub fn label_report(gold: &[Vec<bool>], pred: &[Vec<bool>], topics: &[&str]) -> LabelReport {
    let topic_count = topics.len();
    let mut tp = vec![0usize; topic_count];
    let mut fp = vec![0usize; topic_count];
    let mut fn_ = vec![0usize; topic_count];

    for (gold_row, pred_row) in gold.iter().zip(pred) {
        for t in 0..topic_count {
            match (gold_row[t], pred_row[t]) {
                (true, true) => tp[t] += 1,
                (false, true) => fp[t] += 1,
                (true, false) => fn_[t] += 1,
                (false, false) => {}
            }
        }
    }

    let per_topic: Vec<(String, TopicMetrics)> = topics
        .iter()
        .enumerate()
        .map(|(t, name)| (name.to_string(), TopicMetrics::from_counts(tp[t], fp[t], fn_[t])))
        .collect();

    let micro_avg = TopicMetrics::from_counts(
        tp.iter().sum(),
        fp.iter().sum(),
        fn_.iter().sum(),
    );
    let total_support = micro_avg.support;

    let n = topic_count as f64;
    let macro_avg = TopicMetrics {
        precision: per_topic.iter().map(|(_, m)| m.precision).sum::<f64>() / n,
        recall: per_topic.iter().map(|(_, m)| m.recall).sum::<f64>() / n,
        f1: per_topic.iter().map(|(_, m)| m.f1).sum::<f64>() / n,
        support: total_support,
    };

    let weighted_avg = if total_support == 0 {
        TopicMetrics::zero()
    } else {
        let total = total_support as f64;
        TopicMetrics {
            precision: per_topic
                .iter()
                .map(|(_, m)| m.precision * m.support as f64)
                .sum::<f64>()
                / total,
            recall: per_topic
                .iter()
                .map(|(_, m)| m.recall * m.support as f64)
                .sum::<f64>()
                / total,
            f1: per_topic
                .iter()
                .map(|(_, m)| m.f1 * m.support as f64)
                .sum::<f64>()
                / total,
            support: total_support,
        }
    };

    let samples_avg = samples_average(gold, pred, total_support);

    LabelReport {
        per_topic,
        micro_avg,
        macro_avg,
        weighted_avg,
        samples_avg,
    }
}

/// Per-document P/R/F1 (zero denominators → 0) averaged over documents.
///
/// Unlike the instance-based scorer, a document with no gold and no
/// predicted topics counts as 0 here, matching classification-report
/// semantics for multilabel input.
fn samples_average(gold: &[Vec<bool>], pred: &[Vec<bool>], total_support: usize) -> TopicMetrics {
    if gold.is_empty() {
        return TopicMetrics::zero();
    }

    let mut precision_sum = 0.0;
    let mut recall_sum = 0.0;
    let mut f1_sum = 0.0;
    for (gold_row, pred_row) in gold.iter().zip(pred) {
        let intersect = gold_row
            .iter()
            .zip(pred_row)
            .filter(|(&g, &p)| g && p)
            .count();
        let n_gold = gold_row.iter().filter(|&&g| g).count();
        let n_pred = pred_row.iter().filter(|&&p| p).count();

        let precision = ratio(intersect, n_pred);
        let recall = ratio(intersect, n_gold);
        precision_sum += precision;
        recall_sum += recall;
        f1_sum += f1_score(precision, recall);
    }

    let n = gold.len() as f64;
    TopicMetrics {
        precision: precision_sum / n,
        recall: recall_sum / n,
        f1: f1_sum / n,
        support: total_support,
    }
}

impl LabelReport {
    /// Render as an aligned text table, values to 4 decimal places.
    #[must_use]
    pub fn to_text(&self) -> String {
        let width = self
            .per_topic
            .iter()
            .map(|(name, _)| name.len())
            .max()
            .unwrap_or(0)
            .max("weighted avg".len());

        let mut out = String::new();
        out.push_str(&format!(
            "{:>width$}  {:>9}  {:>9}  {:>9}  {:>9}\n",
            "", "precision", "recall", "f1-score", "support",
            width = width
        ));
        out.push('\n');
        for (name, metrics) in &self.per_topic {
            out.push_str(&row(name, metrics, width));
        }
        out.push('\n');
        for (name, metrics) in [
            ("micro avg", &self.micro_avg),
            ("macro avg", &self.macro_avg),
            ("weighted avg", &self.weighted_avg),
            ("samples avg", &self.samples_avg),
        ] {
            out.push_str(&row(name, metrics, width));
        }
        out
    }
}

fn row(name: &str, m: &TopicMetrics, width: usize) -> String {
    format!(
        "{:>width$}  {:>9.4}  {:>9.4}  {:>9.4}  {:>9}\n",
        name,
        m.precision,
        m.recall,
        m.f1,
        m.support,
        width = width
    )
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}
