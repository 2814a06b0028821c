//! Property tests for the evaluation pipeline.
//!
//! Invariants that must hold for arbitrary gold/prediction pairs: metric
//! bounds, row-order independence, and perfect-prediction identity.

use proptest::prelude::*;
use topeval::schema::{expected_header, TOPIC_COUNT};
use topeval::{evaluate, Dataset, Error, LabeledDocument, TopicMetrics, DEFAULT_THRESHOLD};

fn header() -> Vec<String> {
    expected_header().iter().map(|s| s.to_string()).collect()
}

fn gold_dataset(labels: &[Vec<bool>]) -> Dataset {
    Dataset {
        header: header(),
        docs: labels
            .iter()
            .enumerate()
            .map(|(i, row)| LabeledDocument {
                pmid: (1000 + i).to_string(),
                values: row.iter().map(|&b| if b { 1.0 } else { 0.0 }).collect(),
            })
            .collect(),
    }
}

fn pred_dataset(scores: &[Vec<f64>]) -> Dataset {
    Dataset {
        header: header(),
        docs: scores
            .iter()
            .enumerate()
            .map(|(i, row)| LabeledDocument {
                pmid: (1000 + i).to_string(),
                values: row.clone(),
            })
            .collect(),
    }
}

fn bounded(metrics: &TopicMetrics) -> bool {
    (0.0..=1.0).contains(&metrics.precision)
        && (0.0..=1.0).contains(&metrics.recall)
        && (0.0..=1.0).contains(&metrics.f1)
}

prop_compose! {
    fn labeled_pair()(
        rows in prop::collection::vec(
            (
                prop::collection::vec(any::<bool>(), TOPIC_COUNT),
                prop::collection::vec(0.0f64..1.0, TOPIC_COUNT),
            ),
            1..30,
        )
    ) -> (Vec<Vec<bool>>, Vec<Vec<f64>>) {
        let labels = rows.iter().map(|(l, _)| l.clone()).collect();
        let scores = rows.iter().map(|(_, s)| s.clone()).collect();
        (labels, scores)
    }
}

proptest! {
    #[test]
    fn test_metrics_are_bounded((labels, scores) in labeled_pair()) {
        let gold = gold_dataset(&labels);
        let pred = pred_dataset(&scores);

        match evaluate(&gold, &pred, DEFAULT_THRESHOLD) {
            Ok(evaluation) => {
                prop_assert!((0.0..=1.0).contains(&evaluation.instance_based.precision));
                prop_assert!((0.0..=1.0).contains(&evaluation.instance_based.recall));
                prop_assert!((0.0..=1.0).contains(&evaluation.instance_based.f1));

                let report = &evaluation.label_based;
                for (_, metrics) in &report.per_topic {
                    prop_assert!(bounded(metrics));
                }
                prop_assert!(bounded(&report.micro_avg));
                prop_assert!(bounded(&report.macro_avg));
                prop_assert!(bounded(&report.weighted_avg));
                prop_assert!(bounded(&report.samples_avg));
            }
            // The only legitimate failure for a structurally valid pair.
            Err(err) => prop_assert!(matches!(err, Error::UndefinedMetric)),
        }
    }

    #[test]
    fn test_perfect_prediction_scores_one((labels, _) in labeled_pair()) {
        let gold = gold_dataset(&labels);
        let scores: Vec<Vec<f64>> = labels
            .iter()
            .map(|row| row.iter().map(|&b| if b { 0.9 } else { 0.1 }).collect())
            .collect();
        let pred = pred_dataset(&scores);

        let evaluation = evaluate(&gold, &pred, DEFAULT_THRESHOLD).unwrap();
        prop_assert_eq!(evaluation.instance_based.precision, 1.0);
        prop_assert_eq!(evaluation.instance_based.recall, 1.0);
        prop_assert_eq!(evaluation.instance_based.f1, 1.0);
    }

    #[test]
    fn test_row_order_is_irrelevant((labels, scores) in labeled_pair()) {
        let gold = gold_dataset(&labels);
        let pred = pred_dataset(&scores);

        let mut gold_reversed = gold.clone();
        gold_reversed.docs.reverse();
        let mut pred_reversed = pred.clone();
        pred_reversed.docs.reverse();

        let forward = evaluate(&gold, &pred, DEFAULT_THRESHOLD);
        let backward = evaluate(&gold_reversed, &pred_reversed, DEFAULT_THRESHOLD);

        match (forward, backward) {
            (Ok(a), Ok(b)) => prop_assert_eq!(a, b),
            (Err(Error::UndefinedMetric), Err(Error::UndefinedMetric)) => {}
            (a, b) => prop_assert!(false, "diverging outcomes: {:?} vs {:?}", a, b),
        }
    }
}
