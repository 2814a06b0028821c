//! Tabular datasets of labeled documents.
//!
//! A [`Dataset`] holds one row per document: a PMID key plus one numeric
//! value per topic column. Gold files carry 0/1 labels, prediction files
//! carry real-valued scores; both load through the same parser.
//!
//! Parsing is deliberately simple line/comma splitting: the format has no
//! quoting or embedded separators, and errors report the offending line.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fs;
use std::path::Path;

/// One document: its PMID and one value per topic column, in schema order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledDocument {
    /// Unique document identifier.
    pub pmid: String,
    /// Topic column values. 0/1 labels for gold data, scores for predictions.
    pub values: Vec<f64>,
}

/// An ordered collection of labeled documents plus the header they were
/// loaded with.
///
/// The header is kept verbatim so the validator can compare it against the
/// expected schema; rows are guaranteed rectangular (every row as wide as
/// the header) but nothing else — uniqueness and schema conformance are the
/// validator's job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    /// Column names as they appeared in the input, identifier column first.
    pub header: Vec<String>,
    /// Documents in input order.
    pub docs: Vec<LabeledDocument>,
}

impl Dataset {
    /// Read and parse a CSV file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse_csv(&content)
    }

    /// Parse CSV content: a header line followed by one line per document.
    ///
    /// Blank lines are skipped. Every data row must have exactly as many
    /// cells as the header, and every cell after the PMID must parse as a
    /// number.
    pub fn parse_csv(content: &str) -> Result<Self> {
        let mut lines = content
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty());

        let (_, header_line) = lines
            .next()
            .ok_or_else(|| Error::parse("empty input: missing header row"))?;
        let header: Vec<String> = header_line
            .split(',')
            .map(|cell| cell.trim().to_string())
            .collect();

        let mut docs = Vec::new();
        for (idx, line) in lines {
            let cells: Vec<&str> = line.split(',').map(str::trim).collect();
            if cells.len() != header.len() {
                return Err(Error::parse(format!(
                    "line {}: expected {} columns, found {}",
                    idx + 1,
                    header.len(),
                    cells.len()
                )));
            }
            let pmid = cells[0].to_string();
            let values = cells[1..]
                .iter()
                .map(|cell| {
                    cell.parse::<f64>().map_err(|_| {
                        Error::parse(format!("line {}: invalid numeric value '{}'", idx + 1, cell))
                    })
                })
                .collect::<Result<Vec<f64>>>()?;
            docs.push(LabeledDocument { pmid, values });
        }

        Ok(Dataset { header, docs })
    }

    /// Number of documents.
    #[must_use]
    pub fn len(&self) -> usize {
        self.docs.len()
    }

    /// Whether the dataset holds no documents.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    /// Iterate over the PMIDs in row order.
    pub fn pmids(&self) -> impl Iterator<Item = &str> {
        self.docs.iter().map(|doc| doc.pmid.as_str())
    }

    /// Sort documents by PMID, ascending.
    ///
    /// Load-bearing for scoring: after both datasets are sorted, rows pair
    /// up positionally. PMIDs compare numerically when both parse as
    /// integers, lexicographically otherwise, so the order stays total for
    /// arbitrary keys.
    pub fn sort_by_pmid(&mut self) {
        self.docs.sort_by(|a, b| pmid_cmp(&a.pmid, &b.pmid));
    }

    /// Project to boolean topic labels, treating any positive value as set.
    ///
    /// Intended for gold data, whose cells are 0/1.
    #[must_use]
    pub fn label_matrix(&self) -> Vec<Vec<bool>> {
        self.docs
            .iter()
            .map(|doc| doc.values.iter().map(|&v| v > 0.0).collect())
            .collect()
    }

    /// Binarize predicted scores: a topic is assigned iff its score is
    /// strictly greater than `threshold`.
    #[must_use]
    pub fn score_matrix(&self, threshold: f64) -> Vec<Vec<bool>> {
        self.docs
            .iter()
            .map(|doc| doc.values.iter().map(|&v| v > threshold).collect())
            .collect()
    }
}

fn pmid_cmp(a: &str, b: &str) -> Ordering {
    match (a.parse::<u64>(), b.parse::<u64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y),
        _ => a.cmp(b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "\
PMID,Treatment,Diagnosis,Prevention,Mechanism,Transmission,Epidemic Forecasting,Case Report
17,1,0,0,0,0,0,0
3,0,1,0,0,0,0,0
";

    #[test]
    fn test_parse_csv() {
        let ds = Dataset::parse_csv(CSV).unwrap();
        assert_eq!(ds.header.len(), 8);
        assert_eq!(ds.header[6], "Epidemic Forecasting");
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.docs[0].pmid, "17");
        assert_eq!(ds.docs[0].values, vec![1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_parse_skips_blank_lines() {
        let with_blanks = format!("\n{}\n\n", CSV);
        let ds = Dataset::parse_csv(&with_blanks).unwrap();
        assert_eq!(ds.len(), 2);
    }

    #[test]
    fn test_parse_empty_input() {
        let err = Dataset::parse_csv("  \n\n").unwrap_err();
        assert!(err.to_string().contains("missing header"));
    }

    #[test]
    fn test_parse_ragged_row() {
        let ragged = "PMID,Treatment\n1,1\n2,0,1\n";
        let err = Dataset::parse_csv(ragged).unwrap_err();
        assert!(err.to_string().contains("line 3"), "got: {}", err);
    }

    #[test]
    fn test_parse_bad_number() {
        let bad = "PMID,Treatment\n1,yes\n";
        let err = Dataset::parse_csv(bad).unwrap_err();
        assert!(err.to_string().contains("invalid numeric value 'yes'"));
    }

    #[test]
    fn test_sort_is_numeric_for_integer_pmids() {
        let mut ds = Dataset::parse_csv(CSV).unwrap();
        ds.sort_by_pmid();
        let order: Vec<&str> = ds.pmids().collect();
        assert_eq!(order, vec!["3", "17"]); // lexicographic would give 17 < 3
    }

    #[test]
    fn test_sort_falls_back_to_lexicographic() {
        let mut ds = Dataset::parse_csv("PMID,Treatment\nb,1\na,0\n").unwrap();
        ds.sort_by_pmid();
        let order: Vec<&str> = ds.pmids().collect();
        assert_eq!(order, vec!["a", "b"]);
    }

    #[test]
    fn test_score_matrix_threshold_is_strict() {
        let ds = Dataset::parse_csv("PMID,Treatment,Diagnosis\n1,0.5,0.51\n").unwrap();
        let m = ds.score_matrix(0.5);
        assert_eq!(m, vec![vec![false, true]]);
    }

    #[test]
    fn test_label_matrix() {
        let ds = Dataset::parse_csv(CSV).unwrap();
        let m = ds.label_matrix();
        assert!(m[0][0]);
        assert!(!m[0][1]);
        assert!(m[1][1]);
    }
}
