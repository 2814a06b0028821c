//! CLI argument parsing and structure definitions.

use crate::schema::DEFAULT_THRESHOLD;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Evaluate multi-label topic predictions against a gold standard.
#[derive(Debug, Parser)]
#[command(name = "topeval")]
#[command(
    author,
    version,
    about = "Evaluate multi-label topic predictions against a gold standard",
    long_about = r#"
topeval - multi-label topic classification evaluator

Compares a predicted-score file against a gold-standard label file over the
fixed 7-topic taxonomy (Treatment, Diagnosis, Prevention, Mechanism,
Transmission, Epidemic Forecasting, Case Report), keyed by PMID.

Both files must be CSVs with the header:
  PMID,Treatment,Diagnosis,Prevention,Mechanism,Transmission,Epidemic Forecasting,Case Report

Gold columns hold 0/1 labels; prediction columns hold real-valued scores.
A topic counts as predicted when its score is strictly greater than the
threshold (default 0.5).

EXAMPLES:
  topeval --gold gold.csv --pred scores.csv
  topeval --gold gold.csv --pred scores.csv --threshold 0.3 --format json
"#
)]
pub struct Cli {
    /// Gold-standard label file (CSV)
    #[arg(long, value_name = "FILE")]
    pub gold: PathBuf,

    /// Predicted-score file (CSV)
    #[arg(long, value_name = "FILE")]
    pub pred: PathBuf,

    /// Score cutoff; a topic is assigned when its score is strictly greater
    #[arg(long, value_name = "SCORE", default_value_t = DEFAULT_THRESHOLD)]
    pub threshold: f64,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Write the report to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Suppress progress messages
    #[arg(short, long)]
    pub quiet: bool,
}

/// Report output format selection.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report (default)
    #[default]
    Text,
    /// JSON object with both report sections
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_threshold_default() {
        let cli = Cli::parse_from(["topeval", "--gold", "g.csv", "--pred", "p.csv"]);
        assert_eq!(cli.threshold, 0.5);
        assert!(!cli.quiet);
    }
}
