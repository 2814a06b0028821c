//! Command-line interface: load both files, evaluate, render the report.

pub mod output;
pub mod parser;

use crate::dataset::Dataset;
use crate::error::Result;
use crate::report::evaluate;
use parser::{Cli, OutputFormat};

/// Run one evaluation as described by the parsed arguments.
pub fn run(cli: &Cli) -> Result<()> {
    output::log_info(
        &format!("loading gold labels from {}", cli.gold.display()),
        cli.quiet,
    );
    let gold = Dataset::from_path(&cli.gold)?;

    output::log_info(
        &format!("loading predictions from {}", cli.pred.display()),
        cli.quiet,
    );
    let pred = Dataset::from_path(&cli.pred)?;

    let evaluation = evaluate(&gold, &pred, cli.threshold)?;

    let rendered = match cli.format {
        OutputFormat::Text => evaluation.to_text(),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&evaluation)?;
            json.push('\n');
            json
        }
    };
    output::write_output(&rendered, cli.output.as_deref())
}
