//! topeval - multi-label topic classification evaluator.
//!
//! Usage:
//!   topeval --gold <FILE> --pred <FILE> [--threshold <SCORE>] [--format text|json]
//!
//! Validates the two files against the fixed topic schema, then prints the
//! label-based and instance-based reports. Validation and metric errors go
//! to stderr with a non-zero exit code.

use clap::Parser;
use std::process::ExitCode;
use topeval::cli::{self, parser::Cli};

fn main() -> ExitCode {
    let cli = Cli::parse();
    match cli::run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}
