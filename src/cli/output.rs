//! Output utilities for CLI commands.

use crate::error::Result;
use std::io::{self, Write};
use std::path::Path;

/// Log a progress message to stderr (respects quiet flag).
pub fn log_info(msg: &str, quiet: bool) {
    if !quiet {
        eprintln!("{}", msg);
    }
}

/// Write output to a file or stdout.
pub fn write_output(content: &str, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, content)?,
        None => {
            print!("{}", content);
            io::stdout().flush()?;
        }
    }
    Ok(())
}
