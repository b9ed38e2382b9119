//! Convert command handler
//!
//! Prepares a gazetteer file from a tab-separated city dump.

use crate::cli::init_logging;
use crate::error::Result;
use crate::gazetteer::tsv::convert_file;
use clap::Args;
use std::path::PathBuf;

/// Convert command arguments
#[derive(Args)]
pub struct ConvertArgs {
    /// Input TSV file (header line first)
    pub input: PathBuf,

    /// Output JSON file
    pub output: PathBuf,
}

/// Run the convert command
pub fn run(args: ConvertArgs) -> Result<()> {
    init_logging("info");

    let count = convert_file(&args.input, &args.output)?;
    eprintln!("Wrote {} records to {}", count, args.output.display());

    Ok(())
}
