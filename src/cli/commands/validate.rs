//! `meritbulk validate` command - check a CSV without any network calls

use console::style;
use miette::Result;
use std::path::PathBuf;

use crate::sheet;

#[derive(clap::Args, Debug)]
pub struct ValidateArgs {
    /// CSV file to check
    pub file: PathBuf,
}

pub fn run(args: ValidateArgs) -> Result<()> {
    let records = sheet::load(&args.file)?;
    sheet::validate(&records)?;

    // decode as well, so anything the run command would trip on is caught here
    for (index, record) in records.iter().enumerate().skip(1) {
        sheet::row::decode(index + 1, record)?;
    }

    println!(
        "{} CSV successfully validated: {} data row(s)",
        style("✓").green(),
        records.len().saturating_sub(1)
    );
    Ok(())
}
