//! `meritbulk template` command - print the canonical CSV header
//!
//! The header must list all 215 columns even when fewer than 35 field
//! groups are used, so generating it by hand is error-prone. Output goes to
//! stdout and can be redirected to a file.

use console::style;
use miette::Result;

use crate::sheet::canonical_header;

#[derive(clap::Args, Debug)]
pub struct TemplateArgs {
    /// Also print an example data row
    #[arg(long)]
    pub example: bool,
}

pub fn run(args: TemplateArgs) -> Result<()> {
    println!("{}", canonical_header().join(","));

    if args.example {
        println!("{}", example_row().join(","));
    }

    // hint goes to stderr so it doesn't interfere with redirected output
    eprintln!();
    eprintln!(
        "{} Header generated. Redirect to a file: meritbulk template > templates.csv",
        style("→").blue()
    );
    Ok(())
}

/// One template with a single field group; data rows may stop after any
/// complete group
fn example_row() -> Vec<&'static str> {
    vec![
        "Onboarding",
        "Issued to every new hire",
        "FALSE",
        "",
        "",
        "FullName",
        "Name",
        "Legal name as printed on ID",
        "TRUE",
        "TRUE",
        "",
    ]
}
