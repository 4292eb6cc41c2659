//! CLI argument definitions using clap derive

use clap::{Parser, Subcommand};

use crate::cli::commands::{
    completions::CompletionsArgs, run::RunArgs, template::TemplateArgs, validate::ValidateArgs,
};

#[derive(Parser)]
#[command(name = "meritbulk")]
#[command(author, version, about = "Bulk Template Creator for Merit organizations")]
#[command(
    long_about = "Acts on a Merit organization as a registered app to create merit templates and fields in bulk from a CSV. Existing fields are matched by name and reused instead of being recreated."
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(clap::Args, Clone, Debug)]
pub struct GlobalOpts {
    /// Suppress progress output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate a CSV, then create its templates, fields, and field settings
    Run(RunArgs),

    /// Validate a CSV without touching the organization
    Validate(ValidateArgs),

    /// Print the canonical CSV header row
    Template(TemplateArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}
