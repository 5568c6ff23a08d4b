use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Command-line interface for the Gauge plan validator
///
/// Gauge checks an implementation plan (a JSON document in the universal
/// planning structure) for structural completeness, content quality, internal
/// consistency and dependency-graph correctness, and prints a JSON report
/// with a 0-100 score, a verdict, every issue found and a named checklist.
#[derive(Parser)]
#[command(version, about, name = "gauge")]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for the Gauge CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Validate a plan and print the result as JSON
    #[command(alias = "v")]
    Validate {
        /// Path to the plan JSON file
        plan: PathBuf,

        /// JSON schema whose required section list replaces the built-in one
        #[arg(long)]
        schema: Option<PathBuf>,

        /// Print the result on a single line
        #[arg(long)]
        compact: bool,

        /// Exit with status 1 when the plan is not approved
        #[arg(long)]
        strict: bool,
    },
    /// Print the JSON schema of the validation result
    ResultSchema,
}
