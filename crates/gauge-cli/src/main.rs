//! Gauge CLI Application
//!
//! Command-line front end for the gauge plan validator.

mod args;

use std::{path::Path, process::ExitCode};

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use gauge_core::{PlanDocument, SchemaReference, ValidationResult, ValidatorBuilder};
use log::info;

fn main() -> Result<ExitCode> {
    env_logger::init();

    let Args { command } = Args::parse();

    match command {
        Commands::Validate {
            plan,
            schema,
            compact,
            strict,
        } => validate(&plan, schema.as_deref(), compact, strict),
        Commands::ResultSchema => {
            let schema = schemars::schema_for!(ValidationResult);
            println!("{}", serde_json::to_string_pretty(&schema)?);
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn validate(plan: &Path, schema: Option<&Path>, compact: bool, strict: bool) -> Result<ExitCode> {
    let schema = schema
        .map(SchemaReference::from_path)
        .transpose()
        .context("Failed to load schema reference")?;

    let validator = ValidatorBuilder::new()
        .with_schema(schema)
        .build()
        .context("Failed to initialize validator")?;

    let document = PlanDocument::from_path(plan)
        .with_context(|| format!("Failed to load plan {}", plan.display()))?;

    let result = validator.validate(&document);
    info!("{}: {result}", plan.display());
    let failed: Vec<&str> = result.failed_checks().collect();
    if !failed.is_empty() {
        info!("Failed checklist items: {}", failed.join(", "));
    }

    let output = if compact {
        serde_json::to_string(&result)?
    } else {
        serde_json::to_string_pretty(&result)?
    };
    println!("{output}");

    if strict && !result.approved {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
