//! Core library for the Gauge plan validator.
//!
//! This crate checks an implementation plan (a JSON document describing a
//! feature's planned work in ten numbered sections) for structural
//! completeness, content quality, internal consistency and dependency-graph
//! correctness, then reduces what it found to a 0–100 score and a verdict.
//!
//! # Architecture
//!
//! - **Document** ([`document`]): loader and borrowed views over the plan
//! - **Rule checkers** ([`checks`]): independent checks appending [`Issue`]s
//! - **Scorer** ([`scoring`]): issues to score, verdict and approval
//! - **Checklist** ([`checklist`]): issues to named pass/fail items
//! - **Engine** ([`validator`]): runs the above in sequence
//!
//! Validation itself never fails. Anything wrong with a well-formed document
//! becomes an issue; only unreadable or non-JSON input is an error, and that
//! is raised by the loader before the engine runs.
//!
//! # Quick Start
//!
//! ```rust
//! use gauge_core::{PlanDocument, ValidatorBuilder};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let validator = ValidatorBuilder::new().build()?;
//! let plan = PlanDocument::from_json(r#"{
//!     "META_DOCUMENTATION": {"feature_name": "auth"},
//!     "UNIVERSAL_PLANNING_STRUCTURE": {}
//! }"#)?;
//!
//! let result = validator.validate(&plan);
//! println!("{result}");
//! for issue in &result.issues {
//!     println!("{issue}");
//! }
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod checklist;
pub mod checks;
pub mod document;
pub mod error;
pub mod models;
pub mod schema;
pub mod scoring;
pub mod validator;

// Re-export commonly used types
pub use document::{PhaseLayout, PlanDocument, Task, REQUIRED_SECTIONS};
pub use error::{Result, ValidatorError};
pub use models::{Issue, Severity, ValidationResult, Verdict};
pub use schema::SchemaReference;
pub use validator::{Validator, ValidatorBuilder};
