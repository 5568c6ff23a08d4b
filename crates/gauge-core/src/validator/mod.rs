//! The validation engine.
//!
//! A [`Validator`] runs every rule checker over one [`PlanDocument`],
//! accumulating a single issue list, then derives the score, verdict and
//! checklist from that list:
//!
//! ```text
//! ┌──────────────┐    ┌─────────────────┐    ┌──────────────────┐
//! │ PlanDocument │───▶│  Rule checkers  │───▶│    Vec<Issue>    │
//! └──────────────┘    └─────────────────┘    └────────┬─────────┘
//!                                                     │
//!                          ┌──────────────────────────┼───────────────┐
//!                          ▼                          ▼               │
//!                   ┌─────────────┐          ┌─────────────────┐      │
//!                   │   Scorer    │          │    Checklist    │      │
//!                   │ (score,     │          │   projector     │      │
//!                   │  verdict)   │          │                 │      │
//!                   └──────┬──────┘          └────────┬────────┘      │
//!                          └───────────┬──────────────┘               │
//!                                      ▼                              │
//!                             ┌──────────────────┐                    │
//!                             │ ValidationResult │◀───────────────────┘
//!                             └──────────────────┘
//! ```
//!
//! The validator holds no mutable state: `validate` takes `&self`, so one
//! instance can serve any number of threads.
//!
//! # Usage
//!
//! ```rust
//! use gauge_core::{PlanDocument, ValidatorBuilder, Verdict};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let validator = ValidatorBuilder::new().build()?;
//! let plan: PlanDocument = r#"{"META_DOCUMENTATION": {}}"#.parse()?;
//!
//! let result = validator.validate(&plan);
//! assert_eq!(result.score, 90);
//! assert_eq!(result.verdict, Verdict::Pass);
//! assert!(!result.checklist["sections_container_present"]);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod builder;

#[cfg(test)]
mod tests;

pub use builder::ValidatorBuilder;

use crate::{
    checklist::Checklist,
    checks::{Inspection, Patterns, CHECKERS},
    document::PlanDocument,
    models::ValidationResult,
    scoring,
};

/// Plan validation engine.
#[derive(Debug, Clone)]
pub struct Validator {
    required_sections: Vec<String>,
    patterns: Patterns,
    checklist: Checklist,
}

impl Validator {
    /// Section keys this validator requires.
    pub fn required_sections(&self) -> &[String] {
        &self.required_sections
    }

    /// Validate one document.
    pub fn validate(&self, document: &PlanDocument) -> ValidationResult {
        let inspection = Inspection::new(document, &self.required_sections, &self.patterns);

        let mut issues = Vec::new();
        for (name, checker) in CHECKERS {
            let before = issues.len();
            checker(&inspection, &mut issues);
            log::debug!("{name} checks raised {} issue(s)", issues.len() - before);
        }

        let score = scoring::score(&issues);
        let verdict = scoring::verdict(score);
        let checklist = self.checklist.project(&issues);
        log::info!("Plan scored {score}/100 ({verdict}) with {} issue(s)", issues.len());

        ValidationResult {
            verdict,
            score,
            issues,
            checklist,
            approved: scoring::approved(score),
        }
    }
}
