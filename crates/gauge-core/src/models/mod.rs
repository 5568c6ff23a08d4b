//! Data models for validation output.
//!
//! An [`Issue`] is one recorded deficiency; a [`ValidationResult`] bundles
//! every issue found in a document together with the score, the verdict and
//! the projected checklist. Both serialize to the JSON shape consumed by
//! report renderers:
//!
//! ```json
//! {
//!   "verdict": "PASS_WITH_WARNINGS",
//!   "score": 85,
//!   "issues": [
//!     {"severity": "major", "section": "document", "issue": "...", "suggestion": "..."}
//!   ],
//!   "checklist": {"no_placeholder_text": false},
//!   "approved": false
//! }
//! ```

pub mod issue;
pub mod result;


pub use issue::{Issue, Severity};
pub use result::{ValidationResult, Verdict};
