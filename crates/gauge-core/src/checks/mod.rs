//! Rule checkers.
//!
//! Each checker scans the document (or one subtree of it) and appends zero or
//! more [`Issue`] records to a shared list. Checkers never fail: an absent
//! optional key means there is nothing to check.
//!
//! ```text
//! ┌──────────────┐    ┌──────────────────┐    ┌──────────────┐
//! │ PlanDocument │───▶│    Inspection    │───▶│  Vec<Issue>  │
//! │              │    │ (text, tasks,    │    │ (append-only)│
//! │              │    │  patterns)       │    │              │
//! └──────────────┘    └──────────────────┘    └──────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`structure`]: metadata, sections container, required sections
//! - [`completeness`]: placeholders, task-id integrity, circular dependencies
//! - [`graph`]: dependency graph and back-edge search
//! - [`quality`]: descriptions, phase fields, measurability, edge cases
//! - [`workorder`]: workorder metadata consistency
//! - [`autonomy`]: ambiguous language and unresolved questions
//! - [`time_policy`]: temporal estimates
//! - [`patterns`]: compiled text patterns shared by the above

use crate::{
    document::{PlanDocument, TaskSet},
    models::Issue,
};

pub mod autonomy;
pub mod completeness;
pub mod graph;
pub mod patterns;
pub mod quality;
pub mod structure;
pub mod time_policy;
pub mod workorder;

pub use patterns::Patterns;

/// Section label for issues that concern the document as a whole.
pub const DOCUMENT: &str = "document";

/// Everything a checker may look at, computed once per validation.
pub struct Inspection<'a> {
    /// The document under validation
    pub document: &'a PlanDocument,

    /// Compact JSON text of the whole document
    pub text: String,

    /// Task population for id, dependency and description checks
    pub tasks: TaskSet<'a>,

    /// Section keys that must be present
    pub required_sections: &'a [String],

    /// Compiled text patterns
    pub patterns: &'a Patterns,
}

impl<'a> Inspection<'a> {
    /// Prepare an inspection of `document`.
    pub fn new(
        document: &'a PlanDocument,
        required_sections: &'a [String],
        patterns: &'a Patterns,
    ) -> Self {
        Self {
            document,
            text: document.to_text(),
            tasks: document.tasks(),
            required_sections,
            patterns,
        }
    }
}

/// Signature shared by every rule checker.
pub type Checker = fn(&Inspection<'_>, &mut Vec<Issue>);

/// All checkers, in the order they run.
pub const CHECKERS: [(&str, Checker); 6] = [
    ("structure", structure::check),
    ("completeness", completeness::check),
    ("quality", quality::check),
    ("workorder", workorder::check),
    ("autonomy", autonomy::check),
    ("time_policy", time_policy::check),
];

/// Up to `radius` bytes of text either side of `start..end`, on character
/// boundaries, with surrounding whitespace trimmed.
pub(crate) fn excerpt(text: &str, start: usize, end: usize, radius: usize) -> &str {
    let mut from = start.saturating_sub(radius);
    while !text.is_char_boundary(from) {
        from -= 1;
    }
    let mut to = end.saturating_add(radius).min(text.len());
    while !text.is_char_boundary(to) {
        to += 1;
    }
    text[from..to].trim()
}
