//! Autonomy: a plan must be executable without going back to its author, so
//! hedged wording and open questions are flagged.

use super::{excerpt, Inspection, DOCUMENT};
use crate::models::Issue;

/// Each scan reports at most this many matches.
pub const MAX_FINDINGS: usize = 5;

const EXCERPT_RADIUS: usize = 30;

pub fn check(inspection: &Inspection<'_>, issues: &mut Vec<Issue>) {
    let text = &inspection.text;

    for found in inspection.patterns.ambiguous.find_iter(text).take(MAX_FINDINGS) {
        issues.push(Issue::major(
            DOCUMENT,
            format!(
                "Ambiguous language: \"{}\" in \"{}\"",
                found.as_str(),
                excerpt(text, found.start(), found.end(), EXCERPT_RADIUS)
            ),
            "Replace hedged wording with a definite decision",
        ));
    }

    for found in inspection.patterns.questions.find_iter(text).take(MAX_FINDINGS) {
        issues.push(Issue::major(
            DOCUMENT,
            format!(
                "Unresolved question: \"{}\"",
                excerpt(text, found.start(), found.end(), EXCERPT_RADIUS)
            ),
            "Answer the question in the plan and record the decision",
        ));
    }
}
