//! Score and verdict.
//!
//! Start at 100, subtract 10 per critical issue, 5 per major and 1 per minor,
//! and clamp to `0..=100`. A single critical issue therefore still leaves a
//! document at 90, which is approved.

use crate::models::{Issue, Verdict};

/// Highest possible score.
pub const MAX_SCORE: u8 = 100;

/// Minimum score for approval.
pub const APPROVAL_THRESHOLD: u8 = 90;

/// Reduce an issue list to a score in `0..=100`.
///
/// ```rust
/// use gauge_core::{scoring::score, Issue};
///
/// let issues = vec![
///     Issue::critical("5_task_id_system", "Duplicate task ID: A-1", ""),
///     Issue::minor("6_implementation_phases", "Invalid complexity: phase_1 has \"x\"", ""),
/// ];
/// assert_eq!(score(&issues), 89);
/// ```
pub fn score(issues: &[Issue]) -> u8 {
    let penalty = issues
        .iter()
        .fold(0u32, |total, issue| total.saturating_add(issue.severity.penalty()));
    let remaining = u32::from(MAX_SCORE).saturating_sub(penalty);
    u8::try_from(remaining).unwrap_or(MAX_SCORE)
}

/// Map a score to its verdict.
pub fn verdict(score: u8) -> Verdict {
    match score {
        90..=u8::MAX => Verdict::Pass,
        85..=89 => Verdict::PassWithWarnings,
        70..=84 => Verdict::NeedsRevision,
        _ => Verdict::Fail,
    }
}

/// Whether a score is high enough for approval.
pub fn approved(score: u8) -> bool {
    score >= APPROVAL_THRESHOLD
}
