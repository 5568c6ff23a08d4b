//! Verdicts and the final validation record.

use std::{collections::BTreeMap, fmt, str::FromStr};

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{Issue, Severity};

/// Discrete classification derived from the numeric score.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    /// Score of 90 or above
    Pass,

    /// Score in `85..90`
    PassWithWarnings,

    /// Score in `70..85`
    NeedsRevision,

    /// Score below 70
    Fail,
}

impl FromStr for Verdict {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "PASS" => Ok(Verdict::Pass),
            "PASS_WITH_WARNINGS" => Ok(Verdict::PassWithWarnings),
            "NEEDS_REVISION" => Ok(Verdict::NeedsRevision),
            "FAIL" => Ok(Verdict::Fail),
            _ => Err(format!("Invalid verdict: {s}")),
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Verdict {
    /// Wire representation of the verdict.
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Pass => "PASS",
            Verdict::PassWithWarnings => "PASS_WITH_WARNINGS",
            Verdict::NeedsRevision => "NEEDS_REVISION",
            Verdict::Fail => "FAIL",
        }
    }
}

/// Complete outcome of validating one plan document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ValidationResult {
    /// Classification of the score
    pub verdict: Verdict,

    /// Quality score in `0..=100`
    pub score: u8,

    /// Every issue raised, in the order the checkers found them
    pub issues: Vec<Issue>,

    /// Named pass/fail facts projected from the issues
    pub checklist: BTreeMap<String, bool>,

    /// True exactly when `score >= 90`
    pub approved: bool,
}

impl ValidationResult {
    /// Number of issues with the given severity.
    pub fn count(&self, severity: Severity) -> usize {
        self.issues
            .iter()
            .filter(|issue| issue.severity == severity)
            .count()
    }

    /// Names of the checklist items that did not pass.
    pub fn failed_checks(&self) -> impl Iterator<Item = &str> {
        self.checklist
            .iter()
            .filter(|(_, passed)| !**passed)
            .map(|(name, _)| name.as_str())
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}/100): {} critical, {} major, {} minor",
            self.verdict,
            self.score,
            self.count(Severity::Critical),
            self.count(Severity::Major),
            self.count(Severity::Minor)
        )
    }
}
