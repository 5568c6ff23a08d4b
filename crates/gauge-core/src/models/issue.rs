//! Issue records and their severity.

use std::{fmt, str::FromStr};

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Type-safe enumeration of issue severities.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The document is structurally broken or internally inconsistent
    Critical,

    /// The document is usable but a reviewer would send it back
    Major,

    /// A nit worth fixing when convenient
    Minor,
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "critical" => Ok(Severity::Critical),
            "major" => Ok(Severity::Major),
            "minor" => Ok(Severity::Minor),
            _ => Err(format!("Invalid severity: {s}")),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Severity {
    /// Wire representation of the severity.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::Major => "major",
            Severity::Minor => "minor",
        }
    }

    /// Points deducted from the score for one issue of this severity.
    ///
    /// ```rust
    /// use gauge_core::Severity;
    ///
    /// assert_eq!(Severity::Critical.penalty(), 10);
    /// assert_eq!(Severity::Major.penalty(), 5);
    /// assert_eq!(Severity::Minor.penalty(), 1);
    /// ```
    pub fn penalty(&self) -> u32 {
        match self {
            Severity::Critical => 10,
            Severity::Major => 5,
            Severity::Minor => 1,
        }
    }
}

/// One deficiency found while validating a plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Issue {
    /// How much the deficiency costs
    pub severity: Severity,

    /// Section (or logical area) of the document the issue belongs to
    pub section: String,

    /// Human-readable description of the deficiency
    pub issue: String,

    /// How to fix it
    pub suggestion: String,
}

impl Issue {
    /// Create a new issue.
    pub fn new(
        severity: Severity,
        section: impl Into<String>,
        issue: impl Into<String>,
        suggestion: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            section: section.into(),
            issue: issue.into(),
            suggestion: suggestion.into(),
        }
    }

    /// Create a new critical issue.
    pub fn critical(
        section: impl Into<String>,
        issue: impl Into<String>,
        suggestion: impl Into<String>,
    ) -> Self {
        Self::new(Severity::Critical, section, issue, suggestion)
    }

    /// Create a new major issue.
    pub fn major(
        section: impl Into<String>,
        issue: impl Into<String>,
        suggestion: impl Into<String>,
    ) -> Self {
        Self::new(Severity::Major, section, issue, suggestion)
    }

    /// Create a new minor issue.
    pub fn minor(
        section: impl Into<String>,
        issue: impl Into<String>,
        suggestion: impl Into<String>,
    ) -> Self {
        Self::new(Severity::Minor, section, issue, suggestion)
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.severity, self.section, self.issue)
    }
}
