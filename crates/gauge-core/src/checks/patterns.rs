//! Text patterns used by the rule checkers.
//!
//! Everything is compiled once when a [`crate::Validator`] is built, so a
//! validator can be shared across threads and reused without recompiling.

use regex::{Regex, RegexBuilder};

use crate::error::{Result, ValidatorError};

/// Placeholder tokens, each reported at most once per document.
const PLACEHOLDERS: [(&str, &str); 6] = [
    ("TBD", r"\bTBD\b"),
    ("TODO", r"\bTODO\b"),
    ("[placeholder]", r"\[placeholder\]"),
    ("coming soon", r"coming soon"),
    ("fill this in", r"fill this in"),
    ("to be determined", r"to be determined"),
];

const AMBIGUOUS: &str =
    r"\b(?:might|could|maybe|possibly|perhaps|unclear|TBD|to be determined|needs clarification)\b";

const QUESTIONS: &str = r"\b(?:Should we|What about|What if|How do we|Which)\b|\?";

const MEASURABLE: &str = concat!(
    r"\d+(?:\.\d+)?\s*%",
    r"|\d+(?:\.\d+)?\s*(?:ms|milliseconds?|seconds?|secs?|minutes?|mins?|hours?|days?)\b",
    r"|>=|<=|[<>]",
    r"|\b\d+(?:\.\d+)?\b",
);

const EDGE_CASES: &str = r"edge case|scenario|boundary|invalid|empty|null|error|exception";

/// Temporal-estimate keywords, in reporting order. Matched anywhere in the
/// text, so `deadlines` and `estimated_hours` count too.
pub const TIME_KEYWORDS: [&str; 8] = [
    "hours",
    "minutes",
    "duration",
    "timeline",
    "schedule",
    "deadline",
    "estimated_time",
    "time_estimate",
];

const TIME_FALSE_POSITIVES: &str = r"real-time|realtime|runtime|run-time";

const WORKORDER_ID: &str = r"^WO-[A-Z0-9]+(?:-[A-Z0-9]+)*-001$";

/// Compiled pattern set.
#[derive(Debug, Clone)]
pub struct Patterns {
    pub placeholders: Vec<(&'static str, Regex)>,
    pub ambiguous: Regex,
    pub questions: Regex,
    pub measurable: Regex,
    pub edge_cases: Regex,
    pub time_keywords: Vec<(&'static str, Regex)>,
    pub time_false_positives: Regex,
    pub workorder_id: Regex,
}

impl Patterns {
    /// Compile every pattern.
    ///
    /// # Errors
    ///
    /// Returns `ValidatorError::Pattern` naming the pattern that failed.
    pub fn compile() -> Result<Self> {
        let placeholders = PLACEHOLDERS
            .iter()
            .map(|(label, pattern)| Ok((*label, compile_ci("placeholder", pattern)?)))
            .collect::<Result<Vec<_>>>()?;

        let time_keywords = TIME_KEYWORDS
            .iter()
            .map(|keyword| Ok((*keyword, compile("time_keyword", &regex::escape(keyword))?)))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            placeholders,
            ambiguous: compile_ci("ambiguous", AMBIGUOUS)?,
            questions: compile("questions", QUESTIONS)?,
            measurable: compile_ci("measurable", MEASURABLE)?,
            edge_cases: compile_ci("edge_cases", EDGE_CASES)?,
            time_keywords,
            time_false_positives: compile("time_false_positives", TIME_FALSE_POSITIVES)?,
            workorder_id: compile("workorder_id", WORKORDER_ID)?,
        })
    }
}

pub(crate) fn compile(name: &'static str, pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| ValidatorError::Pattern { name, source })
}

fn compile_ci(name: &'static str, pattern: &str) -> Result<Regex> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|source| ValidatorError::Pattern { name, source })
}
