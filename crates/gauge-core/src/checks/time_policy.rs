//! Time-estimate policy. Plans are rated by complexity, never by calendar
//! time, so any temporal estimate is a policy violation.

use super::{Inspection, DOCUMENT};
use crate::models::Issue;

pub fn check(inspection: &Inspection<'_>, issues: &mut Vec<Issue>) {
    let patterns = inspection.patterns;
    let lowered = inspection.text.to_lowercase();
    let text = patterns.time_false_positives.replace_all(&lowered, " ");

    let found: Vec<&str> = patterns
        .time_keywords
        .iter()
        .filter(|(_, pattern)| pattern.is_match(&text))
        .map(|(keyword, _)| *keyword)
        .collect();

    if found.is_empty() {
        return;
    }

    log::debug!("Time-based keywords present: {found:?}");
    issues.push(Issue::major(
        DOCUMENT,
        format!("Time-based estimates found: {}", found.join(", ")),
        "Remove time estimates; rate work by complexity and effort level instead",
    ));
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::*;
    use crate::{
        checks::Patterns,
        document::{PlanDocument, REQUIRED_SECTIONS},
        models::Severity,
    };

    fn run(value: Value) -> Vec<Issue> {
        let document = PlanDocument::from_value(value).unwrap();
        let required: Vec<String> = REQUIRED_SECTIONS.iter().map(|s| s.to_string()).collect();
        let patterns = Patterns::compile().unwrap();
        let inspection = Inspection::new(&document, &required, &patterns);
        let mut issues = Vec::new();
        check(&inspection, &mut issues);
        issues
    }

    #[test]
    fn test_single_issue_lists_every_keyword() {
        let issues = run(json!({ "notes": "the deadline is 3 hours" }));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Major);
        assert_eq!(issues[0].issue, "Time-based estimates found: hours, deadline");
    }

    #[test]
    fn test_false_positives_are_ignored() {
        assert!(run(json!({ "notes": "runtime configuration" })).is_empty());
        assert!(run(json!({ "notes": "Real-Time sync and run-time checks" })).is_empty());
        assert!(run(json!({ "notes": "a realtime feed" })).is_empty());
    }

    #[test]
    fn test_compound_and_plural_keywords() {
        let cases = [
            (json!({ "estimated_hours": 4 }), "Time-based estimates found: hours"),
            (json!({ "notes": "the deadlines are fixed" }), "Time-based estimates found: deadline"),
            (
                json!({ "duration_minutes": 30 }),
                "Time-based estimates found: minutes, duration",
            ),
        ];
        for (value, expected) in cases {
            let issues = run(value);
            assert_eq!(issues.len(), 1);
            assert_eq!(issues[0].issue, expected);
        }
    }

    #[test]
    fn test_keys_count_as_text() {
        let issues = run(json!({ "phase_1": { "estimated_time": 4 } }));
        assert_eq!(issues.len(), 1);
        assert!(issues[0].issue.ends_with("estimated_time"));
    }

    #[test]
    fn test_keywords_are_case_insensitive() {
        let issues = run(json!({ "notes": "Timeline: Q3" }));
        assert_eq!(issues[0].issue, "Time-based estimates found: timeline");
    }
}
