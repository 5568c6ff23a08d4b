//! Structural presence: metadata block, sections container, required
//! sections.

use super::Inspection;
use crate::{
    document::{META_KEY, SECTIONS_KEY},
    models::Issue,
};

pub fn check(inspection: &Inspection<'_>, issues: &mut Vec<Issue>) {
    let document = inspection.document;

    if document.metadata().is_none() {
        issues.push(Issue::critical(
            META_KEY,
            format!("Missing {META_KEY} block"),
            "Add a metadata block describing the feature, version and status",
        ));
    }

    // Nothing below is inspectable without the container.
    let Some(sections) = document.sections() else {
        issues.push(Issue::critical(
            SECTIONS_KEY,
            format!("Missing {SECTIONS_KEY} container"),
            "Wrap the numbered plan sections in a top-level sections object",
        ));
        return;
    };

    for name in inspection.required_sections {
        if !sections.contains_key(name.as_str()) {
            issues.push(Issue::critical(
                name.as_str(),
                format!("Missing required section: {name}"),
                format!("Add the {name} section to {SECTIONS_KEY}"),
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::{
        checks::Patterns,
        document::{PlanDocument, REQUIRED_SECTIONS},
        models::Severity,
    };

    fn run(value: serde_json::Value) -> Vec<Issue> {
        let document = PlanDocument::from_value(value).unwrap();
        let required: Vec<String> = REQUIRED_SECTIONS.iter().map(|s| s.to_string()).collect();
        let patterns = Patterns::compile().unwrap();
        let inspection = Inspection::new(&document, &required, &patterns);
        let mut issues = Vec::new();
        check(&inspection, &mut issues);
        issues
    }

    #[test]
    fn test_missing_container_short_circuits() {
        let issues = run(json!({ "META_DOCUMENTATION": {} }));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Critical);
        assert_eq!(issues[0].issue, "Missing UNIVERSAL_PLANNING_STRUCTURE container");
    }

    #[test]
    fn test_missing_metadata_and_container() {
        let issues = run(json!({}));
        assert_eq!(issues.len(), 2);
        assert!(issues.iter().all(|i| i.severity == Severity::Critical));
    }

    #[test]
    fn test_null_metadata_counts_as_missing() {
        let issues = run(json!({ "META_DOCUMENTATION": null, "UNIVERSAL_PLANNING_STRUCTURE": {} }));
        assert_eq!(issues[0].issue, "Missing META_DOCUMENTATION block");
        assert_eq!(issues.len(), 11);
    }

    #[test]
    fn test_one_issue_per_missing_section() {
        let issues = run(json!({
            "META_DOCUMENTATION": {},
            "UNIVERSAL_PLANNING_STRUCTURE": {
                "0_preparation": {},
                "1_executive_summary": {},
                "2_risk_assessment": {},
                "3_current_state_analysis": {},
                "4_key_features": {},
                "5_task_id_system": {},
                "6_implementation_phases": {},
                "7_testing_strategy": {}
            }
        }));
        let messages: Vec<_> = issues.iter().map(|i| i.issue.as_str()).collect();
        assert_eq!(
            messages,
            vec![
                "Missing required section: 8_success_criteria",
                "Missing required section: 9_implementation_checklist",
            ]
        );
        assert_eq!(issues[0].section, "8_success_criteria");
    }
}
