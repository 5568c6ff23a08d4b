//! Content quality: task descriptions, phase fields, measurable success
//! criteria and edge-case coverage.

use serde_json::Value;

use super::Inspection;
use crate::{
    document::{sections, PhaseLayout},
    models::Issue,
};

/// Descriptions shorter than this many words are a major issue.
pub const MIN_DESCRIPTION_WORDS: usize = 10;

/// Descriptions shorter than this many words are a minor issue.
pub const DETAILED_DESCRIPTION_WORDS: usize = 20;

/// Minimum measurable tokens in the success criteria.
pub const MIN_MEASURABLE_TOKENS: usize = 3;

/// Minimum edge-case terms in the testing strategy.
pub const MIN_EDGE_CASE_TERMS: usize = 5;

const PHASE_FIELDS: [&str; 4] = ["phase", "name", "tasks", "deliverables"];

const COMPLEXITY_LEVELS: [&str; 4] = ["low", "medium", "high", "very_high"];

pub fn check(inspection: &Inspection<'_>, issues: &mut Vec<Issue>) {
    check_descriptions(inspection, issues);
    check_phases(inspection, issues);
    check_success_criteria(inspection, issues);
    check_edge_cases(inspection, issues);
}

fn check_descriptions(inspection: &Inspection<'_>, issues: &mut Vec<Issue>) {
    let section = inspection.tasks.section;

    for task in &inspection.tasks.tasks {
        let Some(description) = task.description else {
            continue;
        };
        let words = description.split_whitespace().count();

        if words < MIN_DESCRIPTION_WORDS {
            issues.push(Issue::major(
                section,
                format!(
                    "Task description too short: {} has {words} words",
                    task.label()
                ),
                format!(
                    "Describe what {} changes, where, and how it is verified in at least {DETAILED_DESCRIPTION_WORDS} words",
                    task.label()
                ),
            ));
        } else if words < DETAILED_DESCRIPTION_WORDS {
            issues.push(Issue::minor(
                section,
                format!(
                    "Task description could be more detailed: {} has {words} words",
                    task.label()
                ),
                format!("Expand the description to at least {DETAILED_DESCRIPTION_WORDS} words"),
            ));
        }
    }
}

fn check_phases(inspection: &Inspection<'_>, issues: &mut Vec<Issue>) {
    match inspection.document.phase_layout() {
        PhaseLayout::Array(phases) => {
            for (index, phase) in phases.into_iter().enumerate() {
                check_phase_fields(phase, index, issues);
            }
        }
        PhaseLayout::Keyed(phases) => {
            for (key, phase) in phases {
                check_legacy_phase(key, phase, issues);
            }
        }
        PhaseLayout::Absent => {}
    }
}

fn check_phase_fields(phase: &Value, index: usize, issues: &mut Vec<Issue>) {
    let label = phase_label(phase, index);
    for field in PHASE_FIELDS {
        if phase.get(field).is_none() {
            issues.push(Issue::major(
                sections::IMPLEMENTATION_PHASES,
                format!("Phase missing required field: {label} lacks '{field}'"),
                format!("Add '{field}' to {label}"),
            ));
        }
    }
}

fn check_legacy_phase(key: &str, phase: &Value, issues: &mut Vec<Issue>) {
    if let Some(complexity) = phase.get("complexity") {
        let valid = complexity
            .as_str()
            .is_some_and(|level| COMPLEXITY_LEVELS.contains(&level));
        if !valid {
            issues.push(Issue::minor(
                sections::IMPLEMENTATION_PHASES,
                format!("Invalid complexity: {key} has {complexity}"),
                format!("Use one of: {}", COMPLEXITY_LEVELS.join(", ")),
            ));
        }
    }

    if let Some(effort) = phase.get("effort_level") {
        let valid = effort.as_u64().is_some_and(|level| (1..=5).contains(&level));
        if !valid {
            issues.push(Issue::minor(
                sections::IMPLEMENTATION_PHASES,
                format!("Invalid effort_level: {key} has {effort}"),
                "Use an integer effort level from 1 to 5",
            ));
        }
    }

    if phase.get("duration").is_some() {
        issues.push(Issue::minor(
            sections::IMPLEMENTATION_PHASES,
            format!("Deprecated field: {key} uses 'duration'"),
            "Remove 'duration'; rate phases by complexity and effort_level instead",
        ));
    }
}

fn check_success_criteria(inspection: &Inspection<'_>, issues: &mut Vec<Issue>) {
    let Some(criteria) = inspection.document.section(sections::SUCCESS_CRITERIA) else {
        return;
    };
    let found = inspection
        .patterns
        .measurable
        .find_iter(&criteria.to_string())
        .count();

    if found < MIN_MEASURABLE_TOKENS {
        issues.push(Issue::major(
            sections::SUCCESS_CRITERIA,
            format!(
                "Success criteria not measurable: {found} measurable values found, need at least {MIN_MEASURABLE_TOKENS}"
            ),
            "State targets with numbers, percentages, limits or comparisons (e.g. 'p95 latency <= 200 ms')",
        ));
    }
}

fn check_edge_cases(inspection: &Inspection<'_>, issues: &mut Vec<Issue>) {
    let Some(strategy) = inspection.document.section(sections::TESTING_STRATEGY) else {
        return;
    };
    let found = inspection
        .patterns
        .edge_cases
        .find_iter(&strategy.to_string())
        .count();

    if found < MIN_EDGE_CASE_TERMS {
        issues.push(Issue::major(
            sections::TESTING_STRATEGY,
            format!(
                "Insufficient edge case coverage: {found} edge case terms found, need at least {MIN_EDGE_CASE_TERMS}"
            ),
            "Describe boundary, empty, null, invalid-input and error scenarios the tests cover",
        ));
    }
}

fn phase_label(phase: &Value, index: usize) -> String {
    match (phase.get("phase"), phase.get("name").and_then(Value::as_str)) {
        (Some(Value::String(number)), _) => format!("Phase {number}"),
        (Some(number @ Value::Number(_)), _) => format!("Phase {number}"),
        (_, Some(name)) => name.to_string(),
        _ => format!("Phase #{}", index + 1),
    }
}
